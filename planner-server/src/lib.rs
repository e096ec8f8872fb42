//! # planner-server
//!
//! HTTP front end for the study planner: one HTML form, one results page.
//!
//! - `GET /` renders the empty form
//! - `POST /` runs the report pipeline when country, level and stream are all given
//! - `GET /health` returns `OK`

pub mod config;
pub mod render;
pub mod rest;
pub mod web_ui;

pub use config::{DEFAULT_REQUEST_TIMEOUT, SecurityConfig, ServerConfig};
pub use render::{markdown_to_html, present};
pub use rest::{PlannerController, create_app};
pub use web_ui::{GENERIC_ERROR, PageRenderer, PageView, PlanForm, TASK_FAILED};
