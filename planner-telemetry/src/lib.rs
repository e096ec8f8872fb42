//! # planner-telemetry
//!
//! Structured logging and optional OpenTelemetry export for the study planner.
//!
//! ## Usage
//!
//! ```rust
//! use planner_telemetry::{info, init_telemetry};
//!
//! init_telemetry("study-planner").unwrap();
//! info!(country = "Canada", "pipeline starting");
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use init::{DEFAULT_FILTER, init_telemetry, init_with_otlp, shutdown_telemetry};
pub use spans::*;
