//! # planner-tool
//!
//! External tools available to report agents.
//!
//! - [`TavilySearchTool`] - Real-time web search (top result only by default)
//!
//! ```rust,no_run
//! use planner_tool::{TavilyConfig, TavilySearchTool};
//!
//! # async fn run() -> planner_core::Result<()> {
//! let tool = TavilySearchTool::new(TavilyConfig::new(std::env::var("TAVILY_API_KEY").unwrap()))?;
//! let response = tool.search("CAD to USD exchange rate").await?;
//! println!("{:?}", response.results.first());
//! # Ok(())
//! # }
//! ```

pub mod builtin;

pub use builtin::{SearchResponse, SearchResult, TavilyConfig, TavilySearchTool};
