mod tavily;

pub use tavily::{
    DEFAULT_MAX_RESULTS, SearchResponse, SearchResult, TAVILY_API_BASE, TavilyConfig,
    TavilySearchTool,
};
