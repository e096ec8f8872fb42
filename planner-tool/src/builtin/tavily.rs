use async_trait::async_trait;
use planner_core::{PlannerError, Result, Tool};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Default Tavily API base URL.
pub const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Number of results requested per query.
pub const DEFAULT_MAX_RESULTS: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyConfig {
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub max_results: u32,
}

impl TavilyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: None, max_results: DEFAULT_MAX_RESULTS }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(TAVILY_API_BASE)
    }
}

#[derive(Debug, Clone, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Real-time web search backed by the Tavily API.
///
/// As a [`Tool`] it takes `{"query": "..."}` and returns the JSON search response.
pub struct TavilySearchTool {
    client: Client,
    config: TavilyConfig,
}

impl TavilySearchTool {
    pub fn new(config: TavilyConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| PlannerError::Tool(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.effective_base_url().trim_end_matches('/'))
    }

    /// Runs one query and returns at most `max_results` results.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let body = SearchRequest {
            api_key: &self.config.api_key,
            query,
            max_results: self.config.max_results,
        };

        tracing::debug!(query, max_results = self.config.max_results, "Sending Tavily search");

        let response = self
            .client
            .post(self.search_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| PlannerError::Tool(format!("Tavily request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PlannerError::Tool(format!("Failed to read Tavily response: {}", e)))?;

        if !status.is_success() {
            return Err(PlannerError::Tool(format!("Tavily API error ({}): {}", status, text)));
        }

        let mut parsed: SearchResponse = serde_json::from_str(&text).map_err(|e| {
            PlannerError::Tool(format!("Failed to parse Tavily response: {} - {}", e, text))
        })?;
        parsed.results.truncate(self.config.max_results as usize);
        Ok(parsed)
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        "tavily_search_tool"
    }

    fn description(&self) -> &str {
        "Search for real-time information such as flights, weather, and currency using Tavily Search API."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Search query" }
            },
            "required": ["query"]
        }))
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| PlannerError::Tool("missing required argument 'query'".to_string()))?;

        let response = self.search(query).await?;
        Ok(serde_json::to_value(response)?)
    }
}
