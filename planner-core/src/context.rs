use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of [`RunContext::timestamp`], e.g. `2025-03-01 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder names a [`RunContext`] can resolve in prompt templates.
pub const CONTEXT_KEYS: &[&str] = &["country", "level", "stream", "current_time"];

/// Immutable per-request input shared read-only by every report task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    run_id: String,
    country: String,
    level: String,
    stream: String,
    timestamp: String,
}

impl RunContext {
    /// Creates a context stamped with the local wall-clock time and a fresh run id.
    pub fn new(
        country: impl Into<String>,
        level: impl Into<String>,
        stream: impl Into<String>,
    ) -> Self {
        Self::at(country, level, stream, Local::now().naive_local())
    }

    /// Creates a context for a fixed point in time.
    pub fn at(
        country: impl Into<String>,
        level: impl Into<String>,
        stream: impl Into<String>,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            country: country.into(),
            level: level.into(),
            stream: stream.into(),
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Builds a context from raw form input.
    ///
    /// Returns `None` when any field is missing or blank; callers treat that
    /// as "stay idle" rather than as an error.
    pub fn from_inputs(
        country: Option<&str>,
        level: Option<&str>,
        stream: Option<&str>,
    ) -> Option<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        Some(Self::new(present(country)?, present(level)?, present(stream)?))
    }

    #[must_use]
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Looks up a template placeholder by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "country" => Some(&self.country),
            "level" => Some(&self.level),
            "stream" => Some(&self.stream),
            "current_time" => Some(&self.timestamp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(14, 5, 9).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        let ctx = RunContext::at("Canada", "Masters", "Computer Science", fixed_time());
        assert_eq!(ctx.timestamp(), "2025-03-01 14:05:09");
        assert_eq!(ctx.get("current_time"), Some("2025-03-01 14:05:09"));
    }

    #[test]
    fn test_timestamp_parses_back() {
        let ctx = RunContext::new("Canada", "Masters", "Computer Science");
        assert!(NaiveDateTime::parse_from_str(ctx.timestamp(), TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_each_context_gets_its_own_run_id() {
        let a = RunContext::at("Canada", "Masters", "CS", fixed_time());
        let b = RunContext::at("Canada", "Masters", "CS", fixed_time());
        assert_ne!(a.run_id(), b.run_id());
        assert_eq!(a.clone().with_run_id("fixed").run_id(), "fixed");
    }

    #[test]
    fn test_from_inputs_requires_all_fields() {
        assert!(RunContext::from_inputs(Some("Canada"), Some(""), Some("Engineering")).is_none());
        assert!(RunContext::from_inputs(Some("Canada"), None, Some("Engineering")).is_none());
        assert!(RunContext::from_inputs(Some("  "), Some("Masters"), Some("Engineering")).is_none());

        let ctx = RunContext::from_inputs(Some(" Canada "), Some("Masters"), Some("Engineering"))
            .expect("all fields present");
        assert_eq!(ctx.country(), "Canada");
        assert_eq!(ctx.level(), "Masters");
        assert_eq!(ctx.stream(), "Engineering");
    }

    #[test]
    fn test_get_resolves_known_keys_only() {
        let ctx = RunContext::at("Japan", "Bachelors", "Design", fixed_time());
        for key in CONTEXT_KEYS {
            assert!(ctx.get(key).is_some(), "missing {key}");
        }
        assert_eq!(ctx.get("run_id"), None);
        assert_eq!(ctx.get("budget"), None);
    }
}
