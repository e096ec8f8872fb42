use serde::{Deserialize, Serialize};

/// File extension used for report artifacts and bundle keys.
pub const REPORT_EXTENSION: &str = "md";

/// Returns the stable bundle key / file name for a task, e.g. `Universities.md`.
pub fn report_file_name(task_name: &str) -> String {
    format!("{}.{}", task_name, REPORT_EXTENSION)
}

/// Markdown produced by one report task during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub task_name: String,
    pub content: String,
}

impl ReportArtifact {
    pub fn new(task_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { task_name: task_name.into(), content: content.into() }
    }

    pub fn file_name(&self) -> String {
        report_file_name(&self.task_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub content: String,
}

/// Ordered mapping of report key to content.
///
/// Holds Markdown straight out of the pipeline and HTML after presentation.
/// Keys are unique; inserting an existing key replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBundle {
    entries: Vec<ReportEntry>,
}

impl ReportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.content = content,
            None => self.entries.push(ReportEntry { name, content }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.content.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a bundle with the same keys and each content passed through `f`.
    pub fn map_content<F>(&self, mut f: F) -> ReportBundle
    where
        F: FnMut(&str) -> String,
    {
        let entries = self
            .entries
            .iter()
            .map(|e| ReportEntry { name: e.name.clone(), content: f(&e.content) })
            .collect();
        ReportBundle { entries }
    }
}

impl FromIterator<ReportArtifact> for ReportBundle {
    fn from_iter<I: IntoIterator<Item = ReportArtifact>>(iter: I) -> Self {
        let mut bundle = ReportBundle::new();
        for artifact in iter {
            bundle.insert(artifact.file_name(), artifact.content);
        }
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("Universities"), "Universities.md");
        assert_eq!(ReportArtifact::new("Currency", "x").file_name(), "Currency.md");
    }

    #[test]
    fn test_bundle_preserves_insertion_order() {
        let bundle: ReportBundle = ["Universities", "Financial", "Lifestyle"]
            .into_iter()
            .map(|name| ReportArtifact::new(name, format!("# {name}")))
            .collect();

        let keys: Vec<_> = bundle.keys().collect();
        assert_eq!(keys, vec!["Universities.md", "Financial.md", "Lifestyle.md"]);
        assert_eq!(bundle.get("Financial.md"), Some("# Financial"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut bundle = ReportBundle::new();
        bundle.insert("A.md", "one");
        bundle.insert("B.md", "two");
        bundle.insert("A.md", "three");

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.entries()[0].content, "three");
    }

    #[test]
    fn test_map_content_keeps_keys() {
        let mut bundle = ReportBundle::new();
        bundle.insert("A.md", "a");
        bundle.insert("B.md", "b");

        let upper = bundle.map_content(|c| c.to_uppercase());
        assert_eq!(upper.keys().collect::<Vec<_>>(), bundle.keys().collect::<Vec<_>>());
        assert_eq!(upper.get("B.md"), Some("B"));
        assert_eq!(bundle.get("B.md"), Some("b"));
    }
}
