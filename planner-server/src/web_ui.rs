use handlebars::Handlebars;
use planner_agent::{PipelineState, TaskFailure};
use planner_core::{PlannerError, REPORT_EXTENSION, ReportBundle, Result};
use serde::{Deserialize, Serialize};

const PAGE_TEMPLATE: &str = include_str!("../assets/index.hbs");
const PAGE_NAME: &str = "index";

/// Banner text when error details are hidden.
pub const GENERIC_ERROR: &str = "The study plan could not be generated. Please try again.";

/// Per-report notice in a partial run when error details are hidden.
pub const TASK_FAILED: &str = "This report could not be generated.";

/// Raw form fields, echoed back into the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanForm {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    /// Already-escaped HTML; inserted unescaped by the template.
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub form: PlanForm,
    pub state: PipelineState,
    pub sections: Vec<Section>,
    pub failures: Vec<TaskFailure>,
    pub error: Option<String>,
}

impl PageView {
    pub fn idle(form: PlanForm) -> Self {
        Self {
            form,
            state: PipelineState::Idle,
            sections: Vec::new(),
            failures: Vec::new(),
            error: None,
        }
    }

    /// `html` must already be presented.
    pub fn completed(form: PlanForm, html: &ReportBundle) -> Self {
        Self { state: PipelineState::Completed, sections: sections(html), ..Self::idle(form) }
    }

    pub fn partial(form: PlanForm, html: &ReportBundle, failures: Vec<TaskFailure>) -> Self {
        Self {
            state: PipelineState::Partial,
            sections: sections(html),
            failures,
            ..Self::idle(form)
        }
    }

    pub fn failed(form: PlanForm, message: impl Into<String>) -> Self {
        Self { state: PipelineState::Failed, error: Some(message.into()), ..Self::idle(form) }
    }
}

fn sections(bundle: &ReportBundle) -> Vec<Section> {
    let suffix = format!(".{}", REPORT_EXTENSION);
    bundle
        .entries()
        .iter()
        .map(|entry| Section {
            key: entry.name.clone(),
            title: entry.name.strip_suffix(&suffix).unwrap_or(&entry.name).to_string(),
            html: entry.content.clone(),
        })
        .collect()
}

/// Renders the single planner page.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(PAGE_NAME, PAGE_TEMPLATE)
            .map_err(|e| PlannerError::Template(format!("invalid page template: {}", e)))?;
        Ok(Self { registry })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        self.registry
            .render(PAGE_NAME, view)
            .map_err(|e| PlannerError::Template(format!("failed to render page: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PlanForm {
        PlanForm {
            country: Some("Canada".into()),
            level: Some("Masters".into()),
            stream: Some("Law".into()),
        }
    }

    fn render(view: &PageView) -> String {
        PageRenderer::new().unwrap().render(view).unwrap()
    }

    #[test]
    fn test_idle_page_has_form_only() {
        let html = render(&PageView::idle(PlanForm::default()));
        assert!(html.contains("<form"));
        assert!(html.contains("name=\"country\""));
        assert!(!html.contains("class=\"report\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_sections_and_titles() {
        let mut bundle = ReportBundle::new();
        bundle.insert("Universities.md", "<h2>Top</h2>");
        let html = render(&PageView::completed(form(), &bundle));
        assert!(html.contains("id=\"Universities.md\""));
        assert!(html.contains("<h2>Top</h2>"));
        assert!(html.contains(">Universities<"));
    }

    #[test]
    fn test_form_echo_is_escaped() {
        let form = PlanForm { country: Some("\"><b>x</b>".into()), ..form() };
        let html = render(&PageView::idle(form));
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn test_failed_page_shows_banner() {
        let html = render(&PageView::failed(form(), GENERIC_ERROR));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("could not be generated"));
    }

    #[test]
    fn test_partial_page_lists_failures() {
        let mut bundle = ReportBundle::new();
        bundle.insert("Universities.md", "<p>ok</p>");
        let failures =
            vec![TaskFailure { task_name: "Currency".into(), message: "rate limited".into() }];
        let html = render(&PageView::partial(form(), &bundle, failures));
        assert!(html.contains("<p>ok</p>"));
        assert!(html.contains("Currency"));
        assert!(html.contains("rate limited"));
    }
}
