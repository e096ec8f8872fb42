use planner_core::{Content, Result, RunContext, inject_context, report_file_name};
use planner_model::ModelTier;
use serde::{Deserialize, Serialize};

/// Closing instruction appended to every user prompt.
pub const COMPLETE_CONTENT_INSTRUCTION: &str =
    "You MUST return the actual complete content as the final answer, not a summary.";

/// One fixed report: who the model should act as, what to produce and in which shape.
///
/// `goal`, `description` and `expected_output` are templates; `{country}`,
/// `{level}`, `{stream}` and `{current_time}` are resolved from the
/// [`RunContext`] of each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTaskSpec {
    /// Stable key, e.g. `Universities`. Also names the artifact file.
    pub name: String,
    pub role: String,
    pub backstory: String,
    pub goal: String,
    pub description: String,
    pub expected_output: String,
    pub tier: ModelTier,
    /// Whether a search tool may augment the prompt for this task.
    pub search_capable: bool,
}

impl ReportTaskSpec {
    pub fn new(name: impl Into<String>, role: impl Into<String>, tier: ModelTier) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            backstory: String::new(),
            goal: String::new(),
            description: String::new(),
            expected_output: String::new(),
            tier,
            search_capable: false,
        }
    }

    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expected_output(mut self, expected_output: impl Into<String>) -> Self {
        self.expected_output = expected_output.into();
        self
    }

    pub fn search_capable(mut self, search_capable: bool) -> Self {
        self.search_capable = search_capable;
        self
    }

    /// Bundle key and artifact file name, e.g. `Universities.md`.
    pub fn file_name(&self) -> String {
        report_file_name(&self.name)
    }

    pub fn render_description(&self, ctx: &RunContext) -> Result<String> {
        inject_context(&self.description, ctx)
    }

    pub fn system_prompt(&self, ctx: &RunContext) -> Result<String> {
        let backstory = inject_context(&self.backstory, ctx)?;
        let goal = inject_context(&self.goal, ctx)?;
        Ok(format!("You are {}. {}\nYour personal goal is: {}", self.role, backstory, goal))
    }

    /// Task prompt. `reference` is appended verbatim when search produced material.
    pub fn user_prompt(&self, ctx: &RunContext, reference: Option<&str>) -> Result<String> {
        let description = self.render_description(ctx)?;
        let expected_output = inject_context(&self.expected_output, ctx)?;

        let mut prompt = format!(
            "Current Task: {}\n\nThis is the expected criteria for your final answer: {}\n{}",
            description, expected_output, COMPLETE_CONTENT_INSTRUCTION
        );
        if let Some(reference) = reference {
            prompt.push_str("\n\nReference material from a real-time search:\n");
            prompt.push_str(reference);
        }
        Ok(prompt)
    }

    /// The system and user messages sent to the model.
    pub fn contents(&self, ctx: &RunContext, reference: Option<&str>) -> Result<Vec<Content>> {
        Ok(vec![
            Content::new("system").with_text(self.system_prompt(ctx)?),
            Content::new("user").with_text(self.user_prompt(ctx, reference)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::PlannerError;

    fn spec() -> ReportTaskSpec {
        ReportTaskSpec::new("Universities", "University Finder", ModelTier::Fast)
            .backstory("You list universities.")
            .goal("Find universities in {country}.")
            .description("List universities in {country} for {level} in {stream}.")
            .expected_output("Markdown list.")
    }

    #[test]
    fn test_prompts_resolve_placeholders() {
        let ctx = RunContext::new("Canada", "Masters", "Computer Science");
        let system = spec().system_prompt(&ctx).unwrap();
        assert_eq!(
            system,
            "You are University Finder. You list universities.\nYour personal goal is: Find universities in Canada."
        );

        let user = spec().user_prompt(&ctx, None).unwrap();
        assert!(
            user.starts_with(
                "Current Task: List universities in Canada for Masters in Computer Science."
            )
        );
        assert!(user.contains("Markdown list."));
        assert!(user.ends_with(COMPLETE_CONTENT_INSTRUCTION));
    }

    #[test]
    fn test_reference_is_appended() {
        let ctx = RunContext::new("Canada", "Masters", "Computer Science");
        let user = spec().user_prompt(&ctx, Some("Air Canada")).unwrap();
        assert!(user.ends_with("Air Canada"));
    }

    #[test]
    fn test_unknown_placeholder_is_template_error() {
        let ctx = RunContext::new("Canada", "Masters", "Computer Science");
        let err = spec().goal("{budget}").system_prompt(&ctx).unwrap_err();
        assert!(matches!(err, PlannerError::Template(_)));
    }

    #[test]
    fn test_contents_roles() {
        let ctx = RunContext::new("Canada", "Masters", "Computer Science");
        let contents = spec().contents(&ctx, None).unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "system");
        assert_eq!(contents[1].role, "user");
        assert_eq!(spec().file_name(), "Universities.md");
    }
}
