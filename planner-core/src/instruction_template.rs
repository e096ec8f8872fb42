use crate::{PlannerError, Result, RunContext};
use regex::Regex;
use std::sync::OnceLock;

/// Matches template placeholders like `{country}` or `{level?}`.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{+[^{}]*\}+").expect("Invalid regex pattern"))
}

/// Must start with letter or underscore, followed by letters, digits, or underscores
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn replace_match(ctx: &RunContext, match_str: &str) -> Result<String> {
    let var_name = match_str.trim_matches(|c| c == '{' || c == '}').trim();

    let (var_name, optional) = match var_name.strip_suffix('?') {
        Some(name) => (name, true),
        None => (var_name, false),
    };

    // Not a placeholder, e.g. a literal JSON snippet.
    if !is_identifier(var_name) {
        return Ok(match_str.to_string());
    }

    match ctx.get(var_name) {
        Some(value) => Ok(value.to_string()),
        None if optional => Ok(String::new()),
        None => Err(PlannerError::Template(format!(
            "Context variable not found: {}",
            var_name
        ))),
    }
}

/// Resolves every `{placeholder}` in `template` from the run context.
///
/// Unknown identifiers are an error unless marked optional with a trailing
/// `?`. Brace groups that are not identifiers are left untouched.
pub fn inject_context(template: &str, ctx: &RunContext) -> Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut last_end = 0;

    for captures in placeholder_regex().find_iter(template) {
        result.push_str(&template[last_end..captures.start()]);
        result.push_str(&replace_match(ctx, captures.as_str())?);
        last_end = captures.end();
    }

    result.push_str(&template[last_end..]);
    Ok(result)
}
