//! Span helpers for pipeline, task, model and tool operations.

use tracing::Span;

/// Span covering one full pipeline run (all report tasks for one request).
///
/// # Example
/// ```
/// use planner_telemetry::pipeline_run_span;
/// let span = pipeline_run_span("run-123", "Canada");
/// let _enter = span.enter();
/// ```
pub fn pipeline_run_span(run_id: &str, country: &str) -> Span {
    tracing::info_span!(
        "pipeline.run",
        run.id = run_id,
        run.country = country,
        run.outcome = tracing::field::Empty,
        otel.kind = "internal"
    )
}

/// Span covering a single report task.
pub fn task_run_span(task_name: &str, run_id: &str, model_name: &str) -> Span {
    tracing::info_span!(
        "task.run",
        task.name = task_name,
        run.id = run_id,
        model.name = model_name,
        otel.kind = "internal"
    )
}

/// Span for an outbound language-model call.
pub fn model_call_span(model_name: &str) -> Span {
    tracing::info_span!("model.call", model.name = model_name, otel.kind = "client")
}

/// Span for an outbound tool call such as search.
pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!("tool.execute", tool.name = tool_name, otel.kind = "client")
}

/// Record the final outcome on the current `pipeline.run` span.
pub fn record_outcome(outcome: &str) {
    Span::current().record("run.outcome", outcome);
}
