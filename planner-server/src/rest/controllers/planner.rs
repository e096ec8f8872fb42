use crate::ServerConfig;
use crate::render::present;
use crate::web_ui::{GENERIC_ERROR, PageRenderer, PageView, PlanForm, TASK_FAILED};
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use planner_agent::{PipelineOutcome, TaskFailure};
use planner_core::{Result, RunContext};
use std::sync::Arc;

#[derive(Clone)]
pub struct PlannerController {
    config: ServerConfig,
    renderer: Arc<PageRenderer>,
}

impl PlannerController {
    pub fn new(config: ServerConfig) -> Result<Self> {
        Ok(Self { config, renderer: Arc::new(PageRenderer::new()?) })
    }

    fn page(&self, status: StatusCode, view: &PageView) -> Response {
        match self.renderer.render(view) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "page rendering failed").into_response()
            }
        }
    }

    fn error_message(&self, error: &planner_core::PlannerError) -> String {
        if self.config.security.expose_error_details {
            format!("{}: {}", GENERIC_ERROR, error)
        } else {
            GENERIC_ERROR.to_string()
        }
    }

    /// Provider error text only reaches the page when details are exposed.
    fn failure_notices(&self, failures: Vec<TaskFailure>) -> Vec<TaskFailure> {
        if self.config.security.expose_error_details {
            return failures;
        }
        failures
            .into_iter()
            .map(|failure| TaskFailure { message: TASK_FAILED.to_string(), ..failure })
            .collect()
    }
}

pub async fn index(State(controller): State<PlannerController>) -> Response {
    controller.page(StatusCode::OK, &PageView::idle(PlanForm::default()))
}

pub async fn submit(
    State(controller): State<PlannerController>,
    Form(form): Form<PlanForm>,
) -> Response {
    let (country, level, stream) =
        (form.country.as_deref(), form.level.as_deref(), form.stream.as_deref());
    let Some(ctx) = RunContext::from_inputs(country, level, stream) else {
        tracing::debug!("Incomplete form submission, staying idle");
        return controller.page(StatusCode::OK, &PageView::idle(form));
    };

    tracing::info!(run.id = ctx.run_id(), country = ctx.country(), "Planning request accepted");
    match controller.config.pipeline.run(Arc::new(ctx)).await {
        PipelineOutcome::Completed(bundle) => {
            controller.page(StatusCode::OK, &PageView::completed(form, &present(&bundle)))
        }
        PipelineOutcome::Partial { bundle, failures } => {
            let failures = controller.failure_notices(failures);
            let view = PageView::partial(form, &present(&bundle), failures);
            controller.page(StatusCode::OK, &view)
        }
        PipelineOutcome::Failed(e) => {
            let view = PageView::failed(form, controller.error_message(&e));
            controller.page(StatusCode::INTERNAL_SERVER_ERROR, &view)
        }
    }
}
