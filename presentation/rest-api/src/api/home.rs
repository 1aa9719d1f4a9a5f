use chrono::Utc;
use poem::{
    handler,
    web::{Data, Html},
};

/// Static metadata rendered into the status page.
#[derive(Debug, Clone)]
pub struct StatusPageContext {
    pub environment: String,
}

const PAGE_TEMPLATE: &str = include_str!("../../assets/home.html");

fn render(environment: &str) -> String {
    PAGE_TEMPLATE
        .replace("__ENVIRONMENT__", environment)
        .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
        .replace("__RENDERED_AT__", &Utc::now().to_rfc3339())
}

/// Marketing/status homepage.
///
/// Server-rendered with the deployment metadata; the embedded script polls
/// `/api/health` every 30 seconds and flips the status badge on failure.
#[handler]
pub fn status_page(context: Data<&StatusPageContext>) -> Html<String> {
    Html(render(&context.environment))
}
