use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Scheduler API",
        version = "0.1.0",
        description = "Create named events, list the ones that are due, and mark them completed"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_events::EVENTS_PATH, api = domain_events::ApiDoc)
    )
)]
pub struct ApiDoc;
