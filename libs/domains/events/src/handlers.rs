use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, QueryParams,
    errors::responses::{
        BadRequestPathResponse, BadRequestQueryResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{CreateEventParams, Event, EventStatus, parse_instant};
use crate::repository::EventRepository;
use crate::service::EventService;

const TAG: &str = "events";

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(create_event, get_due_events, complete_event),
    components(
        schemas(Event, EventStatus),
        responses(
            NotFoundResponse,
            BadRequestQueryResponse,
            BadRequestPathResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Event scheduling endpoints")
    )
)]
pub struct ApiDoc;

/// Create the event router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_event))
        .route("/due", get(get_due_events))
        .route("/{id}/complete", post(complete_event))
        .with_state(shared_service)
}

/// Create a new scheduled event
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(CreateEventParams),
    responses(
        (status = 200, description = "Event created", body = Event),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    QueryParams(params): QueryParams<CreateEventParams>,
) -> EventResult<Json<Event>> {
    let scheduled_time = parse_instant(&params.scheduled_time)?;
    let event = service.create_event(params.name, scheduled_time).await?;
    Ok(Json(event))
}

/// List scheduled events whose time has passed
#[utoipa::path(
    get,
    path = "/due",
    tag = TAG,
    responses(
        (status = 200, description = "Due events, ascending by id", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_due_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.get_due_events().await?;
    Ok(Json(events))
}

/// Mark an event completed and notify the user
#[utoipa::path(
    post,
    path = "/{id}/complete",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event completed"),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn complete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    IdPath(id): IdPath,
) -> EventResult<StatusCode> {
    service.complete_event(id).await?;
    Ok(StatusCode::OK)
}
