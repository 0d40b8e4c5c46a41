use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

pub mod request;
pub mod response;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    validation::{ValidJson, ValidPath},
    ApiState,
};

use self::{
    request::{DeleteAttendeeParam, RegisterForEventBody, RegisterForEventParam},
    response::RegisterForEventResp,
};

/// Register an attendee for an event
#[utoipa::path(
    post,
    path = "/events/{eventId}/attendees",
    tag = "attendees",
    params(
        ("eventId" = String, Path, description = "Event id")
    ),
    request_body = RegisterForEventBody,
    responses(
        (status = 202, description = "Attendee registered", body = RegisterForEventResp),
        (status = 400, description = "Invalid input, duplicate e-mail, full or unknown event", body = ErrorResp)
    )
)]
pub async fn register_for_event(
    State(state): State<Arc<ApiState>>,
    ValidPath(event_id): ValidPath<RegisterForEventParam>,
    ValidJson(attendee): ValidJson<RegisterForEventBody>,
) -> ApiResponse<(StatusCode, Json<RegisterForEventResp>)> {
    let attendee_id = state
        .registration
        .register(&event_id, attendee)
        .await
        .into_response("register for event")?;

    Ok((StatusCode::ACCEPTED, Json(RegisterForEventResp { attendee_id })))
}

/// Delete an attendee
#[utoipa::path(
    delete,
    path = "/attendees/{id}",
    tag = "attendees",
    params(
        ("id" = i32, Path, description = "Attendee id")
    ),
    responses(
        (status = 204, description = "Attendee deleted"),
        (status = 400, description = "Invalid id or unknown attendee", body = ErrorResp)
    )
)]
pub async fn delete_attendee(
    State(state): State<Arc<ApiState>>,
    ValidPath(id): ValidPath<DeleteAttendeeParam>,
) -> ApiResponse<StatusCode> {
    state
        .registration
        .delete_attendee(id)
        .await
        .into_response("delete attendee")?;

    Ok(StatusCode::NO_CONTENT)
}
