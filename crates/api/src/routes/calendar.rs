//! Bare calendar event endpoints
//!
//! Operate on the gateway directly without touching the meeting store, for
//! callers that manage their own records.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use meetsync_domain::protocol::{
    AckResponse, CreateCalendarEventResponse, DeleteCalendarEventRequest,
};
use meetsync_domain::{MeetingDraft, Result};
use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/createCalendarEvent", post(create_calendar_event))
        .route("/deleteCalendarEvent", post(delete_calendar_event))
}

/// POST /createCalendarEvent - Create an event and return its handle
async fn create_calendar_event(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<MeetingDraft>,
) -> Json<CreateCalendarEventResponse> {
    let start = Instant::now();
    let result = create_event(&ctx, &draft).await;
    log_command_execution("calendar::create_event", start.elapsed(), result.is_ok());

    match result {
        Ok(handle) => Json(CreateCalendarEventResponse {
            success: true,
            event_id: Some(handle.event_id),
            meet_link: handle.meet_link,
            error: None,
        }),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "event creation failed");
            Json(CreateCalendarEventResponse {
                success: false,
                event_id: None,
                meet_link: None,
                error: Some(err.to_string()),
            })
        }
    }
}

/// POST /deleteCalendarEvent - Delete an event by provider id
async fn delete_calendar_event(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<DeleteCalendarEventRequest>,
) -> Json<AckResponse> {
    let start = Instant::now();
    let result = delete_event(&ctx, &request.event_id).await;
    log_command_execution("calendar::delete_event", start.elapsed(), result.is_ok());

    match result {
        Ok(()) => Json(AckResponse::ok()),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "event deletion failed");
            Json(AckResponse::failure(err.to_string()))
        }
    }
}

async fn create_event(
    ctx: &AppContext,
    draft: &MeetingDraft,
) -> Result<meetsync_core::CalendarEventHandle> {
    ctx.calendar.authorize().await?;
    ctx.calendar.create_event(draft).await
}

async fn delete_event(ctx: &AppContext, event_id: &str) -> Result<()> {
    ctx.calendar.authorize().await?;
    ctx.calendar.delete_event(event_id).await
}
