//! Meeting CRUD endpoints
//!
//! Mirrors the callable contract: every response is a `{success, error}`
//! envelope. Scheduling is the only endpoint that signals failure through the
//! status code as well (500); the others always answer 200 and carry the
//! outcome in the body.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use meetsync_domain::protocol::{
    AckResponse, DeleteMeetingRequest, GetMeetingsRequest, GetMeetingsResponse,
    ScheduleMeetingResponse, UpdateMeetingRequest, UpdateMeetingResponse,
};
use meetsync_domain::MeetingDraft;
use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/scheduleMeeting", post(schedule_meeting))
        .route("/getMeetings", post(get_meetings))
        .route("/updateMeeting", post(update_meeting))
        .route("/deleteMeeting", post(delete_meeting))
}

/// POST /scheduleMeeting - Create a calendar event and persist the meeting
async fn schedule_meeting(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<MeetingDraft>,
) -> (StatusCode, Json<ScheduleMeetingResponse>) {
    let start = Instant::now();
    let result = ctx.service.schedule(draft).await;
    log_command_execution("meetings::schedule", start.elapsed(), result.is_ok());

    match result {
        Ok(meeting) => (
            StatusCode::OK,
            Json(ScheduleMeetingResponse { meeting: Some(meeting), success: true, error: None }),
        ),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "schedule failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ScheduleMeetingResponse {
                    meeting: None,
                    success: false,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}

/// POST /getMeetings - List meetings, newest first
async fn get_meetings(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<GetMeetingsRequest>,
) -> Json<GetMeetingsResponse> {
    let start = Instant::now();
    let result = ctx.service.list(request.user_id.as_deref()).await;
    log_command_execution("meetings::list", start.elapsed(), result.is_ok());

    match result {
        Ok(meetings) => Json(GetMeetingsResponse { success: true, meetings, error: None }),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "list failed");
            Json(GetMeetingsResponse {
                success: false,
                meetings: Vec::new(),
                error: Some(err.to_string()),
            })
        }
    }
}

/// POST /updateMeeting - Rewrite a meeting and its calendar event
async fn update_meeting(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<UpdateMeetingRequest>,
) -> Json<UpdateMeetingResponse> {
    let start = Instant::now();
    let result = ctx.service.update(&request.meeting_id, request.meeting_data).await;
    log_command_execution("meetings::update", start.elapsed(), result.is_ok());

    match result {
        Ok(meeting) => Json(UpdateMeetingResponse {
            success: true,
            meeting_id: Some(meeting.id.clone()),
            meeting: Some(meeting),
            error: None,
        }),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "update failed");
            Json(UpdateMeetingResponse {
                success: false,
                meeting_id: Some(request.meeting_id),
                meeting: None,
                error: Some(err.to_string()),
            })
        }
    }
}

/// POST /deleteMeeting - Remove the calendar event, then the record
async fn delete_meeting(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<DeleteMeetingRequest>,
) -> Json<AckResponse> {
    let start = Instant::now();
    let result = ctx.service.delete(&request.meeting_id).await;
    log_command_execution("meetings::delete", start.elapsed(), result.is_ok());

    match result {
        Ok(()) => Json(AckResponse::ok()),
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "delete failed");
            Json(AckResponse::failure(err.to_string()))
        }
    }
}
