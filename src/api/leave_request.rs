use crate::{
    api::employee::NextIdResponse,
    ledger::LeaveLedger,
    model::leave_request::{ApplyLeave, LeaveDecision, LeaveRequest},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "pending": [
        {
            "id": "L001",
            "employee_id": "E001",
            "start_date": "2026-01-01",
            "end_date": "2026-01-03",
            "days": 3,
            "status": "PENDING",
            "applied_at": "2025-12-20T08:00:00Z",
            "reason": "family trip"
        }
    ]
}))]
pub struct PendingLeavesResponse {
    pub pending: Vec<LeaveRequest>,
}

/* =========================
Apply for leave
========================= */
#[utoipa::path(
    post,
    path = "/leaves/apply",
    request_body(
        content = ApplyLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted", body = Object, example = json!({
            "message": "Leave applied",
            "leave": {
                "id": "L001",
                "employee_id": "E001",
                "start_date": "2026-01-01",
                "end_date": "2026-01-03",
                "days": 3,
                "status": "PENDING",
                "applied_at": "2025-12-20T08:00:00Z",
                "reason": null
            }
        })),
        (status = 400, description = "Invalid dates, overlap or balance exceeded", body = Object, example = json!({
            "message": "Overlapping leave request exists"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    ledger: web::Data<LeaveLedger>,
    payload: web::Json<ApplyLeave>,
) -> actix_web::Result<impl Responder> {
    let leave = web::block(move || ledger.apply_leave(payload.into_inner())).await??;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave applied",
        "leave": leave
    })))
}

/* =========================
Approve leave
========================= */
#[utoipa::path(
    post,
    path = "/leaves/approve",
    request_body = LeaveDecision,
    responses(
        (status = 200, description = "Leave approved, balance debited", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave already processed or balance drained", body = Object, example = json!({
            "message": "Insufficient balance at approval time"
        })),
        (status = 404, description = "Leave or employee not found")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    ledger: web::Data<LeaveLedger>,
    payload: web::Json<LeaveDecision>,
) -> actix_web::Result<impl Responder> {
    let LeaveDecision { id, .. } = payload.into_inner();
    let leave = web::block(move || ledger.approve_leave(&id)).await??;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave approved",
        "leave": leave
    })))
}

/* =========================
Reject leave
========================= */
#[utoipa::path(
    post,
    path = "/leaves/reject",
    request_body = LeaveDecision,
    responses(
        (status = 200, description = "Leave rejected", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave already processed", body = Object, example = json!({
            "message": "Leave not in PENDING state (currently APPROVED)"
        })),
        (status = 404, description = "Leave not found")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    ledger: web::Data<LeaveLedger>,
    payload: web::Json<LeaveDecision>,
) -> actix_web::Result<impl Responder> {
    let LeaveDecision { id, reason } = payload.into_inner();
    let leave = web::block(move || ledger.reject_leave(&id, reason)).await??;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave rejected",
        "leave": leave
    })))
}

/// Pending requests in table order
#[utoipa::path(
    get,
    path = "/leaves/pending",
    responses(
        (status = 200, description = "Pending leave requests", body = PendingLeavesResponse)
    ),
    tag = "Leave"
)]
pub async fn pending_leaves(ledger: web::Data<LeaveLedger>) -> actix_web::Result<impl Responder> {
    let pending = web::block(move || ledger.list_pending()).await??;
    Ok(HttpResponse::Ok().json(PendingLeavesResponse { pending }))
}

/// Preview the id the next application would receive
#[utoipa::path(
    get,
    path = "/leaves/next-id",
    responses(
        (status = 200, description = "Next leave id", body = NextIdResponse)
    ),
    tag = "Leave"
)]
pub async fn next_leave_id(ledger: web::Data<LeaveLedger>) -> actix_web::Result<impl Responder> {
    let next_id = web::block(move || ledger.next_leave_id()).await??;
    Ok(HttpResponse::Ok().json(NextIdResponse { next_id }))
}
