use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

// GET /api/tickets?status=&priority=&search=
pub async fn list_tickets(
    State(state): State<AppState>,
    query: Result<Query<TicketFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Ticket>>> {
    let Query(filter) = query?;
    let tickets = state.ticket_service.list_tickets(&filter).await?;
    Ok(Json(tickets))
}

// GET /api/tickets/:id
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Ticket>> {
    let ticket = state.ticket_service.get_ticket(&id).await?;
    Ok(Json(ticket))
}

// POST /api/tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<CreateTicketRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Ticket>)> {
    let Json(request) = payload?;
    let ticket = state.ticket_service.create_ticket(request).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

// PUT /api/tickets/:id
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTicketRequest>, JsonRejection>,
) -> ApiResult<Json<Ticket>> {
    let Json(request) = payload?;
    let ticket = state.ticket_service.update_ticket(&id, request).await?;
    Ok(Json(ticket))
}

// POST /api/tickets/:id/notes
pub async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddNoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(request) = payload?;
    let note = state.ticket_service.add_note(&id, request).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

// DELETE /api/tickets/:id
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedTicketResponse>> {
    let ticket = state.ticket_service.delete_ticket(&id).await?;
    Ok(Json(DeletedTicketResponse {
        message: "Ticket deleted".to_string(),
        ticket,
    }))
}

// POST /api/tickets/:id/assign
pub async fn assign_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Ticket>> {
    let request = assign_request(&body)?;
    let ticket = state
        .ticket_service
        .assign_ticket(&id, request.agent_id.as_deref())
        .await?;
    Ok(Json(ticket))
}

/// An empty body reads as `{}`, which unassigns.
fn assign_request(body: &[u8]) -> ApiResult<AssignTicketRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AssignTicketRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
    })
}
