//! Axum route handlers for the Wizard API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::DocumentKind;
use crate::models::section::SectionId;
use crate::state::AppState;
use crate::templates::tree::{PresentationTree, TemplateId};
use crate::templates::ExportHandoff;
use crate::wizard::controller::WizardSnapshot;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartWizardRequest {
    pub kind: DocumentKind,
}

#[derive(Debug, Deserialize)]
pub struct SelectSectionRequest {
    pub section: SectionId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TemplateQuery {
    pub template: TemplateId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FinishRequest {
    pub template: TemplateId,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/wizards
pub async fn handle_start(
    State(state): State<AppState>,
    Json(request): Json<StartWizardRequest>,
) -> (StatusCode, Json<WizardSnapshot>) {
    let snapshot = state.wizards.start(request.kind).await;
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/v1/wizards/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardSnapshot>, AppError> {
    Ok(Json(state.wizards.snapshot(id).await?))
}

/// DELETE /api/v1/wizards/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.wizards.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/wizards/:id/restart
///
/// Discards everything entered so far and starts over on an empty document of the same kind.
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardSnapshot>, AppError> {
    Ok(Json(state.wizards.restart(id).await?))
}

/// PUT /api/v1/wizards/:id/active-section
pub async fn handle_select_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectSectionRequest>,
) -> Result<Json<WizardSnapshot>, AppError> {
    Ok(Json(state.wizards.select_section(id, request.section).await?))
}

/// POST /api/v1/wizards/:id/sections/:section
///
/// Body is the section's form. With `useAI` set on a section that supports it,
/// the response waits for the generation to resolve and reflects the merged result.
pub async fn handle_submit_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, SectionId)>,
    Json(input): Json<Value>,
) -> Result<Json<WizardSnapshot>, AppError> {
    Ok(Json(
        state.wizards.submit_section(id, section, input).await?,
    ))
}

/// GET /api/v1/wizards/:id/preview?template=modern|minimal
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<PresentationTree>, AppError> {
    Ok(Json(state.wizards.preview(id, query.template).await?))
}

/// POST /api/v1/wizards/:id/finish
///
/// Hands the document and chosen template off for export. The wizard stays editable.
pub async fn handle_finish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinishRequest>,
) -> Result<Json<ExportHandoff>, AppError> {
    Ok(Json(state.wizards.finish(id, request.template).await?))
}
