//! Project and review-note request handlers.

use axum::Json;
use axum::extract::{Path, State};

use reelcrew_core::models::auth::Role;
use reelcrew_core::projects::{self, ProjectRow, ProjectStatus};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AddNoteRequest, CreateProjectRequest, MessageResponse, ProjectResponse};
use crate::services::authz::{require_participant, require_role};

fn to_response(p: ProjectRow) -> ProjectResponse {
    ProjectResponse {
        id: p.id,
        title: p.title,
        description: p.description,
        video_path: p.video_path,
        status: p.status,
        editor_id: p.editor_id,
        owner_id: p.owner_id,
        created_at: p.created_at.to_rfc3339(),
        updated_at: p.updated_at.to_rfc3339(),
    }
}

/// `POST /projects` — an editor submits a new project for review.
pub async fn create_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreateProjectRequest>,
) -> AppResult<Json<MessageResponse>> {
    if body.title.is_empty() || body.video_path.is_empty() {
        return Err(AppError::Validation("Title and video_path are required".into()));
    }

    projects::create_project(
        &state.pool,
        &user.0.sub,
        &body.title,
        &body.description,
        &body.video_path,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Project created successfully".into(),
    }))
}

/// `GET /projects` — the caller's projects, role-scoped.
pub async fn list_projects_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let rows = projects::list_projects(&state.pool, &user.0.sub, user.0.role).await?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /projects/{id}` — project details, participants only.
pub async fn get_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(project_id): Path<String>,
) -> AppResult<Json<ProjectResponse>> {
    let project = projects::get_project(&state.pool, &project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    require_participant(&project, &user.0.sub)?;

    Ok(Json(to_response(project)))
}

/// `POST /projects/{id}/notes` — owner attaches a timestamped review note.
pub async fn add_note_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(project_id): Path<String>,
    Json(body): Json<AddNoteRequest>,
) -> AppResult<Json<MessageResponse>> {
    require_role(&user.0, Role::Owner)?;

    if body.content.is_empty() {
        return Err(AppError::Validation("Note content is required".into()));
    }

    projects::add_note(&state.pool, &project_id, body.timestamp, &body.content).await?;

    Ok(Json(MessageResponse {
        message: "Note added successfully".into(),
    }))
}

/// `POST /projects/{id}/approve` — owner approves the project.
pub async fn approve_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(project_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    require_role(&user.0, Role::Owner)?;
    set_status(&state, &project_id, ProjectStatus::Approved).await?;
    Ok(Json(MessageResponse {
        message: "Project approved successfully".into(),
    }))
}

/// `POST /projects/{id}/reject` — owner rejects the project.
pub async fn reject_project_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(project_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    require_role(&user.0, Role::Owner)?;
    set_status(&state, &project_id, ProjectStatus::Rejected).await?;
    Ok(Json(MessageResponse {
        message: "Project rejected successfully".into(),
    }))
}

async fn set_status(state: &AppState, project_id: &str, status: ProjectStatus) -> AppResult<()> {
    let found = projects::set_project_status(&state.pool, project_id, status).await?;
    if !found {
        return Err(AppError::NotFound("Project not found".into()));
    }
    Ok(())
}
