//! Project and review-note persistence.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;

use crate::models::auth::Role;
use crate::uuid::uuidv7;

/// Errors from project operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Project creation assigns the first available owner; none exists yet.
    #[error("No owner available for project assignment")]
    NoOwnerAvailable,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Review lifecycle states for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Rejected => "rejected",
        }
    }
}

/// Row returned by project queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_path: String,
    pub status: String,
    pub editor_id: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const PROJECT_COLUMNS: &str = "id::text AS id, title, description, video_path, status, \
     editor_id::text AS editor_id, owner_id::text AS owner_id, created_at, updated_at";

/// Create a project for an editor, assigning the first available owner.
///
/// Returns the new project id. Status starts as `pending`.
pub async fn create_project(
    pool: &PgPool,
    editor_id: &str,
    title: &str,
    description: &str,
    video_path: &str,
) -> Result<String, ProjectError> {
    let owner_id = sqlx::query_scalar::<_, String>(
        "SELECT id::text FROM users WHERE role = 'owner' LIMIT 1",
    )
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::NoOwnerAvailable)?;

    let project_id = uuidv7();
    sqlx::query(
        r#"
        INSERT INTO projects (id, title, description, video_path, status, editor_id, owner_id)
        VALUES ($1, $2, $3, $4, 'pending', $5::uuid, $6::uuid)
        "#,
    )
    .bind(project_id)
    .bind(title)
    .bind(description)
    .bind(video_path)
    .bind(editor_id)
    .bind(&owner_id)
    .execute(pool)
    .await?;

    Ok(project_id.to_string())
}

/// List a user's projects: editors see projects they edit, owners see
/// projects they review. Most recent first.
pub async fn list_projects(
    pool: &PgPool,
    user_id: &str,
    role: Role,
) -> Result<Vec<ProjectRow>, ProjectError> {
    let filter = match role {
        Role::Editor => "editor_id",
        Role::Owner => "owner_id",
    };
    let rows = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE {filter} = $1::uuid ORDER BY created_at DESC",
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch a single project by id.
pub async fn get_project(pool: &PgPool, project_id: &str) -> Result<Option<ProjectRow>, ProjectError> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1::uuid",
    ))
    .bind(project_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Set a project's review status. Returns false when the id is unknown.
pub async fn set_project_status(
    pool: &PgPool,
    project_id: &str,
    status: ProjectStatus,
) -> Result<bool, ProjectError> {
    let result = sqlx::query(
        "UPDATE projects SET status = $2, updated_at = now() WHERE id = $1::uuid",
    )
    .bind(project_id)
    .bind(status.as_str())
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Attach a timestamped review note to a project, returning the note id.
pub async fn add_note(
    pool: &PgPool,
    project_id: &str,
    timestamp_secs: i32,
    content: &str,
) -> Result<String, ProjectError> {
    let note_id = uuidv7();
    sqlx::query(
        "INSERT INTO notes (id, project_id, timestamp_secs, content) VALUES ($1, $2::uuid, $3, $4)",
    )
    .bind(note_id)
    .bind(project_id)
    .bind(timestamp_secs)
    .bind(content)
    .execute(pool)
    .await?;
    Ok(note_id.to_string())
}
