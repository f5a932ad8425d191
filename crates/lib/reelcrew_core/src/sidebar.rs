//! Sidebar data — channels plus collaboration partners, per role.
//!
//! Owners see the channels they own and the editors assigned to them;
//! editors see the channels they are assigned to and those channels'
//! owners.

use sqlx::PgPool;

use crate::models::auth::Role;

/// Channel entry in the sidebar.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SidebarChannel {
    pub id: String,
    pub name: String,
    pub icon_url: String,
    pub email: String,
    pub youtube_account_id: String,
}

/// Collaboration partner: an owner (for editors) or an editor (for owners).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SidebarPartner {
    pub id: String,
    pub name: String,
}

/// Channels and partners visible to a user.
pub async fn sidebar_data(
    pool: &PgPool,
    user_id: &str,
    role: Role,
) -> Result<(Vec<SidebarChannel>, Vec<SidebarPartner>), sqlx::Error> {
    match role {
        Role::Owner => {
            let channels = sqlx::query_as::<_, SidebarChannel>(
                r#"
                SELECT id::text AS id, name, icon_url, email,
                       youtube_account_id::text AS youtube_account_id
                FROM channels
                WHERE owner_id = $1::uuid
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?;

            let partners = sqlx::query_as::<_, SidebarPartner>(
                r#"
                SELECT DISTINCT u.id::text AS id, u.name
                FROM editors_channels ec
                JOIN channels c ON ec.channel_id = c.id
                JOIN users u ON ec.editor_id = u.id
                WHERE c.owner_id = $1::uuid
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?;

            Ok((channels, partners))
        }
        Role::Editor => {
            let channels = sqlx::query_as::<_, SidebarChannel>(
                r#"
                SELECT c.id::text AS id, c.name, c.icon_url, c.email,
                       c.youtube_account_id::text AS youtube_account_id
                FROM editors_channels ec
                JOIN channels c ON ec.channel_id = c.id
                WHERE ec.editor_id = $1::uuid
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?;

            let partners = sqlx::query_as::<_, SidebarPartner>(
                r#"
                SELECT DISTINCT u.id::text AS id, u.name
                FROM editors_channels ec
                JOIN channels c ON ec.channel_id = c.id
                JOIN users u ON c.owner_id = u.id
                WHERE ec.editor_id = $1::uuid
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?;

            Ok((channels, partners))
        }
    }
}
