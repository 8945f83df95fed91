use chrono::{DateTime, Utc};

#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub token: String,
    pub permissions: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub slug: String,
    pub orig_file_name: String,
    pub file_name: String,
    pub mimetype: String,
    pub deletion_token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub short: String,
    pub destination: String,
    pub password: Option<String>,
    pub views: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
