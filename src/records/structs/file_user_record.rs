use serde::{Deserialize, Serialize};

/// Identified by the composite `(file_id, user_id)` key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct FileUserRecord {
    pub file_id: i64,
    pub user_id: i64,
    pub active: bool,
    pub completed: bool,
    pub announced: i64,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub time: i64,
}
