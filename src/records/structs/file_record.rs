use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub info_hash: String,
    pub verified: bool,
    pub completed: i64,
    pub create_time: i64,
    pub update_time: i64,
}
