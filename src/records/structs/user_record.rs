use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub passkey: String,
    pub torrent_limit: i64,
}
