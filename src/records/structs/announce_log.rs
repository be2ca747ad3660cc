use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct AnnounceLog {
    pub id: i64,
    pub info_hash: String,
    pub peer_id: String,
    pub ip: String,
    #[sqlx(try_from = "i64")]
    pub port: u16,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub event: String,
    pub time: i64,
}
