use serde::{Deserialize, Serialize};

/// Column order of the user table
pub const USER_COLUMNS: [&str; 7] = [
    "id",
    "password_hash",
    "first_name",
    "second_name",
    "birthdate",
    "biography",
    "city",
];

/// Column order of the friendship table
pub const FRIENDSHIP_COLUMNS: [&str; 2] = ["user_id", "friend_id"];

/// Name of the column the friendship generator reads from the user table
pub const ID_COLUMN: &str = "id";

/// One synthesized user row.
///
/// Field order is the serialized column order, so a `csv::Writer` emits the
/// header `id,password_hash,first_name,second_name,birthdate,biography,city`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Human readable key such as `LoremIpsum4821`; not guaranteed unique
    pub id: String,
    /// `<salt_hex>:<sha256_hex>`
    pub password_hash: String,
    pub first_name: String,
    pub second_name: String,
    /// ISO-8601 date, `YYYY-MM-DD`
    pub birthdate: String,
    pub biography: String,
    pub city: String,
}

/// A directed edge between two user ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipEdge {
    pub user_id: String,
    pub friend_id: String,
}

impl FriendshipEdge {
    pub fn new(user_id: impl Into<String>, friend_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            friend_id: friend_id.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.user_id == self.friend_id
    }
}
