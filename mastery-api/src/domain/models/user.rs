use serde::{Deserialize, Serialize};

use super::UserId;

/// An account that owns goals and time records.
///
/// The password is only ever stored in hashed form; hashing and
/// verification live in `crate::auth::password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
