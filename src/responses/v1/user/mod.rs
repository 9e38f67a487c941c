use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Administrative view of an account's lockout state.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct User {
    pub login: String,
    pub failed_attempts: i32,
    pub blocked: bool,
}
