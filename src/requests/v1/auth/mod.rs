use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct LoginRequest {
    #[schema(example = "vasya")]
    pub login: String,
    #[schema(example = "qwerty123")]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct VerificationRequest {
    #[schema(example = "vasya")]
    pub login: String,
    #[schema(example = "123456")]
    pub code: String,
}
