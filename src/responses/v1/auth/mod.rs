use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User-visible notification texts. The banking UI renders these verbatim,
/// so they must match byte for byte.
pub const INVALID_CREDENTIALS: &str = "Ошибка! Неверно указан логин или пароль";
pub const INVALID_CODE: &str = "Ошибка! Неверно указан код! Попробуйте ещё раз.";
pub const BLOCKED: &str = "Ошибка! Превышено количество попыток. Пользователь заблокирован.";

/// Password step passed; a verification code was issued out-of-band.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct PasswordAccepted {
    pub login: String,
}

/// Verification code confirmed; a session was created.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Authenticated {
    pub token: String,
    pub login: String,
}

/// Current session owner.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Session {
    pub login: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn invalid_credentials() -> Self {
        Self {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }

    pub fn invalid_code() -> Self {
        Self {
            message: INVALID_CODE.to_string(),
        }
    }

    pub fn blocked() -> Self {
        Self {
            message: BLOCKED.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            message: "user not found".to_string(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            message: "session not found or expired".to_string(),
        }
    }
}
