use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Consecutive password failures after which an account is blocked
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,
    /// Length of the one-time verification code (digits)
    #[serde(default = "default_code_length")]
    pub code_length: u32,
    /// Verification code lifetime in seconds; `None` means codes never expire
    #[serde(default)]
    pub code_ttl: Option<u64>,
    /// Session lifetime in seconds
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime: u64,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of threads)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

fn default_max_failed_attempts() -> u32 {
    3
}

fn default_code_length() -> u32 {
    6
}

fn default_session_lifetime() -> u64 {
    3600 // 1 hour
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: default_max_failed_attempts(),
            code_length: default_code_length(),
            code_ttl: None,
            session_lifetime: default_session_lifetime(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_failed_attempts == 0 {
            return Err(ConfigError::Validation(
                "auth.max_failed_attempts must be > 0".to_string(),
            ));
        }
        if self.code_length == 0 {
            return Err(ConfigError::Validation(
                "auth.code_length must be > 0".to_string(),
            ));
        }
        if self.code_ttl == Some(0) {
            return Err(ConfigError::Validation(
                "auth.code_ttl must be > 0 when set".to_string(),
            ));
        }
        if self.session_lifetime == 0 {
            return Err(ConfigError::Validation(
                "auth.session_lifetime must be > 0".to_string(),
            ));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_cost == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.memory_cost must be > 0".to_string(),
            ));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.time_cost must be > 0".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.parallelism must be > 0".to_string(),
            ));
        }
        if self.hash_length == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.hash_length must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
