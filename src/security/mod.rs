pub mod otc;
pub mod password;

pub use otc::CodeGenerator;
pub use password::PasswordHasher;
