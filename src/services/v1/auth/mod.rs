pub mod login;
pub mod reset;
pub mod session;
pub mod verify;
