pub mod store;
pub mod unblock;
