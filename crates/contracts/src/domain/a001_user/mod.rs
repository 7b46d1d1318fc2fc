pub mod aggregate;

pub use aggregate::{User, UserForm, UserId, UserRole, UserStatus, USER_SCHEMA};
