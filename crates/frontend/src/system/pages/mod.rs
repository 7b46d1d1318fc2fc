pub mod login;
pub mod settings;
