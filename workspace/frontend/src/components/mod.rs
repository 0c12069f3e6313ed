pub mod common;
pub mod forecast;
pub mod layout;
