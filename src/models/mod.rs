pub mod config;
pub mod person;
