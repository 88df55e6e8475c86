pub mod dates;
pub mod person;
