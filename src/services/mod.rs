//! Service-level orchestration and its error taxonomy.
//!
//! Services sit between the HTTP handlers and the repository: they
//! validate input, enforce the age invariant and translate repository
//! failures into responses. Validation problems come back as 400 with
//! a user-visible message; storage failures as 500 with a generic body
//! while the detail goes to the log.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dates::DateError;
use crate::repository::UnknownSortColumn;
use crate::repository::errors::RepositoryError;

pub mod person;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The person should be older than 18 and younger than 60!")]
    AgeOutOfRange,

    #[error("Person not found")]
    NotFound,

    #[error("Such a person already exists.")]
    AlreadyExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(_) => ServiceError::AlreadyExists,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<DateError> for ServiceError {
    fn from(err: DateError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl From<UnknownSortColumn> for ServiceError {
    fn from(err: UnknownSortColumn) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_)
            | ServiceError::AgeOutOfRange
            | ServiceError::NotFound
            | ServiceError::AlreadyExists => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Internal(detail) => {
                log::error!("Internal error: {detail}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
            other => HttpResponse::build(other.status_code()).body(other.to_string()),
        }
    }
}
