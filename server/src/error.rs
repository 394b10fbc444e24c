//! Error type shared by every /user handler

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::{backend::ErrorResponse, ADD_FAILED, DELETE_FAILED, LIST_FAILED, UPDATE_FAILED};
use sea_orm::DbErr;
use thiserror::Error;

use crate::password::PasswordError;

/// Which of the four operations a failure belongs to, selects the public error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationKind::List => LIST_FAILED,
            OperationKind::Create => ADD_FAILED,
            OperationKind::Update => UPDATE_FAILED,
            OperationKind::Delete => DELETE_FAILED,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("method {0} not allowed")]
    MethodNotAllowed(actix_web::http::Method),
    #[error("{op:?} failed: {source}")]
    Database {
        op: OperationKind,
        #[source]
        source: DbErr,
    },
    #[error("couldn't hash password: {0}")]
    Password(#[from] PasswordError),
}

impl ApiError {
    pub fn database(op: OperationKind) -> impl FnOnce(DbErr) -> ApiError {
        move |source| ApiError::Database { op, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database { .. } | ApiError::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // causes are logged where they happen, clients only get the fixed message
        let body = match self {
            ApiError::MissingFields(fields) => ErrorResponse {
                error: "Missing required fields".to_owned(),
                missing: fields.iter().map(|f| f.to_string()).collect(),
            },
            ApiError::MalformedBody(_) => ErrorResponse::new("Malformed request body"),
            ApiError::MethodNotAllowed(_) => ErrorResponse::new("Method not allowed"),
            ApiError::Database { op, .. } => ErrorResponse::new(op.failure_message()),
            ApiError::Password(_) => ErrorResponse::new(ADD_FAILED),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
