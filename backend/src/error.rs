use crate::models::ErrorResponse;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;
use thiserror::Error;

/// Request-level failures of an analysis. Upstream errors never show up here
/// directly: they are downgraded to defaults, `NotFound` or `Internal`.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Username is required.")]
    Validation,

    #[error("Channel not found.")]
    NotFound,

    #[error("Failed to analyze competitor.")]
    Internal(#[source] anyhow::Error),
}

impl AnalyzeError {
    pub fn status(&self) -> Status {
        match self {
            AnalyzeError::Validation => Status::BadRequest,
            AnalyzeError::NotFound => Status::NotFound,
            AnalyzeError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<anyhow::Error> for AnalyzeError {
    fn from(err: anyhow::Error) -> Self {
        AnalyzeError::Internal(err)
    }
}

impl<'r> Responder<'r, 'static> for AnalyzeError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let json = serde_json::to_string(&body).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
