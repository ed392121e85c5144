use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::domain_error::DomainError;
use crate::error::Error;

#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorResponse {
    r#type: String,
    title: String,
    detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = error_to_response(&self);
        (status, Json(error_response)).into_response()
    }
}

fn error_to_response(error: &Error) -> (StatusCode, ErrorResponse) {
    let (status, r#type, title) = match error {
        Error::Domain(DomainError::GameDoesNotExist(_)) => (
            StatusCode::NOT_FOUND,
            "GAME_DOES_NOT_EXIST",
            "The game does not exist",
        ),
        Error::Domain(DomainError::EmptySelection) => (
            StatusCode::CONFLICT,
            "EMPTY_SELECTION",
            "Select at least one word first",
        ),
        Error::Domain(
            DomainError::InvalidStateForBegin(..)
            | DomainError::InvalidStateForRestart(..)
            | DomainError::InvalidStateForToggle(..)
            | DomainError::InvalidStateForFinish(..),
        ) => (
            StatusCode::CONFLICT,
            "COMMAND_NOT_ALLOWED",
            "The command is not allowed on the current screen",
        ),
        Error::Domain(
            DomainError::EmptyRound | DomainError::MinimumMatchesExceedRoundSize(..),
        ) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ROUND_SETTINGS",
            "The round settings are invalid",
        ),
        Error::Domain(
            DomainError::DictionaryTooSmall(..)
            | DomainError::NotEnoughMatchingWords(..)
            | DomainError::DictionaryUnreadable(..),
        ) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "DICTIONARY",
            "The dictionary cannot fill a round",
        ),
        Error::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER",
            "Internal Server error",
        ),
    };

    (
        status,
        ErrorResponse {
            r#type: r#type.to_string(),
            title: title.to_string(),
            detail: error.to_string(),
        },
    )
}
