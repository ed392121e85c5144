pub mod domain_error;

use thiserror::Error;

use self::domain_error::DomainError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Domain Error. Error: '{0}'.")]
    Domain(DomainError),
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
}

impl Error {
    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }

    /// Errors caused by the player clicking something the current screen does not offer.
    pub fn is_rejected_command(&self) -> bool {
        match self {
            Error::Domain(error) => matches!(
                error,
                DomainError::InvalidStateForBegin(_, _)
                    | DomainError::InvalidStateForRestart(_, _)
                    | DomainError::InvalidStateForToggle(_, _)
                    | DomainError::InvalidStateForFinish(_, _)
                    | DomainError::EmptySelection
            ),
            Error::Internal(_) => false,
        }
    }
}
