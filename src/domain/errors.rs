use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn ticket_not_found() -> Self {
        DomainError::NotFound("Ticket not found".to_string())
    }

    pub fn agent_not_found() -> Self {
        DomainError::NotFound("Agent not found".to_string())
    }
}
