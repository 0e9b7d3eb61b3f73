use thiserror::Error;

pub type DgResult<T> = Result<T, DgError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DgError {
    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Already exists: {what}")]
    AlreadyExists { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
