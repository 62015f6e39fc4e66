use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClavixError {
    #[error("workspace error: {0}")]
    Workspace(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("template error: {0}")]
    Template(String),
    #[error("state error: {0}")]
    State(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unknown error: {0}")]
    Unknown(String),
}
