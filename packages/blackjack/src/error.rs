use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot draw from an empty shoe")]
    EmptyShoe,
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}
