use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SuggestError {
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Config error: {0}")]
    Config(String),
}
