use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForkfulError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("no recipe with id {0}")]
    RecipeNotFound(u32),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ForkfulError>;
