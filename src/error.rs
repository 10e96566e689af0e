use thiserror::Error;

/// A required input that was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Label,
    Amount,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Category => "category",
            Field::Label => "label",
            Field::Amount => "amount",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum RendaError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Missing field: {0}")]
    MissingField(Field),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RendaError>;
