use thiserror::Error;

// Domain-level errors for party workflows.
#[derive(Debug)]
pub enum PartyError {
    InvalidToken,
    NameRequired,
    InvalidCategory,
    IngredientNameRequired,
    UnusableIngredientName,
    DuplicateIngredient,
    IngredientNotFound,
    OrderNotFound,
    StorageFailure,
}

// Failures raised by the JSON file adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Malformed(#[from] serde_json::Error),
}
