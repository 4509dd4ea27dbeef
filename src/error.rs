use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid vote distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    /// Only a full 16 entrant bracket maps onto the fixed rounds
    #[error("bracket needs {expected} entrants, got {actual}")]
    BracketSize { expected: usize, actual: usize },

    #[error("cannot compose {requested} unique recipe names, only {available} exist")]
    NamePoolExhausted { requested: usize, available: usize },

    #[error("tournament has no champion yet")]
    MissingChampion,

    #[error("no recipe named {0:?}")]
    UnknownRecipe(String),
}
