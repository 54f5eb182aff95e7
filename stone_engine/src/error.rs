//! Recoverable errors. Kernel invariant violations panic instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoneError {
    #[error("invalid stone literal {literal:?}: {source}")]
    Parse {
        literal: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
