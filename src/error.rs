use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Reasons a raw symbol array cannot be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid: no cells")]
    Empty,
    #[error("invalid grid: column {column} has {found} cells, expected {expected}")]
    Ragged {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid grid: unknown symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { x: usize, y: usize, symbol: char },
}
