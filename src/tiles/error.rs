use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilesError {
    #[error("Invalid column count: {columns} (must be a positive integer)")]
    InvalidArgument { columns: i64 },
}
