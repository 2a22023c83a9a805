mod error;
mod partition;


pub use error::TilesError;
pub use partition::{CellKey, Partition, Row, chunk, chunk_with};

use std::fmt;

/// Column count used when no layout config is supplied
pub const DEFAULT_COLUMNS: usize = 2;

/// A validated, strictly positive column count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Columns(usize);

impl Columns {
    /// Validate a raw column count coming from a caller or a config file
    pub fn new(raw: i64) -> Result<Self, TilesError> {
        match usize::try_from(raw) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(TilesError::InvalidArgument { columns: raw }),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self(DEFAULT_COLUMNS)
    }
}

impl TryFrom<i64> for Columns {
    type Error = TilesError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<usize> for Columns {
    type Error = TilesError;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        if raw == 0 {
            return Err(TilesError::InvalidArgument { columns: 0 });
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
