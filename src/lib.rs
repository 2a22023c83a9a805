// Public API exports
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod quantity;
pub mod session;
pub mod tiles;

// Re-export main types for convenience
pub use tiles::{CellKey, Columns, Partition, Row, TilesError, chunk, chunk_with};

pub use quantity::{Quantity, QuantityError};

pub use aggregate::{Accumulator, OptionalQuantity, Total, aggregate, aggregate_groups};

pub use dashboard::{BalanceRecord, BalanceSnapshot, BalanceSource, DashboardSummary, TabStatus};

pub use session::{KeyRing, UnlockError, abandon, submit_unlock};

pub use config::Config;
