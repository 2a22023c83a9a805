//! Dashboard figures derived from a balance-query collaborator.
//!
//! Nothing here observes its inputs: callers recompute a
//! [`DashboardSummary`] whenever the underlying balances change.

mod balance;
mod format;
mod summary;


pub use balance::{BalanceRecord, BalanceSnapshot, BalanceSource};
pub use format::{account_title, format_fiat};
pub use summary::{DashboardSummary, Headline, TabStatus};
