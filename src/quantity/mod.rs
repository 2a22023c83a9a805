//! Exact decimal amounts for balances and prices.
//!
//! A [`Quantity`] is a signed fixed-point number with [`SCALE`] fractional
//! digits. No floating point is involved in parsing, addition or rendering;
//! every arithmetic operation is checked and reports
//! [`QuantityError::NumericOverflow`] instead of wrapping.

mod decimal;
mod error;


pub use decimal::Quantity;
pub use error::QuantityError;

/// Number of fractional decimal digits carried by a [`Quantity`]
pub const SCALE: u32 = 18;
