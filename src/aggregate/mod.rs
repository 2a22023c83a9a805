mod accumulator;
mod total;


pub use accumulator::{Accumulator, aggregate, aggregate_groups};
pub use total::Total;

use crate::quantity::Quantity;

/// A quantity that may be missing, e.g. a balance with no known price
pub type OptionalQuantity = Option<Quantity>;
