use super::{OptionalQuantity, Total};
use crate::quantity::{Quantity, QuantityError};

/// Running total over any number of optional quantities
///
/// Starts absent. The first present value seeds the total, later present
/// values are added to it, absent values change nothing. The same
/// accumulator can be fed several collections in sequence.
///
/// Partial sums may leave the `Quantity` range; only the final sum is
/// range-checked, so the outcome does not depend on entry order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    /// Low 128 bits of the exact sum (two's complement)
    mantissa: i128,
    /// Number of 2^128 wraps; exact sum = mantissa + carry * 2^128
    carry: i64,
    present: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single entry into the running total
    pub fn push(&mut self, entry: OptionalQuantity) {
        let Some(value) = entry else {
            return;
        };
        let addend = value.mantissa();
        let (sum, wrapped) = self.mantissa.overflowing_add(addend);
        if wrapped {
            self.carry += if addend > 0 { 1 } else { -1 };
        }
        self.mantissa = sum;
        self.present = true;
    }

    /// Fold every entry of a collection into the running total
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = OptionalQuantity>,
    {
        for entry in entries {
            self.push(entry);
        }
    }

    /// Current total without consuming the accumulator.
    ///
    /// Fails with [`QuantityError::NumericOverflow`] when the exact sum is
    /// outside the `Quantity` range.
    pub fn total(&self) -> Result<Total, QuantityError> {
        if !self.present {
            return Ok(Total::ABSENT);
        }
        if self.carry != 0 {
            return Err(QuantityError::NumericOverflow);
        }
        Ok(Total::from(Quantity::from_mantissa(self.mantissa)))
    }

    pub fn finish(self) -> Result<Total, QuantityError> {
        self.total()
    }
}

/// Sum a collection of optional quantities.
///
/// The result is absent iff every entry is absent (including the empty
/// collection).
pub fn aggregate<I>(entries: I) -> Result<Total, QuantityError>
where
    I: IntoIterator<Item = OptionalQuantity>,
{
    let mut acc = Accumulator::new();
    acc.extend(entries);
    let total = acc.finish()?;
    tracing::trace!(absent = total.is_absent(), "aggregated quantities");
    Ok(total)
}

/// Sum several collections into one running total, in order
pub fn aggregate_groups<G, I>(groups: G) -> Result<Total, QuantityError>
where
    G: IntoIterator<Item = I>,
    I: IntoIterator<Item = OptionalQuantity>,
{
    let mut acc = Accumulator::new();
    for group in groups {
        acc.extend(group);
    }
    acc.finish()
}
