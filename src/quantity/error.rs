use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Numeric overflow: value exceeds the fixed-point quantity range")]
    NumericOverflow,

    #[error("Invalid quantity: {0:?}")]
    InvalidFormat(String),

    #[error("Too many fractional digits: {digits} (max: {max})")]
    TooPrecise { digits: usize, max: u32 },
}
