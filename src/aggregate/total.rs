use super::OptionalQuantity;
use crate::quantity::Quantity;
use serde::Serialize;
use std::fmt;

/// Result of an aggregation: a sum, or absent when no entry had a value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Total(OptionalQuantity);

impl Total {
    pub const ABSENT: Self = Self(None);

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn quantity(&self) -> OptionalQuantity {
        self.0
    }

    /// Exact decimal rendering, or `placeholder` when absent
    pub fn display_or(&self, placeholder: &str) -> String {
        match self.0 {
            Some(value) => value.to_string(),
            None => placeholder.to_string(),
        }
    }

    /// Relative weight for chart segments; absent counts as zero
    pub fn chart_weight(&self) -> f64 {
        self.0.map_or(0.0, Quantity::to_f64)
    }
}

impl From<OptionalQuantity> for Total {
    fn from(value: OptionalQuantity) -> Self {
        Self(value)
    }
}

impl From<Quantity> for Total {
    fn from(value: Quantity) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("-"),
        }
    }
}
