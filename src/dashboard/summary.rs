use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{BalanceRecord, BalanceSource, format_fiat};
use crate::aggregate::{Accumulator, OptionalQuantity, Total};
use crate::config::DisplayConfig;
use crate::quantity::QuantityError;

/// Which half of the dashboard is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    #[default]
    Available,
    Staked,
}

impl TabStatus {
    pub fn label(self) -> &'static str {
        match self {
            TabStatus::Available => "Total Available",
            TabStatus::Staked => "Total Staked",
        }
    }
}

/// Label and figure shown in the middle of the dashboard chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub label: &'static str,
    pub figure: String,
}

/// Fiat totals for the two dashboard tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub available: Total,
    pub staked: Total,
}

fn prices(records: &[BalanceRecord]) -> impl Iterator<Item = OptionalQuantity> + '_ {
    records.iter().map(|record| record.price)
}

impl DashboardSummary {
    /// Sum priced balances into the available and staked totals
    pub fn compute<S: BalanceSource + ?Sized>(source: &S) -> Result<Self, QuantityError> {
        let mut available = Accumulator::new();
        available.extend(prices(source.all_known_balances()));

        // Delegations and unbondings share one running total
        let mut staked = Accumulator::new();
        staked.extend(prices(source.delegations()));
        staked.extend(prices(source.unbondings()));

        let summary = Self {
            available: available.finish()?,
            staked: staked.finish()?,
        };

        tracing::debug!(
            available = %summary.available,
            staked = %summary.staked,
            "computed dashboard totals"
        );

        Ok(summary)
    }

    /// Total backing the active tab
    pub fn highlight(&self, tab: TabStatus) -> Total {
        match tab {
            TabStatus::Available => self.available,
            TabStatus::Staked => self.staked,
        }
    }

    /// `(available, staked)` segment weights for the dual chart
    pub fn chart_weights(&self) -> (f64, f64) {
        (self.available.chart_weight(), self.staked.chart_weight())
    }

    pub fn headline(&self, tab: TabStatus, display: &DisplayConfig) -> Headline {
        Headline {
            label: tab.label(),
            figure: format_fiat(self.highlight(tab), display),
        }
    }
}
