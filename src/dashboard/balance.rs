use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::aggregate::OptionalQuantity;
use crate::quantity::Quantity;

/// A single balance line as reported by the balance-query collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Chain the balance lives on
    pub chain_id: String,
    /// Token denomination (e.g., "uatom")
    pub denom: String,
    /// Token amount
    pub amount: Quantity,
    /// Fiat value of `amount`, if a price is known
    #[serde(default)]
    pub price: OptionalQuantity,
}

impl BalanceRecord {
    pub fn new(chain_id: impl Into<String>, denom: impl Into<String>, amount: Quantity) -> Self {
        Self {
            chain_id: chain_id.into(),
            denom: denom.into(),
            amount,
            price: None,
        }
    }

    pub fn with_price(mut self, price: Quantity) -> Self {
        self.price = Some(price);
        self
    }
}

/// Read-only view over the balance collections the dashboard sums
pub trait BalanceSource {
    /// Every spendable balance across known chains
    fn all_known_balances(&self) -> &[BalanceRecord];

    /// Tokens currently delegated to validators
    fn delegations(&self) -> &[BalanceRecord];

    /// Tokens in the unbonding period
    fn unbondings(&self) -> &[BalanceRecord];
}

/// Owned balance collections, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSnapshot {
    pub balances: Vec<BalanceRecord>,
    pub delegations: Vec<BalanceRecord>,
    pub unbondings: Vec<BalanceRecord>,
}

impl BalanceSnapshot {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read balances file {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse balances file {}", path.display()))?;
        Ok(snapshot)
    }
}

impl BalanceSource for BalanceSnapshot {
    fn all_known_balances(&self) -> &[BalanceRecord] {
        &self.balances
    }

    fn delegations(&self) -> &[BalanceRecord] {
        &self.delegations
    }

    fn unbondings(&self) -> &[BalanceRecord] {
        &self.unbondings
    }
}
