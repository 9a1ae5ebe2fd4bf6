use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog entry redeemable for K Dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub image: String,
    pub description: String,
}

/// Reasons a redemption is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedeemError {
    #[error("Balance {balance} K$ is below cost {cost} K$")]
    InsufficientFunds { balance: u32, cost: u32 },

    #[error("Reward '{id}' not found in catalog")]
    UnknownReward { id: String },
}

impl RedeemError {
    pub fn user_message(&self) -> &'static str {
        match self {
            RedeemError::InsufficientFunds { .. } => "Not enough K Dollars",
            RedeemError::UnknownReward { .. } => "Reward unavailable",
        }
    }
}
