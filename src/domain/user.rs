use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::rewards::{RedeemError, RewardItem};

/// Savings target tracked on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub amount: u32,
    pub target_date: String,
    pub current: u32,
}

impl SavingsGoal {
    /// Progress toward the goal, clamped to 0..=100.
    pub fn percent(&self) -> u16 {
        if self.amount == 0 {
            return 100;
        }
        let percent = u64::from(self.current) * 100 / u64::from(self.amount);
        percent.min(100) as u16
    }
}

/// Profile of the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    /// Loyalty balance. Unsigned, so it can never go negative.
    pub k_dollars: u32,
    pub streak_days: u32,
    pub badges: BTreeSet<String>,
    pub interests: BTreeSet<String>,
    pub language: String,
    pub savings_goal: SavingsGoal,
    pub level: u32,
}

impl User {
    pub fn can_afford(&self, reward: &RewardItem) -> bool {
        self.k_dollars >= reward.cost
    }

    /// Deduct `reward.cost` from the balance, or leave it untouched.
    pub fn redeem(&mut self, reward: &RewardItem) -> Result<u32, RedeemError> {
        let remaining = self
            .k_dollars
            .checked_sub(reward.cost)
            .ok_or(RedeemError::InsufficientFunds {
                balance: self.k_dollars,
                cost: reward.cost,
            })?;
        self.k_dollars = remaining;
        Ok(remaining)
    }
}
