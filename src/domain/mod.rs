//! In-memory domain state for the session: the user profile plus the reward
//! and event catalogs.

pub mod catalog;
pub mod events;
pub mod rewards;
pub mod user;

pub use events::{partition_events, EventItem, EventPartition, EventType};
pub use rewards::{RedeemError, RewardItem};
pub use user::{SavingsGoal, User};

/// Session-lifetime data owned by the top-level app.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainStore {
    pub user: User,
    pub rewards: Vec<RewardItem>,
    pub events: Vec<EventItem>,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self {
            user: catalog::initial_user(),
            rewards: catalog::rewards(),
            events: catalog::events(),
        }
    }
}

impl DomainStore {
    /// Redeem the catalog reward `id` against the user's balance.
    ///
    /// Returns the redeemed item. The catalog is left untouched.
    pub fn redeem(&mut self, id: &str) -> Result<&RewardItem, RedeemError> {
        let reward = self
            .rewards
            .iter()
            .find(|reward| reward.id == id)
            .ok_or_else(|| RedeemError::UnknownReward { id: id.to_string() })?;
        self.user.redeem(reward)?;
        Ok(reward)
    }

    pub fn event_partition(&self) -> EventPartition<'_> {
        partition_events(&self.events)
    }
}
