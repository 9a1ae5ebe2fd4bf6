//! Seed data loaded at session start.

use crate::domain::events::{EventItem, EventType};
use crate::domain::rewards::RewardItem;
use crate::domain::user::{SavingsGoal, User};

pub fn initial_user() -> User {
    User {
        username: "Student123".to_string(),
        email: "student@ctflife.com".to_string(),
        k_dollars: 50,
        streak_days: 4,
        badges: ["Early Adopter".to_string()].into_iter().collect(),
        interests: ["Video Games".to_string()].into_iter().collect(),
        language: "English".to_string(),
        savings_goal: SavingsGoal {
            amount: 1000,
            target_date: "2024-12-31".to_string(),
            current: 350,
        },
        level: 4,
    }
}

fn reward(id: &str, name: &str, cost: u32, image: &str, description: &str) -> RewardItem {
    RewardItem {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        image: image.to_string(),
        description: description.to_string(),
    }
}

pub fn rewards() -> Vec<RewardItem> {
    vec![
        reward(
            "r1",
            "Giordano $50 Coupon",
            100,
            "https://picsum.photos/200/200",
            "Valid for any purchase over $200.",
        ),
        reward(
            "r2",
            "K11 Art Mall Coffee",
            40,
            "https://picsum.photos/201/200",
            "Free coffee at participating cafes.",
        ),
        reward(
            "r3",
            "Movie Ticket Voucher",
            150,
            "https://picsum.photos/202/200",
            "One standard ticket at MCL Cinemas.",
        ),
    ]
}

pub fn events() -> Vec<EventItem> {
    vec![
        EventItem {
            id: "e1".to_string(),
            name: "Financial Freedom Workshop".to_string(),
            date: "Oct 25, 2024".to_string(),
            location: "K11 Atelier".to_string(),
            event_type: EventType::Workshop,
            spots_available: 12,
            is_registered: false,
            price: None,
        },
        EventItem {
            id: "e2".to_string(),
            name: "施傅教學 - 入門理財班".to_string(),
            date: "Nov 02, 2024".to_string(),
            location: "CTF Center".to_string(),
            event_type: EventType::Class,
            spots_available: 5,
            is_registered: false,
            price: Some("FREE".to_string()),
        },
        EventItem {
            id: "e3".to_string(),
            name: "Gaming Assets Investment".to_string(),
            date: "Nov 15, 2024".to_string(),
            location: "Virtual".to_string(),
            event_type: EventType::Featured,
            spots_available: 100,
            is_registered: false,
            price: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let reward_ids: HashSet<_> = rewards().into_iter().map(|r| r.id).collect();
        assert_eq!(reward_ids.len(), 3);
        let event_ids: HashSet<_> = events().into_iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), 3);
    }

    #[test]
    fn reward_costs_are_positive() {
        assert!(rewards().iter().all(|r| r.cost > 0));
    }
}
