use crate::ui::mvi::Reducer;

use super::intent::NotificationIntent;
use super::state::NotificationState;

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Show { id, message, kind } => {
                NotificationState::Visible { id, message, kind }
            }
            NotificationIntent::Expire { id } => match state {
                NotificationState::Visible { id: current, .. } if current == id => {
                    NotificationState::Hidden
                }
                // Stale expiry from a superseded banner
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notification::NotificationKind;

    fn show(id: u64, message: &str, kind: NotificationKind) -> NotificationIntent {
        NotificationIntent::Show {
            id,
            message: message.to_string(),
            kind,
        }
    }

    #[test]
    fn show_overwrites_previous() {
        let state = NotificationReducer::reduce(
            NotificationState::Hidden,
            show(1, "first", NotificationKind::Success),
        );
        let state = NotificationReducer::reduce(state, show(2, "second", NotificationKind::Error));
        assert_eq!(state.message(), Some("second"));
        assert_eq!(state.kind(), Some(NotificationKind::Error));
    }

    #[test]
    fn matching_expire_hides() {
        let state = NotificationReducer::reduce(
            NotificationState::Hidden,
            show(7, "hello", NotificationKind::Success),
        );
        let state = NotificationReducer::reduce(state, NotificationIntent::Expire { id: 7 });
        assert!(!state.is_visible());
    }

    #[test]
    fn stale_expire_is_ignored() {
        let state = NotificationReducer::reduce(
            NotificationState::Hidden,
            show(2, "newer", NotificationKind::Success),
        );
        let state = NotificationReducer::reduce(state, NotificationIntent::Expire { id: 1 });
        assert_eq!(state.message(), Some("newer"));
    }

    #[test]
    fn expire_when_hidden_stays_hidden() {
        let state =
            NotificationReducer::reduce(NotificationState::Hidden, NotificationIntent::Expire { id: 3 });
        assert_eq!(state, NotificationState::Hidden);
    }
}
