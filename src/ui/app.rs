use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{AuthError, AuthGateway};
use crate::domain::{DomainStore, EventItem, EventPartition, RedeemError, RewardItem, User};
use crate::ui::events::AppEvent;
use crate::ui::login::{LoginField, LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notification::{
    ClearScheduler, NotificationIntent, NotificationKind, NotificationReducer, NotificationState,
};
use crate::ui::router::{RouterIntent, RouterReducer, RouterState, View};
use crate::ui::screens::learn::LESSONS;

pub const LOGIN_SUCCESS_MESSAGE: &str = "User Logged In Successfully";
pub const REGISTRATION_UNAVAILABLE_MESSAGE: &str = "Registration is not available yet";

/// Top-level view controller.
///
/// Owns every piece of shared state: the current view, the user and catalogs,
/// the login form and the notification banner. Screens read from it and call
/// back into it; none of them own shared state.
pub struct App {
    should_quit: bool,
    router: RouterState,
    login: LoginFormState,
    notification: NotificationState,
    clear_scheduler: ClearScheduler,
    store: DomainStore,
    /// Screen-local selection; reset whenever the view changes.
    reward_selection: usize,
    lesson_selection: usize,
    gateway: Arc<AuthGateway>,
    runtime: Handle,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(
        gateway: Arc<AuthGateway>,
        runtime: Handle,
        events: UnboundedSender<AppEvent>,
        notification_display: Duration,
    ) -> Self {
        Self {
            should_quit: false,
            router: RouterState::default(),
            login: LoginFormState::default(),
            notification: NotificationState::default(),
            clear_scheduler: ClearScheduler::new(runtime.clone(), notification_display),
            store: DomainStore::default(),
            reward_selection: 0,
            lesson_selection: 0,
            gateway,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            // Terminal backend picks up the new size on the next draw
            AppEvent::Resize(..) => {}
            AppEvent::LoginFinished(result) => self.on_login_finished(result),
            AppEvent::NotificationExpired { id } => {
                NotificationReducer::apply(&mut self.notification, NotificationIntent::Expire { id });
            }
        }
    }

    // -- Router ---------------------------------------------------------------

    pub fn view(&self) -> View {
        self.router.view
    }

    /// Unconditional transition; any view is reachable from any view.
    pub fn set_view(&mut self, view: View) {
        if view != self.router.view {
            self.reward_selection = 0;
            self.lesson_selection = 0;
        }
        tracing::debug!(from = ?self.router.view, to = ?view, "Navigate");
        RouterReducer::apply(&mut self.router, RouterIntent::Navigate(view));
    }

    pub fn shows_chrome(&self) -> bool {
        self.router.view.shows_chrome()
    }

    /// Returns to the Login screen. The installed token is kept.
    pub fn logout(&mut self) {
        self.set_view(View::Login);
    }

    /// Move `delta` tabs along the bottom navigation, wrapping around.
    pub fn cycle_tab(&mut self, delta: isize) {
        let len = View::TABS.len() as isize;
        let current = View::TABS
            .iter()
            .position(|view| *view == self.router.view)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.set_view(View::TABS[next]);
    }

    // -- Notifications --------------------------------------------------------

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    /// Show `message`, replacing any visible banner and restarting the countdown.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.clear_scheduler.schedule(&self.events);
        NotificationReducer::apply(
            &mut self.notification,
            NotificationIntent::Show {
                id,
                message: message.into(),
                kind,
            },
        );
    }

    pub fn notification_display(&self) -> Duration {
        self.clear_scheduler.display()
    }

    // -- Login ----------------------------------------------------------------

    pub fn login_form(&self) -> &LoginFormState {
        &self.login
    }

    pub fn update_login_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.dispatch_login(LoginIntent::UpdateField {
            field,
            value: value.into(),
        });
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        LoginReducer::apply(&mut self.login, intent);
    }

    /// Validate the form and start a login attempt.
    ///
    /// Returns false when validation fails locally; no request is made then.
    /// Attempts are not serialized: submitting again while one is in flight
    /// starts a second request.
    pub fn submit_login(&mut self) -> bool {
        let credentials = self.login.credentials();
        if let Err(err) = credentials.validate() {
            self.notify(err.user_message(), NotificationKind::Error);
            return false;
        }

        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = gateway.login(&credentials).await;
            let _ = events.send(AppEvent::LoginFinished(result));
        });
        true
    }

    pub fn on_login_finished(&mut self, result: Result<(), AuthError>) {
        match result {
            Ok(()) => {
                self.notify(LOGIN_SUCCESS_MESSAGE, NotificationKind::Success);
                self.set_view(View::Home);
            }
            Err(err) => {
                tracing::error!("Error occurred when logging in: {}", err);
                self.notify(err.user_message(), NotificationKind::Error);
            }
        }
    }

    pub fn gateway(&self) -> &Arc<AuthGateway> {
        &self.gateway
    }

    // -- Register -------------------------------------------------------------

    pub fn submit_registration(&mut self) {
        self.notify(REGISTRATION_UNAVAILABLE_MESSAGE, NotificationKind::Error);
    }

    // -- Domain ---------------------------------------------------------------

    pub fn user(&self) -> &User {
        &self.store.user
    }

    pub fn rewards(&self) -> &[RewardItem] {
        &self.store.rewards
    }

    pub fn events(&self) -> &[EventItem] {
        &self.store.events
    }

    pub fn event_partition(&self) -> EventPartition<'_> {
        self.store.event_partition()
    }

    /// Redeem reward `id`, notifying the outcome.
    pub fn redeem(&mut self, id: &str) -> Result<u32, RedeemError> {
        match self.store.redeem(id).map(|reward| reward.name.clone()) {
            Ok(name) => {
                let message = format!("Redeemed {}!", name);
                let balance = self.store.user.k_dollars;
                tracing::info!(reward = id, balance, "Reward redeemed");
                self.notify(message, NotificationKind::Success);
                Ok(balance)
            }
            Err(err) => {
                tracing::debug!("Redemption refused: {}", err);
                self.notify(err.user_message(), NotificationKind::Error);
                Err(err)
            }
        }
    }

    pub fn redeem_selected(&mut self) -> Option<Result<u32, RedeemError>> {
        let id = self.store.rewards.get(self.reward_selection)?.id.clone();
        Some(self.redeem(&id))
    }

    pub fn reward_selection(&self) -> usize {
        self.reward_selection
    }

    pub fn move_reward_selection(&mut self, delta: isize) {
        self.reward_selection = step(self.reward_selection, delta, self.store.rewards.len());
    }

    // -- Learn ----------------------------------------------------------------

    pub fn lesson_selection(&self) -> usize {
        self.lesson_selection
    }

    pub fn move_lesson_selection(&mut self, delta: isize) {
        self.lesson_selection = step(self.lesson_selection, delta, LESSONS.len());
    }

    pub fn open_selected_lesson(&mut self) {
        if let Some(lesson) = LESSONS.get(self.lesson_selection) {
            self.notify(format!("Started lesson: {}", lesson.title), NotificationKind::Success);
        }
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}
