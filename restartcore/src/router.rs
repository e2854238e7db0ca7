//! Onboarding / Home screen selection
//!
//! The active screen follows the persisted `"onboarding"` flag. The flag is
//! read once when the router is built and afterwards changes only through
//! [`ScreenRouter::complete_onboarding`] and [`ScreenRouter::restart`].
//! `true` (also the first-run default) means the onboarding screen is showing.

use crate::storage::PersistedFlagStore;

/// Persisted key for the onboarding flag.
pub const ONBOARDING_KEY: &str = "onboarding";
/// Value used before the flag was ever written: show onboarding.
pub const ONBOARDING_DEFAULT: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Home,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Home => "home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Screen)>;

pub struct ScreenRouter {
    store: PersistedFlagStore,
    show_onboarding: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ScreenRouter {
    pub fn new(store: PersistedFlagStore) -> Self {
        let show_onboarding = store.read(ONBOARDING_KEY, ONBOARDING_DEFAULT);
        Self {
            store,
            show_onboarding,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_screen(&self) -> Screen {
        if self.show_onboarding {
            Screen::Onboarding
        } else {
            Screen::Home
        }
    }

    pub fn complete_onboarding(&mut self) {
        self.set_flag(false);
    }

    /// The Home screen's "Restart" action.
    pub fn restart(&mut self) {
        self.set_flag(true);
    }

    /// Call `listener` with the new screen after every transition.
    pub fn subscribe(&mut self, listener: impl FnMut(Screen) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// True once a flag write failed; the choice only lasts this session.
    pub fn is_storage_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    fn set_flag(&mut self, show_onboarding: bool) {
        self.store.write(ONBOARDING_KEY, show_onboarding);
        self.show_onboarding = show_onboarding;
        self.notify();
    }

    fn notify(&mut self) {
        let screen = self.current_screen();
        log::info!("screen -> {}", screen.title());
        for (_, listener) in &mut self.listeners {
            listener(screen);
        }
    }
}
