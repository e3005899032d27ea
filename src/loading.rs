//! Loading-overlay state, kept free of clocks and signals.
//!
//! Timers are modelled as tickets: a state machine hands out a [`HoldTicket`]
//! with a delay, the caller arms whatever timer it has and hands the ticket
//! back through `release` when it fires. Any newer ticket makes older ones
//! stale, which is how a pending timeout gets cleared.

use std::time::Duration;

use serde_json::Value;

/// Trailing hold after a navigation finishes
pub const PAGE_LOADING_HOLD: Duration = Duration::from_millis(500);

/// How long the initial-load overlay covers the first mount
pub const INITIAL_LOAD_WINDOW: Duration = Duration::from_secs(1);

/// Router transition state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Idle,
    Loading,
    Submitting { form_id: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldTicket {
    generation: u64,
    pub delay: Duration,
}

/// True while the router is transitioning, then for [`PAGE_LOADING_HOLD`] afterwards
#[derive(Debug, Default)]
pub struct PageLoadingState {
    loading: bool,
    generation: u64,
    last: NavigationState,
}

impl PageLoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Feed a router state. Only changes count; repeating the current state is a no-op.
    pub fn on_navigation(&mut self, nav: &NavigationState) -> Option<HoldTicket> {
        if *nav == self.last {
            return None;
        }
        self.last = nav.clone();
        self.generation += 1;

        if *nav == NavigationState::Loading {
            self.loading = true;
            return None;
        }

        Some(HoldTicket {
            generation: self.generation,
            delay: PAGE_LOADING_HOLD,
        })
    }

    /// A timer fired. Stale tickets are ignored.
    pub fn release(&mut self, ticket: HoldTicket) {
        if ticket.generation == self.generation {
            self.loading = false;
        }
    }
}

/// True from construction until its single ticket is released, then never again
#[derive(Debug)]
pub struct InitialLoadState {
    loading: bool,
}

impl InitialLoadState {
    pub fn new() -> (Self, HoldTicket) {
        (
            Self { loading: true },
            HoldTicket {
                generation: 0,
                delay: INITIAL_LOAD_WINDOW,
            },
        )
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn release(&mut self, _ticket: HoldTicket) {
        self.loading = false;
    }
}

/// Pass-through of "router is loading", no hold
pub fn is_data_loading(nav: &NavigationState) -> bool {
    *nav == NavigationState::Loading
}

/// True while a form is submitting; with a form id, only for that form
pub fn is_action_loading(nav: &NavigationState, form_id: Option<&str>) -> bool {
    match nav {
        NavigationState::Submitting { form_id: submitting } => {
            form_id.is_none() || submitting.as_deref() == form_id
        }
        _ => false,
    }
}

/// Deferred data is pending while route data is missing or lacks `key`
pub fn is_deferred_pending(data: Option<&Value>, key: &str) -> bool {
    match data.and_then(Value::as_object) {
        Some(map) => !map.contains_key(key),
        None => true,
    }
}
