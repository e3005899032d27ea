//! Signal wrappers around the loading state machines in [`crate::loading`].

use leptos::prelude::*;
use serde_json::Value;

use crate::loading::{
    InitialLoadState, NavigationState, PageLoadingState, is_action_loading, is_data_loading,
    is_deferred_pending,
};

/// Router transition state shared with every page through context
#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub state: Signal<NavigationState>,
    /// Id of the form currently being submitted
    pub submitting: RwSignal<Option<String>>,
}

pub fn navigation_state(is_routing: bool, submitting: Option<String>) -> NavigationState {
    if is_routing {
        NavigationState::Loading
    } else if let Some(form_id) = submitting {
        NavigationState::Submitting {
            form_id: Some(form_id),
        }
    } else {
        NavigationState::Idle
    }
}

/// Build the navigation context from the router's `is_routing` flag and put it in scope
pub fn provide_navigation(is_routing: ReadSignal<bool>) -> NavigationContext {
    let submitting = RwSignal::new(None::<String>);
    let ctx = NavigationContext {
        state: Signal::derive(move || navigation_state(is_routing.get(), submitting.get())),
        submitting,
    };
    provide_context(ctx);
    ctx
}

pub fn use_navigation() -> NavigationContext {
    expect_context::<NavigationContext>()
}

/// True while the router transitions and for a short hold afterwards
pub fn use_page_loading(nav: Signal<NavigationState>) -> Signal<bool> {
    let machine = StoredValue::new(PageLoadingState::new());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        let state = nav.get();
        let mut ticket = None;
        machine.update_value(|m| ticket = m.on_navigation(&state));
        loading.set(machine.with_value(|m| m.is_loading()));

        if let Some(ticket) = ticket {
            set_timeout(
                move || {
                    machine.update_value(|m| m.release(ticket));
                    loading.set(machine.with_value(|m| m.is_loading()));
                },
                ticket.delay,
            );
        }
    });

    loading.into()
}

/// True for the first second after mount
pub fn use_initial_loading() -> Signal<bool> {
    let (state, ticket) = InitialLoadState::new();
    let machine = StoredValue::new(state);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        set_timeout(
            move || {
                machine.update_value(|m| m.release(ticket));
                loading.set(machine.with_value(|m| m.is_loading()));
            },
            ticket.delay,
        );
    });

    loading.into()
}

pub fn use_data_loading(nav: Signal<NavigationState>) -> Signal<bool> {
    Signal::derive(move || is_data_loading(&nav.get()))
}

pub fn use_action_loading(nav: Signal<NavigationState>, form_id: Option<&'static str>) -> Signal<bool> {
    Signal::derive(move || is_action_loading(&nav.get(), form_id))
}

pub fn use_deferred_pending(data: Signal<Option<Value>>, key: &'static str) -> Signal<bool> {
    Signal::derive(move || data.with(|d| is_deferred_pending(d.as_ref(), key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_prefers_routing() {
        assert_eq!(
            navigation_state(true, Some("download".to_string())),
            NavigationState::Loading
        );
        assert_eq!(
            navigation_state(false, Some("download".to_string())),
            NavigationState::Submitting {
                form_id: Some("download".to_string())
            }
        );
        assert_eq!(navigation_state(false, None), NavigationState::Idle);
    }
}
