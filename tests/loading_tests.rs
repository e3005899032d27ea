mod common;

#[cfg(test)]
pub mod loading_tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tokio::task::JoinHandle;
    use tokio::time::{Instant, advance, sleep_until};

    use cs_courses::loading::*;

    /// Arm a timer for `ticket` the way the browser hook does with `set_timeout`
    fn arm(state: &Arc<Mutex<PageLoadingState>>, ticket: HoldTicket) -> JoinHandle<()> {
        let deadline = Instant::now() + ticket.delay;
        let state = state.clone();
        tokio::spawn(async move {
            sleep_until(deadline).await;
            state.lock().unwrap().release(ticket);
        })
    }

    fn navigate(state: &Arc<Mutex<PageLoadingState>>, nav: NavigationState) -> Option<HoldTicket> {
        state.lock().unwrap().on_navigation(&nav)
    }

    fn is_loading(state: &Arc<Mutex<PageLoadingState>>) -> bool {
        state.lock().unwrap().is_loading()
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlay_holds_for_500ms_after_fast_transition() {
        let state = Arc::new(Mutex::new(PageLoadingState::new()));

        assert_eq!(navigate(&state, NavigationState::Loading), None);
        advance(Duration::from_millis(10)).await;
        let timer = arm(&state, navigate(&state, NavigationState::Idle).unwrap());

        advance(Duration::from_millis(499)).await;
        assert!(is_loading(&state));

        advance(Duration::from_millis(1)).await;
        timer.await.unwrap();
        assert!(!is_loading(&state));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_transition_during_hold_keeps_overlay() {
        let state = Arc::new(Mutex::new(PageLoadingState::new()));

        navigate(&state, NavigationState::Loading);
        let first = arm(&state, navigate(&state, NavigationState::Idle).unwrap());

        advance(Duration::from_millis(200)).await;
        navigate(&state, NavigationState::Loading);

        advance(Duration::from_millis(300)).await;
        first.await.unwrap();
        assert!(is_loading(&state));

        let second = arm(&state, navigate(&state, NavigationState::Idle).unwrap());
        advance(Duration::from_millis(500)).await;
        second.await.unwrap();
        assert!(!is_loading(&state));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_also_gets_the_hold() {
        let state = Arc::new(Mutex::new(PageLoadingState::new()));

        navigate(&state, NavigationState::Loading);
        let ticket = navigate(
            &state,
            NavigationState::Submitting {
                form_id: Some("download".to_string()),
            },
        )
        .unwrap();
        assert_eq!(ticket.delay, PAGE_LOADING_HOLD);

        let timer = arm(&state, ticket);
        advance(PAGE_LOADING_HOLD).await;
        timer.await.unwrap();
        assert!(!is_loading(&state));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_load_clears_after_one_second_for_good() {
        let (state, ticket) = InitialLoadState::new();
        let state = Arc::new(Mutex::new(state));
        assert!(state.lock().unwrap().is_loading());

        let deadline = Instant::now() + ticket.delay;
        let timer = {
            let state = state.clone();
            tokio::spawn(async move {
                sleep_until(deadline).await;
                state.lock().unwrap().release(ticket);
            })
        };

        advance(Duration::from_millis(999)).await;
        assert!(state.lock().unwrap().is_loading());

        advance(Duration::from_millis(1)).await;
        timer.await.unwrap();
        assert!(!state.lock().unwrap().is_loading());

        advance(Duration::from_secs(60)).await;
        assert!(!state.lock().unwrap().is_loading());
    }
}
