use crate::{AppState, Effect, LoadState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // Only meaningful once, straight after construction.
            if *state.load() != LoadState::Idle {
                return (state, Vec::new());
            }
            start_fetch(&mut state)
        }
        Msg::PreviousClicked => {
            // Cursor floor: page 1 is the first page, silently refuse below it.
            if state.page() <= 1 {
                Vec::new()
            } else {
                let page = state.page() - 1;
                state.set_page(page);
                start_fetch(&mut state)
            }
        }
        Msg::NextClicked => {
            // End of data is only ever learned reactively: advance
            // optimistically unless the last loaded page was empty.
            if state.next_allowed() {
                let page = state.page() + 1;
                state.set_page(page);
                start_fetch(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::FilterChanged(key) => {
            state.set_filter_key(key);
            Vec::new()
        }
        Msg::PageFetched { request_id, result } => {
            if state.accepts_completion(request_id) {
                match result {
                    Ok(items) => state.apply_page(items),
                    Err(message) => state.apply_failure(message),
                }
            }
            // A completion for a superseded request is dropped untouched.
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_fetch(state: &mut AppState) -> Vec<Effect> {
    let request_id = state.begin_fetch();
    vec![Effect::FetchPage {
        request_id,
        page: state.page(),
    }]
}
