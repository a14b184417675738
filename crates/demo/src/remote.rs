//! Remote fetch state for the views
//!
//! Every view that talks to the catalog owns a [`RemoteState`] signal and a
//! generation counter. Completions belonging to a superseded request are
//! ignored rather than cancelled, so navigating or re-fetching before a slow
//! response lands can never clobber newer state.

use std::future::Future;

use leptos::{prelude::*, task};

use vitrine_app::catalog::CatalogError;

/// How long a success notice stays on screen before redirecting.
pub const REDIRECT_DELAY_MS: i32 = 2000;

/// Lifecycle of one remote fetch, as rendered by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState<T> {
    /// Request in flight.
    Loading,

    /// Request completed with data.
    Loaded(T),

    /// Request failed; the message is shown in the initiating view only.
    Failed(String),
}

/// Start a tracked fetch: bump the generation, enter `Loading`, and apply the
/// outcome only if no newer fetch has started since.
pub fn load_remote<T, Fut>(
    state: RwSignal<RemoteState<T>>,
    generation: RwSignal<u64>,
    request: Fut,
) where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, CatalogError>> + 'static,
{
    let run_id = generation.get_untracked().saturating_add(1);
    generation.set(run_id);
    state.set(RemoteState::Loading);

    task::spawn_local(async move {
        let outcome = request.await;

        if !is_current(generation, run_id) {
            return;
        }

        match outcome {
            Ok(value) => state.set(RemoteState::Loaded(value)),
            Err(error) => state.set(RemoteState::Failed(error.to_string())),
        }
    });
}

fn is_current(generation: RwSignal<u64>, run_id: u64) -> bool {
    generation.get_untracked() == run_id
}

/// Ask the user to confirm a destructive action.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
}

/// Ask the user to confirm a destructive action.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    true
}

#[cfg(target_arch = "wasm32")]
pub async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn wait_for_timeout(_delay_ms: i32) {
    task::tick().await;
}
