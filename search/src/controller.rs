//! Debounce, lookup, and dropdown state for instant search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::types::ProductSummary;
use tokio::time;

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::subscription::{EventHub, PointerDown, Subscription};
use crate::task::LookupTask;

/// What the dropdown should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownContent {
    /// Focused with no stabilized query: render nothing, keep the box open.
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The latest stabilized query produced these matches.
    Results(Vec<ProductSummary>),
    /// The latest stabilized query produced nothing (or its lookup failed).
    Empty { term: String },
}

#[derive(Default)]
struct State {
    raw: String,
    /// Last query that survived the debounce window and was looked up.
    debounced: Option<String>,
    results: Vec<ProductSummary>,
    loading: bool,
    focused: bool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Debounced, cancellable instant search.
///
/// All methods take `&self`; state lives behind a mutex so host callbacks
/// (such as an outside-click subscription) can share the controller through
/// an `Arc`. Requires a Tokio runtime: `on_input` spawns the debounce/lookup
/// task.
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    config: SearchConfig,
    /// Latest-wins token: bumped on every keystroke. A task only writes
    /// state while it still holds the current generation.
    generation: Arc<AtomicU64>,
    state: Arc<Mutex<State>>,
    pending: Mutex<Option<LookupTask>>,
    notify: Arc<dyn Fn() + Send + Sync>,
}

/// Construction.
impl SearchController {
    /// The `notify` callback is invoked whenever observable state changes,
    /// typically to trigger a repaint.
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        config: SearchConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            backend,
            config,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(Mutex::new(State::default())),
            pending: Mutex::new(None),
            notify,
        }
    }
}

/// Input handling.
impl SearchController {
    /// Records a keystroke and restarts the debounce window.
    ///
    /// Any previously scheduled or in-flight lookup is invalidated: its task
    /// is aborted, and the generation bump makes a late completion a no-op.
    pub fn on_input(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(task) = lock(&self.pending).take() {
            task.abort();
        }

        let too_short = text.trim().chars().count() < self.config.min_query_len;
        {
            let mut state = lock(&self.state);
            state.raw = text.to_string();
            if too_short {
                state.debounced = None;
                state.results.clear();
                state.loading = false;
            }
        }
        (self.notify)();

        if too_short {
            return;
        }

        // Anchor the debounce window to the keystroke itself, not to when
        // the spawned task is first polled.
        let deadline = time::Instant::now() + self.config.debounce;
        let task = LookupTask::spawn(lookup(
            self.backend.clone(),
            self.config.clone(),
            self.generation.clone(),
            self.state.clone(),
            self.notify.clone(),
            generation,
            text.to_string(),
            deadline,
        ));
        *lock(&self.pending) = Some(task);
    }
}

/// Debounce-then-lookup body for one keystroke's scheduled task.
async fn lookup(
    backend: Arc<dyn SearchBackend>,
    config: SearchConfig,
    current: Arc<AtomicU64>,
    state: Arc<Mutex<State>>,
    notify: Arc<dyn Fn() + Send + Sync>,
    generation: u64,
    term: String,
    deadline: time::Instant,
) {
    time::sleep_until(deadline).await;
    if current.load(Ordering::SeqCst) != generation {
        // Superseded while waiting out the quiescence window.
        return;
    }

    {
        let mut state = lock(&state);
        state.loading = true;
        state.debounced = Some(term.clone());
    }
    notify();

    let outcome = backend.search(&term).await;

    // A newer keystroke may have arrived while the request was in flight;
    // its results own the dropdown now.
    if current.load(Ordering::SeqCst) != generation {
        return;
    }

    {
        let mut state = lock(&state);
        match outcome {
            Ok(mut results) => {
                results.truncate(config.result_limit);
                state.results = results;
            }
            Err(err) => {
                tracing::warn!(term = %term, error = %err, "search lookup failed");
                state.results.clear();
            }
        }
        state.loading = false;
    }
    notify();
}

/// Focus and dismissal.
impl SearchController {
    /// Input gained focus: open the dropdown.
    pub fn on_focus(&self) {
        lock(&self.state).focused = true;
        (self.notify)();
    }

    /// Document-level pointer-down. Presses outside the search container
    /// close the dropdown; presses inside leave it alone.
    pub fn on_pointer_down(&self, event: PointerDown) {
        if event.inside_search {
            return;
        }
        lock(&self.state).focused = false;
        (self.notify)();
    }

    /// Subscribes this controller to a host pointer-down hub. The returned
    /// guard detaches on drop, so a torn-down page takes the listener with
    /// it.
    pub fn attach_outside_dismiss(
        self: &Arc<Self>,
        hub: &EventHub<PointerDown>,
    ) -> Subscription<PointerDown> {
        let controller = Arc::downgrade(self);
        hub.subscribe(move |event: &PointerDown| {
            if let Some(controller) = controller.upgrade() {
                controller.on_pointer_down(*event);
            }
        })
    }
}

/// Submission.
impl SearchController {
    /// Form submit (enter): closes the dropdown and returns the full-search
    /// route for the raw, non-debounced text. Blank input submits nowhere.
    /// Independent of the debounce/lookup path.
    pub fn submit(&self) -> Option<String> {
        let route = {
            let mut state = lock(&self.state);
            if state.raw.trim().is_empty() {
                return None;
            }
            state.focused = false;
            format!("/search?q={}", urlencoding::encode(&state.raw))
        };
        (self.notify)();
        Some(route)
    }
}

/// Observation.
impl SearchController {
    /// Current dropdown rendering state; `None` while unfocused.
    pub fn dropdown(&self) -> Option<DropdownContent> {
        let state = lock(&self.state);
        if !state.focused {
            return None;
        }
        if state.loading {
            return Some(DropdownContent::Loading);
        }
        match &state.debounced {
            Some(term) if state.results.is_empty() => Some(DropdownContent::Empty {
                term: term.clone(),
            }),
            Some(_) => Some(DropdownContent::Results(state.results.clone())),
            None => Some(DropdownContent::Idle),
        }
    }

    pub fn results(&self) -> Vec<ProductSummary> {
        lock(&self.state).results.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn is_dropdown_open(&self) -> bool {
        lock(&self.state).focused
    }

    pub fn raw_query(&self) -> String {
        lock(&self.state).raw.clone()
    }

    /// The last query that survived the debounce window, if any.
    pub fn debounced_query(&self) -> Option<String> {
        lock(&self.state).debounced.clone()
    }
}

impl Drop for SearchController {
    /// Invalidates and cancels anything still scheduled; a dropped
    /// controller is never written to again.
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = lock(&self.pending).take() {
            task.abort();
        }
    }
}
