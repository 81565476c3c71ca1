//! The application store
//!
//! Owns the single live [`AppState`] and performs the two side effects
//! coupled to every state transition: whole-state persist-through and the
//! theme projection. Construct one instance at process start and pass it
//! explicitly to every consumer — there is no ambient global, so tests can
//! build isolated stores.

use tracing::{debug, error, info};

use crate::cms::action::Action;
use crate::cms::entity::AppState;
use crate::cms::ports::{StateStore, ThemeSink};
use crate::cms::reducer::{reduce, Reduction};
use crate::cms::seed::seed_state;
use crate::cms::theme::Theme;

/// The owning handle for all mutable site data.
///
/// Generic over any [`StateStore`] implementation; the compiler
/// monomorphizes per adapter, so there is no dispatch cost on the hot
/// `state()` read path.
pub struct AppStore<S> {
    store: S,
    state: AppState,
    theme: Theme,
    sink: Option<Box<dyn ThemeSink>>,
}

impl<S> AppStore<S>
where
    S: StateStore,
{
    /// Open the store: read the persisted state, or fall back to the seed
    /// dataset when nothing usable is persisted.
    ///
    /// Never fails — a missing or unparseable document is not an error at
    /// startup.
    pub fn open(store: S) -> Self {
        let state = store.load().unwrap_or_else(|| {
            info!("no usable persisted state; starting from seed data");
            seed_state()
        });
        let theme = Theme::from_config(&state.config);

        Self {
            store,
            state,
            theme,
            sink: None,
        }
    }

    /// Attach a theme observer. It is applied immediately with the current
    /// projection, then again on every actual change.
    pub fn with_theme_sink(mut self, mut sink: impl ThemeSink + 'static) -> Self {
        sink.apply(&self.theme);
        self.sink = Some(Box::new(sink));
        self
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The current theme projection.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Dispatch one action: reduce, replace the live state, persist the
    /// whole state, refresh the theme projection.
    ///
    /// Returns whether the action found its target (`false` only for
    /// update/delete actions whose id matched nothing — the deliberate
    /// no-op policy, surfaced so callers can report it).
    ///
    /// A persistence failure is logged and swallowed: the in-memory state
    /// remains authoritative for the rest of the session.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let Reduction { state, applied } = reduce(self.state.clone(), action);
        self.state = state;

        if let Err(err) = self.store.save(&self.state) {
            error!(error = %err, "failed to persist state; continuing with in-memory state");
        }

        self.refresh_theme();
        applied
    }

    fn refresh_theme(&mut self) {
        let next = Theme::from_config(&self.state.config);
        if next == self.theme {
            return;
        }

        debug!(primary = %next.primary, secondary = %next.secondary, "theme projection changed");
        self.theme = next;
        if let Some(sink) = self.sink.as_mut() {
            sink.apply(&self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::entity::{Lead, LeadStatus};
    use crate::cms::error::StoreError;
    use crate::cms::patch::SiteConfigPatch;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory stand-in for the client-local key-value store. Holds the
    /// serialized document so load() exercises the same parse path as a
    /// real adapter.
    #[derive(Clone, Default)]
    struct MemoryStateStore {
        document: Rc<RefCell<Option<String>>>,
    }

    impl MemoryStateStore {
        fn with_document(raw: &str) -> Self {
            Self {
                document: Rc::new(RefCell::new(Some(raw.to_string()))),
            }
        }
    }

    impl StateStore for MemoryStateStore {
        fn load(&self) -> Option<AppState> {
            let document = self.document.borrow();
            let raw = document.as_deref()?;
            serde_json::from_str(raw).ok()
        }

        fn save(&self, state: &AppState) -> Result<(), StoreError> {
            let json = serde_json::to_string(state)
                .map_err(|e| StoreError::serialization(e.to_string()))?;
            *self.document.borrow_mut() = Some(json);
            Ok(())
        }
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn load(&self) -> Option<AppState> {
            None
        }

        fn save(&self, _state: &AppState) -> Result<(), StoreError> {
            Err(StoreError::write_failure("quota exceeded"))
        }
    }

    /// Records every projection it receives.
    #[derive(Clone, Default)]
    struct RecordingSink {
        seen: Rc<RefCell<Vec<Theme>>>,
    }

    impl ThemeSink for RecordingSink {
        fn apply(&mut self, theme: &Theme) {
            self.seen.borrow_mut().push(theme.clone());
        }
    }

    fn jane() -> Lead {
        Lead {
            id: "99".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555".to_string(),
            company: "Acme".to_string(),
            message: "hi".to_string(),
            service_interest: "SEO".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_open_with_empty_store_uses_seed() {
        let store = AppStore::open(MemoryStateStore::default());
        assert_eq!(store.state(), &seed_state());
    }

    #[test]
    fn test_open_with_corrupt_document_falls_back_to_seed() {
        let backing = MemoryStateStore::with_document("{not json at all");
        let store = AppStore::open(backing);
        assert_eq!(store.state(), &seed_state());
    }

    #[test]
    fn test_dispatch_persists_whole_state() {
        let backing = MemoryStateStore::default();
        let mut store = AppStore::open(backing.clone());

        store.dispatch(Action::AddLead(jane()));

        // A second store opened on the same backing sees the full new state
        let reopened = AppStore::open(backing);
        assert_eq!(reopened.state(), store.state());
        assert_eq!(reopened.state().leads[0].id, "99");
    }

    #[test]
    fn test_round_trip_after_action_sequence() {
        let backing = MemoryStateStore::default();
        let mut store = AppStore::open(backing.clone());

        store.dispatch(Action::AddLead(jane()));
        store.dispatch(Action::UpdateLeadStatus {
            id: "1".to_string(),
            status: LeadStatus::Contacted,
        });
        store.dispatch(Action::DeletePost("2".to_string()));
        store.dispatch(Action::UpdateConfig(
            SiteConfigPatch::new().primary_color("#10b981"),
        ));

        let reopened = AppStore::open(backing);
        assert_eq!(reopened.state(), store.state());
    }

    #[test]
    fn test_dispatch_reports_missing_id_as_not_applied() {
        let mut store = AppStore::open(MemoryStateStore::default());

        let applied = store.dispatch(Action::DeletePost("no-such-post".to_string()));

        assert!(!applied);
        assert_eq!(store.state(), &seed_state());
    }

    #[test]
    fn test_persistence_failure_keeps_in_memory_state() {
        let mut store = AppStore::open(BrokenStore);

        let applied = store.dispatch(Action::AddLead(jane()));

        assert!(applied);
        assert_eq!(store.state().leads.len(), 2);
        assert_eq!(store.state().leads[0].id, "99");
    }

    #[test]
    fn test_sink_receives_initial_projection() {
        let sink = RecordingSink::default();
        let _store = AppStore::open(MemoryStateStore::default()).with_theme_sink(sink.clone());

        let seen = sink.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].primary, "#2563eb");
    }

    #[test]
    fn test_sink_notified_only_on_color_change() {
        let sink = RecordingSink::default();
        let mut store = AppStore::open(MemoryStateStore::default()).with_theme_sink(sink.clone());

        // Unrelated dispatches do not touch the projection
        store.dispatch(Action::AddLead(jane()));
        store.dispatch(Action::UpdateConfig(SiteConfigPatch::new().name("X")));
        assert_eq!(sink.seen.borrow().len(), 1);

        store.dispatch(Action::UpdateConfig(
            SiteConfigPatch::new().primary_color("#10b981"),
        ));
        assert_eq!(sink.seen.borrow().len(), 2);
        assert_eq!(sink.seen.borrow()[1].primary, "#10b981");

        // Re-applying identical colors is a no-op in effect
        store.dispatch(Action::UpdateConfig(
            SiteConfigPatch::new().primary_color("#10b981"),
        ));
        assert_eq!(sink.seen.borrow().len(), 2);
    }

    #[test]
    fn test_theme_accessor_tracks_config() {
        let mut store = AppStore::open(MemoryStateStore::default());
        assert_eq!(store.theme().secondary, "#0f172a");

        store.dispatch(Action::UpdateConfig(
            SiteConfigPatch::new().secondary_color("#1e293b"),
        ));
        assert_eq!(store.theme().secondary, "#1e293b");
    }
}
