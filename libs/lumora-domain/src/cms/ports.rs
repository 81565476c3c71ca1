//! Ports for the state-management context
//!
//! Following hexagonal architecture, the domain defines what it needs and
//! adapters provide implementations. Both ports here are synchronous on
//! purpose: every dispatch runs to completion — reduce, persist, theme
//! refresh — before the next action can be issued, and the backing store is
//! a client-local document, not a network service.

use crate::cms::entity::AppState;
use crate::cms::error::StoreError;
use crate::cms::theme::Theme;

/// Port for the client-local state store
///
/// Implementations own a single fixed key/location and read or overwrite
/// the whole state document there. There is no partial persistence, no
/// versioning, and no migration: an incompatible document simply fails to
/// parse and is discarded.
pub trait StateStore {
    /// Read and parse the persisted state.
    ///
    /// Returns `None` when no document exists or the document cannot be
    /// parsed. Parse failures must not escape — the caller falls back to the
    /// seed state silently.
    fn load(&self) -> Option<AppState>;

    /// Overwrite the persisted state with `state`, replacing any prior
    /// value under the same key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when serialization or the underlying write
    /// fails. Callers must not let this corrupt or discard the live
    /// in-memory state.
    fn save(&self, state: &AppState) -> Result<(), StoreError>;
}

/// Observer for the derived theme projection
///
/// Invoked once when attached and afterwards only when the projected value
/// actually changes; recomputation from identical colors is a no-op in
/// effect.
pub trait ThemeSink {
    /// Receive the new projection.
    fn apply(&mut self, theme: &Theme);
}
