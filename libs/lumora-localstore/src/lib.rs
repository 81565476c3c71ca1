//! # Lumora Local Store
//!
//! Local-file implementation of the domain's [`StateStore`] port. The whole
//! application state lives in one JSON document at a fixed path — the
//! client-local equivalent of a single key in a key-value store.
//!
//! The adapter tolerates a missing or unparseable document on load (the
//! domain falls back to its seed data) and converts every filesystem error
//! on save into the domain's [`StoreError`].
//!
//! [`StateStore`]: lumora_domain::ports::StateStore
//! [`StoreError`]: lumora_domain::cms::StoreError

pub mod infrastructure;

pub use infrastructure::{default_state_path, FileStateStore, STATE_FILE};
