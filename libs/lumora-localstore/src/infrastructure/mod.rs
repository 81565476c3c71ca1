//! Infrastructure implementations of domain ports

mod file_store;

pub use file_store::{default_state_path, FileStateStore, STATE_FILE};
