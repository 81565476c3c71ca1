//! Content generation module
//!
//! The remote text-generation client lives outside this crate; the domain
//! only defines the contract it must satisfy and the editor workflow that
//! consumes it. A failed generation never touches existing draft content.

mod editor;
mod error;

pub mod ports;

pub use editor::{finalize, new_draft, EditorService, DEFAULT_TONE, FALLBACK_TAGLINE};
pub use error::{ContentError, EditorError, Result};
