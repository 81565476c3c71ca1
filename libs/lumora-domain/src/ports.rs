//! Ports (trait definitions) for external dependencies
//!
//! This module re-exports the contracts (ports) that external adapters must
//! implement. Following hexagonal architecture, the domain defines what it
//! needs, and the infrastructure provides implementations.

pub use crate::cms::ports::{StateStore, ThemeSink};
pub use crate::content::ports::ContentGenerator;
