//! # Lumora Domain Layer
//!
//! This crate contains the pure business logic and domain models for the
//! Lumora agency-site CMS. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (SiteConfig, Service, BlogPost,
//!   CaseStudy, Lead) and the AppState aggregate that owns them
//! - **Ports**: Trait definitions for external dependencies (StateStore,
//!   ThemeSink, ContentGenerator)
//! - **Services**: The application store that wires reducer output to
//!   persistence and theme projection, and the post editor
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (filesystem,
//! HTTP, terminals, etc.). All external dependencies are expressed as traits
//! (ports) that are implemented by adapter layers.
//!
//! Every mutation of the site flows through a single entry point: a view
//! layer builds an [`Action`], the [`AppStore`] runs it through the pure
//! [`reduce`] function, the whole new state is written through the
//! persistence port, and the theme projection is refreshed. There is no
//! other way to change state.
//!
//! ## Example
//!
//! ```rust
//! use lumora_domain::cms::{Action, AppStore, Lead, LeadStatus};
//! use lumora_domain::ports::StateStore;
//!
//! // The store is generic over any StateStore implementation
//! fn example<S: StateStore>(mut store: AppStore<S>) {
//!     let lead = Lead {
//!         id: "99".to_string(),
//!         name: "Jane".to_string(),
//!         email: "jane@x.com".to_string(),
//!         phone: "555".to_string(),
//!         company: "Acme".to_string(),
//!         message: "hi".to_string(),
//!         service_interest: "SEO".to_string(),
//!         date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         status: LeadStatus::New,
//!     };
//!     let applied = store.dispatch(Action::AddLead(lead));
//!     assert!(applied);
//! }
//! ```

pub mod cms;
pub mod content;
pub mod ports;

// Re-export commonly used types
pub use cms::{Action, AppState, AppStore, Reduction};
pub use content::EditorService;
pub use ports::{ContentGenerator, StateStore, ThemeSink};
