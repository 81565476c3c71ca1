//! CMS domain module
//!
//! This module contains the core business logic for the site state: the
//! entities, the action taxonomy, the pure reducer, the seed dataset, and
//! the application store that owns the single live [`AppState`].

mod action;
mod entity;
mod error;
mod patch;
mod reducer;
mod seed;
mod slug;
mod store;
mod theme;

pub mod ids;
pub mod ports;

pub use action::Action;
pub use entity::{
    AppState, BlogPost, CaseStudy, CaseStudyResult, Font, Lead, LeadStatus, PostStatus, Service,
    SiteConfig, SocialLinks,
};
pub use error::{Result, StoreError};
pub use patch::SiteConfigPatch;
pub use reducer::{reduce, Reduction};
pub use seed::{default_config, seed_state};
pub use slug::slugify;
pub use store::AppStore;
pub use theme::{Theme, PRIMARY_VAR, SECONDARY_VAR};
