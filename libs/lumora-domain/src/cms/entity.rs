//! Domain entities for the agency site
//!
//! This module defines the plain data records the CMS manages and the
//! [`AppState`] aggregate that owns them. Entities carry no behavior beyond
//! derived read access; every mutation goes through the reducer.
//!
//! Field names serialize in camelCase so the persisted JSON document keeps
//! the layout the site has always written (`primaryColor`, `serviceInterest`,
//! `caseStudies`, ...). Ids are plain strings supplied by the caller and are
//! compared with exact string equality.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typeface family used by the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Sans,
    Serif,
    Mono,
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
        };
        write!(f, "{name}")
    }
}

/// Social profile URLs shown in the site footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

/// Site-wide configuration
///
/// Exactly one instance lives in each [`AppState`]. It is mutated only by
/// full or partial replacement through `Action::UpdateConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Hex color string, e.g. "#2563eb"
    pub primary_color: String,
    /// Hex color string, e.g. "#0f172a"
    pub secondary_color: String,
    pub font: Font,
    pub socials: SocialLinks,
}

/// A service the agency offers
///
/// Services are replace-only: there is no create or delete action for them.
/// `icon_name` is a symbolic reference resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub icon_name: String,
    pub features: Vec<String>,
}

/// Publication state of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Published => "published",
            Self::Draft => "draft",
        };
        write!(f, "{name}")
    }
}

/// A blog post
///
/// `slug` is derived from the title at save time and is not re-validated
/// for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
    pub image_url: String,
    pub status: PostStatus,
}

/// One headline metric of a case study, e.g. ("Traffic Increase", "+150%")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyResult {
    pub label: String,
    pub value: String,
}

/// A client case study
///
/// Read-only in this core: no action mutates case studies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<CaseStudyResult>,
    pub image_url: String,
}

/// Pipeline state of a contact lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Closed,
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Closed => "closed",
        };
        write!(f, "{name}")
    }
}

/// A contact-form submission
///
/// Leads are create and status-update only; there is no delete action.
/// The id is generated by the submitting layer from the submission
/// timestamp (see [`crate::cms::ids::timestamp_id`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub service_interest: String,
    pub date: NaiveDate,
    pub status: LeadStatus,
}

/// The aggregate root holding all mutable site data
///
/// Exactly one live instance exists, owned by the application store. It is
/// replaced (never mutated in place) on every dispatched action and always
/// persisted as one atomic JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub config: SiteConfig,
    pub services: Vec<Service>,
    pub posts: Vec<BlogPost>,
    pub case_studies: Vec<CaseStudy>,
    pub leads: Vec<Lead>,
}

impl AppState {
    /// Posts visible on the public blog listing, most recent first.
    pub fn published_posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
    }

    /// Look up a post by its URL slug.
    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Look up a post by id.
    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Look up a service by id.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Look up a lead by id.
    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// The most recent leads, as shown on the dashboard overview.
    pub fn recent_leads(&self, count: usize) -> &[Lead] {
        &self.leads[..self.leads.len().min(count)]
    }

    /// Total number of leads captured.
    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }

    /// Total number of posts, drafts included.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
