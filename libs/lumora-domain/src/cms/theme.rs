//! Theme projection
//!
//! Two named style variables are derived from the configured brand colors
//! and consumed by the rendering layer. The projection is deterministic:
//! recomputing it from identical input yields an equal value, which lets the
//! store skip notifying observers when nothing changed.

use crate::cms::entity::SiteConfig;

/// Style variable fed by `SiteConfig::primary_color`.
pub const PRIMARY_VAR: &str = "--primary";
/// Style variable fed by `SiteConfig::secondary_color`.
pub const SECONDARY_VAR: &str = "--secondary";

/// The derived theme: the two color values the rendering layer binds to
/// its style variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
}

impl Theme {
    /// Project the theme from the current site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            primary: config.primary_color.clone(),
            secondary: config.secondary_color.clone(),
        }
    }

    /// The (variable name, value) pairs in a fixed order.
    pub fn css_variables(&self) -> [(&'static str, &str); 2] {
        [
            (PRIMARY_VAR, self.primary.as_str()),
            (SECONDARY_VAR, self.secondary.as_str()),
        ]
    }
}
