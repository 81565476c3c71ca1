//! The action taxonomy
//!
//! Actions are the entire mutation API of the core: a view layer may read
//! the state and dispatch these seven actions — nothing else. Actions
//! serialize as `{"type": "...", "payload": ...}` tagged objects, the same
//! shape the site's admin surfaces have always produced.

use serde::{Deserialize, Serialize};

use crate::cms::entity::{BlogPost, Lead, LeadStatus, Service};
use crate::cms::patch::SiteConfigPatch;

/// A tagged request to transform the application state.
///
/// Handled by [`reduce`](crate::cms::reduce); dispatched through
/// [`AppStore`](crate::cms::AppStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Shallow-merge the set fields of the patch into the site config.
    UpdateConfig(SiteConfigPatch),
    /// Prepend a new lead (caller supplies id, date, and status).
    AddLead(Lead),
    /// Replace the status of the lead with the given id.
    UpdateLeadStatus { id: String, status: LeadStatus },
    /// Prepend a new post (caller supplies id, slug, and date).
    AddPost(BlogPost),
    /// Replace the post with the matching id.
    UpdatePost(BlogPost),
    /// Remove the post with the given id.
    DeletePost(String),
    /// Replace the service with the matching id.
    UpdateService(Service),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_serialize_as_tagged_objects() {
        let action = Action::DeletePost("42".to_string());
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "DELETE_POST");
        assert_eq!(json["payload"], "42");
    }

    #[test]
    fn test_update_lead_status_payload_shape() {
        let action = Action::UpdateLeadStatus {
            id: "1".to_string(),
            status: LeadStatus::Closed,
        };
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "UPDATE_LEAD_STATUS");
        assert_eq!(json["payload"]["id"], "1");
        assert_eq!(json["payload"]["status"], "closed");
    }

    #[test]
    fn test_update_config_round_trips() {
        let action = Action::UpdateConfig(SiteConfigPatch::new().primary_color("#abcdef"));
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(back, action);
    }
}
