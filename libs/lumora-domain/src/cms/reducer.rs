//! The pure state-transition function
//!
//! `reduce` maps (current state, action) to the next state. It is total: no
//! action can fail. An update or delete whose id matches nothing returns the
//! state unchanged — the caller sees that through [`Reduction::applied`]
//! rather than an error, because the view layer is expected to only dispatch
//! actions against ids it can see.

use crate::cms::action::Action;
use crate::cms::entity::AppState;

/// The outcome of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The next state. Replaces the previous state wholesale.
    pub state: AppState,
    /// Whether the action found its target. `false` only for update or
    /// delete actions whose id matched nothing.
    pub applied: bool,
}

impl Reduction {
    fn applied(state: AppState) -> Self {
        Self {
            state,
            applied: true,
        }
    }
}

/// Apply one action to the state, producing the next state.
///
/// Collection updates are O(n) scans producing a fresh sequence; new leads
/// and posts are prepended (most-recent-first), updates preserve position,
/// and deletes remove in place. Id matching is exact string equality.
pub fn reduce(state: AppState, action: Action) -> Reduction {
    let mut state = state;

    match action {
        Action::UpdateConfig(patch) => {
            patch.apply_to(&mut state.config);
            Reduction::applied(state)
        }
        Action::AddLead(lead) => {
            state.leads.insert(0, lead);
            Reduction::applied(state)
        }
        Action::UpdateLeadStatus { id, status } => {
            let mut applied = false;
            state.leads = state
                .leads
                .into_iter()
                .map(|mut lead| {
                    if lead.id == id {
                        lead.status = status;
                        applied = true;
                    }
                    lead
                })
                .collect();
            Reduction { state, applied }
        }
        Action::AddPost(post) => {
            state.posts.insert(0, post);
            Reduction::applied(state)
        }
        Action::UpdatePost(post) => {
            let mut applied = false;
            state.posts = state
                .posts
                .into_iter()
                .map(|existing| {
                    if existing.id == post.id {
                        applied = true;
                        post.clone()
                    } else {
                        existing
                    }
                })
                .collect();
            Reduction { state, applied }
        }
        Action::DeletePost(id) => {
            let before = state.posts.len();
            state.posts = state
                .posts
                .into_iter()
                .filter(|post| post.id != id)
                .collect();
            let applied = state.posts.len() != before;
            Reduction { state, applied }
        }
        Action::UpdateService(service) => {
            let mut applied = false;
            state.services = state
                .services
                .into_iter()
                .map(|existing| {
                    if existing.id == service.id {
                        applied = true;
                        service.clone()
                    } else {
                        existing
                    }
                })
                .collect();
            Reduction { state, applied }
        }
    }
}
