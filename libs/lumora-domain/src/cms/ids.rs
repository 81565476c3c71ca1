//! Id generation for caller-created entities
//!
//! The core never generates ids itself; the submitting layer does, using the
//! submission timestamp. Two submissions inside the same millisecond collide
//! — a known, accepted edge case of this scheme.

use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond-precision id string derived from the current time.
///
/// Used by form and admin surfaces when creating leads and post drafts.
pub fn timestamp_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    millis.to_string()
}
