//! Port trait for the content generation client
//!
//! The concrete client (HTTP, credential handling, prompt construction) is
//! an adapter concern. The domain only requires a single-shot asynchronous
//! operation with two distinguishable failure kinds; there is no retry and
//! no timeout here — fire once, fail fast.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead
//! of `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::content::error::ContentError;

/// Port for generated marketing copy
pub trait ContentGenerator: Send + Sync {
    /// Generate blog post prose for `topic` in the requested `tone`.
    ///
    /// # Errors
    ///
    /// - [`ContentError::MissingCredential`] when no API credential is
    ///   configured
    /// - [`ContentError::Remote`] when the remote call fails
    fn generate_post(
        &self,
        topic: &str,
        tone: &str,
    ) -> impl Future<Output = Result<String, ContentError>> + Send;

    /// Generate a short marketing tagline for the named business.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`ContentGenerator::generate_post`]. Callers
    /// that need a tagline unconditionally fall back to a stock line on any
    /// failure.
    fn tagline(
        &self,
        business_name: &str,
    ) -> impl Future<Output = Result<String, ContentError>> + Send;
}
