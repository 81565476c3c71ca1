//! Post editor workflow
//!
//! This service carries the editor-side rules around drafting posts:
//! draft skeletons, save-time slug derivation, and the generation flow.
//! On a failed generation the existing draft is left untouched and the
//! error surfaces to the caller for a user-visible notice.

use tracing::warn;

use crate::cms::{slugify, BlogPost, PostStatus};
use crate::content::error::EditorError;
use crate::content::ports::ContentGenerator;
use chrono::NaiveDate;

/// Tone used when the editor does not ask for one.
pub const DEFAULT_TONE: &str = "professional";

/// Stock tagline used whenever generation is unavailable.
pub const FALLBACK_TAGLINE: &str = "Your Partner in Digital Growth";

/// Excerpts are the first 150 characters of the content.
const EXCERPT_LEN: usize = 150;

/// A fresh draft skeleton with caller-supplied id and date.
///
/// New drafts start unpublished in the "General" category with a
/// placeholder image keyed by the id.
pub fn new_draft(id: impl Into<String>, date: NaiveDate) -> BlogPost {
    let id = id.into();
    let image_url = format!("https://picsum.photos/800/400?random={id}");

    BlogPost {
        id,
        title: String::new(),
        slug: String::new(),
        excerpt: String::new(),
        content: String::new(),
        author: String::new(),
        date,
        category: "General".to_string(),
        image_url,
        status: PostStatus::Draft,
    }
}

/// Prepare a draft for saving: derive the slug from the title.
///
/// # Errors
///
/// Returns [`EditorError::EmptyTitle`] when the title is empty — a post
/// without a title has no slug and is never dispatched.
pub fn finalize(mut post: BlogPost) -> Result<BlogPost, EditorError> {
    if post.title.trim().is_empty() {
        return Err(EditorError::EmptyTitle);
    }

    post.slug = slugify(&post.title);
    Ok(post)
}

/// Editor workflow over any [`ContentGenerator`] implementation.
pub struct EditorService<G> {
    generator: G,
}

impl<G> EditorService<G>
where
    G: ContentGenerator,
{
    /// Create a new editor service backed by `generator`.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generate content for the draft, using its title as the topic.
    ///
    /// On success the draft's `content` is replaced and its `excerpt`
    /// re-derived. On any failure the draft is not modified at all.
    ///
    /// # Errors
    ///
    /// - [`EditorError::EmptyTitle`] when the draft has no title to use as
    ///   a topic
    /// - [`EditorError::Generation`] carrying the two distinguishable
    ///   generation failure kinds
    pub async fn write_draft(
        &self,
        post: &mut BlogPost,
        tone: Option<&str>,
    ) -> Result<(), EditorError> {
        if post.title.trim().is_empty() {
            return Err(EditorError::EmptyTitle);
        }

        let tone = tone.unwrap_or(DEFAULT_TONE);
        let content = self.generator.generate_post(&post.title, tone).await?;

        post.excerpt = compose_excerpt(&content);
        post.content = content;
        Ok(())
    }

    /// A tagline for the named business, falling back to the stock line on
    /// any generation failure.
    pub async fn tagline_or_default(&self, business_name: &str) -> String {
        match self.generator.tagline(business_name).await {
            Ok(tagline) => tagline.trim().to_string(),
            Err(err) => {
                warn!(error = %err, "tagline generation failed; using fallback");
                FALLBACK_TAGLINE.to_string()
            }
        }
    }
}

/// First [`EXCERPT_LEN`] characters of the content, ellipsized.
fn compose_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::error::ContentError;
    use std::future::Future;

    /// Hand-rolled generator double with a scripted outcome.
    enum Script {
        Text(String),
        MissingCredential,
        RemoteFailure,
    }

    struct StubGenerator {
        script: Script,
    }

    impl StubGenerator {
        fn text(value: &str) -> Self {
            Self {
                script: Script::Text(value.to_string()),
            }
        }

        fn outcome(&self) -> Result<String, ContentError> {
            match &self.script {
                Script::Text(value) => Ok(value.clone()),
                Script::MissingCredential => Err(ContentError::MissingCredential),
                Script::RemoteFailure => Err(ContentError::remote("upstream unavailable")),
            }
        }
    }

    impl ContentGenerator for StubGenerator {
        fn generate_post(
            &self,
            _topic: &str,
            _tone: &str,
        ) -> impl Future<Output = Result<String, ContentError>> + Send {
            let outcome = self.outcome();
            async move { outcome }
        }

        fn tagline(
            &self,
            _business_name: &str,
        ) -> impl Future<Output = Result<String, ContentError>> + Send {
            let outcome = self.outcome();
            async move { outcome }
        }
    }

    fn draft_with_title(title: &str) -> BlogPost {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let mut post = new_draft("1700000000000", date);
        post.title = title.to_string();
        post
    }

    #[tokio::test]
    async fn test_write_draft_fills_content_and_excerpt() {
        let editor = EditorService::new(StubGenerator::text("Generated prose about SEO."));
        let mut post = draft_with_title("5 SEO Trends to Watch in 2024");

        editor.write_draft(&mut post, None).await.unwrap();

        assert_eq!(post.content, "Generated prose about SEO.");
        assert_eq!(post.excerpt, "Generated prose about SEO....");
    }

    #[tokio::test]
    async fn test_write_draft_truncates_long_excerpt() {
        let long = "x".repeat(400);
        let editor = EditorService::new(StubGenerator::text(&long));
        let mut post = draft_with_title("Long One");

        editor.write_draft(&mut post, None).await.unwrap();

        assert_eq!(post.excerpt.chars().count(), 153);
        assert!(post.excerpt.ends_with("..."));
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_draft_untouched() {
        let editor = EditorService::new(StubGenerator {
            script: Script::RemoteFailure,
        });
        let mut post = draft_with_title("Doomed Topic");
        post.content = "previous draft content".to_string();
        post.excerpt = "previous excerpt".to_string();
        let before = post.clone();

        let err = editor.write_draft(&mut post, None).await.unwrap_err();

        assert!(matches!(
            err,
            EditorError::Generation(ContentError::Remote(_))
        ));
        assert_eq!(post, before);
    }

    #[tokio::test]
    async fn test_missing_credential_is_distinguishable() {
        let editor = EditorService::new(StubGenerator {
            script: Script::MissingCredential,
        });
        let mut post = draft_with_title("Topic");
        let before = post.clone();

        let err = editor.write_draft(&mut post, None).await.unwrap_err();

        assert!(matches!(
            err,
            EditorError::Generation(ContentError::MissingCredential)
        ));
        assert_eq!(post, before);
    }

    #[tokio::test]
    async fn test_write_draft_requires_a_title() {
        let editor = EditorService::new(StubGenerator::text("never called"));
        let mut post = draft_with_title("  ");

        let err = editor.write_draft(&mut post, None).await.unwrap_err();

        assert!(matches!(err, EditorError::EmptyTitle));
        assert!(post.content.is_empty());
    }

    #[tokio::test]
    async fn test_tagline_falls_back_on_failure() {
        let editor = EditorService::new(StubGenerator {
            script: Script::RemoteFailure,
        });

        let tagline = editor.tagline_or_default("RRDMS Agency").await;

        assert_eq!(tagline, FALLBACK_TAGLINE);
    }

    #[tokio::test]
    async fn test_tagline_trims_generated_text() {
        let editor = EditorService::new(StubGenerator::text("  Growth, Delivered.\n"));

        let tagline = editor.tagline_or_default("RRDMS Agency").await;

        assert_eq!(tagline, "Growth, Delivered.");
    }

    #[test]
    fn test_finalize_derives_slug() {
        let post = draft_with_title("The ROI of Social Media for B2B");

        let saved = finalize(post).unwrap();

        assert_eq!(saved.slug, "the-roi-of-social-media-for-b2b");
    }

    #[test]
    fn test_finalize_rejects_empty_title() {
        let post = draft_with_title("");

        assert!(matches!(finalize(post), Err(EditorError::EmptyTitle)));
    }

    #[test]
    fn test_new_draft_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();

        let draft = new_draft("1700000000123", date);

        assert_eq!(draft.status, PostStatus::Draft);
        assert_eq!(draft.category, "General");
        assert!(draft.image_url.contains("1700000000123"));
        assert!(draft.title.is_empty());
    }
}
