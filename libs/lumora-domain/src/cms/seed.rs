//! The hardcoded seed dataset
//!
//! Used whenever no persisted state exists or the persisted document cannot
//! be parsed. The values are the agency's launch content: one sample lead,
//! four services, two published posts, and two case studies.

use chrono::NaiveDate;

use crate::cms::entity::{
    AppState, BlogPost, CaseStudy, CaseStudyResult, Font, Lead, LeadStatus, PostStatus, Service,
    SiteConfig, SocialLinks,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals are known-valid dates
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The default site configuration.
pub fn default_config() -> SiteConfig {
    SiteConfig {
        name: "RRDMS Agency".to_string(),
        description: "Data-driven digital marketing solutions for modern businesses.".to_string(),
        email: "hello@rrdms.agency".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        address: "101 Market St, Suite 400, San Francisco, CA".to_string(),
        primary_color: "#2563eb".to_string(),
        secondary_color: "#0f172a".to_string(),
        font: Font::Sans,
        socials: SocialLinks {
            linkedin: "#".to_string(),
            twitter: "#".to_string(),
            facebook: "#".to_string(),
            instagram: "#".to_string(),
        },
    }
}

/// The complete default [`AppState`].
pub fn seed_state() -> AppState {
    AppState {
        config: default_config(),
        leads: vec![Lead {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@techstart.com".to_string(),
            phone: "555-0101".to_string(),
            company: "TechStart Inc".to_string(),
            service_interest: "SEO".to_string(),
            message: "Need help improving our organic ranking.".to_string(),
            date: day(2023, 10, 25),
            status: LeadStatus::New,
        }],
        services: vec![
            Service {
                id: "seo".to_string(),
                title: "Search Engine Optimization".to_string(),
                short_description: "Dominate search results and drive organic traffic.".to_string(),
                full_description: "Our data-driven SEO strategies help you climb the rankings."
                    .to_string(),
                icon_name: "Search".to_string(),
                features: vec![
                    "Technical Audit".to_string(),
                    "Keyword Research".to_string(),
                    "On-Page Optimization".to_string(),
                    "Backlink Building".to_string(),
                ],
            },
            Service {
                id: "ppc".to_string(),
                title: "Pay-Per-Click Ads".to_string(),
                short_description: "Instant traffic and high-conversion campaigns.".to_string(),
                full_description: "Maximize ROI with targeted Google and Social ads.".to_string(),
                icon_name: "MousePointerClick".to_string(),
                features: vec![
                    "Campaign Strategy".to_string(),
                    "A/B Testing".to_string(),
                    "Conversion Tracking".to_string(),
                    "Retargeting".to_string(),
                ],
            },
            Service {
                id: "social".to_string(),
                title: "Social Media Marketing".to_string(),
                short_description: "Build a community and engage your audience.".to_string(),
                full_description: "Creative content strategies for LinkedIn, Instagram, and more."
                    .to_string(),
                icon_name: "Share2".to_string(),
                features: vec![
                    "Content Creation".to_string(),
                    "Community Management".to_string(),
                    "Influencer Outreach".to_string(),
                    "Analytics".to_string(),
                ],
            },
            Service {
                id: "web".to_string(),
                title: "Web Design & Dev".to_string(),
                short_description: "High-performance websites that convert.".to_string(),
                full_description: "Modern, responsive, and accessible web experiences.".to_string(),
                icon_name: "Monitor".to_string(),
                features: vec![
                    "UI/UX Design".to_string(),
                    "Full-Stack Development".to_string(),
                    "Speed Optimization".to_string(),
                    "CMS Integration".to_string(),
                ],
            },
        ],
        posts: vec![
            BlogPost {
                id: "1".to_string(),
                title: "5 SEO Trends to Watch in 2024".to_string(),
                slug: "seo-trends-2024".to_string(),
                excerpt:
                    "Stay ahead of the curve with these emerging search engine optimization strategies."
                        .to_string(),
                content:
                    "Search engines are evolving faster than ever. From AI-generated answers to voice search dominance..."
                        .to_string(),
                author: "Sarah Jenkins".to_string(),
                date: day(2023, 11, 15),
                category: "SEO".to_string(),
                image_url: "https://picsum.photos/800/400?random=1".to_string(),
                status: PostStatus::Published,
            },
            BlogPost {
                id: "2".to_string(),
                title: "The ROI of Social Media for B2B".to_string(),
                slug: "social-media-b2b-roi".to_string(),
                excerpt: "Why LinkedIn is the new cold call for modern sales teams.".to_string(),
                content: "Gone are the days when social media was just for B2C brands..."
                    .to_string(),
                author: "Mike Ross".to_string(),
                date: day(2023, 11, 10),
                category: "Social Media".to_string(),
                image_url: "https://picsum.photos/800/400?random=2".to_string(),
                status: PostStatus::Published,
            },
        ],
        case_studies: vec![
            CaseStudy {
                id: "cs1".to_string(),
                client: "EcoWare".to_string(),
                industry: "E-commerce".to_string(),
                challenge: "Low organic traffic and high cart abandonment.".to_string(),
                solution: "Implemented comprehensive SEO audit and email retargeting.".to_string(),
                results: vec![
                    CaseStudyResult {
                        label: "Traffic Increase".to_string(),
                        value: "+150%".to_string(),
                    },
                    CaseStudyResult {
                        label: "Revenue Growth".to_string(),
                        value: "+45%".to_string(),
                    },
                ],
                image_url: "https://picsum.photos/600/400?random=10".to_string(),
            },
            CaseStudy {
                id: "cs2".to_string(),
                client: "MediCare Plus".to_string(),
                industry: "Healthcare".to_string(),
                challenge: "Need for qualified patient leads in local area.".to_string(),
                solution: "Localized PPC campaigns and GMB optimization.".to_string(),
                results: vec![
                    CaseStudyResult {
                        label: "Cost Per Lead".to_string(),
                        value: "-30%".to_string(),
                    },
                    CaseStudyResult {
                        label: "Appointments".to_string(),
                        value: "+200%".to_string(),
                    },
                ],
                image_url: "https://picsum.photos/600/400?random=11".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let state = seed_state();
        assert_eq!(state.leads.len(), 1);
        assert_eq!(state.services.len(), 4);
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.case_studies.len(), 2);
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_state(), seed_state());
    }

    #[test]
    fn test_seed_posts_are_published() {
        assert!(seed_state()
            .posts
            .iter()
            .all(|p| p.status == PostStatus::Published));
    }

    #[test]
    fn test_default_config_colors() {
        let config = default_config();
        assert_eq!(config.primary_color, "#2563eb");
        assert_eq!(config.secondary_color, "#0f172a");
        assert_eq!(config.font, Font::Sans);
    }
}
