//! Static article list shown when the live feed cannot be fetched.

use crate::models::NormalizedArticle;

struct FallbackEntry {
    title: &'static str,
    desc: &'static str,
    date: &'static str,
    reads: &'static str,
    img: &'static str,
    link: &'static str,
}

const FALLBACK_ENTRIES: &[FallbackEntry] = &[
    FallbackEntry {
        title: "The Hidden $15M Cost of Poor Data Governance",
        desc: "Discover how organizations lose millions annually due to inadequate data governance and learn the 5 steps to prevent it.",
        date: "August 2, 2025",
        reads: "4 mins Read",
        img: "/article1.webp",
        link: "https://medium.com/@garnetbigdata/duolingo-knows-when-you-slack-why-dont-nigerian-businesses-559f1d5c458b",
    },
    FallbackEntry {
        title: "Building a Data-Driven Culture: A CEO's Blueprint",
        desc: "Learn the proven framework that transformed 3 Fortune 500 companies into truly data-driven organizations in under 6 months.",
        date: "August 5, 2025",
        reads: "4 mins Read",
        img: "/article2.webp",
        link: "https://medium.com/@garnetbigdata/same-email-different-customer-399a263745bb",
    },
];

/// The hardcoded articles, ids set to their links.
pub fn fallback_articles() -> Vec<NormalizedArticle> {
    FALLBACK_ENTRIES
        .iter()
        .map(|e| NormalizedArticle {
            id: e.link.to_string(),
            title: e.title.to_string(),
            desc: e.desc.to_string(),
            date: e.date.to_string(),
            reads: e.reads.to_string(),
            img: e.img.to_string(),
            link: e.link.to_string(),
        })
        .collect()
}
