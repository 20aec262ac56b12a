//! Raw feed item to article card.

use crate::config::{DEFAULT_ARTICLE_IMAGE, FeedConfig};
use crate::fields::{estimate_read_time, extract_image, format_date};
use crate::models::{NormalizedArticle, RawFeedItem};
use crate::sanitize::clean_description;

/// Label used when no reading time can be estimated.
pub const DEFAULT_READ_LABEL: &str = "5 min read";

/// Map one raw item to a fully populated [`NormalizedArticle`].
///
/// Pure and total. Image priority is the first inline `<img>`, then the
/// item's thumbnail, then `config.default_image`, then
/// [`DEFAULT_ARTICLE_IMAGE`]. Blank optional fields count as absent.
///
/// `date` is the empty string when `pubDate` is absent or blank; the card
/// omits the date in that case. An unparseable date is passed through as-is.
pub fn normalize_item(item: &RawFeedItem, config: &FeedConfig) -> NormalizedArticle {
    let img = extract_image(&item.description)
        .or_else(|| non_blank(item.thumbnail.as_deref()))
        .or_else(|| non_blank(Some(&config.default_image)))
        .unwrap_or_else(|| DEFAULT_ARTICLE_IMAGE.to_string());

    NormalizedArticle {
        id: non_blank(item.guid.as_deref()).unwrap_or_else(|| item.link.clone()),
        title: item.title.clone(),
        desc: clean_description(&item.description),
        date: format_date(&item.pub_date),
        reads: estimate_read_time(&item.description)
            .unwrap_or_else(|| DEFAULT_READ_LABEL.to_string()),
        img,
        link: item.link.clone(),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> RawFeedItem {
        RawFeedItem {
            title: "Duolingo Knows When You Slack".to_string(),
            description: r#"<figure><img alt="" src="https://cdn-images-1.medium.com/max/1024/owl.jpeg" /><figcaption>Photo by Ann Lee on Unsplash</figcaption></figure><p>Why don't Nigerian businesses know their customers this well?</p>"#.to_string(),
            pub_date: "2025-08-02 10:00:00".to_string(),
            link: "https://medium.com/@garnetbigdata/duolingo-knows-when-you-slack".to_string(),
            thumbnail: Some("https://cdn-images-1.medium.com/thumb.jpeg".to_string()),
            guid: Some("https://medium.com/p/559f1d5c458b".to_string()),
        }
    }

    #[test]
    fn test_normalize_full_item() {
        let article = normalize_item(&item(), &FeedConfig::default());

        assert_eq!(article.id, "https://medium.com/p/559f1d5c458b");
        assert_eq!(article.title, "Duolingo Knows When You Slack");
        assert_eq!(
            article.desc,
            "Why don't Nigerian businesses know their customers this well?"
        );
        assert_eq!(article.date, "August 2, 2025");
        assert_eq!(article.reads, "1 min Read");
        assert_eq!(article.img, "https://cdn-images-1.medium.com/max/1024/owl.jpeg");
        assert_eq!(
            article.link,
            "https://medium.com/@garnetbigdata/duolingo-knows-when-you-slack"
        );
    }

    #[test]
    fn test_thumbnail_used_without_inline_image() {
        let raw = RawFeedItem {
            description: "<p>No images.</p>".to_string(),
            ..item()
        };
        let article = normalize_item(&raw, &FeedConfig::default());
        assert_eq!(article.img, "https://cdn-images-1.medium.com/thumb.jpeg");
    }

    #[test]
    fn test_default_image_as_last_resort() {
        let config = FeedConfig {
            default_image: "/article-placeholder.webp".to_string(),
            ..FeedConfig::default()
        };
        for thumbnail in [None, Some(String::new()), Some("  ".to_string())] {
            let raw = RawFeedItem {
                description: "<p>No images.</p>".to_string(),
                thumbnail,
                ..item()
            };
            assert_eq!(normalize_item(&raw, &config).img, "/article-placeholder.webp");
        }
    }

    #[test]
    fn test_blank_default_image_never_yields_empty_img() {
        let config = FeedConfig {
            default_image: String::new(),
            ..FeedConfig::default()
        };
        let article = normalize_item(&RawFeedItem::default(), &config);
        assert_eq!(article.img, "/default-article-image.jpg");
    }

    #[test]
    fn test_absent_pub_date_gives_empty_date() {
        for pub_date in ["", "   "] {
            let raw = RawFeedItem {
                pub_date: pub_date.to_string(),
                ..item()
            };
            assert_eq!(normalize_item(&raw, &FeedConfig::default()).date, "");
        }
    }

    #[test]
    fn test_id_falls_back_to_link() {
        let raw = RawFeedItem {
            guid: Some(String::new()),
            ..item()
        };
        assert_eq!(normalize_item(&raw, &FeedConfig::default()).id, raw.link);

        let raw = RawFeedItem { guid: None, ..item() };
        assert_eq!(normalize_item(&raw, &FeedConfig::default()).id, raw.link);
    }

    #[test]
    fn test_empty_item_is_fully_populated() {
        let article = normalize_item(&RawFeedItem::default(), &FeedConfig::default());

        assert_eq!(article.desc, "");
        assert_eq!(article.reads, "5 min read");
        assert_eq!(article.img, "/default-article-image.jpg");
        assert_eq!(article.id, "");
        assert_eq!(article.date, "");
    }

    #[test]
    fn test_title_passes_through_unchanged() {
        let raw = RawFeedItem {
            title: "Same Email &amp; Different Customer".to_string(),
            ..item()
        };
        assert_eq!(
            normalize_item(&raw, &FeedConfig::default()).title,
            "Same Email &amp; Different Customer"
        );
    }
}
