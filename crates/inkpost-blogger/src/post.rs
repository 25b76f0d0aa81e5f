//! Wire types for posts and the featured-image block.

use serde::{Deserialize, Serialize};

/// A post to publish.
#[derive(Debug, Serialize)]
pub struct NewPost {
    /// Always `blogger#post`.
    pub kind: &'static str,
    /// Post title.
    pub title: String,
    /// Post body HTML.
    pub content: String,
    /// Post labels.
    pub labels: Vec<String>,
}

impl NewPost {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            kind: "blogger#post",
            title: title.into(),
            content: content.into(),
            labels,
        }
    }

    /// Prepend a featured-image block to the post body.
    #[must_use]
    pub fn with_featured_image(mut self, image_url: &str) -> Self {
        let image_block = featured_image_html(image_url, &self.title);
        self.content = format!("{image_block}\n\n{}", self.content);
        self
    }
}

/// A successfully published post.
#[derive(Debug, Deserialize)]
pub struct PublishedPost {
    /// Post ID assigned by Blogger.
    #[serde(default)]
    pub id: String,
    /// Public post URL.
    #[serde(default)]
    pub url: String,
}

/// Blog metadata, used by the setup check.
#[derive(Debug, Deserialize)]
pub struct BlogInfo {
    /// Blog ID.
    #[serde(default)]
    pub id: String,
    /// Blog display name.
    #[serde(default)]
    pub name: String,
    /// Public blog URL.
    #[serde(default)]
    pub url: String,
}

/// Centered featured-image block placed above the article body.
#[must_use]
pub fn featured_image_html(image_url: &str, alt: &str) -> String {
    format!(
        r#"<div class="featured-image" style="text-align: center; margin: 30px 0 20px 0;">
    <img src="{image_url}" alt="{alt}" style="max-width: 100%; height: auto; display: block; margin: 0 auto;" />
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_post_wire_shape() {
        let post = NewPost::new("Title", "<p>body</p>", vec!["Label".to_owned()]);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["kind"], "blogger#post");
        assert_eq!(json["title"], "Title");
        assert_eq!(json["content"], "<p>body</p>");
        assert_eq!(json["labels"][0], "Label");
    }

    #[test]
    fn test_featured_image_prepended() {
        let post = NewPost::new("My Post", "<p>body</p>", vec![])
            .with_featured_image("https://example.com/day-1.webp");
        assert!(post.content.starts_with(r#"<div class="featured-image""#));
        assert!(post.content.contains(r#"src="https://example.com/day-1.webp""#));
        assert!(post.content.contains(r#"alt="My Post""#));
        assert!(post.content.ends_with("<p>body</p>"));
    }

    #[test]
    fn test_published_post_parse() {
        let post: PublishedPost = serde_json::from_str(
            r#"{"id":"123","url":"https://blog.example/post","kind":"blogger#post"}"#,
        )
        .unwrap();
        assert_eq!(post.id, "123");
        assert_eq!(post.url, "https://blog.example/post");
    }
}
