//! Blog-article generation workflow on top of [`GeminiClient`].

use std::fmt::Write;
use std::time::Duration;

use tracing::{info, warn};

use crate::client::{GeminiClient, GenerationConfig};
use crate::error::GeminiError;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Anything shorter than this is a refusal or an error page, not an article.
const MIN_CONTENT_CHARS: usize = 100;

/// Below this length a "complete" article is assumed truncated.
const TRUNCATION_LENGTH: usize = 2000;

/// A complete article has at least this many `##` section markers.
const MIN_SECTION_MARKERS: usize = 3;

/// How much article tail to quote back when asking for a continuation.
const CONTINUATION_TAIL_CHARS: usize = 500;

/// One article to generate.
#[derive(Clone, Debug)]
pub struct ArticleRequest<'a> {
    /// Topic to write about.
    pub topic: &'a str,
    /// Optional additional context for the topic.
    pub details: &'a str,
    /// Label/category the post will carry.
    pub category: &'a str,
}

/// Generates complete Markdown articles, retrying and repairing truncated
/// model output along the way.
pub struct ArticleGenerator<'a> {
    client: &'a GeminiClient,
    blog_name: String,
    blog_url: String,
}

impl<'a> ArticleGenerator<'a> {
    #[must_use]
    pub fn new(
        client: &'a GeminiClient,
        blog_name: impl Into<String>,
        blog_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            blog_name: blog_name.into(),
            blog_url: blog_url.into(),
        }
    }

    /// Generate a complete Markdown article.
    ///
    /// Up to three attempts with a linear delay; a truncated-looking result
    /// triggers one continuation request whose output is appended.
    ///
    /// # Errors
    ///
    /// Returns the final attempt's error when every attempt fails.
    pub fn generate(&self, request: &ArticleRequest<'_>) -> Result<String, GeminiError> {
        let prompt = self.build_prompt(request);
        let config = GenerationConfig {
            temperature: 0.75,
            max_output_tokens: 8192,
        };

        let mut attempt = 1;
        loop {
            match self.attempt(&prompt, &config) {
                Ok(content) => return Ok(content),
                Err(err) if attempt < MAX_ATTEMPTS => {
                    warn!(
                        "content generation failed (attempt {attempt}/{MAX_ATTEMPTS}): {err}, retrying"
                    );
                    std::thread::sleep(RETRY_DELAY);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn attempt(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GeminiError> {
        let raw = self.client.generate(prompt, config)?;
        let mut content = strip_wrapping_fence(&raw).to_owned();

        if content.len() < MIN_CONTENT_CHARS {
            return Err(GeminiError::ContentTooShort(content.len()));
        }

        if looks_truncated(&content) {
            info!(
                "content looks incomplete ({} chars), requesting continuation",
                content.len()
            );
            let continuation_config = GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: 4096,
            };
            let continuation = self
                .client
                .generate(&continuation_prompt(&content), &continuation_config)?;
            let continuation = strip_wrapping_fence(&continuation);
            content.push_str("\n\n");
            content.push_str(continuation);
        }

        Ok(content)
    }

    /// Assemble the article prompt for one topic.
    fn build_prompt(&self, request: &ArticleRequest<'_>) -> String {
        let context = if request.details.is_empty() {
            "Provide comprehensive coverage of the topic"
        } else {
            request.details
        };

        let mut prompt = String::with_capacity(2048);
        write!(
            prompt,
            "You are an expert cryptocurrency and blockchain content writer for the blog \
             \"{}\" ({}).\n\n\
             Write a comprehensive, detailed, narrative-driven blog post about: {}\n\n\
             Additional Context: {}\n\n",
            self.blog_name, self.blog_url, request.topic, context
        )
        .unwrap();
        prompt.push_str(
            "Requirements:\n\
             1. Write a DETAILED, informative article (900-1000 words).\n\
             2. Use a NARRATIVE, STORYTELLING approach - tell a story, don't just list facts.\n\
             3. Use clear headings and subheadings (## for main sections, ### for subsections).\n\
             4. Start with a compelling hook that draws readers in.\n\
             5. Include real-world scenarios and relatable examples.\n\
             6. Use analogies and metaphors to explain complex concepts.\n\
             7. Discuss both benefits and risks honestly.\n\
             8. Include current trends and future predictions.\n\
             9. Explain technical terms naturally within the narrative.\n\
             10. DO NOT USE EMOJIS - write professionally without emoji characters.\n\
             11. Integrate high-ranking keywords naturally into the title, headers, and first paragraph.\n",
        );
        write!(prompt, "12. Category: {}\n\n", request.category).unwrap();
        prompt.push_str(
            "Structure:\n\
             - SEO title, opening hook, introduction\n\
             - 4-5 detailed main sections that flow naturally\n\
             - Practical guidance with actionable tips\n\
             - Common mistakes and how to avoid them\n\
             - Future outlook, then a conclusion with key takeaways\n\n\
             Format the content in Markdown with proper headings.\n\n\
             IMPORTANT: Generate the COMPLETE article from start to finish. Do not stop \
             mid-way. The article must end with a proper conclusion.\n",
        );
        prompt
    }
}

/// Prompt asking the model to continue a cut-off article.
fn continuation_prompt(content: &str) -> String {
    let tail_start = content
        .char_indices()
        .rev()
        .nth(CONTINUATION_TAIL_CHARS - 1)
        .map_or(0, |(index, _)| index);
    format!(
        "Continue writing the blog post from where you left off. Here's what was written so far:\n\n\
         {}\n\n---\n\n\
         Continue naturally from the point where it was cut off. Complete all remaining \
         sections, including practical guidance, common mistakes, future outlook, and a \
         proper conclusion with key takeaways. Format in Markdown. Continue:",
        &content[tail_start..]
    )
}

/// Strip a wrapping ```` ```markdown ```` fence from a model response.
fn strip_wrapping_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the opener line (``` or ```markdown) and a trailing ``` line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Heuristic for a response the model cut off mid-article.
fn looks_truncated(content: &str) -> bool {
    let trimmed = content.trim_end();
    let ends_with_punctuation = trimmed.ends_with(['.', '!', '?', '"', '\'']);
    !ends_with_punctuation
        || trimmed.len() < TRUNCATION_LENGTH
        || content.matches("##").count() < MIN_SECTION_MARKERS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn generator(client: &GeminiClient) -> ArticleGenerator<'_> {
        ArticleGenerator::new(client, "Crypto Basic Guide", "cryptobasicguide.blogspot.com")
    }

    #[test]
    fn test_prompt_contains_topic_details_category() {
        let client = GeminiClient::new("key", "model");
        let prompt = generator(&client).build_prompt(&ArticleRequest {
            topic: "What is DeFi?",
            details: "Cover lending and DEXes",
            category: "Beginner Guide",
        });
        assert!(prompt.contains("What is DeFi?"));
        assert!(prompt.contains("Cover lending and DEXes"));
        assert!(prompt.contains("Category: Beginner Guide"));
        assert!(prompt.contains("Crypto Basic Guide"));
    }

    #[test]
    fn test_prompt_default_context_when_details_empty() {
        let client = GeminiClient::new("key", "model");
        let prompt = generator(&client).build_prompt(&ArticleRequest {
            topic: "t",
            details: "",
            category: "c",
        });
        assert!(prompt.contains("Provide comprehensive coverage of the topic"));
    }

    #[test]
    fn test_strip_wrapping_fence() {
        assert_eq!(
            strip_wrapping_fence("```markdown\n# Title\n\nBody.\n```"),
            "# Title\n\nBody."
        );
        assert_eq!(strip_wrapping_fence("```\n# Title\n```"), "# Title");
        assert_eq!(strip_wrapping_fence("# Title\n\nBody."), "# Title\n\nBody.");
    }

    #[test]
    fn test_strip_wrapping_fence_keeps_inner_fences() {
        let wrapped = "```markdown\n# T\n\n```python\nx = 1\n```\n\nEnd.\n```";
        let stripped = strip_wrapping_fence(wrapped);
        assert!(stripped.contains("```python"));
        assert!(stripped.ends_with("End."));
    }

    #[test]
    fn test_truncation_no_terminal_punctuation() {
        let content = format!("{} and then", "## s\n\nwords. ".repeat(300));
        assert!(looks_truncated(&content));
    }

    #[test]
    fn test_truncation_too_short() {
        assert!(looks_truncated("## a\n## b\n## c\n\nShort but punctuated."));
    }

    #[test]
    fn test_truncation_too_few_sections() {
        let content = format!("{}.", "long paragraph text ".repeat(150));
        assert!(content.len() >= 2000);
        assert!(looks_truncated(&content));
    }

    #[test]
    fn test_complete_article_not_truncated() {
        let section = format!("## Section\n\n{}\n\n", "solid prose ".repeat(60));
        let content = format!("{}{}{}Conclusion.", section, section, section);
        assert!(!looks_truncated(&content));
    }

    #[test]
    fn test_continuation_prompt_quotes_tail_only() {
        let content = format!("{}TAIL-MARKER ends here.", "x".repeat(2000));
        let prompt = continuation_prompt(&content);
        assert!(prompt.contains("TAIL-MARKER"));
        // Only the last ~500 chars are quoted back.
        assert!(!prompt.contains(&"x".repeat(1600)));
    }
}
