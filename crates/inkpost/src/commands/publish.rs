//! `inkpost publish` command implementation.

use std::path::PathBuf;

use clap::Args;
use inkpost_blogger::{BloggerClient, Credentials, NewPost};
use inkpost_config::Config;
use inkpost_gemini::{ArticleGenerator, ArticleRequest, GeminiClient};
use inkpost_queue::{MediaLibrary, StatusStore, TopicQueue, rotate_label};
use inkpost_renderer::render_html;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to configuration file (default: auto-discover inkpost.toml,
    /// falling back to environment variables).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate and render, but do not publish or update the status file.
    #[arg(long)]
    dry_run: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error when any non-optional step fails. Image handling is
    /// the exception: a missing image downgrades to a text-only post.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;

        output.banner("inkpost - automated blog publishing");

        let store = StatusStore::new(&config.paths.status_file);
        let mut status = store.load()?;
        let queue = TopicQueue::load(&config.paths.topics_file)?;

        let Some(topic) = queue.next(status.next_day) else {
            return Err(CliError::Validation(format!(
                "no topic scheduled for day {}",
                status.next_day
            )));
        };
        let topic = topic.clone();
        let day = topic.day;
        let label = rotate_label(&config.content.labels, day)
            .ok_or_else(|| CliError::Validation("no labels configured".to_owned()))?
            .to_owned();

        output.info(&format!("Day {day}: {}", topic.topic));
        output.info(&format!("Label: {label}"));

        output.banner("Step 1: generating article");
        let gemini = GeminiClient::new(&config.gemini.api_key, &config.gemini.model);
        let generator = ArticleGenerator::new(
            &gemini,
            &config.content.blog_name,
            &config.content.blog_url,
        );
        let markdown = generator.generate(&ArticleRequest {
            topic: &topic.topic,
            details: &topic.details,
            category: &label,
        })?;
        output.success(&format!(
            "article generated ({} chars, ~{} words)",
            markdown.len(),
            markdown.split_whitespace().count()
        ));

        output.banner("Step 2: converting Markdown to HTML");
        let html = render_html(&markdown);
        output.success(&format!("rendered {} bytes of styled HTML", html.len()));

        output.banner("Step 3: claiming featured image");
        let library = MediaLibrary::new(&config.paths.images_dir);
        let image_url = match (library.claim(day), &config.paths.image_base_url) {
            (Ok(Some(path)), Some(base_url)) => {
                let url = MediaLibrary::public_url(base_url, &path);
                if let Some(url) = &url {
                    output.success(&format!("image ready: {url}"));
                }
                url
            }
            (Ok(Some(_)), None) => {
                output.warning(
                    "image claimed but paths.image_base_url is unset, publishing text only",
                );
                None
            }
            (Ok(None), _) => {
                output.warning("no image available, publishing text only");
                None
            }
            (Err(err), _) => {
                output.warning(&format!("image claim failed: {err}, publishing text only"));
                None
            }
        };

        let mut post = NewPost::new(topic.topic.clone(), html, vec![label]);
        if let Some(url) = &image_url {
            post = post.with_featured_image(url);
        }

        if self.dry_run {
            output.banner("dry run");
            output.info(&format!("title: {}", post.title));
            output.info(&format!("content: {} bytes", post.content.len()));
            output.warning("skipping publish and status update");
            return Ok(());
        }

        output.banner("Step 4: publishing to Blogger");
        let blogger = BloggerClient::new(Credentials {
            client_id: config.blogger.client_id.clone(),
            client_secret: config.blogger.client_secret.clone(),
            refresh_token: config.blogger.refresh_token.clone(),
        });
        let published = blogger.publish(&config.blogger.blog_id, &post)?;
        output.success(&format!("post published: {}", published.url));

        output.banner("Step 5: updating status");
        status.next_day = day + 1;
        status.last_processed = topic.topic;
        status.last_published = Some(unix_now());
        status.last_image_source = image_url.map(|_| "images".to_owned());
        store.save(&status)?;
        output.success(&format!("next run will process day {}", day + 1));

        Ok(())
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
