//! `inkpost check` command implementation.
//!
//! Validates the whole setup before a scheduled run: configuration, local
//! files, and live API credentials. Every check runs even when an earlier
//! one fails, so one invocation reports all problems.

use std::path::PathBuf;

use clap::Args;
use inkpost_blogger::{BloggerClient, Credentials};
use inkpost_config::Config;
use inkpost_gemini::{GeminiClient, GenerationConfig};
use inkpost_queue::{StatusStore, TopicQueue};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover inkpost.toml,
    /// falling back to environment variables).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the live API checks; validate configuration and files only.
    #[arg(long)]
    offline: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Validation`] when any check fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        output.banner("inkpost - configuration check");

        let mut results: Vec<(&str, bool)> = Vec::new();

        let config = match Config::load(self.config.as_deref()) {
            Ok(config) => {
                output.success("configuration valid");
                results.push(("Configuration", true));
                Some(config)
            }
            Err(err) => {
                output.error(&format!("configuration: {err}"));
                results.push(("Configuration", false));
                None
            }
        };

        if let Some(config) = &config {
            match TopicQueue::load(&config.paths.topics_file) {
                Ok(queue) => {
                    output.success(&format!("found {} valid topics", queue.len()));
                    results.push(("Topics", true));
                }
                Err(err) => {
                    output.error(&format!("topics: {err}"));
                    results.push(("Topics", false));
                }
            }

            match StatusStore::new(&config.paths.status_file).load() {
                Ok(status) => {
                    output.success(&format!("status loaded, next day is {}", status.next_day));
                    results.push(("Status", true));
                }
                Err(err) => {
                    output.error(&format!("status: {err}"));
                    results.push(("Status", false));
                }
            }

            if self.offline {
                output.warning("offline mode: skipping API checks");
            } else {
                results.push(("Gemini API", check_gemini(&output, config)));
                results.push(("Blogger API", check_blogger(&output, config)));
            }
        }

        output.banner("results");
        let mut failed = 0;
        for (name, passed) in &results {
            if *passed {
                output.success(&format!("PASS  {name}"));
            } else {
                output.error(&format!("FAIL  {name}"));
                failed += 1;
            }
        }

        if failed == 0 {
            output.success("all checks passed, ready to publish");
            Ok(())
        } else {
            Err(CliError::Validation(format!("{failed} check(s) failed")))
        }
    }
}

fn check_gemini(output: &Output, config: &Config) -> bool {
    let client = GeminiClient::new(&config.gemini.api_key, &config.gemini.model);
    let probe = GenerationConfig {
        temperature: 0.7,
        max_output_tokens: 50,
    };
    match client.generate("Say \"Hello World\" in 5 words", &probe) {
        Ok(reply) => {
            let preview: String = reply.chars().take(50).collect();
            output.success(&format!("Gemini connected: {preview}"));
            true
        }
        Err(err) => {
            output.error(&format!("Gemini: {err}"));
            false
        }
    }
}

fn check_blogger(output: &Output, config: &Config) -> bool {
    let client = BloggerClient::new(Credentials {
        client_id: config.blogger.client_id.clone(),
        client_secret: config.blogger.client_secret.clone(),
        refresh_token: config.blogger.refresh_token.clone(),
    });
    match client.get_blog(&config.blogger.blog_id) {
        Ok(blog) => {
            output.success(&format!("Blogger connected: {} ({})", blog.name, blog.url));
            true
        }
        Err(err) => {
            output.error(&format!("Blogger: {err}"));
            false
        }
    }
}
