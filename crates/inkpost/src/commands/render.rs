//! `inkpost render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use inkpost_renderer::render_html;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    input: PathBuf,

    /// Write the HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error when the input cannot be read or the output cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = std::fs::read_to_string(&self.input)?;
        let html = render_html(&markdown);

        match self.output {
            Some(path) => {
                std::fs::write(&path, &html)?;
                Output::new().success(&format!(
                    "wrote {} bytes to {}",
                    html.len(),
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
