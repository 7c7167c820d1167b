//! Markdown rendering for page regions.
//!
//! Region files (content, header, sidebars, footer) are written in GitHub
//! Flavored Markdown and rendered to HTML before being placed into the
//! render context as pre-escaped markup.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, footnotes, and description lists. Raw HTML passes through
/// unchanged since region files are trusted operator content.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (region files are trusted)
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Renders the markdown file at the given path.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Rendered HTML string
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read markdown file: {}", path.as_ref().display())
        })?;
        Ok(self.render(&content))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
