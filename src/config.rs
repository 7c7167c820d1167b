//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::context::Direction;

/// Command line configuration for Downpage.
#[derive(Debug, Clone, Parser)]
#[command(name = "downpage", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the banner
    #[arg(long)]
    pub site_name: Option<String>,

    /// Site slogan shown beneath the name
    #[arg(long)]
    pub slogan: Option<String>,

    /// Logo image file, inlined into the page as a data URI
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Alt text for the logo (pass an already-localized string)
    #[arg(long, default_value = "Home")]
    pub logo_alt: String,

    /// Page language code
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Text direction
    #[arg(long, value_enum, default_value = "ltr")]
    pub dir: Direction,

    /// Page heading
    #[arg(long, default_value = "Site under maintenance")]
    pub page_title: String,

    /// Browser title (defaults to the heading, plus the site name if set)
    #[arg(long)]
    pub head_title: Option<String>,

    /// Status notice shown above the content
    #[arg(long)]
    pub notice: Option<String>,

    /// Markdown file for the main content
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Markdown file for extra banner markup
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Markdown file for the first sidebar
    #[arg(long)]
    pub sidebar_first: Option<PathBuf>,

    /// Markdown file for the second sidebar
    #[arg(long)]
    pub sidebar_second: Option<PathBuf>,

    /// Markdown file for the footer
    #[arg(long)]
    pub footer: Option<PathBuf>,

    /// Open the generated page in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any configured input file does not exist.
    pub fn validate(&self) -> Result<()> {
        let inputs: [(&str, Option<&Path>); 6] = [
            ("logo", self.logo.as_deref()),
            ("content", self.content.as_deref()),
            ("header", self.header.as_deref()),
            ("sidebar-first", self.sidebar_first.as_deref()),
            ("sidebar-second", self.sidebar_second.as_deref()),
            ("footer", self.footer.as_deref()),
        ];

        for (name, path) in inputs {
            if let Some(path) = path
                && !path.exists()
            {
                bail!("File for --{} does not exist: {}", name, path.display());
            }
        }

        Ok(())
    }
}
