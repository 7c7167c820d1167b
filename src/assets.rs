//! CSS asset bundling and head markup assembly

use anyhow::{Context, Result};
use maud::html;
use std::{fs, path::Path};

use crate::context::SafeHtml;

const BASE: &str = include_str!("../assets/base.css");
const MAINTENANCE: &str = include_str!("../assets/maintenance.css");

/// Stylesheet paths referenced by the generated page, relative to index.html.
pub const STYLESHEETS: &[&str] = &["assets/maintenance.css"];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "maintenance.css", &[BASE, MAINTENANCE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// Standard meta tags placed at the top of the head section.
pub fn default_head_markup() -> SafeHtml {
    SafeHtml::from(html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
    })
}

/// Stylesheet link markup for the given asset paths.
pub fn stylesheet_markup(paths: &[&str]) -> SafeHtml {
    SafeHtml::from(html! {
        @for path in paths {
            link rel="stylesheet" href=(path);
        }
    })
}
