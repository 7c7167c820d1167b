//! Render context assembly.
//!
//! Turns the command line configuration into the fully-populated view
//! context consumed by the maintenance page renderer: region files are
//! rendered from markdown, the logo is inlined, head and stylesheet markup
//! are assembled, and body classes are computed. The renderer itself stays
//! free of I/O and ambient state.

use anyhow::{Context, Result};
use maud::html;
use std::path::Path;

use crate::assets;
use crate::components::regions::status_notice;
use crate::config::Config;
use crate::context::{Language, RenderContext, SafeHtml, is_present};
use crate::logo::embed_logo;
use crate::markdown::MarkdownRenderer;

/// Assembles the render context from configuration.
///
/// # Arguments
///
/// * `config`: Validated command line configuration
///
/// # Returns
///
/// View context ready for [`crate::pages::maintenance::render`]
///
/// # Errors
///
/// Returns error if a region file cannot be read or the logo cannot be
/// embedded.
pub fn build_context(config: &Config) -> Result<RenderContext> {
    let renderer = MarkdownRenderer::new();

    let content_markup = match &config.content {
        Some(path) => SafeHtml::new(
            renderer
                .render_file(path)
                .with_context(|| format!("Failed to render content file: {}", path.display()))?,
        ),
        None => default_content(config.site_name.as_deref()),
    };

    let header_markup = render_region(&renderer, config.header.as_deref())?;
    let sidebar_first_markup = render_region(&renderer, config.sidebar_first.as_deref())?;
    let sidebar_second_markup = render_region(&renderer, config.sidebar_second.as_deref())?;
    let footer_markup = render_region(&renderer, config.footer.as_deref())?;

    let logo_url = match &config.logo {
        Some(path) => Some(
            embed_logo(path)
                .with_context(|| format!("Failed to embed logo: {}", path.display()))?,
        ),
        None => None,
    };

    let messages_markup = config
        .notice
        .as_deref()
        .filter(|notice| !notice.is_empty())
        .map(|notice| SafeHtml::from(status_notice(notice)));

    let body_classes = body_classes(&sidebar_first_markup, &sidebar_second_markup);

    Ok(RenderContext {
        language: Language::new(config.lang.clone(), config.dir),
        head_markup: assets::default_head_markup(),
        head_title: head_title(config),
        css_markup: assets::stylesheet_markup(assets::STYLESHEETS),
        js_markup: SafeHtml::default(),
        body_classes,
        logo_url,
        logo_alt: config.logo_alt.clone(),
        site_name: config.site_name.clone(),
        site_slogan: config.slogan.clone(),
        header_markup,
        title: Some(config.page_title.clone()),
        messages_markup,
        content_markup,
        sidebar_first_markup,
        sidebar_second_markup,
        footer_markup,
    })
}

fn render_region(
    renderer: &MarkdownRenderer<'_>,
    path: Option<&Path>,
) -> Result<Option<SafeHtml>> {
    path.map(|path| {
        renderer
            .render_file(path)
            .map(SafeHtml::new)
            .with_context(|| format!("Failed to render region file: {}", path.display()))
    })
    .transpose()
}

/// Fallback content paragraph used when no content file is configured.
fn default_content(site_name: Option<&str>) -> SafeHtml {
    let subject = site_name.filter(|name| !name.is_empty()).unwrap_or("This site");
    SafeHtml::from(html! {
        p {
            (subject)
            " is currently under maintenance. We should be back shortly. Thank you for your patience."
        }
    })
}

/// Browser title: explicit override, else heading plus site name.
fn head_title(config: &Config) -> String {
    if let Some(title) = &config.head_title {
        return title.clone();
    }

    match config.site_name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => format!("{} | {}", config.page_title, name),
        None => config.page_title.clone(),
    }
}

/// Body classes: maintenance markers plus a sidebar-count layout class.
fn body_classes(first: &Option<SafeHtml>, second: &Option<SafeHtml>) -> Vec<String> {
    let sidebars = usize::from(is_present(first)) + usize::from(is_present(second));
    let layout = match sidebars {
        0 => "no-sidebars",
        1 => "one-sidebar",
        _ => "two-sidebars",
    };

    vec![
        "maintenance-page".to_string(),
        "in-maintenance".to_string(),
        layout.to_string(),
    ]
}
