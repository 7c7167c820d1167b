//! Shared test utilities for integration tests.
//!
//! Provides context builders used across multiple test files so individual
//! tests only spell out the fields they care about.

use downpage::{Direction, Language, RenderContext, SafeHtml};

/// Builds a context with only the required fields set.
pub fn minimal_context() -> RenderContext {
    RenderContext {
        language: Language::new("en", Direction::Ltr),
        head_markup: SafeHtml::default(),
        head_title: "Site under maintenance".to_string(),
        css_markup: SafeHtml::default(),
        js_markup: SafeHtml::default(),
        body_classes: vec![],
        logo_url: None,
        logo_alt: "Home".to_string(),
        site_name: None,
        site_slogan: None,
        header_markup: None,
        title: None,
        messages_markup: None,
        content_markup: SafeHtml::new("<p>We will be back shortly.</p>"),
        sidebar_first_markup: None,
        sidebar_second_markup: None,
        footer_markup: None,
    }
}

/// Builds a context with every optional region populated.
pub fn full_context() -> RenderContext {
    RenderContext {
        language: Language::new("en-GB", Direction::Ltr),
        head_markup: SafeHtml::new("<meta name=\"generator\" content=\"downpage\">"),
        head_title: "Maintenance | Example".to_string(),
        css_markup: SafeHtml::new("<link rel=\"stylesheet\" href=\"assets/maintenance.css\">"),
        js_markup: SafeHtml::new("<script defer src=\"assets/countdown.js\"></script>"),
        body_classes: vec![
            "maintenance-page".to_string(),
            "in-maintenance".to_string(),
            "two-sidebars".to_string(),
        ],
        logo_url: Some("data:image/svg+xml;base64,PHN2Zy8+".to_string()),
        logo_alt: "Home".to_string(),
        site_name: Some("Example".to_string()),
        site_slogan: Some("A site worth waiting for".to_string()),
        header_markup: Some(SafeHtml::new("<nav><a href=\"https://status.example.com\">Status</a></nav>")),
        title: Some("Site under maintenance".to_string()),
        messages_markup: Some(SafeHtml::new(
            "<div class=\"messages status\"><p>Scheduled upgrade in progress.</p></div>",
        )),
        content_markup: SafeHtml::new("<p>We are upgrading the database.</p>"),
        sidebar_first_markup: Some(SafeHtml::new("<p>Follow updates on our status page.</p>")),
        sidebar_second_markup: Some(SafeHtml::new("<p>Support: support@example.com</p>")),
        footer_markup: Some(SafeHtml::new("<p>© 2026 Example</p>")),
    }
}
