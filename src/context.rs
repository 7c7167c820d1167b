//! View context consumed by the maintenance page renderer.
//!
//! All values are assembled up front by the composition layer; the renderer
//! only reads them. Markup fields are pre-escaped HTML wrapped in [`SafeHtml`],
//! plain text fields are escaped at emission time.

use clap::ValueEnum;
use maud::{Markup, Render};

/// Text direction for the `dir` attribute on the document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Returns the attribute value for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Page language: a BCP-47-like code plus its text direction.
///
/// The code is emitted as both `lang` and `xml:lang` on the document element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub direction: Direction,
}

impl Language {
    pub fn new(code: impl Into<String>, direction: Direction) -> Self {
        Self {
            code: code.into(),
            direction,
        }
    }
}

/// Markup that is already safe for direct HTML embedding.
///
/// Splicing a `SafeHtml` value into a maud template emits it verbatim,
/// while ordinary strings go through maud's escaping. Producers (markdown
/// rendering, component markup, upstream aggregation) are responsible for
/// the escaping guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wraps an already-escaped HTML string.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Markup> for SafeHtml {
    fn from(markup: Markup) -> Self {
        Self(markup.into_string())
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Render for SafeHtml {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}

/// Tests whether an optional field renders its block.
///
/// Absent and empty string both suppress the block; any other content,
/// including whitespace-only strings, renders it. No trimming is applied.
pub fn is_present<S: AsRef<str>>(field: &Option<S>) -> bool {
    field.as_ref().is_some_and(|s| !s.as_ref().is_empty())
}

/// Fully-populated view context for one maintenance page render.
///
/// Constructed fresh per render by [`crate::build_context`] (or directly in
/// tests) and passed by reference to the renderer. `*_markup` fields hold
/// pre-escaped HTML; `head_title`, `title`, `site_name`, and `site_slogan`
/// are plain text escaped by the renderer.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub language: Language,
    pub head_markup: SafeHtml,
    pub head_title: String,
    pub css_markup: SafeHtml,
    pub js_markup: SafeHtml,
    pub body_classes: Vec<String>,
    pub logo_url: Option<String>,
    /// Alt text for the logo image, already localized by the caller.
    pub logo_alt: String,
    pub site_name: Option<String>,
    pub site_slogan: Option<String>,
    pub header_markup: Option<SafeHtml>,
    pub title: Option<String>,
    pub messages_markup: Option<SafeHtml>,
    pub content_markup: SafeHtml,
    pub sidebar_first_markup: Option<SafeHtml>,
    pub sidebar_second_markup: Option<SafeHtml>,
    pub footer_markup: Option<SafeHtml>,
}

impl RenderContext {
    /// True when the name-and-slogan block renders.
    pub fn has_branding(&self) -> bool {
        is_present(&self.site_name) || is_present(&self.site_slogan)
    }

    /// Space-joined body class attribute value.
    ///
    /// An empty class list still produces an (empty) attribute on the
    /// body element.
    pub fn body_class_attr(&self) -> String {
        self.body_classes.join(" ")
    }
}
