//! Static maintenance page generator.

mod assets;
pub mod components;
mod compose;
mod config;
mod context;
mod logo;
mod markdown;
pub mod pages;

pub use assets::{STYLESHEETS, default_head_markup, stylesheet_markup, write_css_assets};
pub use compose::build_context;
pub use config::Config;
pub use context::{Direction, Language, RenderContext, SafeHtml, is_present};
pub use logo::{ImageFormat, detect_format, embed_logo};
pub use markdown::MarkdownRenderer;
