//! Maintenance page rendering

use maud::{Markup, html};

use crate::components::banner::banner;
use crate::components::document::document_shell;
use crate::components::regions::{content_region, footer_region, sidebar};
use crate::context::RenderContext;

/// Renders the complete maintenance page document
///
/// Pure function over the view context: identical contexts produce
/// byte-identical output. Region order is fixed and part of the output
/// contract since it defines visual stacking and landmark order: banner,
/// main content, first sidebar, second sidebar, footer, all inside the
/// container wrapper of the document shell. Optional regions render only
/// when their markup is set and non-empty.
///
/// # Arguments
///
/// * `context`: Fully-populated view context
///
/// # Returns
///
/// Rendered HTML document markup; callers convert with `into_string()`
///
/// # Examples
///
/// ```no_run
/// use downpage::{Config, build_context, pages};
///
/// let config = Config::parse();
/// let context = build_context(&config)?;
/// let html = pages::maintenance::render(&context).into_string();
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn render(context: &RenderContext) -> Markup {
    document_shell(
        context,
        html! {
            (banner(context))
            (content_region(context))
            @if let Some(markup) = context.sidebar_first_markup.as_ref().filter(|m| !m.is_empty()) {
                (sidebar("l-sidebar-first", markup))
            }
            @if let Some(markup) = context.sidebar_second_markup.as_ref().filter(|m| !m.is_empty()) {
                (sidebar("l-sidebar-second", markup))
            }
            @if let Some(markup) = context.footer_markup.as_ref().filter(|m| !m.is_empty()) {
                (footer_region(markup))
            }
        },
    )
}
