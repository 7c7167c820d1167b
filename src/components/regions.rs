//! Content, sidebar, and footer region components

use maud::{Markup, html};

use crate::context::{RenderContext, SafeHtml};

/// Renders the main landmark with heading, messages, and content
///
/// The heading and status messages render only when set; the content markup
/// always renders verbatim. Heading text is escaped, the other two fields
/// are pre-escaped markup.
///
/// # Arguments
///
/// * `context`: View context supplying title, messages, and content
///
/// # Returns
///
/// Main landmark markup with role "main"
pub fn content_region(context: &RenderContext) -> Markup {
    html! {
        main role="main" {
            @if let Some(title) = context.title.as_deref().filter(|title| !title.is_empty()) {
                h1 { (title) }
            }
            @if let Some(messages) = context.messages_markup.as_ref().filter(|m| !m.is_empty()) {
                (messages)
            }
            (context.content_markup)
        }
    }
}

/// Renders a complementary sidebar landmark
///
/// # Arguments
///
/// * `class`: Layout class for the aside element
/// * `markup`: Pre-escaped sidebar content
pub fn sidebar(class: &str, markup: &SafeHtml) -> Markup {
    html! {
        aside class=(class) role="complementary" {
            (markup)
        }
    }
}

/// Renders the footer landmark
///
/// # Arguments
///
/// * `markup`: Pre-escaped footer content
pub fn footer_region(markup: &SafeHtml) -> Markup {
    html! {
        footer role="contentinfo" {
            (markup)
        }
    }
}

/// Renders a status notice banner from plain text
///
/// Used by the composition layer to turn an operator-supplied notice into
/// the messages markup placed above the page content. The text is escaped.
///
/// # Arguments
///
/// * `text`: Notice text to display
pub fn status_notice(text: &str) -> Markup {
    html! {
        div class="messages status" {
            p { (text) }
        }
    }
}
