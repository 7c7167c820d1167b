//! Document shell component

use maud::{DOCTYPE, Markup, html};

use crate::context::RenderContext;

/// Wraps page regions with the standard HTML document structure
///
/// Emits the DOCTYPE, the `html` element with language and direction
/// attributes, the head section, and the body with its container wrapper.
/// Head order is fixed: injected head markup, the escaped title, stylesheet
/// markup, then script markup. The body class attribute is always emitted,
/// even when the class list is empty.
///
/// # Arguments
///
/// * `context`: View context supplying language, head values, and body classes
/// * `body`: Page-specific body markup placed inside the container
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn document_shell(context: &RenderContext, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html xmlns="http://www.w3.org/1999/xhtml"
            xml:lang=(context.language.code)
            lang=(context.language.code)
            dir=(context.language.direction.as_str()) {
            head {
                (context.head_markup)
                title { (context.head_title) }
                (context.css_markup)
                (context.js_markup)
            }
            body class=(context.body_class_attr()) {
                div class="l-container" {
                    (body)
                }
            }
        }
    }
}
