//! Site banner component

use maud::{Markup, html};

use crate::context::RenderContext;

/// Renders the banner landmark at the top of the page
///
/// Emits the logo image when a logo URL is set, the name-and-slogan block
/// when either the site name or the slogan is set, and any extra header
/// markup verbatim. The logo alt text comes pre-localized from the context.
///
/// # Arguments
///
/// * `context`: View context supplying logo, branding, and header markup
///
/// # Returns
///
/// Header landmark markup with role "banner"
pub fn banner(context: &RenderContext) -> Markup {
    html! {
        header role="banner" {
            @if let Some(logo) = context.logo_url.as_deref().filter(|url| !url.is_empty()) {
                img src=(logo) alt=(context.logo_alt);
            }
            @if context.has_branding() {
                div class="name-and-slogan" {
                    @if let Some(name) = context.site_name.as_deref().filter(|name| !name.is_empty()) {
                        strong class="site-name" { (name) }
                    }
                    @if let Some(slogan) = context.site_slogan.as_deref().filter(|slogan| !slogan.is_empty()) {
                        div class="site-slogan" { (slogan) }
                    }
                }
            }
            @if let Some(markup) = &context.header_markup {
                (markup)
            }
        }
    }
}
