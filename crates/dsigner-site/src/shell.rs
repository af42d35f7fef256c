//! Document shell shared by every page.

use dsigner_core::Route;
use dsigner_motion::runtime_script;
use dsigner_streaming::{HeadContent, Shell};

use crate::pages::RenderContext;
use crate::sections::{render_footer, render_navigation};
use crate::styles::SITE_STYLES;

const DESCRIPTION: &str =
    "Luxury timepieces crafted with Swiss precision and Indian mastery since 1979.";

/// Build the shell for a page.
///
/// The navigation opens the body; the footer, the motion manifest and the
/// runtime close it, so they arrive after every streamed section.
pub fn create_shell(route: Option<Route>, ctx: &RenderContext<'_>, manifest_tag: &str) -> Shell {
    let brand = &ctx.config.brand;
    let title = match route {
        Some(route) => route.title(brand),
        None => format!("Page Not Found | {}", brand),
    };

    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", DESCRIPTION)
        .with_meta("theme-color", "#0a0a0a")
        .with_style(SITE_STYLES);

    Shell::new(head)
        .with_body_start(format!(
            "<body>\n{}\n<main>\n",
            render_navigation(brand, route, &ctx.content.menu_contact)
        ))
        .with_body_end(format!(
            "\n</main>\n{}\n{}\n<script>{}</script>\n</body>\n</html>",
            render_footer(&ctx.content.footer, brand, ctx.year),
            manifest_tag,
            runtime_script()
        ))
}
