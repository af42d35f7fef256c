//! Page composition.
//!
//! Each page turns a `RenderContext` into an ordered list of sections and
//! registers its animations on the page's `RevealCoordinator`. `build_page`
//! wraps the result in the shared shell.

mod about;
mod contact;
mod designer;
mod escort;
mod home;
mod not_found;
mod strengths;

use chrono::{Datelike, Utc};
use dsigner_cache::Wishlist;
use dsigner_core::{Route, SiteConfig};
use dsigner_motion::{CarouselSpec, RevealCoordinator};
use dsigner_streaming::{Section, Shell};

use crate::content::SiteContent;
use crate::error::SiteError;
use crate::shell::create_shell;
use crate::state::PageState;

/// Everything a page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub content: &'a SiteContent,
    pub state: &'a PageState,
    /// Liked products; only catalog pages read it.
    pub wishlist: &'a Wishlist,
    /// Year shown in the footer.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a SiteConfig,
        content: &'a SiteContent,
        state: &'a PageState,
        wishlist: &'a Wishlist,
    ) -> Self {
        Self {
            config,
            content,
            state,
            wishlist,
            year: Utc::now().year(),
        }
    }

    /// Pin the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub(crate) fn fallback_image(&self) -> &'a str {
        &self.config.assets.fallback_image
    }
}

/// Sections of a page plus the carousel it hands to the runtime, if any.
#[derive(Debug, Default)]
pub struct Composition {
    pub sections: Vec<Section>,
    pub carousel: Option<CarouselSpec>,
}

impl Composition {
    fn push(&mut self, name: &str, html: String) {
        self.sections.push(Section::new(name, html));
    }
}

/// A composed page, ready to stream.
#[derive(Debug, Clone)]
pub struct Page {
    /// `None` for the not-found page.
    pub route: Option<Route>,
    pub status: u16,
    pub shell: Shell,
    pub sections: Vec<Section>,
}

impl Page {
    /// Cache-Control header value.
    pub fn cache_control(&self) -> &'static str {
        match self.route {
            Some(route) => route.cache_control(),
            None => "no-store",
        }
    }

    /// HTML sent before the first section.
    pub fn opening(&self) -> String {
        self.shell.render_opening()
    }

    /// HTML sent after the last section.
    pub fn closing(&self) -> String {
        self.shell.render_closing()
    }

    /// The whole document in one string.
    pub fn render(&self) -> String {
        let mut html = self.opening();
        for section in &self.sections {
            html.push_str(&section.html);
        }
        html.push_str(&self.closing());
        html
    }
}

/// Compose the page for `route`; `None` renders the not-found page.
///
/// Animation triggers are collected for this page view only: the
/// coordinator is torn down once the manifest has been taken.
pub fn build_page(route: Option<Route>, ctx: &RenderContext<'_>) -> Result<Page, SiteError> {
    let mut coordinator = RevealCoordinator::new();
    let (composition, manifest) = {
        let mut motion = coordinator.scope();
        let composition = match route {
            Some(Route::Home) => home::compose(ctx, &mut motion)?,
            Some(Route::About) => about::compose(ctx, &mut motion)?,
            Some(Route::Strengths) => strengths::compose(ctx, &mut motion)?,
            Some(Route::Designer) => designer::compose(ctx, &mut motion)?,
            Some(Route::Escort) => escort::compose(ctx, &mut motion)?,
            Some(Route::Contact) => contact::compose(ctx, &mut motion)?,
            None => not_found::compose(ctx, &mut motion)?,
        };
        let mut manifest = motion.manifest();
        if let Some(carousel) = composition.carousel.clone() {
            manifest = manifest.with_carousel(carousel);
        }
        (composition, manifest)
    };

    let shell = create_shell(route, ctx, &manifest.to_script_tag()?);

    Ok(Page {
        route,
        status: if route.is_some() { 200 } else { 404 },
        shell,
        sections: composition.sections,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dsigner_core::QueryParams;

    pub(crate) struct Fixture {
        pub config: SiteConfig,
        pub content: SiteContent,
        pub state: PageState,
        pub wishlist: Wishlist,
    }

    impl Fixture {
        pub fn new(query: &str) -> Self {
            Self {
                config: SiteConfig::default(),
                content: SiteContent::default(),
                state: PageState::from_query(&QueryParams::parse(query)),
                wishlist: Wishlist::new(),
            }
        }

        pub fn liking(mut self, ids: &[i64]) -> Self {
            self.wishlist = Wishlist::from_ids(ids.iter().copied().map(Into::into));
            self
        }

        pub fn ctx(&self) -> RenderContext<'_> {
            RenderContext::new(&self.config, &self.content, &self.state, &self.wishlist)
                .with_year(2026)
        }

        pub fn page(&self, route: Option<Route>) -> Page {
            build_page(route, &self.ctx()).unwrap()
        }
    }

    fn manifest_json(html: &str) -> serde_json::Value {
        let start = html.find(r#"id="motion-manifest">"#).unwrap() + r#"id="motion-manifest">"#.len();
        let end = start + html[start..].find("</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_every_route_renders() {
        let fixture = Fixture::new("");
        for route in Route::ALL {
            let page = fixture.page(Some(route));
            let html = page.render();
            assert_eq!(page.status, 200);
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(&format!("<title>{}</title>", route.title("DSIGNER'S"))));
            assert!(html.ends_with("</html>"));
            assert!(!page.sections.is_empty());
        }
    }

    #[test]
    fn test_shell_wraps_sections() {
        let page = Fixture::new("").page(Some(Route::About));
        let opening = page.opening();
        let closing = page.closing();

        assert!(opening.contains(r#"data-nav"#));
        assert!(opening.ends_with("<main>\n"));
        assert!(closing.starts_with("\n</main>"));
        assert!(closing.contains("site-footer"));
        assert!(closing.contains(r#"id="motion-manifest""#));
        assert!(closing.contains("&copy; 2026"));
    }

    #[test]
    fn test_manifest_is_valid_json() {
        let html = Fixture::new("").page(Some(Route::Home)).render();
        let manifest = manifest_json(&html);
        assert_eq!(manifest["nav_scrolled_at"], 100);
        assert!(manifest["triggers"].as_array().unwrap().len() > 3);
        assert_eq!(manifest["carousel"]["interval_ms"], 5000);
        assert_eq!(manifest["carousel"]["transition_ms"], 700);
    }

    #[test]
    fn test_cache_headers() {
        let fixture = Fixture::new("");
        assert_eq!(fixture.page(Some(Route::Designer)).cache_control(), "no-store");
        assert_eq!(fixture.page(Some(Route::Escort)).cache_control(), "no-store");
        assert_eq!(fixture.page(None).cache_control(), "no-store");
        assert!(fixture.page(Some(Route::Home)).cache_control().starts_with("public"));
    }

    #[test]
    fn test_not_found() {
        let page = Fixture::new("").page(None);
        let html = page.render();
        assert_eq!(page.status, 404);
        assert!(html.contains("<title>Page Not Found | DSIGNER'S</title>"));
        assert!(!html.contains("aria-current=\"page\""));
    }

    #[test]
    fn test_configured_brand() {
        let mut fixture = Fixture::new("");
        fixture.config.brand = "Atelier".to_string();
        let html = fixture.page(Some(Route::Contact)).render();
        assert!(html.contains("<title>Contact Us | Atelier</title>"));
    }
}
