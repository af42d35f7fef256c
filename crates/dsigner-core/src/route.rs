//! Page routes and navigation entries.

use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Strengths,
    Designer,
    Escort,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Strengths,
        Route::Designer,
        Route::Escort,
        Route::Contact,
    ];

    /// Resolve a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Strengths => "/strengths",
            Route::Designer => "/designer",
            Route::Escort => "/escort",
            Route::Contact => "/contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Strengths => "Our Strengths",
            Route::Designer => "Designer",
            Route::Escort => "Escort",
            Route::Contact => "Contact Us",
        }
    }

    /// Document title.
    pub fn title(&self, brand: &str) -> String {
        match self {
            Route::Home => format!("{} | Luxury Timepieces", brand),
            _ => format!("{} | {}", self.nav_label(), brand),
        }
    }

    /// Whether the page renders wishlist state.
    pub fn shows_wishlist(&self) -> bool {
        matches!(self, Route::Designer | Route::Escort)
    }

    /// Cache-Control value for the page.
    ///
    /// Catalog pages embed wishlist and selection state, so they are never cached.
    pub fn cache_control(&self) -> &'static str {
        if self.shows_wishlist() {
            "no-store"
        } else {
            "public, max-age=3600, stale-while-revalidate=300"
        }
    }

    /// Navigation entries with the active one marked.
    pub fn nav_links(active: Option<Route>) -> Vec<NavLink> {
        Self::ALL
            .into_iter()
            .map(|route| NavLink {
                route,
                active: Some(route) == active,
            })
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}
