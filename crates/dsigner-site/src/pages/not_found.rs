//! Page for unknown paths.

use dsigner_motion::RevealCoordinator;

use super::{Composition, RenderContext};
use crate::content::HeroContent;
use crate::error::SiteError;
use crate::motion::hero_entrance;
use crate::sections::render_hero;

pub(super) fn compose(
    _ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let hero = HeroContent::new(
        "Error 404",
        "Lost in",
        "Time.",
        "The page you are looking for has moved or never existed.",
    )
    .with_cta("Return Home", "/");

    let mut page = Composition::default();
    page.push("hero", render_hero(&hero, "not-found", None));
    hero_entrance(motion)?;
    Ok(page)
}
