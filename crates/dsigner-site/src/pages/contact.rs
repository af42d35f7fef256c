//! Contact page.

use dsigner_motion::RevealCoordinator;

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{hero_entrance, section_reveal, SECTION_THRESHOLD};
use crate::sections::{render_contact_details, render_enquiry_form, render_hero, render_map};

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let contact = &ctx.content.contact;
    let mut page = Composition::default();

    page.push("hero", render_hero(&contact.hero, "contact", None));
    hero_entrance(motion)?;

    page.push("contact-details", render_contact_details(contact));
    section_reveal(motion, "#contact-details", SECTION_THRESHOLD)?;

    page.push("inquiry", render_enquiry_form("inquiry", &contact.inquiry_form));
    section_reveal(motion, "#inquiry", SECTION_THRESHOLD)?;

    page.push("map", render_map(contact));

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::Fixture;
    use dsigner_core::Route;

    #[test]
    fn test_contact_page() {
        let page = Fixture::new("").page(Some(Route::Contact));
        let html = page.render();
        assert!(html.contains(r#"id="inquiry""#));
        assert!(html.contains(r#"id="map""#));
        assert!(html.contains(r#"aria-current="page">Contact Us</a>"#));
    }
}
