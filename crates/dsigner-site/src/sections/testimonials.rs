//! Testimonial carousel.

use dsigner_motion::Carousel;

use crate::content::TestimonialsContent;
use crate::html::{active_class, heading, html_escape};

/// Selector of the carousel root, shared with the motion manifest.
pub const CAROUSEL_TARGET: &str = "[data-carousel]";

/// Render the carousel with `carousel.active()` showing.
///
/// Prev/next and dots are plain `?slide=` links, so the carousel works
/// without the runtime; with it, clicks are intercepted and animated.
pub fn render_testimonials(
    content: &TestimonialsContent,
    carousel: &Carousel,
    page_path: &str,
) -> String {
    let active = carousel.active();
    let slide_href = |index: usize| format!("{}?slide={}#testimonials", page_path, index);

    let slides: String = content
        .testimonials
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let stars = "&#9733;".repeat(usize::from(t.rating));
            format!(
                r#"<article class="testimonial-slide" data-slide="{}"{}>
                <div class="stars" aria-label="{} out of 5">{}</div>
                <blockquote class="testimonial-quote">&ldquo;{}&rdquo;</blockquote>
                <div class="testimonial-author">
                    <div class="testimonial-avatar">{}</div>
                    <div class="author-info">
                        <div class="author-name">{}</div>
                        <div class="author-title">{} &middot; {}</div>
                    </div>
                </div>
            </article>"#,
                i,
                if i == active { "" } else { " hidden" },
                t.rating,
                stars,
                html_escape(&t.text),
                html_escape(&t.initials()),
                html_escape(&t.name),
                html_escape(&t.role),
                html_escape(&t.location)
            )
        })
        .collect();

    let dots: String = (0..carousel.len())
        .map(|i| {
            format!(
                r#"<a href="{}" class="dot{}" data-slide-to="{}" aria-label="Show testimonial {}"></a>"#,
                slide_href(i),
                active_class(i == active),
                i,
                i + 1
            )
        })
        .collect();

    format!(
        r#"<section id="testimonials" class="testimonials" data-section="testimonials">
    <div class="section-header">
        {}
    </div>
    <div class="carousel" data-carousel>
        <div class="carousel-track">
            {}
        </div>
        <div class="carousel-controls">
            <a href="{}" class="carousel-arrow" data-carousel-prev aria-label="Previous testimonial">&#8249;</a>
            <div class="carousel-dots">{}</div>
            <a href="{}" class="carousel-arrow" data-carousel-next aria-label="Next testimonial">&#8250;</a>
        </div>
    </div>
</section>"#,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        slides,
        slide_href(carousel.prev_index()),
        dots,
        slide_href(carousel.next_index())
    )
}
