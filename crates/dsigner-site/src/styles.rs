//! Site stylesheet, inlined into the shell.

pub(crate) const SITE_STYLES: &str = r##"
:root {
    --gold: #d4af37;
    --gold-soft: #e8cf7a;
    --bg: #0a0a0a;
    --bg-alt: #141414;
    --surface: #1c1c1c;
    --text: #f5f5f0;
    --text-muted: #9a9a92;
    --border: rgba(212, 175, 55, 0.2);
    --serif: 'Playfair Display', Georgia, serif;
    --sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: var(--sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; }
h1, h2, h3, h4 { font-family: var(--serif); font-weight: 400; letter-spacing: 0.01em; }
.accent { color: var(--gold); font-style: italic; }
.eyebrow {
    color: var(--gold);
    font-size: 0.75rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    margin-bottom: 1rem;
}

/* Buttons */
.btn-primary, .btn-outline, .btn-outline-light, .btn-buy {
    display: inline-block;
    padding: 0.9rem 2.2rem;
    font-size: 0.8rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    border: 1px solid var(--gold);
    cursor: pointer;
    transition: background 0.3s, color 0.3s;
}
.btn-primary, .btn-buy { background: var(--gold); color: var(--bg); }
.btn-primary:hover, .btn-buy:hover { background: transparent; color: var(--gold); }
.btn-outline { background: transparent; color: var(--gold); }
.btn-outline:hover { background: var(--gold); color: var(--bg); }
.btn-outline-light { background: transparent; color: var(--text); border-color: var(--text); }

/* Navigation */
.site-nav {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 100;
    transition: background 0.4s, padding 0.4s;
}
.site-nav.scrolled { background: rgba(10, 10, 10, 0.92); backdrop-filter: blur(10px); border-bottom: 1px solid var(--border); }
.nav-container {
    max-width: 1400px;
    margin: 0 auto;
    padding: 1.5rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.site-nav.scrolled .nav-container { padding: 1rem 2rem; }
.logo { font-family: var(--serif); font-size: 1.5rem; letter-spacing: 0.15em; color: var(--gold); }
.nav-links { display: flex; gap: 2rem; }
.nav-link { font-size: 0.8rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--text-muted); }
.nav-link:hover, .nav-link.active { color: var(--gold); }
.nav-actions { display: flex; align-items: center; gap: 1rem; }
.cart-button { position: relative; }
.cart-badge {
    position: absolute;
    top: -0.5rem;
    right: -0.6rem;
    background: var(--gold);
    color: var(--bg);
    border-radius: 999px;
    font-size: 0.65rem;
    padding: 0 0.35rem;
}
.menu-toggle { display: none; background: none; border: 0; color: var(--text); font-size: 1.4rem; cursor: pointer; }
.mobile-menu { display: none; }
.mobile-menu.open {
    display: flex;
    flex-direction: column;
    gap: 2rem;
    position: fixed;
    inset: 0;
    padding: 6rem 2rem 2rem;
    background: var(--bg);
}
.mobile-links { display: flex; flex-direction: column; gap: 1.2rem; }
.mobile-link { font-family: var(--serif); font-size: 1.8rem; }
.mobile-link.active { color: var(--gold); }
.mobile-contact { color: var(--text-muted); font-size: 0.85rem; }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 8rem 2rem 4rem;
    background: radial-gradient(ellipse at 70% 40%, #1f1a0e 0%, var(--bg) 60%);
}
.hero-inner {
    max-width: 1400px;
    margin: 0 auto;
    width: 100%;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.hero h1 { font-size: clamp(2.8rem, 6vw, 5.5rem); line-height: 1.05; margin-bottom: 1.5rem; }
.hero-lead { color: var(--text-muted); max-width: 32rem; margin-bottom: 2.5rem; }
.hero-note { margin-top: 1.5rem; color: var(--text-muted); font-size: 0.85rem; }
.hero-spotlight { position: absolute; inset: 0; pointer-events: none; }
.hero-inner { position: relative; }
.hero-media { position: relative; overflow: hidden; }
.hero-img { width: 100%; object-fit: contain; will-change: transform; }
.light-sweep {
    position: absolute;
    top: 0;
    left: -100%;
    width: 40%;
    height: 100%;
    background: linear-gradient(100deg, transparent, rgba(255, 255, 255, 0.15), transparent);
    pointer-events: none;
}
.hero-escort { background: radial-gradient(ellipse at 30% 50%, #101820 0%, var(--bg) 60%); }

/* Section scaffolding */
section { padding: 7rem 2rem; }
.section-header { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }
.section-header h2 { font-size: clamp(2rem, 4vw, 3.2rem); }
.section-subtitle { color: var(--text-muted); margin-top: 1rem; }
.section-cta { text-align: center; margin-top: 3rem; }

/* Collections */
.collections-grid {
    max-width: 1400px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.collection-card { position: relative; overflow: hidden; background: var(--surface); aspect-ratio: 3 / 4; }
.collection-img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.8s; }
.collection-card:hover .collection-img { transform: scale(1.05); }
.collection-overlay {
    position: absolute;
    inset: auto 0 0 0;
    padding: 2rem;
    background: linear-gradient(transparent, rgba(0, 0, 0, 0.9));
}
.collection-badges { display: flex; gap: 1rem; font-size: 0.75rem; color: var(--gold); margin-top: 0.75rem; }

/* Features */
.features { background: var(--bg-alt); }
.features-grid {
    max-width: 1400px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}
.feature-card { padding: 2.5rem 2rem; border: 1px solid var(--border); background: var(--surface); }
.feature-icon { font-size: 2rem; margin-bottom: 1rem; }
.feature-highlight { color: var(--gold); font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; }
.feature-title { font-size: 1.3rem; margin: 0.5rem 0; }
.feature-description { color: var(--text-muted); font-size: 0.9rem; }
.stats-row, .stats-band {
    max-width: 1400px;
    margin: 4rem auto 0;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}
.stats-band { margin: 0 auto; padding: 4rem 2rem; border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
.stat-value { display: block; font-family: var(--serif); font-size: 2.6rem; color: var(--gold); }
.stat-label { color: var(--text-muted); font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; }

/* Parallax */
.parallax { position: relative; overflow: hidden; min-height: 70vh; display: flex; align-items: center; justify-content: center; }
.parallax-bg {
    position: absolute;
    inset: -15% 0;
    background: url('/watch-hero-gold.png') center / cover no-repeat;
    opacity: 0.25;
}
.parallax-content { position: relative; text-align: center; max-width: 44rem; }
.parallax-content h2 { font-size: clamp(2.2rem, 5vw, 4rem); margin-bottom: 1.5rem; }

/* Testimonials */
.carousel { max-width: 56rem; margin: 0 auto; text-align: center; }
.carousel-track { position: relative; min-height: 16rem; }
.testimonial-slide { transition: opacity 0.7s; }
.testimonial-slide[hidden] { display: none; }
.stars { color: var(--gold); letter-spacing: 0.3em; margin-bottom: 1.5rem; }
.testimonial-quote { font-family: var(--serif); font-size: 1.5rem; font-style: italic; margin-bottom: 2rem; }
.testimonial-author { display: flex; justify-content: center; align-items: center; gap: 1rem; }
.testimonial-avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    display: grid;
    place-items: center;
    background: var(--gold);
    color: var(--bg);
    font-weight: 600;
}
.author-name { font-weight: 600; }
.author-title { color: var(--text-muted); font-size: 0.8rem; }
.carousel-controls { display: flex; justify-content: center; align-items: center; gap: 2rem; margin-top: 2.5rem; }
.carousel-arrow { color: var(--gold); font-size: 1.4rem; }
.carousel-dots { display: flex; gap: 0.6rem; }
.dot { width: 0.6rem; height: 0.6rem; border-radius: 50%; background: var(--border); border: 0; }
.dot.active { background: var(--gold); }

/* CTA */
.cta { position: relative; overflow: hidden; text-align: center; }
.cta-glow {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 40rem;
    height: 40rem;
    transform: translate(-50%, -50%);
    background: radial-gradient(circle, rgba(212, 175, 55, 0.25), transparent 65%);
    pointer-events: none;
}
.cta-content { position: relative; max-width: 44rem; margin: 0 auto; }
.magnetic { display: inline-block; }
.cta-content h2 { font-size: clamp(2.2rem, 5vw, 3.8rem); margin-bottom: 1.5rem; }
.cta-lead { color: var(--text-muted); margin-bottom: 2.5rem; }
.assurances { display: flex; justify-content: center; gap: 2rem; margin-top: 2rem; color: var(--text-muted); font-size: 0.8rem; list-style: none; }

/* Info pages */
.info-grid {
    max-width: 1400px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 1.5rem;
}
.info-card { padding: 2.5rem 2rem; background: var(--surface); border: 1px solid var(--border); }
.info-icon { font-size: 2rem; margin-bottom: 1rem; }
.story { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; max-width: 1400px; margin: 0 auto; align-items: center; }
.story-copy p { color: var(--text-muted); margin-bottom: 1.2rem; }
.timeline { max-width: 48rem; margin: 0 auto; border-left: 1px solid var(--border); padding-left: 2rem; }
.milestone { margin-bottom: 2.5rem; }
.milestone-year { color: var(--gold); font-family: var(--serif); font-size: 1.6rem; }
.enquiry { background: var(--bg-alt); }
.enquiry-form { max-width: 40rem; margin: 0 auto; display: grid; gap: 1.2rem; }
.form-field { display: grid; gap: 0.4rem; }
.form-field label { font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--text-muted); }
.form-field input, .form-field select, .form-field textarea, .newsletter-form input, .sort-form select {
    background: var(--surface);
    border: 1px solid var(--border);
    color: var(--text);
    padding: 0.8rem 1rem;
    font: inherit;
}
.contact-info { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; max-width: 1400px; margin: 0 auto; }
.contact-details { display: grid; gap: 2rem; }
.contact-item h4 { color: var(--gold); margin-bottom: 0.4rem; }
.contact-note { color: var(--text-muted); font-size: 0.85rem; }
.map-band iframe { width: 100%; height: 24rem; border: 0; filter: grayscale(1) invert(0.9); }
.comparison-table { width: 100%; max-width: 64rem; margin: 0 auto; border-collapse: collapse; }
.comparison-table th, .comparison-table td { padding: 1rem; border-bottom: 1px solid var(--border); text-align: left; }
.comparison-table th { color: var(--gold); font-weight: 400; letter-spacing: 0.1em; }

/* Catalog */
.catalog-toolbar { max-width: 1400px; margin: 0 auto 3rem; display: flex; justify-content: space-between; align-items: center; gap: 2rem; flex-wrap: wrap; }
.filter-bar { display: flex; justify-content: center; gap: 0.8rem; margin-bottom: 3rem; flex-wrap: wrap; }
.catalog-toolbar .filter-bar { margin-bottom: 0; }
.filter-tab {
    padding: 0.5rem 1.4rem;
    border: 1px solid var(--border);
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--text-muted);
}
.filter-tab.active { border-color: var(--gold); color: var(--gold); }
.sort-form { display: flex; align-items: center; gap: 0.8rem; font-size: 0.8rem; color: var(--text-muted); }
.product-grid {
    max-width: 1400px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.product-card { position: relative; background: var(--surface); border: 1px solid transparent; transition: border-color 0.3s; }
.product-card:hover { border-color: var(--border); }
.product-media { position: relative; display: block; aspect-ratio: 1; overflow: hidden; background: var(--bg-alt); }
.product-img { width: 100%; height: 100%; object-fit: contain; transition: transform 0.6s; }
.product-card:hover .product-img { transform: scale(1.05); }
.quick-view {
    position: absolute;
    inset: auto 0 0 0;
    padding: 0.8rem;
    text-align: center;
    background: rgba(10, 10, 10, 0.85);
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    opacity: 0;
    transition: opacity 0.3s;
}
.product-card:hover .quick-view { opacity: 1; }
.product-info { padding: 1.2rem 1.2rem 0; }
.product-series { color: var(--gold); font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; }
.product-name { font-size: 1.15rem; }
.product-price { color: var(--text-muted); }
.product-actions { display: flex; gap: 0.6rem; padding: 1.2rem; align-items: center; }
.product-actions .btn-buy { flex: 1; padding: 0.7rem; }
.wishlist-btn { background: none; border: 1px solid var(--border); color: var(--text-muted); width: 2.6rem; height: 2.6rem; cursor: pointer; font-size: 1.1rem; }
.wishlist-btn.active { color: var(--gold); border-color: var(--gold); }
.grid-empty { text-align: center; color: var(--text-muted); padding: 4rem 0; }

/* Designer */
.showcase { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; max-width: 1400px; margin: 0 auto; align-items: center; }
.showcase-media { overflow: hidden; }
.showcase-img { width: 100%; }
.badge { display: inline-block; color: var(--gold); border: 1px solid var(--gold); padding: 0.3rem 0.9rem; font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; margin: 1.5rem 0; }
.texture { position: relative; min-height: 70vh; display: flex; align-items: flex-end; overflow: hidden; }
.texture-img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.4; }
.texture-copy { position: relative; max-width: 40rem; }
.closing-banner { text-align: center; }
.closing-actions { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
.detail-overlay { position: fixed; inset: 0; z-index: 200; display: grid; place-items: center; }
.detail-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.8); }
.detail-panel {
    position: relative;
    display: grid;
    grid-template-columns: 1fr 1fr;
    max-width: 64rem;
    width: calc(100% - 2rem);
    max-height: 90vh;
    overflow: auto;
    background: var(--surface);
    border: 1px solid var(--border);
}
.detail-close { position: absolute; top: 1rem; right: 1.2rem; color: var(--text-muted); }
.detail-media { background: var(--bg-alt); padding: 2rem; }
.detail-body { padding: 3rem 2.5rem; }
.detail-body h2 { font-size: 2.2rem; }
.detail-price { color: var(--gold); font-size: 1.4rem; margin: 0.5rem 0 1.5rem; }
.detail-description { color: var(--text-muted); margin-bottom: 2rem; }
.spec-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.2rem; margin-bottom: 2rem; }
.spec-grid dt { font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--text-muted); }
.detail-actions { display: flex; gap: 1rem; align-items: center; }
.sticky-bar {
    position: fixed;
    inset: auto 0 0 0;
    z-index: 150;
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 0.8rem 2rem;
    background: rgba(20, 20, 20, 0.95);
    border-top: 1px solid var(--border);
}
.sticky-img { width: 3rem; height: 3rem; object-fit: contain; }
.sticky-info { flex: 1; }
.sticky-info p { color: var(--gold); }
.sticky-close { color: var(--text-muted); }

/* Footer */
.site-footer { background: var(--bg-alt); border-top: 1px solid var(--border); padding: 5rem 2rem 2rem; }
.footer-container { max-width: 1400px; margin: 0 auto; display: grid; grid-template-columns: 2fr repeat(3, 1fr) 2fr; gap: 3rem; }
.footer-brand p { color: var(--text-muted); margin-top: 1rem; font-size: 0.9rem; }
.footer-column h4 { color: var(--gold); font-size: 0.85rem; letter-spacing: 0.15em; text-transform: uppercase; margin-bottom: 1.2rem; }
.footer-column a { display: block; color: var(--text-muted); font-size: 0.9rem; margin-bottom: 0.6rem; }
.footer-column a:hover { color: var(--gold); }
.newsletter-form { display: flex; gap: 0.5rem; margin-top: 1rem; }
.footer-bottom { max-width: 1400px; margin: 4rem auto 0; padding-top: 2rem; border-top: 1px solid var(--border); display: flex; justify-content: space-between; color: var(--text-muted); font-size: 0.8rem; }
.footer-legal { display: flex; gap: 1.5rem; }
.footer-motto { font-family: var(--serif); font-style: italic; color: var(--gold); }

@media (max-width: 1024px) {
    .product-grid, .features-grid, .stats-row, .stats-band { grid-template-columns: repeat(2, 1fr); }
    .footer-container { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 768px) {
    .nav-links { display: none; }
    .menu-toggle { display: block; }
    .hero-inner, .story, .showcase, .contact-info, .detail-panel { grid-template-columns: 1fr; }
    .collections-grid { grid-template-columns: 1fr; }
    .product-grid { grid-template-columns: 1fr; }
    .footer-container { grid-template-columns: 1fr; }
    section { padding: 5rem 1.5rem; }
}

@media (prefers-reduced-motion: reduce) {
    .light-sweep, .cta-glow { display: none; }
}
"##;
