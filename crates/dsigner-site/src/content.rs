//! Static marketing content for every page.

use dsigner_catalog::Money;
use serde::{Deserialize, Serialize};

/// A titled page header: eyebrow, headline with an accented tail, lead text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub lead: String,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub image: Option<String>,
}

impl HeroContent {
    pub fn new(eyebrow: &str, title: &str, accent: &str, lead: &str) -> Self {
        Self {
            eyebrow: eyebrow.to_string(),
            title: title.to_string(),
            accent: accent.to_string(),
            lead: lead.to_string(),
            cta_text: None,
            cta_url: None,
            image: None,
        }
    }

    pub fn with_cta(mut self, text: &str, url: &str) -> Self {
        self.cta_text = Some(text.to_string());
        self.cta_url = Some(url.to_string());
        self
    }

    pub fn with_image(mut self, src: &str) -> Self {
        self.image = Some(src.to_string());
        self
    }
}

/// A series card on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub description: String,
    pub image: String,
    pub model_count: u32,
    pub price_from: Money,
    pub url: String,
}

impl Collection {
    pub fn new(
        name: &str,
        description: &str,
        image: &str,
        model_count: u32,
        price_from: i64,
        url: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            model_count,
            price_from: Money::inr(price_from),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub subtitle: String,
    pub collections: Vec<Collection>,
    pub cta_text: String,
    pub cta_url: String,
}

impl Default for CollectionsContent {
    fn default() -> Self {
        Self {
            eyebrow: "Our Collections".to_string(),
            title: "Find Your Perfect".to_string(),
            accent: "Timepiece".to_string(),
            subtitle: "Each collection represents a unique philosophy of design and craftsmanship.".to_string(),
            collections: vec![
                Collection::new(
                    "Chrono Series",
                    "Precision timing meets bold design. For those who command every second.",
                    "/collection-chrono.jpg",
                    12,
                    74_999,
                    "/designer?category=chrono",
                ),
                Collection::new(
                    "Heritage Series",
                    "Timeless elegance inspired by centuries of horological mastery.",
                    "/collection-heritage.jpg",
                    8,
                    109_999,
                    "/designer?category=heritage",
                ),
                Collection::new(
                    "Elite Series",
                    "The pinnacle of luxury. Exquisite complications for the discerning collector.",
                    "/collection-elite.jpg",
                    6,
                    299_999,
                    "/designer?category=elite",
                ),
            ],
            cta_text: "View All Collections".to_string(),
            cta_url: "/designer".to_string(),
        }
    }
}

/// A feature card. `highlight` is the short badge above the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub highlight: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str, highlight: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            highlight: highlight.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub subtitle: String,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        Self {
            eyebrow: "Engineering Excellence".to_string(),
            title: "Crafted Without".to_string(),
            accent: "Compromise".to_string(),
            subtitle: "Every component is meticulously selected and tested to ensure exceptional performance and longevity.".to_string(),
            features: vec![
                Feature::new(
                    "💎",
                    "Sapphire Glass",
                    "Scratch-resistant sapphire crystal with anti-reflective coating ensures crystal-clear visibility in any light condition.",
                    "9H Hardness",
                ),
                Feature::new(
                    "⚙️",
                    "Swiss Movement",
                    "Precision-engineered Swiss automatic movement with 28,800 vibrations per hour for unparalleled accuracy.",
                    "ETA 2824-2",
                ),
                Feature::new(
                    "🔋",
                    "72 Hour Reserve",
                    "Extended power reserve ensures your timepiece keeps perfect time even after days off the wrist.",
                    "3 Days",
                ),
                Feature::new(
                    "💧",
                    "Waterproof 100m",
                    "Professional-grade water resistance suitable for swimming and snorkeling adventures.",
                    "10 ATM",
                ),
            ],
            stats: vec![
                Stat::new("0.01s", "Daily Accuracy"),
                Stat::new("316L", "Stainless Steel"),
                Stat::new("26", "Jewel Bearings"),
                Stat::new("5yr", "Global Warranty"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxContent {
    pub title: String,
    pub accent: String,
    pub lead: String,
    pub cta_text: String,
    pub cta_url: String,
}

impl Default for ParallaxContent {
    fn default() -> Self {
        Self {
            title: "Time Is".to_string(),
            accent: "Personal.".to_string(),
            lead: "Every second tells a story. Every moment becomes a memory. Wear time that reflects who you are.".to_string(),
            cta_text: "Discover Your Story".to_string(),
            cta_url: "/about".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
}

impl Testimonial {
    pub fn new(name: &str, role: &str, location: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            location: location.to_string(),
            rating: 5,
            text: text.to_string(),
        }
    }

    /// Initials shown in the avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            eyebrow: "Client Stories".to_string(),
            title: "What They".to_string(),
            accent: "Say".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "Rajesh Sharma",
                    "Business Owner",
                    "Mumbai, India",
                    "The Chrono X7 exceeded every expectation. The craftsmanship is impeccable, and the attention to detail rivals watches costing ten times as much. I receive compliments everywhere I go.",
                ),
                Testimonial::new(
                    "Priya Patel",
                    "Fashion Designer",
                    "Delhi, India",
                    "DSIGNER'S understands that a watch is more than a timepiece; it's a statement. The rose gold edition perfectly complements both my professional and evening wear. Simply exquisite.",
                ),
                Testimonial::new(
                    "Arjun Mehta",
                    "Architect",
                    "Bangalore, India",
                    "As someone who appreciates precision engineering, the Swiss movement in my DSIGNER'S has proven to be extraordinarily accurate. Three years of daily wear and it still runs within seconds.",
                ),
                Testimonial::new(
                    "Ananya Gupta",
                    "Art Gallery Owner",
                    "Kolkata, India",
                    "The Heritage collection speaks to my soul. Classic design with modern reliability. It reminds me why I fell in love with horology in the first place. A true work of art.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaContent {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
    pub lead: String,
    pub cta_text: String,
    pub cta_url: String,
    pub assurances: Vec<String>,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            eyebrow: "Begin Your Journey".to_string(),
            title: "Own Your".to_string(),
            accent: "Moment.".to_string(),
            lead: "Join thousands of collectors who have discovered the art of timeless elegance. Your perfect timepiece awaits.".to_string(),
            cta_text: "Explore Collections".to_string(),
            cta_url: "/designer".to_string(),
            assurances: vec![
                "Complimentary Shipping".to_string(),
                "30-Day Returns".to_string(),
                "5-Year Global Warranty".to_string(),
            ],
        }
    }
}

/// A footer link column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkColumn {
    pub heading: String,
    pub links: Vec<(String, String)>,
}

impl LinkColumn {
    pub fn new(heading: &str, links: &[(&str, &str)]) -> Self {
        Self {
            heading: heading.to_string(),
            links: links
                .iter()
                .map(|(label, href)| (label.to_string(), href.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub columns: Vec<LinkColumn>,
    pub newsletter: String,
    pub motto: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            tagline: "An integrated watch enterprise operating across manufacturing, distribution, and brand development for over four decades.".to_string(),
            columns: vec![
                LinkColumn::new(
                    "Quick Links",
                    &[
                        ("Home", "/"),
                        ("About Us", "/about"),
                        ("Our Strengths", "/strengths"),
                        ("Designer", "/designer"),
                    ],
                ),
                LinkColumn::new(
                    "Company",
                    &[
                        ("Escort", "/escort"),
                        ("Contact Us", "/contact"),
                        ("Privacy Policy", "/privacy"),
                        ("Terms of Use", "/terms"),
                    ],
                ),
            ],
            newsletter: "Subscribe to receive updates on our latest collections and exclusive releases.".to_string(),
            motto: "Swiss Precision | Indian Mastery".to_string(),
        }
    }
}

/// An icon card used by the about, strengths and catalog pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl InfoCard {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

impl Milestone {
    pub fn new(year: &str, title: &str, description: &str) -> Self {
        Self {
            year: year.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A heading block: eyebrow, title, optional accented tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    pub eyebrow: String,
    pub title: String,
    pub accent: String,
}

impl Heading {
    pub fn new(eyebrow: &str, title: &str, accent: &str) -> Self {
        Self {
            eyebrow: eyebrow.to_string(),
            title: title.to_string(),
            accent: accent.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub hero: HeroContent,
    pub story: Heading,
    pub story_image: String,
    pub story_paragraphs: Vec<String>,
    pub story_stats: Vec<Stat>,
    pub values: Heading,
    pub value_cards: Vec<InfoCard>,
    pub milestones: Heading,
    pub milestone_list: Vec<Milestone>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "Our Integrated Legacy",
                "Crafting Time",
                "For Four Decades",
                "DSIGNER'S is more than a watch brand. We are custodians of a legacy, blending deep industry knowledge with Swiss precision to create exceptional value.",
            ),
            story: Heading::new("Our Philosophy", "Where Heritage Meets", "Precision Excellence"),
            story_image: "/watch-macro-strap.jpg".to_string(),
            story_paragraphs: vec![
                "At DSIGNER'S, we believe that an integrated approach to watchmaking is the only way to ensure world-class quality at every touchpoint.".to_string(),
                "What started as a component-focused enterprise in 1979 has evolved into a comprehensive watch ecosystem. We don't just assemble watches; we understand the microscopic precision of every gear and the artisanal beauty of every dial.".to_string(),
                "Today, we operate across the entire value chain, from manufacturing for global private labels to curating international brands for the Indian market, all while staying true to our core of horological passion.".to_string(),
            ],
            story_stats: vec![
                Stat::new("40+", "Years of Legacy"),
                Stat::new("500+", "Private Labels"),
                Stat::new("20+", "Brand Partners"),
            ],
            values: Heading::new("What Drives Us", "Core Values", ""),
            value_cards: vec![
                InfoCard::new(
                    "🏆",
                    "Excellence",
                    "We never compromise on quality. Every component is meticulously crafted to meet the highest standards.",
                ),
                InfoCard::new(
                    "❤️",
                    "Passion",
                    "Our love for horology drives everything we do. Each timepiece is created with genuine care and dedication.",
                ),
                InfoCard::new(
                    "🎯",
                    "Precision",
                    "Swiss-engineered movements ensure accuracy that stands the test of time.",
                ),
                InfoCard::new(
                    "🌐",
                    "Heritage",
                    "Blending Indian craftsmanship with Swiss precision, we honor tradition while embracing innovation.",
                ),
            ],
            milestones: Heading::new("Our Evolution", "Key Milestones", ""),
            milestone_list: vec![
                Milestone::new(
                    "1979",
                    "The Genesis",
                    "Nagpal Bombay founded as a specialist in watch components and parts.",
                ),
                Milestone::new(
                    "1999",
                    "DSIGNER'S Launch",
                    "Established our flagship brand focusing on premium timepieces.",
                ),
                Milestone::new(
                    "2005",
                    "Swiss Integration",
                    "Strategic alliance with Swiss movement manufacturers for unparalleled precision.",
                ),
                Milestone::new(
                    "2015",
                    "International Expansion",
                    "Taking Indian craftsmanship to global markets through export divisions.",
                ),
                Milestone::new(
                    "2024",
                    "Integrated Legacy",
                    "Operating across the entire watch value chain with manufacturing excellence.",
                ),
            ],
        }
    }
}

/// A form field rendered without submission handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    Select(Vec<String>),
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            placeholder: placeholder.to_string(),
        }
    }
}

/// An enquiry form. The site has no submission endpoint for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub heading: Heading,
    pub fields: Vec<FormField>,
    pub submit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthsContent {
    pub hero: HeroContent,
    pub stats: Vec<Stat>,
    pub infrastructure: Heading,
    pub infrastructure_cards: Vec<InfoCard>,
    pub divisions: Heading,
    pub division_cards: Vec<InfoCard>,
    pub partner_form: EnquiryForm,
}

impl Default for StrengthsContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "Our Integrated Legacy",
                "Operating Across the",
                "Watch Value Chain",
                "An integrated watch enterprise operating across manufacturing, distribution, components, and brand development for over four decades.",
            ),
            stats: vec![
                Stat::new("20+", "International Brand Associations"),
                Stat::new("500+", "Private Labels Manufactured"),
            ],
            infrastructure: Heading::new("The Infrastructure", "Behind the Industry", ""),
            infrastructure_cards: vec![
                InfoCard::new(
                    "🕸️",
                    "Multi-channel Distribution Network",
                    "A structured presence across retail stores, multi-brand outlets, and digital marketplaces ensuring consistent market reach.",
                ),
                InfoCard::new(
                    "🤝",
                    "Long-standing Retail & Service Partnerships",
                    "Decades of trusted relationships with retailers and service networks built on reliability and performance.",
                ),
                InfoCard::new(
                    "🏆",
                    "Strong Supply Chain & Sourcing Expertise",
                    "Deep industry knowledge in sourcing components and managing supply chains to ensure quality and efficiency.",
                ),
            ],
            divisions: Heading::new("Capabilities", "Our Core Divisions", ""),
            division_cards: vec![
                InfoCard::new(
                    "🌐",
                    "International Brands",
                    "Curating world-class timepieces for the discerning Indian market.",
                ),
                InfoCard::new(
                    "⚙️",
                    "OEM / ODM Manufacturing",
                    "Precision manufacturing excellence for global private labels.",
                ),
                InfoCard::new(
                    "💼",
                    "B2B / Institutional Supply",
                    "Tailored corporate gifting and institutional solutions.",
                ),
                InfoCard::new(
                    "📦",
                    "Parts: Nagpal Bombay",
                    "Legacy of excellence in component sourcing and supply.",
                ),
                InfoCard::new(
                    "✈️",
                    "Exports",
                    "Taking Indian craftsmanship to the global horological stage.",
                ),
            ],
            partner_form: EnquiryForm {
                heading: Heading::new("Collaboration", "Partner With Us", ""),
                fields: vec![
                    FormField::new("name", "Full Name", FieldKind::Text, "Johnathan Smith"),
                    FormField::new("email", "Email Address", FieldKind::Email, "john@heritage.com"),
                    FormField::new("subject", "Subject", FieldKind::Text, "Partnership Inquiry"),
                    FormField::new(
                        "role",
                        "I Am Enquiring As",
                        FieldKind::Select(vec![
                            "Retailer Partner".to_string(),
                            "Distributor".to_string(),
                            "Private Label Client".to_string(),
                            "Institutional Gifting".to_string(),
                        ]),
                        "",
                    ),
                    FormField::new(
                        "message",
                        "Message",
                        FieldKind::TextArea,
                        "Tell us about your brand vision...",
                    ),
                ],
                submit: "Submit Enquiry".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub hero: HeroContent,
    pub address: Vec<String>,
    pub phones: Vec<String>,
    pub email: String,
    pub hours: Vec<String>,
    pub exports_note: String,
    pub inquiry_form: EnquiryForm,
    pub studio_area: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "Get In Touch",
                "Contact",
                "DSIGNER'S",
                "Our concierges are available to assist with your horological inquiries and service needs.",
            ),
            address: vec![
                "A-302, Fair Link Centre, Off New Link road,".to_string(),
                "Andheri West, Mumbai 400053,".to_string(),
                "Maharashtra, India".to_string(),
            ],
            phones: vec!["+91 98201 06589".to_string(), "+91 99204 14447".to_string()],
            email: "info@designerworld.in".to_string(),
            hours: vec![
                "Mon - Sat: 10:00 AM - 7:00 PM".to_string(),
                "Closed on Sundays and Public Holidays".to_string(),
            ],
            exports_note: "For international distribution inquiries, please contact our exports division through the enquiry form.".to_string(),
            inquiry_form: EnquiryForm {
                heading: Heading::new("", "Inquiry Form", ""),
                fields: vec![
                    FormField::new("name", "Full Name", FieldKind::Text, ""),
                    FormField::new("email", "Email Address", FieldKind::Email, ""),
                    FormField::new("subject", "Subject", FieldKind::Text, ""),
                    FormField::new("message", "Message", FieldKind::TextArea, ""),
                ],
                submit: "Dispatch Message".to_string(),
            },
            studio_area: "Andheri West, Mumbai".to_string(),
        }
    }
}

/// The featured product block on the Designer page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseContent {
    pub eyebrow: String,
    pub title: String,
    pub lead: String,
    pub image: String,
    pub badge: String,
    pub cta_text: String,
    pub product_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignerContent {
    pub hero: HeroContent,
    pub showcase: ShowcaseContent,
    pub texture: HeroContent,
    pub craft: Heading,
    pub craft_cards: Vec<InfoCard>,
    /// Fixed rows of the detail spec grid; the strap row comes from the product.
    pub movement: String,
    pub glass: String,
    pub resistance: String,
}

impl Default for DesignerContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "DSIGNER'S Premium Collection",
                "Crafted for",
                "Distinction.",
                "An engineered masterpiece of Swiss precision and avant-garde aesthetic. Every reflection tells a story of power.",
            )
            .with_cta("Explore Masterpieces", "#collection")
            .with_image("/watch-hero-black.png"),
            showcase: ShowcaseContent {
                eyebrow: "Featured Masterpiece".to_string(),
                title: "Elite Gold Edition".to_string(),
                lead: "The pinnacle of our engineering. 18k gold casing paired with our signature mechanical movement. A watch that doesn't just tell time. It commands it.".to_string(),
                image: "/watch-hero-gold.png".to_string(),
                badge: "Limited Inventory".to_string(),
                cta_text: "Reserve Timepiece".to_string(),
                product_id: 3,
            },
            texture: HeroContent::new(
                "",
                "The Soul of",
                "Texture.",
                "Brushed surgical steel, hand-stitched Italian leather, and scratch-resistant sapphire. We don't just build watches; we sculpt experiences.",
            )
            .with_image("/watch-hero-black.png"),
            craft: Heading::new("Technical Brilliance", "Precision in Every", "Component"),
            craft_cards: vec![
                InfoCard::new(
                    "⚙️",
                    "Precision Movement",
                    "Custom Swiss-engineered automatic movement with 42h reserve.",
                ),
                InfoCard::new(
                    "⚓",
                    "Surgical Case",
                    "Grade 316L stainless steel for ultimate corrosion resistance.",
                ),
                InfoCard::new(
                    "💎",
                    "Sapphire Shield",
                    "Double-domed sapphire crystal with anti-reflective coating.",
                ),
                InfoCard::new(
                    "🛠️",
                    "Artisan Assembly",
                    "Hand-assembled by master horologists over 48 hours.",
                ),
            ],
            movement: "Automatic Swiss".to_string(),
            glass: "Sapphire Crystal".to_string(),
            resistance: "10 ATM (100m)".to_string(),
        }
    }
}

/// A comparison table: column headers and labelled rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<(String, Vec<String>)>,
}

impl ComparisonTable {
    fn row(label: &str, values: [&str; 3]) -> (String, Vec<String>) {
        (label.to_string(), values.iter().map(|v| v.to_string()).collect())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscortContent {
    pub hero: HeroContent,
    pub social_proof: String,
    pub comfort: Heading,
    pub comfort_cards: Vec<InfoCard>,
    pub comparison: ComparisonTable,
    pub closing: HeroContent,
    pub secondary_cta: (String, String),
}

impl Default for EscortContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "Escort Everyday Collection",
                "Built for Comfort.",
                "Made to Last.",
                "The essential companion for your daily journey. Lightweight, reliable, and designed to look as good at your desk as it does at dinner.",
            )
            .with_cta("View Collection", "#collection")
            .with_image("/watch-hero-silver.png"),
            social_proof: "Join 50k+ daily owners".to_string(),
            comfort: Heading::new("Reliability Guide", "Comfort You Can", "Wear Daily"),
            comfort_cards: vec![
                InfoCard::new(
                    "🎈",
                    "Lightweight Case",
                    "Optimized for all-day wear without wrist fatigue.",
                ),
                InfoCard::new(
                    "🛡️",
                    "Scratch Resistant",
                    "Treated crystal that stands up to the city life.",
                ),
                InfoCard::new(
                    "💧",
                    "Water Resistance",
                    "Reliable 5 ATM rating for rain and splashes.",
                ),
                InfoCard::new(
                    "⌚",
                    "Quartz Precision",
                    "Japanese movement for set-it-and-forget-it reliability.",
                ),
            ],
            comparison: ComparisonTable {
                title: "Find Your Match".to_string(),
                columns: vec![
                    "Feature".to_string(),
                    "Classic".to_string(),
                    "Sport".to_string(),
                    "Rose Gold".to_string(),
                ],
                rows: vec![
                    ComparisonTable::row("Price", ["₹4,999", "₹5,499", "₹8,999"]),
                    ComparisonTable::row("Case Size", ["40mm", "42mm", "38mm"]),
                    ComparisonTable::row("Strap", ["Steel", "Sport Mesh", "Italian Leather"]),
                    ComparisonTable::row("Resistance", ["3 ATM", "10 ATM", "5 ATM"]),
                ],
            },
            closing: HeroContent::new("", "Find Your Everyday Essential.", "", "")
                .with_cta("Shop All Products", "/escort"),
            secondary_cta: ("Customer Service".to_string(), "/contact".to_string()),
        }
    }
}

/// Everything the site renders that is not catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub collections: CollectionsContent,
    pub features: FeaturesContent,
    pub parallax: ParallaxContent,
    pub testimonials: TestimonialsContent,
    pub cta: CtaContent,
    pub footer: FooterContent,
    pub about: AboutContent,
    pub strengths: StrengthsContent,
    pub contact: ContactContent,
    pub designer: DesignerContent,
    pub escort: EscortContent,
    /// Contact lines shown in the mobile menu.
    pub menu_contact: Vec<String>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::new(
                "Swiss Precision | Indian Mastery",
                "Time,",
                "Refined.",
                "Four decades of horological craft, distilled into timepieces made to be worn for a lifetime.",
            )
            .with_cta("Explore Collections", "#collections")
            .with_image("/watch-hero-black.png"),
            collections: CollectionsContent::default(),
            features: FeaturesContent::default(),
            parallax: ParallaxContent::default(),
            testimonials: TestimonialsContent::default(),
            cta: CtaContent::default(),
            footer: FooterContent::default(),
            about: AboutContent::default(),
            strengths: StrengthsContent::default(),
            contact: ContactContent::default(),
            designer: DesignerContent::default(),
            escort: EscortContent::default(),
            menu_contact: vec!["hello@dsigners.in".to_string(), "+91 98201 06589".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_prices_use_indian_grouping() {
        let content = CollectionsContent::default();
        let prices: Vec<String> = content
            .collections
            .iter()
            .map(|c| c.price_from.display())
            .collect();
        assert_eq!(prices, vec!["₹74,999", "₹1,09,999", "₹2,99,999"]);
    }

    #[test]
    fn test_testimonial_initials() {
        let content = TestimonialsContent::default();
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.testimonials[0].initials(), "RS");
        assert_eq!(content.testimonials[3].initials(), "AG");
    }

    #[test]
    fn test_comparison_rows_match_columns() {
        let table = EscortContent::default().comparison;
        for (_, values) in &table.rows {
            assert_eq!(values.len() + 1, table.columns.len());
        }
    }
}
