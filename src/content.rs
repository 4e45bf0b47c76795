//! Static copy for the informational pages

use std::borrow::Cow;

pub const BRAND: &str = "Sarina's Kitchen";
pub const TAGLINE: &str = "Private chef • teacher • caterer";
pub const CONTACT_EMAIL: &str = "hello@sarinaskitchen.ca";
pub const CONTACT_PHONE: &str = "416-555-0126";

/// An offering on the Services page
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub examples: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Private Cooking Experiences",
        description: "Restaurant-caliber, multi-course menus prepared in your kitchen with \
                      optional wine pairings and candlelit table styling.",
        details: "Sarina sources seasonal produce, arrives fully prepped, and leaves your \
                  kitchen spotless. Menus are customized after a planning call and include \
                  printed keepsake menus for your guests.",
        examples: &[
            "Seasonal tasting menus for 2-12 guests",
            "Anniversary and proposal dinners",
            "Wine-paired evenings with sommelier partners",
        ],
    },
    Service {
        title: "Hands-On Teaching & Workshops",
        description: "Intimate culinary classes for couples, families, and teams ready to \
                      build confidence with Italian techniques.",
        details: "Each class includes a pre-session call, curated shopping list, and a \
                  post-class recap with recipes and chef tips. Virtual add-ons and \
                  ingredient kits are available for remote attendees.",
        examples: &[
            "Fresh pasta and sauce pairings",
            "Seasonal gnocchi workshop",
            "Knife skills and kitchen confidence training",
        ],
    },
    Service {
        title: "Boutique Catering",
        description: "Elevated small-event catering with vibrant grazing tables, cocktail \
                      bites, and family-style spreads for up to 40 guests.",
        details: "Perfect for showers, milestone birthdays, or corporate open houses. Our \
                  team can coordinate rentals, servers, and bartenders to match your vibe.",
        examples: &[
            "Garden parties and shower brunches",
            "Cocktail receptions with roaming canapés",
            "Corporate lunches delivered and styled on-site",
        ],
    },
];

/// Three-step process shown on Home
pub const PROCESS_STEPS: &[(&str, &str)] = &[
    ("Consult", "A planning call to learn the occasion, guests, and must-have dishes."),
    ("Create", "A custom menu and quote, built around seasonal ingredients."),
    ("Launch", "Sarina cooks, serves, and leaves your kitchen spotless."),
];

pub const HOME_INTRO: &str = "Italian roots, seasonal ingredients, and restaurant polish \
                              for dinners, classes, and intimate catering across the \
                              Greater Toronto Area.";

pub const BIO_PARAGRAPHS: &[&str] = &[
    "Sarina DiLuca is the chef and storyteller behind Sarina's Kitchen. She grew up rolling \
     pasta alongside her Nonna in Vaughan and refined her craft in boutique hotels and \
     farm-to-table kitchens across Ontario.",
    "Her mission is simple: bring the warmth of Sunday suppers to modern celebrations while \
     making Italian cooking approachable for every home cook.",
    "Sarina believes every memorable meal begins with intention. After culinary school and \
     years spent on the line in Toronto's restaurant scene, she launched Sarina's Kitchen to \
     bring restaurant polish to at-home dining.",
    "Today she pairs seasonal ingredients with Italian roots, championing local farmers and \
     teaching guests why the best dishes start with good company.",
];

/// A titled bullet card on the Bio page
#[derive(Debug, Clone, Copy)]
pub struct AboutCard {
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub note: Option<&'static str>,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "Our Philosophy",
        points: &[
            "Seasonal menus built around Ontario farms and Italian staples.",
            "Respect for dietary needs with creative, satisfying alternatives.",
            "Hospitality that makes every guest feel like family.",
        ],
        note: Some(
            "See the Services page (press 2) for how this comes to life at dinners, \
             classes, and intimate catering.",
        ),
    },
    AboutCard {
        title: "Teaching Style",
        points: &[
            "Hands-on lessons that keep groups small so everyone cooks.",
            "Chef techniques translated into approachable steps for home kitchens.",
            "Recipes, playlists, and shopping lists delivered after every class.",
        ],
        note: None,
    },
    AboutCard {
        title: "Highlights",
        points: &[
            "Red Seal certified chef with a decade in boutique catering.",
            "Featured instructor at the Toronto Culinary Arts Collective.",
            "Partnered with local farms to minimize waste and source responsibly.",
        ],
        note: Some("Guests often note the balance of comfort and discovery in every menu."),
    },
];

/// "Where You'll Find Us" card on the Bio page
pub const FIND_US_PARAGRAPHS: &[&str] = &[
    "Sarina's Kitchen serves the Greater Toronto Area and will gladly travel farther for \
     special gatherings. Travel fees are calculated transparently based on distance and \
     staffing needs.",
    "Whether it's a backyard celebration, condo kitchen, or rented venue, we tailor the setup \
     so you can savor every moment with your guests.",
];

/// A client quote in the Home feedback block
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS_LEAD: &str = "Kind words from recent dinners, classes, and celebrations.";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex A.",
        quote: "Sarina turned our tiny condo kitchen into a trattoria for the night. Every \
                course arrived hot, the pacing was perfect, and she left the place cleaner \
                than she found it. Our guests are still talking about the tiramisu.",
    },
    Testimonial {
        name: "Brianna B.",
        quote: "Our team pasta class was the best offsite we have had in years. Sarina kept \
                everyone cooking, answered every question, and sent recipes the next morning \
                so we could recreate the ravioli at home.",
    },
    Testimonial {
        name: "Carter C.",
        quote: "The grazing table at my mother's seventieth looked like a painting and tasted \
                even better. Thoughtful labels for every allergy meant nobody had to ask \
                twice, and the arancini vanished within minutes.",
    },
];

/// Words of a testimonial shown on its card
pub const PREVIEW_WORDS: usize = 12;

/// First `count` whitespace-separated words joined by single spaces, with
/// `...` appended. Text with `count` words or fewer comes back unchanged.
pub fn truncate_words(text: &str, count: usize) -> Cow<'_, str> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= count {
        return Cow::Borrowed(text);
    }
    Cow::Owned(format!("{}...", words[..count].join(" ")))
}

pub const CONTACT_LEAD: &str = "Tell us about your event, class idea, or dream menu. We'll \
                                follow up within two business days with availability and a \
                                custom proposal.";

pub const HOURS: &str = "Tuesday - Sunday: 10:00-20:00 · Mondays reserved for market days";
pub const SERVICE_AREA: &str =
    "Greater Toronto Area, York Region, and cottage getaways by request.";
pub const QUOTE_NOTE: &str = "Include allergies, dietary preferences, venue address, and \
                              desired date so we can build a detailed quote on the first reply.";
