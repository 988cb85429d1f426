//! The landing page model: key-tagged text slots the localization applier
//! rewrites, plus the nav overlay state.
//!
//! Slots mirror the page markup's tagging contract: an element either
//! carries a localization key or it doesn't. Applying a resource replaces
//! the text of every keyed slot whose key the resource contains; slots
//! with an absent key keep their current text (no blanking).

use vitrine_locales::{Direction, LanguageResource};

/// Rows the hero occupies before the first section.
pub const HERO_ROWS: u16 = 9;
/// Rows each section occupies, title and body included.
pub const SECTION_ROWS: u16 = 7;

/// Row at which a section starts, for anchor jumps. The renderer lays
/// sections out with the same constants.
#[must_use]
pub fn section_row(index: usize) -> f32 {
    f32::from(HERO_ROWS) + index as f32 * f32::from(SECTION_ROWS)
}

/// One visible text element, optionally tagged with a localization key.
#[derive(Debug, Clone)]
pub struct TextSlot {
    key: Option<&'static str>,
    text: String,
}

impl TextSlot {
    fn keyed(key: &'static str, baseline: &str) -> Self {
        Self {
            key: Some(key),
            text: baseline.to_string(),
        }
    }

    fn plain(text: &str) -> Self {
        Self {
            key: None,
            text: text.to_string(),
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An anchor-navigable page section.
#[derive(Debug, Clone)]
pub struct Section {
    pub anchor: &'static str,
    pub title: TextSlot,
    pub body: TextSlot,
}

/// The whole page: baseline copy in English until a resource is applied.
#[derive(Debug)]
pub struct PageModel {
    direction: Direction,
    lang_label: String,
    pub brand: TextSlot,
    pub hero_lead: TextSlot,
    pub hero_sub: TextSlot,
    pub cta: TextSlot,
    pub sections: Vec<Section>,
    pub footer: TextSlot,
    pub cookie_text: TextSlot,
    pub cookie_accept: TextSlot,
    nav_open: bool,
}

impl PageModel {
    /// The untranslated baseline markup.
    #[must_use]
    pub fn baseline(default_language: &str) -> Self {
        Self {
            direction: Direction::Ltr,
            lang_label: default_language.to_uppercase(),
            brand: TextSlot::plain("Vitrine"),
            hero_lead: TextSlot::keyed("hero_title", "Launch your storefront"),
            hero_sub: TextSlot::keyed(
                "hero_sub",
                "Everything you need to sell online, ready in minutes.",
            ),
            cta: TextSlot::keyed("cta_start", "Start free"),
            sections: vec![
                Section {
                    anchor: "features",
                    title: TextSlot::keyed("nav_features", "Features"),
                    body: TextSlot::keyed(
                        "features_body",
                        "Inventory, payments, and shipping in one place.",
                    ),
                },
                Section {
                    anchor: "pricing",
                    title: TextSlot::keyed("nav_pricing", "Pricing"),
                    body: TextSlot::keyed(
                        "pricing_body",
                        "One flat plan. No hidden fees, cancel anytime.",
                    ),
                },
                Section {
                    anchor: "faq",
                    title: TextSlot::keyed("nav_faq", "FAQ"),
                    body: TextSlot::keyed(
                        "faq_body",
                        "Answers to the questions merchants ask most.",
                    ),
                },
            ],
            footer: TextSlot::keyed("footer_note", "Made for merchants everywhere."),
            cookie_text: TextSlot::keyed(
                "cookie_text",
                "We use cookies to improve your experience.",
            ),
            cookie_accept: TextSlot::keyed("cookie_accept", "Got it"),
            nav_open: false,
        }
    }

    /// Rewrite every keyed slot present in the resource and adopt the
    /// resource's direction and display label. Slots whose key the
    /// resource lacks are untouched.
    pub fn apply(&mut self, resource: &LanguageResource, code: &str) {
        self.direction = resource.direction();
        self.lang_label = resource.label(code);
        for slot in self.slots_mut() {
            if let Some(key) = slot.key
                && let Some(value) = resource.get(key)
            {
                slot.text = value.to_string();
            }
        }
    }

    fn slots_mut(&mut self) -> impl Iterator<Item = &mut TextSlot> {
        let head = [
            &mut self.brand,
            &mut self.hero_lead,
            &mut self.hero_sub,
            &mut self.cta,
            &mut self.footer,
            &mut self.cookie_text,
            &mut self.cookie_accept,
        ];
        let sections = self
            .sections
            .iter_mut()
            .flat_map(|s| [&mut s.title, &mut s.body]);
        head.into_iter().chain(sections)
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Label shown in the language picker.
    #[must_use]
    pub fn lang_label(&self) -> &str {
        &self.lang_label
    }

    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn open_nav(&mut self) {
        self.nav_open = true;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Index of the section registered for an anchor, if any.
    #[must_use]
    pub fn section_index(&self, anchor: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.anchor == anchor)
    }
}
