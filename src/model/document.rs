//! In-memory page document

use std::collections::{BTreeSet, HashMap};

use super::marquee::MarqueeKeyframes;
use super::page::{EmbedFrame, Page, TextStyle, TrackDisplay, PLAY_ICON};
use super::types::{Surface, Tab};

// Average glyph advance relative to the font size
const REGULAR_ADVANCE: f64 = 0.55;
const BOLD_ADVANCE: f64 = 0.62;

/// Average width of one glyph rendered in `style`
pub fn glyph_width(style: TextStyle) -> f64 {
    let advance = if style.bold { BOLD_ADVANCE } else { REGULAR_ADVANCE };
    style.font_size_px * advance
}

/// A single element of the document
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub displayed: bool,
    pub text: String,
    pub track: Option<TrackDisplay>,
    pub progress_percent: f64,
    pub classes: BTreeSet<String>,
}

impl Element {
    fn new(displayed: bool) -> Self {
        Self {
            displayed,
            text: String::new(),
            track: None,
            progress_percent: 0.0,
            classes: BTreeSet::new(),
        }
    }
}

/// Page document holding every element by id.
///
/// `mutation_count` counts every write that reached an existing element,
/// which lets callers check that redundant updates were suppressed.
#[derive(Clone, Debug)]
pub struct Document {
    viewport_width: u32,
    elements: HashMap<String, Element>,
    frames: Vec<EmbedFrame>,
    keyframes: Vec<MarqueeKeyframes>,
    opened_links: Vec<String>,
    text_widths: HashMap<String, f64>,
    mutations: u64,
}

impl Document {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width,
            elements: HashMap::new(),
            frames: Vec::new(),
            keyframes: Vec::new(),
            opened_links: Vec::new(),
            text_widths: HashMap::new(),
            mutations: 0,
        }
    }

    /// Both mini-player surfaces, hidden until the controller picks one
    pub fn with_mini_players(viewport_width: u32) -> Self {
        let mut document = Self::new(viewport_width);
        for surface in Surface::ALL {
            let ids = surface.ids();
            document.insert_element(ids.root, false);
            for id in [ids.prev, ids.next, ids.track, ids.progress, ids.open] {
                document.insert_element(id, true);
            }
            document.insert_element(ids.play, true);
            if let Some(play) = document.elements.get_mut(ids.play) {
                play.text = PLAY_ICON.to_string();
            }
        }
        document
    }

    /// The full profile page: mini players plus every tab panel, with
    /// "about" shown.
    pub fn profile_page(viewport_width: u32) -> Self {
        let mut document = Self::with_mini_players(viewport_width);
        for tab in Tab::ALL {
            document.insert_element(tab.content_id(), tab == Tab::About);
            for id in tab.tab_ids() {
                document.insert_element(id, true);
                if tab == Tab::About {
                    if let Some(button) = document.elements.get_mut(*id) {
                        button.classes.insert("active".to_string());
                    }
                }
            }
        }
        document
    }

    pub fn insert_element(&mut self, id: &str, displayed: bool) {
        self.elements.insert(id.to_string(), Element::new(displayed));
    }

    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Pin the measured width of a specific string
    pub fn set_text_width(&mut self, text: &str, width_px: f64) {
        self.text_widths.insert(text.to_string(), width_px);
    }

    pub fn frames(&self) -> &[EmbedFrame] {
        &self.frames
    }

    pub fn keyframes(&self) -> &[MarqueeKeyframes] {
        &self.keyframes
    }

    pub fn opened_links(&self) -> &[String] {
        &self.opened_links
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// The surface whose root is currently displayed, if exactly one is
    pub fn visible_surface(&self) -> Option<Surface> {
        let mut visible = Surface::ALL
            .into_iter()
            .filter(|surface| self.is_displayed(surface.ids().root) == Some(true));
        match (visible.next(), visible.next()) {
            (Some(surface), None) => Some(surface),
            _ => None,
        }
    }

    /// The tab whose content panel is displayed
    pub fn active_tab(&self) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| self.is_displayed(tab.content_id()) == Some(true))
    }

    fn mutate(&mut self, id: &str, apply: impl FnOnce(&mut Element)) {
        if let Some(element) = self.elements.get_mut(id) {
            apply(element);
            self.mutations += 1;
        }
    }
}

impl Page for Document {
    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn is_displayed(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|element| element.displayed)
    }

    fn set_displayed(&mut self, id: &str, displayed: bool) {
        self.mutate(id, |element| element.displayed = displayed);
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.mutate(id, |element| element.text = text.to_string());
    }

    fn set_track_display(&mut self, id: &str, display: TrackDisplay) {
        self.mutate(id, |element| element.track = Some(display));
    }

    fn set_progress(&mut self, id: &str, percent: f64) {
        self.mutate(id, |element| element.progress_percent = percent);
    }

    fn add_class(&mut self, id: &str, class: &str) {
        self.mutate(id, |element| {
            element.classes.insert(class.to_string());
        });
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        self.mutate(id, |element| {
            element.classes.remove(class);
        });
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn embed_frame(&self, id: &str) -> Option<EmbedFrame> {
        self.frames.iter().find(|frame| frame.id == id).cloned()
    }

    fn insert_embed_frame(&mut self, frame: EmbedFrame) {
        self.frames.push(frame);
        self.mutations += 1;
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> f64 {
        if let Some(width) = self.text_widths.get(text) {
            return *width;
        }
        text.chars().count() as f64 * glyph_width(style)
    }

    fn register_keyframes(&mut self, keyframes: MarqueeKeyframes) {
        self.keyframes.push(keyframes);
        self.mutations += 1;
    }

    fn open_external(&mut self, url: &str) {
        self.opened_links.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MOBILE_IDS, TITLE_TEXT_STYLE};

    #[test]
    fn writes_to_missing_elements_are_ignored() {
        let mut document = Document::new(1024);
        document.set_text("nope", "hello");
        document.set_progress("nope", 50.0);
        document.add_class("nope", "scrolling");
        assert!(!document.contains("nope"));
        assert_eq!(document.is_displayed("nope"), None);
        assert_eq!(document.mutation_count(), 0);
    }

    #[test]
    fn mini_players_start_hidden_with_play_icon() {
        let document = Document::with_mini_players(500);
        assert_eq!(document.visible_surface(), None);
        assert_eq!(document.element(MOBILE_IDS.play).unwrap().text, PLAY_ICON);
        assert_eq!(document.is_displayed(MOBILE_IDS.root), Some(false));
    }

    #[test]
    fn profile_page_shows_about() {
        let document = Document::profile_page(1200);
        assert_eq!(document.active_tab(), Some(Tab::About));
        assert!(document.has_class("about-tab", "active"));
        assert!(document.has_class("sidebar-about-tab", "active"));
        assert!(!document.has_class("skills-tab", "active"));
    }

    #[test]
    fn measurement_uses_pinned_widths_first() {
        let mut document = Document::new(500);
        let estimate = document.measure_text("abcd", TITLE_TEXT_STYLE);
        assert!((estimate - 4.0 * 11.0 * BOLD_ADVANCE).abs() < 1e-9);

        document.set_text_width("abcd", 240.0);
        assert_eq!(document.measure_text("abcd", TITLE_TEXT_STYLE), 240.0);
    }
}
