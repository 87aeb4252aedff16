//! Page element updates

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::tracker::{ColorZone, Controls, CounterId, DisplaySink};

/// Element ids the page must provide
pub mod ids {
    pub const TIMER_DISPLAY: &str = "timer-display";
    pub const TIMER_DURATION: &str = "timer-duration";
    pub const TIMER_START: &str = "timer-start";
    pub const TIMER_PAUSE: &str = "timer-pause";
    pub const TIMER_RESET: &str = "timer-reset";
    pub const SAVE_BUTTON: &str = "save-game";
    pub const LOAD_BUTTON: &str = "load-game-btn";
    pub const STATE_BOX: &str = "game-state-json";
    pub const SETTINGS_TOGGLE: &str = "settings-toggle";
    pub const SETTINGS_PANEL: &str = "settings-panel";
    pub const SOUND_TOGGLE: &str = "sound-toggle";

    pub fn counter(id: impl std::fmt::Display) -> String {
        format!("counter-{id}")
    }

    pub fn counter_name(id: impl std::fmt::Display) -> String {
        format!("counter-name-{id}")
    }

    pub fn card(id: impl std::fmt::Display) -> String {
        format!(".card[data-id=\"{id}\"]")
    }
}

/// [`DisplaySink`] writing straight into the page
pub struct DomDisplay {
    document: Document,
}

impl DomDisplay {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn set_button_enabled(&self, id: &str, enabled: bool) {
        if let Some(btn) = self.element::<HtmlButtonElement>(id) {
            btn.set_disabled(!enabled);
            let _ = btn
                .style()
                .set_property("opacity", if enabled { "1" } else { "0.5" });
        }
    }
}

impl DisplaySink for DomDisplay {
    fn set_counter_text(&mut self, id: CounterId, value: i64) {
        if let Some(el) = self.document.get_element_by_id(&ids::counter(id)) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn pulse_counter(&mut self, id: CounterId) {
        let Some(el) = self.element::<HtmlElement>(&ids::counter(id)) else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.remove_1("pulse");
        // Reading layout forces a reflow so the animation restarts
        let _ = el.offset_width();
        let _ = classes.add_1("pulse");
    }

    fn set_timer_text(&mut self, text: &str) {
        if let Some(el) = self.document.get_element_by_id(ids::TIMER_DISPLAY) {
            el.set_text_content(Some(text));
        }
    }

    fn set_timer_zone(&mut self, zone: ColorZone) {
        if let Some(el) = self.element::<HtmlElement>(ids::TIMER_DISPLAY) {
            let _ = el.style().set_property("color", zone.css_var());
        }
    }

    fn set_controls_enabled(&mut self, controls: Controls) {
        self.set_button_enabled(ids::TIMER_START, controls.start);
        self.set_button_enabled(ids::TIMER_PAUSE, controls.pause);
        if let Some(input) = self.element::<HtmlInputElement>(ids::TIMER_DURATION) {
            input.set_disabled(!controls.duration);
        }
    }

    fn set_card_color(&mut self, id: CounterId, css: &str) {
        let card = self
            .document
            .query_selector(&ids::card(id))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(card) = card {
            let _ = card.style().set_property("background", css);
        }
    }

    fn set_card_name(&mut self, id: CounterId, name: &str) {
        if let Some(input) = self.element::<HtmlInputElement>(&ids::counter_name(id)) {
            input.set_value(name);
        }
    }

    fn show_snapshot(&mut self, text: &str) {
        if let Some(textarea) = self.element::<HtmlTextAreaElement>(ids::STATE_BOX) {
            textarea.set_value(text);
            let _ = textarea.style().set_property("display", "block");
            textarea.select();
        }
    }
}
