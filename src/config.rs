//! Page Configuration
//!
//! Selectors the behavior layer expects in the markup, plus timing and effect
//! constants. Every field has a default, so a page only needs to override what
//! differs (via a `window.__SITE_CONFIG__` object).

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the optional global holding config overrides
pub const CONFIG_GLOBAL: &str = "__SITE_CONFIG__";

/// Shortest autoplay period an override may ask for
pub const MIN_AUTOPLAY_MS: u32 = 1000;
/// Shortest counter frame; zero would stall the count-up
pub const MIN_COUNTER_FRAME_MS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    pub selectors: Selectors,
    pub timings: Timings,
    pub effects: Effects,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            selectors: Selectors::default(),
            timings: Timings::default(),
            effects: Effects::default(),
        }
    }
}

impl SiteConfig {
    /// Read overrides from `window.__SITE_CONFIG__`, falling back to defaults.
    pub fn from_window() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<SiteConfig>(raw) {
            Ok(config) => config.clamped(),
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    /// Raise timings an override set too low to the smallest usable value
    pub fn clamped(mut self) -> Self {
        let t = &mut self.timings;
        if t.autoplay_ms < MIN_AUTOPLAY_MS {
            log::warn!("autoplayMs {} too small, using {}", t.autoplay_ms, MIN_AUTOPLAY_MS);
            t.autoplay_ms = MIN_AUTOPLAY_MS;
        }
        if t.counter_frame_ms.is_nan() || t.counter_frame_ms < MIN_COUNTER_FRAME_MS {
            log::warn!("counterFrameMs {} too small, using {}", t.counter_frame_ms, MIN_COUNTER_FRAME_MS);
            t.counter_frame_ms = MIN_COUNTER_FRAME_MS;
        }
        if t.counter_duration_ms.is_nan() || t.counter_duration_ms < 0.0 {
            t.counter_duration_ms = 0.0;
        }
        self
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Markup contract: where each component finds its elements
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub navbar: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_links: String,

    pub reveal: String,
    pub counters: String,

    pub slider: String,
    pub slider_track: String,
    pub slider_cards: String,
    pub slider_dots: String,
    pub slider_prev: String,
    pub slider_next: String,

    pub filter_buttons: String,
    pub portfolio_items: String,
    pub case_study_buttons: String,
    pub modal: String,
    pub modal_close: String,
    pub modal_body: String,
    pub modal_overlay: String,

    pub contact_form: String,
    /// Validated controls; a selector list such as `"input, select"` works
    pub form_inputs: String,
    pub form_submit: String,
    pub form_success: String,
    pub form_errors: String,

    pub magnetic_buttons: String,
    pub floating_cards: String,
    pub anchors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: "#navbar".into(),
            hamburger: "#hamburger".into(),
            nav_menu: "#navMenu".into(),
            nav_links: ".nav-link".into(),

            reveal: ".animate-on-scroll".into(),
            counters: ".stat-number[data-target]".into(),

            slider: "#testimonialsSlider".into(),
            slider_track: ".testimonial-track".into(),
            slider_cards: ".testimonial-card".into(),
            slider_dots: "#sliderDots".into(),
            slider_prev: "#prevBtn".into(),
            slider_next: "#nextBtn".into(),

            filter_buttons: ".filter-btn".into(),
            portfolio_items: ".portfolio-card-detailed".into(),
            case_study_buttons: ".view-case-study".into(),
            modal: "#caseStudyModal".into(),
            modal_close: "#modalClose".into(),
            modal_body: "#modalBody".into(),
            modal_overlay: ".modal-overlay".into(),

            contact_form: "#contactForm".into(),
            form_inputs: ".form-input".into(),
            form_submit: "button[type=\"submit\"]".into(),
            form_success: "#formSuccess".into(),
            form_errors: ".form-error".into(),

            magnetic_buttons: ".btn-magnetic".into(),
            floating_cards: ".floating-card".into(),
            anchors: "a[href^=\"#\"]".into(),
        }
    }
}

/// Durations in milliseconds, thresholds as fractions / pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub scroll_threshold_px: f64,
    pub autoplay_ms: u32,
    pub filter_show_delay_ms: u32,
    pub filter_hide_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub success_display_ms: u32,
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub counter_threshold: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            autoplay_ms: 5000,
            filter_show_delay_ms: 10,
            filter_hide_delay_ms: 300,
            submit_delay_ms: 1500,
            success_display_ms: 5000,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
            counter_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Effects {
    /// Fraction of the pointer's distance from center a magnetic button follows
    pub magnetic_strength: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            magnetic_strength: 0.2,
            parallax_base_speed: 0.5,
            parallax_speed_step: 0.1,
        }
    }
}
