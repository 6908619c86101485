//! Page configuration: every tunable constant and DOM selector in one place.
//!
//! `Default` reproduces the shipped page. With the `serde` feature the structs
//! (de)serialize with per-field defaults, and `serde_json` adds
//! [`PageConfig::from_json`] so a host page can override a handful of values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Particle network backdrop settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FieldConfig {
    pub canvas_id: String,
    pub particle_count: usize,
    pub connection_distance: f64,
    /// Each velocity component is drawn from `[-speed/2, speed/2)`.
    pub speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub particle_color: String,
    /// RGB triple of the connecting lines; alpha comes from the distance.
    pub line_rgb: (u8, u8, u8),
    pub line_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "networkCanvas".into(),
            particle_count: 80,
            connection_distance: 150.0,
            speed: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
            particle_color: "#3498db".into(),
            line_rgb: (44, 62, 80),
            line_width: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct QuizConfig {
    pub form_id: String,
    pub results_id: String,
    pub hidden_class: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            form_id: "quizForm".into(),
            results_id: "quizResults".into(),
            hidden_class: "hidden".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NavConfig {
    pub anchor_selector: String,
    pub section_selector: String,
    pub link_selector: String,
    pub active_class: String,
    pub collapse_selector: String,
    pub collapse_open_class: String,
    /// How far ahead of a section's top it already counts as current.
    pub lookahead: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".into(),
            section_selector: "section".into(),
            link_selector: ".nav-link".into(),
            active_class: "active".into(),
            collapse_selector: ".navbar-collapse".into(),
            collapse_open_class: "show".into(),
            lookahead: 200.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_transform: String,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".card, .timeline-item".into(),
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".into(),
            hidden_transform: "translateY(20px)".into(),
            transition: "all 0.6s ease-out".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PageConfig {
    pub field: FieldConfig,
    pub quiz: QuizConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
}

#[cfg(feature = "serde_json")]
impl PageConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep their defaults.
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}
