//! Binds the quiz to the page's form and results container.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

use super::render::results_html;
use super::{QuizReport, score};
use crate::config::QuizConfig;
use crate::listeners::Listeners;

/// Value of the checked radio for `question`, if the user picked one.
pub fn checked_choice(doc: &Document, question: &str) -> Option<String> {
    let selector = format!("input[name=\"{}\"]:checked", question);
    doc.query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Replace the results container's content with `report` and scroll to it.
pub fn show_results(doc: &Document, cfg: &QuizConfig, report: &QuizReport) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id(&cfg.results_id) else {
        log::warn!("quiz results container #{} not found", cfg.results_id);
        return Ok(());
    };
    container.set_inner_html(&results_html(report));
    container.class_list().remove_1(&cfg.hidden_class)?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    container.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

/// Score the form as it currently stands and render the outcome.
pub fn submit(doc: &Document, cfg: &QuizConfig) -> Result<QuizReport, JsValue> {
    let report = score(|id| checked_choice(doc, id));
    log::info!("quiz scored {}/{} ({:.0}%)", report.score, report.total, report.percentage);
    show_results(doc, cfg, &report)?;
    Ok(report)
}

/// Hook the submit handler. Returns `false` when the page has no quiz form.
pub fn bind(doc: &Document, cfg: &QuizConfig, listeners: &mut Listeners) -> Result<bool, JsValue> {
    let Some(form) = doc.get_element_by_id(&cfg.form_id) else {
        log::debug!("no #{} on this page, quiz disabled", cfg.form_id);
        return Ok(false);
    };
    let doc = doc.clone();
    let cfg = cfg.clone();
    listeners.listen(&form, "submit", move |evt: Event| {
        evt.prevent_default();
        if let Err(err) = submit(&doc, &cfg) {
            log::warn!("quiz submit failed: {:?}", err);
        }
    })?;
    Ok(true)
}
