// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use network_page::config::{NavConfig, PageConfig, QuizConfig, RevealConfig};
use network_page::listeners::Listeners;
use network_page::reveal::RevealObserver;
use network_page::{dom, nav, quiz};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    dom::document(&dom::window().unwrap()).unwrap()
}

fn mount(html: &str) -> HtmlElement {
    let doc = doc();
    let root: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn quiz_markup(choices: &[(&str, &str)]) -> String {
    let mut html = String::from("<form id=\"quizForm\">");
    for i in 1..=10 {
        for letter in ["a", "b", "c", "d"] {
            let name = format!("q{}", i);
            let checked = choices.iter().any(|(q, c)| *q == name && *c == letter);
            html.push_str(&format!(
                "<input type=\"radio\" name=\"{}\" value=\"{}\"{}>",
                name,
                letter,
                if checked { " checked" } else { "" }
            ));
        }
    }
    html.push_str("</form><div id=\"quizResults\" class=\"hidden\"></div>");
    html
}

#[wasm_bindgen_test]
fn submit_reads_checked_radios_and_replaces_results() {
    let root = mount(&quiz_markup(&[("q1", "a"), ("q2", "b"), ("q3", "a")]));
    let doc = doc();
    let cfg = QuizConfig::default();

    assert_eq!(quiz::form::checked_choice(&doc, "q1").as_deref(), Some("a"));
    assert_eq!(quiz::form::checked_choice(&doc, "q4"), None);

    let report = quiz::form::submit(&doc, &cfg).unwrap();
    assert_eq!(report.score, 2);
    let results = doc.get_element_by_id("quizResults").unwrap();
    assert!(!results.class_list().contains("hidden"));
    let first = results.inner_html();
    assert!(first.contains("Votre score : 2/10"));

    root.remove();
    let root = mount(&quiz_markup(&[]));
    quiz::form::submit(&doc, &cfg).unwrap();
    let results = doc.get_element_by_id("quizResults").unwrap();
    assert!(results.inner_html().contains("Votre score : 0/10"));
    assert_eq!(results.inner_html().matches("quiz-result").count(), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn active_marker_lands_on_a_single_link() {
    let root = mount(
        "<a class=\"nav-link active\" href=\"#one\">1</a>\
         <a class=\"nav-link\" href=\"#two\">2</a>",
    );
    let links = dom::query_all(&doc(), ".nav-link").unwrap();
    nav::mark_active(&links, Some("two"), "active").unwrap();
    assert!(!links[0].class_list().contains("active"));
    assert!(links[1].class_list().contains("active"));
    nav::mark_active(&links, None, "active").unwrap();
    assert!(links.iter().all(|l| !l.class_list().contains("active")));
    root.remove();
}

#[wasm_bindgen_test]
fn anchor_scroll_closes_open_mobile_panel() {
    let root = mount(
        "<div class=\"navbar-collapse show\"></div>\
         <section id=\"target\">t</section>",
    );
    let doc = doc();
    let cfg = NavConfig::default();
    assert!(!nav::scroll_to_anchor(&doc, &cfg, "#"));
    assert!(!nav::scroll_to_anchor(&doc, &cfg, "#missing"));
    let panel = doc.query_selector(".navbar-collapse").unwrap().unwrap();
    assert!(panel.class_list().contains("show"));
    assert!(nav::scroll_to_anchor(&doc, &cfg, "#target"));
    assert!(!panel.class_list().contains("show"));
    root.remove();
}

#[wasm_bindgen_test]
fn page_starts_and_stops_without_optional_markup() {
    let mut ctx = network_page::page::PageContext::start(PageConfig::default()).unwrap();
    assert!(ctx.is_running());
    assert_eq!(ctx.particle_count(), 0);
    ctx.stop();
    assert!(!ctx.is_running());
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn bound_anchor_click_prevents_jump_until_detached() {
    let root = mount(
        "<div class=\"navbar-collapse show\"></div>\
         <a id=\"go\" href=\"#dest\">go</a>\
         <section id=\"dest\">d</section>",
    );
    let doc = doc();
    let mut listeners = Listeners::new();
    assert_eq!(nav::bind_anchors(&doc, &NavConfig::default(), &mut listeners).unwrap(), 1);
    assert_eq!(listeners.len(), 1);

    let anchor = doc.get_element_by_id("go").unwrap();
    let panel = doc.query_selector(".navbar-collapse").unwrap().unwrap();
    let click = cancelable_click();
    assert!(!anchor.dispatch_event(&click).unwrap());
    assert!(click.default_prevented());
    assert!(!panel.class_list().contains("show"));

    listeners.clear();
    assert!(listeners.is_empty());
    panel.class_list().add_1("show").unwrap();
    let click = cancelable_click();
    assert!(anchor.dispatch_event(&click).unwrap());
    assert!(!click.default_prevented());
    assert!(panel.class_list().contains("show"));
    root.remove();
}

#[wasm_bindgen_test]
fn highlight_follows_scroll_over_real_sections() {
    let root = mount(
        "<a class=\"nav-link\" href=\"#s-one\">1</a>\
         <a class=\"nav-link\" href=\"#s-three\">3</a>\
         <section id=\"s-one\" style=\"height: 1500px\">1</section>\
         <section style=\"height: 1500px\">untitled</section>\
         <section id=\"s-three\" style=\"height: 3000px\">3</section>",
    );
    let win = dom::window().unwrap();
    let doc = doc();
    let cfg = NavConfig::default();
    let tops: Vec<f64> = dom::query_all(&doc, "section")
        .unwrap()
        .into_iter()
        .map(|el| el.dyn_into::<HtmlElement>().unwrap().offset_top() as f64)
        .collect();
    let links = dom::query_all(&doc, ".nav-link").unwrap();
    let active = |i: usize| links[i].class_list().contains("active");

    win.scroll_to_with_x_and_y(0.0, tops[0]);
    nav::highlight_current(&win, &doc, &cfg).unwrap();
    assert!(active(0) && !active(1));

    // Inside the section without an id: nothing is highlighted.
    win.scroll_to_with_x_and_y(0.0, tops[1] - 150.0);
    nav::highlight_current(&win, &doc, &cfg).unwrap();
    assert!(!active(0) && !active(1));

    win.scroll_to_with_x_and_y(0.0, tops[2] - 100.0);
    nav::highlight_current(&win, &doc, &cfg).unwrap();
    assert!(!active(0) && active(1));

    win.scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

fn intersection(target: &Element, intersecting: bool) -> JsValue {
    let entry = Object::new();
    Reflect::set(&entry, &JsValue::from_str("isIntersecting"), &JsValue::from_bool(intersecting)).unwrap();
    Reflect::set(&entry, &JsValue::from_str("target"), target).unwrap();
    entry.into()
}

#[wasm_bindgen_test]
fn reveal_hides_targets_and_shows_each_once() {
    let root = mount("<div class=\"card\">a</div><div class=\"timeline-item\">b</div><p>c</p>");
    let doc = doc();
    let reveal = RevealObserver::start(&doc, &RevealConfig::default()).unwrap();
    assert_eq!(reveal.observed(), 2);
    assert_eq!(reveal.pending(), 2);

    let targets = dom::query_all(&doc, ".card, .timeline-item").unwrap();
    let style = |i: usize, prop: &str| {
        targets[i].clone().dyn_into::<HtmlElement>().unwrap().style().get_property_value(prop).unwrap()
    };
    assert_eq!(style(0, "opacity"), "0");
    assert_eq!(style(0, "transform"), "translateY(20px)");
    assert!(style(0, "transition").contains("0.6s"));

    reveal.deliver(&Array::of1(&intersection(&targets[1], false)));
    assert_eq!(reveal.pending(), 2);
    assert_eq!(style(1, "opacity"), "0");

    reveal.deliver(&Array::of2(&intersection(&targets[0], true), &intersection(&targets[0], true)));
    assert_eq!(reveal.pending(), 1);
    assert_eq!(style(0, "opacity"), "1");
    assert!(style(0, "transform").starts_with("translateY(0"));
    assert_eq!(style(1, "opacity"), "0");

    drop(reveal);
    root.remove();
}
