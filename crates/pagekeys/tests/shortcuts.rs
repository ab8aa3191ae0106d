//! End-to-end shortcut tests: HTML page → Tab → key presses → location

use pagekeys::{
    KeyboardEvent, KeyboardEventType, Profile, ShortcutAction, ShortcutConfig, ShortcutDispatcher,
    Tab,
};
use proptest::prelude::*;

const BASE: &str = "http://localhost:8000/?orderby=2";

fn listing(hrefs: &[&str], with_focus_target: bool) -> String {
    let rows: String = hrefs
        .iter()
        .map(|href| format!(r#"<tr><td><a class="torrentheading" href="{href}">t</a></td></tr>"#))
        .collect();
    let input = if with_focus_target {
        r#"<form action="/add"><input id="takefocus" type="text" name="url"></form>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
        <html><head><title>btpd</title></head>
        <body>
            {input}
            <table class="torrents">
                <tr class="torrentheadings"><th>ID</th><th>Name</th></tr>
                {rows}
            </table>
        </body></html>"#
    )
}

fn open(html: &str, profile: Profile) -> Tab {
    Tab::open(html, BASE, ShortcutDispatcher::new(profile)).unwrap()
}

// ============================================================================
// KEY-DOWN PROFILE
// ============================================================================

#[test]
fn test_digit_follows_heading() {
    let mut tab = open(&listing(&["/t/1", "/t/2", "/t/3"], false), Profile::KeyDown);

    let nav = tab.press('2').unwrap().expect("navigation");
    assert_eq!(nav.action, ShortcutAction::Heading(2));
    assert_eq!(tab.location().href(), "http://localhost:8000/t/2");
}

#[test]
fn test_digit_out_of_range_ignored() {
    let mut tab = open(&listing(&["/t/1", "/t/2", "/t/3"], false), Profile::KeyDown);

    assert_eq!(tab.press('5').unwrap(), None);
    assert_eq!(tab.press('0').unwrap(), None);
    assert_eq!(tab.location().href(), BASE);
}

#[test]
fn test_n_and_h_outside_input() {
    let html = listing(&[], false);

    let mut tab = open(&html, Profile::KeyDown);
    tab.press('n').unwrap();
    assert_eq!(tab.location().href(), "http://localhost:8000/add");

    let mut tab = open(&html, Profile::KeyDown);
    tab.press('h').unwrap();
    assert_eq!(tab.location().href(), "http://localhost:8000/");
}

#[test]
fn test_input_focus_suppresses_shortcuts() {
    let html = listing(&["/t/1"], true);

    for key in ['n', 'h', '1'] {
        let mut tab = open(&html, Profile::KeyDown);
        assert_eq!(tab.press(key).unwrap(), None, "key {key}");
        assert_eq!(tab.location().navigations(), 0);
    }
}

#[test]
fn test_focus_on_link_still_dispatches() {
    let html = r#"
        <a id="first" class="torrentheading" href="/t/1">t</a>
        <div class="torrents"><a class="torrentheading" href="/t/9">t</a></div>
        <span class="torrentheadings"></span>
    "#;
    let mut tab = open(html, Profile::KeyDown);
    assert!(tab.focus_id("first"));

    // Headings outside the container do not count
    let nav = tab.press('1').unwrap().unwrap();
    assert_eq!(nav.target, "/t/9");
}

#[test]
fn test_digits_need_listing_marker() {
    let html = r#"<div class="torrents"><a class="torrentheading" href="/t/1">t</a></div>"#;
    let mut tab = open(html, Profile::KeyDown);
    assert_eq!(tab.press('1').unwrap(), None);
}

#[test]
fn test_heading_without_href_ignored() {
    let html = r#"
        <table class="torrents"><tr class="torrentheadings"></tr>
        <tr><td><a class="torrentheading">no link</a></td></tr></table>
    "#;
    let mut tab = open(html, Profile::KeyDown);
    assert_eq!(tab.press('1').unwrap(), None);
}

// ============================================================================
// KEY-UP PROFILE
// ============================================================================

#[test]
fn test_key_up_only_handles_n() {
    let html = listing(&["/t/1"], false);

    let mut tab = open(&html, Profile::KeyUp);
    assert_eq!(tab.press('h').unwrap(), None);
    assert_eq!(tab.press('1').unwrap(), None);
    let nav = tab.press('n').unwrap().unwrap();
    assert_eq!(nav.action, ShortcutAction::AddPage);
    assert_eq!(tab.location().pathname(), "/add");
}

#[test]
fn test_key_up_requires_body_focus() {
    let mut tab = open(&listing(&[], true), Profile::KeyUp);
    assert_eq!(tab.press('n').unwrap(), None);

    let event = KeyboardEvent::from_char(KeyboardEventType::KeyUp, 'n', "BODY");
    assert!(tab.dispatch(&event).unwrap().is_some());
}

// ============================================================================
// PAGE READY
// ============================================================================

#[test]
fn test_page_ready_focus() {
    let tab = open(&listing(&[], true), Profile::KeyDown);
    let doc = tab.document();
    assert_eq!(doc.active_element(), doc.get_element_by_id("takefocus"));

    let tab = open(&listing(&[], false), Profile::KeyDown);
    let doc = tab.document();
    assert_eq!(doc.active_element(), Some(doc.body()));
}

#[test]
fn test_configured_layout() {
    let config = ShortcutConfig::from_json_str(
        r#"{
            "layout": {
                "autofocus_id": "search",
                "listing_class": "listing",
                "container_class": "items",
                "heading_class": "item"
            },
            "routes": { "home": "/index" }
        }"#,
    )
    .unwrap();
    let html = r#"
        <input id="search">
        <ul class="items listing"><li><a class="item" href="/i/1">one</a></li></ul>
    "#;

    let mut tab = Tab::open(html, BASE, ShortcutDispatcher::from_config(config.clone())).unwrap();
    assert_eq!(tab.press('h').unwrap(), None, "autofocused input");

    let mut tab = Tab::open(html, BASE, ShortcutDispatcher::from_config(config)).unwrap();
    assert!(!tab.focus_id("missing"));
    let event = KeyboardEvent::from_char(KeyboardEventType::KeyDown, '1', "li");
    assert_eq!(tab.dispatch(&event).unwrap().unwrap().target, "/i/1");
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_digit_navigates_iff_in_range(len in 0usize..10, digit in 0u32..10) {
        let hrefs: Vec<String> = (1..=len).map(|i| format!("/t/{i}")).collect();
        let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
        let mut tab = open(&listing(&refs, false), Profile::KeyDown);

        let key = char::from_digit(digit, 10).unwrap();
        let nav = tab.press(key).unwrap();

        let d = digit as usize;
        if d >= 1 && d <= len {
            let expected = format!("/t/{d}");
            prop_assert_eq!(nav.map(|n| n.target), Some(expected));
        } else {
            prop_assert!(nav.is_none());
            prop_assert_eq!(tab.location().navigations(), 0);
        }
    }

    #[test]
    fn prop_input_focus_never_navigates(code in 0u32..0x3_0000) {
        let mut tab = open(&listing(&["/t/1", "/t/2"], true), Profile::KeyDown);
        let event = KeyboardEvent::new(KeyboardEventType::KeyDown, code, "input");
        prop_assert!(tab.dispatch(&event).unwrap().is_none());
    }
}
