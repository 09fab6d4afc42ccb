//! Browser tests for selection, mutation, templates and event delegation.
//!
//! Run with `wasm-pack test --headless --chrome crates/g8a-dom`.

#![cfg(target_arch = "wasm32")]

use g8a_core::Selection;
use g8a_dom::document::document;
use g8a_dom::{
	DomError, FormValues, append, attr, bind, classes, el, html, prepend, remove, set_attr,
	set_classes, set_html, set_text, set_value, text, tpl, value, values,
};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts `markup` inside a fresh `<div id="{id}">` under `<body>`.
fn fixture(id: &str, markup: &str) -> Element {
	let document = document().unwrap();
	let root = document.create_element("div").unwrap();
	root.set_id(id);
	root.set_inner_html(markup);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn click(selector: &str) {
	let target = document().unwrap().query_selector(selector).unwrap().unwrap();
	target.dyn_into::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn test_el_cardinality() {
	let root = fixture("card", "<p class='one'>a</p><i>b</i><i>c</i>");

	assert!(matches!(el("#card .one").unwrap(), Selection::Single(_)));
	assert_eq!(el("#card i").unwrap().len(), 2);
	let none = el("#card .missing").unwrap();
	assert!(matches!(none, Selection::Many(ref v) if v.is_empty()));

	root.remove();
}

#[wasm_bindgen_test]
fn test_el_invalid_selector() {
	let err = el("##").unwrap_err();
	assert!(matches!(err, DomError::InvalidSelector { ref selector, .. } if selector == "##"));
}

#[wasm_bindgen_test]
fn test_html_append_prepend() {
	let root = fixture("markup", "<ul id='list'><li>b</li></ul>");

	append("#list", "<li>c</li>").unwrap();
	prepend("#list", "<li>a</li>").unwrap();
	assert_eq!(html("#list").unwrap().as_deref(), Some("<li>a</li><li>b</li><li>c</li>"));

	set_html("#list", "").unwrap();
	assert_eq!(html("#list").unwrap().as_deref(), Some(""));
	assert_eq!(html("#nothing-here").unwrap(), None);

	root.remove();
}

#[wasm_bindgen_test]
fn test_text_and_classes() {
	let root = fixture("texts", "<span id='label'>old</span>");

	set_text("#label", "<b>new</b>").unwrap();
	assert_eq!(text("#label").unwrap().as_deref(), Some("<b>new</b>"));
	assert_eq!(html("#label").unwrap().as_deref(), Some("&lt;b&gt;new&lt;/b&gt;"));

	set_classes("#label", "a b").unwrap();
	assert_eq!(classes("#label").unwrap().as_deref(), Some("a b"));

	root.remove();
}

#[wasm_bindgen_test]
fn test_attr_applies_to_all_reads_first() {
	let root = fixture("attrs", "<a class='l'></a><a class='l'></a>");

	let read_back = set_attr("#attrs .l", "data-x", "1").unwrap();
	assert_eq!(read_back.as_deref(), Some("1"));
	assert_eq!(el("#attrs [data-x='1']").unwrap().len(), 2);
	assert_eq!(attr("#attrs .l", "href").unwrap(), None);

	root.remove();
}

#[wasm_bindgen_test]
fn test_value_and_values() {
	let root = fixture(
		"form",
		"<form id='f'>\
			<input name='user' value='ada'>\
			<textarea name='bio'>hi</textarea>\
			<select name='role'><option value='a'>A</option><option value='b' selected>B</option></select>\
			<input value='unnamed'>\
		</form>",
	);

	assert_eq!(value("#f [name=user]").unwrap().as_deref(), Some("ada"));
	set_value("#f [name=user]", "grace").unwrap();

	let map = values("#f", false).unwrap().into_map().unwrap();
	assert_eq!(map.len(), 3);
	assert_eq!(map["user"], "grace");
	assert_eq!(map["bio"], "hi");
	assert_eq!(map["role"], "b");

	let data = values("#f", true).unwrap();
	assert!(matches!(data, FormValues::FormData(_)));
	let data = data.into_form_data().unwrap();
	assert_eq!(data.get("user").as_string().as_deref(), Some("grace"));

	root.remove();
}

#[wasm_bindgen_test]
fn test_remove_counts_detached_elements() {
	let _root = fixture("gone", "<b></b><b></b><b></b>");

	assert_eq!(remove("#gone b").unwrap(), 3);
	assert_eq!(remove("#gone b").unwrap(), 0);
	assert_eq!(remove("#gone").unwrap(), 1);
	assert!(el("#gone").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_tpl_renders_escaped_items() {
	let root = fixture(
		"templates",
		"<script type='text/html' id='row'><li>{{ name }}</li></script>",
	);

	let rendered = tpl("row", &json!([{"name": "x"}, {"name": "<y>"}])).unwrap();
	assert_eq!(rendered, "<li>x</li><li>&lt;y&gt;</li>");
	assert_eq!(tpl("no-such-template", &json!({})).unwrap(), "");

	root.remove();
}

#[wasm_bindgen_test]
fn test_bind_delegates_to_matching_targets() {
	let root = fixture("events", "<button class='go'>go</button><button class='stay'>stay</button>");
	let hits = Rc::new(Cell::new(0));

	let listener = {
		let hits = hits.clone();
		bind("#events .go", "click", move |_| hits.set(hits.get() + 1)).unwrap()
	};

	click("#events .go");
	click("#events .stay");
	assert_eq!(hits.get(), 1);

	// Elements added later are covered by the same listener.
	append("#events", "<button class='go' id='late'>late</button>").unwrap();
	click("#late");
	assert_eq!(hits.get(), 2);

	drop(listener);
	click("#events .go");
	assert_eq!(hits.get(), 2);

	root.remove();
}

#[wasm_bindgen_test]
fn test_bind_rejects_invalid_selector() {
	assert!(matches!(
		bind("[[", "click", |_| {}),
		Err(DomError::InvalidSelector { .. })
	));
}
