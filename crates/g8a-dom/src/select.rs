//! Selection and mutation helpers.
//!
//! [`el`] resolves a selector into a [`Selection`]: `Single` for exactly one
//! match, `Many` otherwise. The get/set helpers built on top of it follow
//! one rule:
//!
//! - readers look at the first match and return `None` when nothing matches
//! - writers apply to every match
//!
//! ```ignore
//! use g8a_dom::select::{html, set_html, append};
//!
//! set_html("#status", "<b>ready</b>")?;
//! append("#log", "<li>started</li>")?;
//! assert_eq!(html("#status")?.as_deref(), Some("<b>ready</b>"));
//! ```

use crate::document::document;
use crate::error::DomError;
use g8a_core::Selection;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{
	Element, FormData, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
	NodeList,
};

/// Form controls scanned by [`values`].
pub const FORM_CONTROLS: &str = "input, textarea, select";

/// Resolves `selector` to one element or a collection.
pub fn el(selector: &str) -> Result<Selection<Element>, DomError> {
	Ok(Selection::from_matches(query_all(selector)?))
}

/// Returns every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
	let list = document()?
		.query_selector_all(selector)
		.map_err(|e| DomError::invalid_selector(selector, e))?;
	Ok(elements(&list))
}

/// Returns the first element matching `selector`.
pub fn query(selector: &str) -> Result<Option<Element>, DomError> {
	document()?
		.query_selector(selector)
		.map_err(|e| DomError::invalid_selector(selector, e))
}

fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Detaches every matched element from its parent and returns how many were removed.
pub fn remove(selector: &str) -> Result<usize, DomError> {
	let mut removed = 0;
	for element in query_all(selector)? {
		if let Some(parent) = element.parent_node() {
			parent.remove_child(&element)?;
			removed += 1;
		}
	}
	Ok(removed)
}

/// Class attribute of the first match.
pub fn classes(selector: &str) -> Result<Option<String>, DomError> {
	Ok(query(selector)?.map(|el| el.class_name()))
}

/// Replaces the class attribute of every match.
pub fn set_classes(selector: &str, classes: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		element.set_class_name(classes);
	}
	Ok(())
}

/// Inner HTML of the first match.
pub fn html(selector: &str) -> Result<Option<String>, DomError> {
	Ok(query(selector)?.map(|el| el.inner_html()))
}

/// Replaces the inner HTML of every match.
pub fn set_html(selector: &str, html: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		element.set_inner_html(html);
	}
	Ok(())
}

/// Appends markup after the current inner HTML of every match.
pub fn append(selector: &str, html: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		let current = element.inner_html();
		element.set_inner_html(&format!("{}{}", current, html));
	}
	Ok(())
}

/// Inserts markup before the current inner HTML of every match.
pub fn prepend(selector: &str, html: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		let current = element.inner_html();
		element.set_inner_html(&format!("{}{}", html, current));
	}
	Ok(())
}

/// Rendered text of the first match.
///
/// HTML elements report `innerText`; other elements (SVG, MathML) fall back
/// to `textContent`.
pub fn text(selector: &str) -> Result<Option<String>, DomError> {
	Ok(query(selector)?.map(|el| match el.dyn_ref::<HtmlElement>() {
		Some(html) => html.inner_text(),
		None => el.text_content().unwrap_or_default(),
	}))
}

/// Replaces the text of every match.
pub fn set_text(selector: &str, text: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		match element.dyn_ref::<HtmlElement>() {
			Some(html) => html.set_inner_text(text),
			None => element.set_text_content(Some(text)),
		}
	}
	Ok(())
}

/// Attribute `name` of the first match.
pub fn attr(selector: &str, name: &str) -> Result<Option<String>, DomError> {
	Ok(query(selector)?.and_then(|el| el.get_attribute(name)))
}

/// Sets attribute `name` on every match and returns the value read back
/// from the first one.
pub fn set_attr(selector: &str, name: &str, value: &str) -> Result<Option<String>, DomError> {
	let matches = query_all(selector)?;
	for element in &matches {
		element.set_attribute(name, value)?;
	}
	Ok(matches.first().and_then(|el| el.get_attribute(name)))
}

/// Value of the first match when it is a form control.
pub fn value(selector: &str) -> Result<Option<String>, DomError> {
	Ok(query(selector)?.as_ref().and_then(control_value))
}

/// Sets the value of every matched form control.
pub fn set_value(selector: &str, value: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		set_control_value(&element, value);
	}
	Ok(())
}

/// Current value of an input, textarea or select element.
pub fn control_value(element: &Element) -> Option<String> {
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
		return Some(area.value());
	}
	element
		.dyn_ref::<HtmlSelectElement>()
		.map(HtmlSelectElement::value)
}

fn set_control_value(element: &Element, value: &str) {
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		input.set_value(value);
	} else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
		area.set_value(value);
	} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
		select.set_value(value);
	}
}

/// Values collected from the form controls under a selection.
#[derive(Debug, Clone)]
pub enum FormValues {
	/// Control values keyed by `name`.
	Map(BTreeMap<String, String>),
	/// A multipart payload suitable for sending with a request.
	FormData(FormData),
}

impl FormValues {
	/// The plain map, if this is [`FormValues::Map`].
	pub fn into_map(self) -> Option<BTreeMap<String, String>> {
		match self {
			Self::Map(map) => Some(map),
			Self::FormData(_) => None,
		}
	}

	/// The form data, if this is [`FormValues::FormData`].
	pub fn into_form_data(self) -> Option<FormData> {
		match self {
			Self::Map(_) => None,
			Self::FormData(data) => Some(data),
		}
	}
}

/// Collects the named `input`, `textarea` and `select` descendants of every
/// match, either as a plain map or as `FormData`.
///
/// Controls without a `name` are skipped. In map form a later control with
/// the same name replaces an earlier one; `FormData` keeps both.
pub fn values(selector: &str, as_form_payload: bool) -> Result<FormValues, DomError> {
	let mut pairs = Vec::new();
	for root in query_all(selector)? {
		let controls = root
			.query_selector_all(FORM_CONTROLS)
			.map_err(|e| DomError::invalid_selector(FORM_CONTROLS, e))?;
		for control in elements(&controls) {
			if let (Some(name), Some(value)) = (control.get_attribute("name"), control_value(&control))
			{
				pairs.push((name, value));
			}
		}
	}

	if !as_form_payload {
		return Ok(FormValues::Map(pairs.into_iter().collect()));
	}

	let data = FormData::new()?;
	for (name, value) in &pairs {
		data.append_with_str(name, value)?;
	}
	Ok(FormValues::FormData(data))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_helpers_fail_cleanly_outside_browser() {
		assert_eq!(el("p").unwrap_err(), DomError::NoWindow);
		assert_eq!(html("p").unwrap_err(), DomError::NoWindow);
		assert_eq!(set_text("p", "x").unwrap_err(), DomError::NoWindow);
		assert_eq!(remove("p").unwrap_err(), DomError::NoWindow);
		assert!(values("form", false).is_err());
	}
}
