//! Browser tests for the cookie and local storage stores.

#![cfg(target_arch = "wasm32")]

use g8a_core::{WriteOptions, get, set_with};
use g8a_dom::{CookieStore, LocalStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_cookie_round_trip() {
	let mut cookies = CookieStore::new().unwrap();

	set_with("g8a_theme", "dark mode".to_string(), &mut cookies, &WriteOptions::days(1.0)).unwrap();
	assert_eq!(get("g8a_theme", &cookies, String::new()), "dark mode");
	assert!(cookies.raw().unwrap().contains("g8a_theme=dark%20mode"));

	cookies.remove("g8a_theme").unwrap();
	assert_eq!(get("g8a_theme", &cookies, "fallback".to_string()), "fallback");
}

#[wasm_bindgen_test]
fn test_session_cookie_without_expiry() {
	let mut cookies = CookieStore::new().unwrap();

	set_with("g8a_session", "1".to_string(), &mut cookies, &WriteOptions::default()).unwrap();
	assert_eq!(get("g8a_session", &cookies, String::new()), "1");

	cookies.remove("g8a_session").unwrap();
}

#[wasm_bindgen_test]
fn test_cookie_names_do_not_match_by_suffix() {
	let mut cookies = CookieStore::new().unwrap();

	set_with("xg8a_id", "wrong".to_string(), &mut cookies, &WriteOptions::default()).unwrap();
	assert_eq!(get("g8a_id", &cookies, String::new()), "");

	cookies.remove("xg8a_id").unwrap();
}

#[wasm_bindgen_test]
fn test_local_store_round_trip() {
	let mut local = LocalStore::new().unwrap();

	set_with("g8a_draft", "hello".to_string(), &mut local, &WriteOptions::default()).unwrap();
	assert_eq!(get("g8a_draft", &local, String::new()), "hello");

	local.remove("g8a_draft").unwrap();
	assert_eq!(get("g8a_draft", &local, "none".to_string()), "none");
}

#[wasm_bindgen_test]
fn test_local_store_empty_reads_as_default() {
	let mut local = LocalStore::new().unwrap();

	set_with("g8a_empty", String::new(), &mut local, &WriteOptions::default()).unwrap();
	assert_eq!(get("g8a_empty", &local, "default".to_string()), "default");

	local.remove("g8a_empty").unwrap();
}
