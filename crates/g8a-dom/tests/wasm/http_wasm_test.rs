//! Browser tests for the XMLHttpRequest wrapper.

#![cfg(target_arch = "wasm32")]

use g8a_core::{Body, Payload, Reply, Settings};
use g8a_dom::req;
use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Sends a request and waits for its callback.
async fn send(settings: &Settings, method: &str, url: &str, payload: Option<Payload>) -> Reply {
	let reply = Rc::new(RefCell::new(None));
	let mut started = None;
	let promise = Promise::new(&mut |resolve, _reject| {
		let reply = reply.clone();
		started = Some(req(settings, method, url, payload.clone().map(Into::into), move |r| {
			*reply.borrow_mut() = Some(r);
			let _ = resolve.call0(&JsValue::NULL);
		}));
	});

	let handle = started.unwrap().unwrap();
	assert!(handle.is_pending());
	JsFuture::from(promise).await.unwrap();
	assert_eq!(handle.ready_state(), 4);
	assert!(!handle.is_pending());
	reply.borrow_mut().take().unwrap()
}

#[wasm_bindgen_test]
async fn test_unreachable_host_reports_failure() {
	let reply = send(&Settings::new(), "get", "http://127.0.0.1:1/nothing", None).await;

	assert!(!reply.ok);
	assert_eq!(reply.status, None);
	assert_eq!(reply.body, None);
}

#[wasm_bindgen_test]
async fn test_missing_resource_is_not_ok() {
	let settings = Settings::new().with_base_url("/g8a-missing");
	let payload = Payload::fields([("q", "a b")]);
	let reply = send(&settings, "get", "items", Some(payload)).await;

	assert!(!reply.ok);
	assert_eq!(reply.status, Some(404));
	assert!(reply.body.is_some());
}

#[wasm_bindgen_test]
async fn test_same_origin_page_is_ok() {
	let reply = send(&Settings::new(), "get", "/", None).await;

	assert!(reply.ok);
	assert_eq!(reply.status, Some(200));
	assert!(matches!(reply.body, Some(Body::Text(ref html)) if !html.is_empty()));
}

#[wasm_bindgen_test]
async fn test_timeout_reports_failure() {
	let settings = Settings::new().with_timeout(1);
	let reply = send(&settings, "get", "http://10.255.255.1/slow", None).await;

	assert!(!reply.ok);
	assert_eq!(reply.status, None);
	assert_eq!(reply.body, None);
}

#[wasm_bindgen_test]
fn test_abort_before_completion() {
	let handle = req(&Settings::new(), "post", "/g8a-missing", None, |_| {
		panic!("aborted request must not complete");
	})
	.unwrap();
	assert!(handle.is_pending());

	handle.abort().unwrap();
	assert!(!handle.is_pending());
	assert_eq!(handle.status(), 0);
}
