//! Watched - an observable value cell
//!
//! `Watched<T>` holds a value and notifies registered observers on every
//! write. Observers receive `(old, new)` synchronously, in registration
//! order, before `set()` returns.
//!
//! ## Example
//!
//! ```
//! use g8a_core::Watched;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let count = Watched::new(0);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = seen.clone();
//! count.on_change(move |old, new| log.borrow_mut().push((*old, *new)));
//!
//! count.set(1);
//! count.update(|n| *n += 1);
//! assert_eq!(*seen.borrow(), vec![(0, 1), (1, 2)]);
//! ```

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

type Observer<T> = Rc<dyn Fn(&T, &T)>;

struct Inner<T> {
	value: T,
	observers: Vec<Observer<T>>,
}

/// An observable value cell.
///
/// Clones share the same value and observer list, so a cell can be moved
/// into event handlers and still be read elsewhere.
pub struct Watched<T: 'static> {
	inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> Clone for Watched<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Clone + 'static> Watched<T> {
	/// Creates a cell holding `value` with no observers.
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(RefCell::new(Inner {
				value,
				observers: Vec::new(),
			})),
		}
	}

	/// Returns a copy of the current value.
	pub fn get(&self) -> T {
		self.inner.borrow().value.clone()
	}

	/// Reads the current value through a closure without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.borrow().value)
	}

	/// Registers an observer called with `(old, new)` after every write.
	pub fn on_change<F>(&self, f: F)
	where
		F: Fn(&T, &T) + 'static,
	{
		self.inner.borrow_mut().observers.push(Rc::new(f));
	}

	/// Stores `value` and notifies every observer.
	///
	/// Observers may read or write the cell; the internal borrow is released
	/// before they run.
	pub fn set(&self, value: T) {
		let (old, observers) = {
			let mut inner = self.inner.borrow_mut();
			let old = std::mem::replace(&mut inner.value, value);
			(old, inner.observers.clone())
		};
		let new = self.get();
		for observer in &observers {
			observer(&old, &new);
		}
	}

	/// Modifies the value in place and notifies every observer.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		let mut next = self.get();
		f(&mut next);
		self.set(next);
	}

	/// Number of registered observers.
	pub fn observer_count(&self) -> usize {
		self.inner.borrow().observers.len()
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Watched<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("Watched")
			.field("value", &inner.value)
			.field("observers", &inner.observers.len())
			.finish()
	}
}
