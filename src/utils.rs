use std::{cell::{Ref, RefCell, RefMut}, fmt::Debug, rc::Rc};

/// Shared mutable cell. Compound runtime values (strings, lists, objects)
/// and scopes are aliased freely, so they all live behind one of these.
#[derive(Default)]
pub struct RcCell<T> {
	inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcCell<T> {
	fn clone(&self) -> Self { Self { inner: self.inner.clone() } }
}

impl<T> RcCell<T> {
	pub fn new(value: T) -> Self { Self { inner: Rc::new(RefCell::new(value)) } }

	pub fn borrow(&self) -> Ref<'_, T> { self.inner.borrow() }

	pub fn borrow_mut(&self) -> RefMut<'_, T> { self.inner.borrow_mut() }

	/// True when both handles alias the same cell.
	pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.inner, &other.inner) }
}

impl<T: Debug> Debug for RcCell<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.inner.borrow().fmt(f) }
}

/// Render a byte string as a single-quoted Oak literal. Only `\` and `'`
/// need escaping for the result to re-lex to the same bytes.
pub fn quote_bytes(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() + 2);
	out.push('\'');
	for ch in String::from_utf8_lossy(bytes).chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			c => out.push(c),
		}
	}
	out.push('\'');
	out
}
