//! Process-level clipboard sink.
//!
//! The placement string's consumer is a separate tool; whatever front end
//! hosts this crate reads the last copied text from here and forwards it to
//! the platform clipboard. Copying never fails and is never retried.

use std::cell::RefCell;

thread_local! {
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Copy text to the clipboard. Empty strings are ignored.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }
    CLIPBOARD_BUFFER.with(|buffer| {
        *buffer.borrow_mut() = Some(text.to_string());
    });
}

/// Most recently copied text, if any.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buffer| buffer.borrow().clone())
}

/// Clear the clipboard.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buffer| {
        *buffer.borrow_mut() = None;
    });
}

/// Check if the clipboard has content.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buffer| buffer.borrow().is_some())
}
