//! Central store for text field values.
//!
//! UI-agnostic: no layout, no measurement beyond character counts. Every
//! edit refreshes the cached length and reports whether the value actually
//! changed, so callers only announce real mutations.

use crate::id::InputId;
use crate::state::InputState;
use crate::text::{char_count, filter_single_line, normalize_newlines, prev_cursor_boundary};
use std::borrow::Cow;
use std::collections::HashMap;

/// Values of every text field on a page.
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string(), false);
/// store.insert_text(id, " World\n");
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// assert_eq!(store.char_len(id), 11);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Character length of the value; 0 for unknown fields.
    pub fn char_len(&self, id: InputId) -> usize {
        self.values.get(&id).map_or(0, |s| s.char_len)
    }

    /// Insert an entry if missing. Existing values are left untouched.
    pub fn ensure_initial(&mut self, id: InputId, initial: String, multiline: bool) {
        self.values.entry(id).or_insert_with(|| {
            let initial = sanitize(multiline, &initial).into_owned();
            InputState::new(initial, multiline)
        });
    }

    /// Overwrite the value, moving the caret to the end.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, id: InputId, value: &str) -> bool {
        let st = self.values.entry(id).or_default();
        let value = sanitize(st.multiline, value);
        if st.value == value {
            st.caret = st.value.len();
            return false;
        }
        st.value = value.into_owned();
        st.caret = st.value.len();
        st.refresh_len();
        true
    }

    /// Insert at the caret.
    ///
    /// Single-line fields drop newlines; multi-line fields normalize them.
    /// Returns `true` if the value changed.
    pub fn insert_text(&mut self, id: InputId, s: &str) -> bool {
        let st = self.values.entry(id).or_default();
        let s = sanitize(st.multiline, s);
        if s.is_empty() {
            return false;
        }
        st.value.insert_str(st.caret, &s);
        st.caret += s.len();
        st.refresh_len();
        true
    }

    /// Delete the char before the caret.
    pub fn backspace(&mut self, id: InputId) -> bool {
        let Some(st) = self.values.get_mut(&id) else {
            return false;
        };
        if st.caret == 0 {
            return false;
        }
        let prev = prev_cursor_boundary(&st.value, st.caret);
        st.value.drain(prev..st.caret);
        st.caret = prev;
        st.refresh_len();
        true
    }
}

fn sanitize(multiline: bool, s: &str) -> Cow<'_, str> {
    if multiline {
        normalize_newlines(s)
    } else {
        filter_single_line(s)
    }
}
