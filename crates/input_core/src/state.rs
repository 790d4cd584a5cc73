//! Per-field editing state held by the store.

/// State for a single text field.
///
/// Managed by [`InputValueStore`](crate::InputValueStore); not exposed.
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    pub value: String,

    /// Byte index into `value`, always on a char boundary.
    pub caret: usize,

    /// Cached character count of `value`.
    pub char_len: usize,

    /// Newlines are kept (textarea) rather than stripped (input).
    pub multiline: bool,
}

impl InputState {
    pub fn new(value: String, multiline: bool) -> Self {
        let mut state = Self {
            caret: value.len(),
            value,
            char_len: 0,
            multiline,
        };
        state.refresh_len();
        state
    }

    pub fn refresh_len(&mut self) {
        self.char_len = crate::text::char_count(&self.value);
    }
}
