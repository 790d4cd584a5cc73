//! Opaque handle for a text field in the store.

/// Identifies one field in an [`InputValueStore`](crate::InputValueStore).
///
/// The raw value means nothing here. Integration layers map their own
/// element ids onto it at the boundary:
///
/// ```ignore
/// impl From<html::Id> for FieldKey {
///     fn from(id: html::Id) -> Self {
///         FieldKey(InputId::from_raw(id.0 as u64))
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(u64::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_u32_without_loss() {
        let id = InputId::from(u32::MAX);
        assert_eq!(id.as_raw(), u64::from(u32::MAX));
        assert_eq!(InputId::from_raw(7), InputId::from(7u32));
    }
}
