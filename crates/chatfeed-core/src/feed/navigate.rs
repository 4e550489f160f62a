//! Keyboard navigation cursor.

/// Cursor over the flattened filtered message list.
///
/// Holds the single active position plus the transient "just copied" marker.
/// Movement clamps at the list ends and enters at position zero from the
/// unset state. The cursor never outlives the list it addresses: replacing
/// the list resets it, so an active index is always in range for the
/// *current* list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    active: Option<usize>,
    copied: Option<usize>,
}

impl Navigator {
    /// Creates an unset cursor over an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the cursor at a freshly produced list of `len` messages.
    ///
    /// Any previous position is discarded; no attempt is made to track
    /// "same message, new index" across a filter pass.
    pub const fn replace_list(&mut self, len: usize) {
        self.len = len;
        self.active = None;
        self.copied = None;
    }

    /// Moves down one position, entering at the top from unset.
    pub fn move_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = Some(self.active.map_or(0, |i| (i + 1).min(self.len - 1)));
    }

    /// Moves up one position, entering at the top from unset.
    pub fn move_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = Some(self.active.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Selects an explicit position (pointer click), if in range.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = Some(index);
        }
    }

    /// Marks the active position as copied and returns it.
    ///
    /// The caller performs the actual clipboard write (fire-and-forget; the
    /// engine never assumes it succeeded) and later calls
    /// [`Self::clear_copied`] to expire the marker.
    pub fn activate(&mut self) -> Option<usize> {
        let index = self.active?;
        self.copied = Some(index);
        Some(index)
    }

    /// Expires the transient copied marker.
    pub const fn clear_copied(&mut self) {
        self.copied = None;
    }

    /// Clears the active position.
    pub const fn deselect(&mut self) {
        self.active = None;
    }

    /// The active position, if any. Guaranteed in range for the current list.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// The last copied position, until the marker expires.
    #[must_use]
    pub const fn copied(&self) -> Option<usize> {
        self.copied
    }

    /// Length of the list the cursor currently addresses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the addressed list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
