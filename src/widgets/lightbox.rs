/// Keys the lightbox reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    /// Close the viewer.
    Escape,
    /// Previous image.
    Left,
    /// Next image.
    Right,
}

/// Full-size viewer over an ordered list of items.
///
/// Navigation clamps at both ends; closing remembers which item to refocus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    current: usize,
    open: bool,
}

impl Lightbox {
    /// What: Open the viewer on item `index` of `len` items.
    ///
    /// Inputs:
    /// - `index`: Item to show (clamped into range)
    /// - `len`: Number of items the viewer can step through
    ///
    /// Output:
    /// - No-op when `len` is zero.
    pub fn open(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.len = len;
        self.current = index.min(len - 1);
        self.open = true;
    }

    /// Close the viewer; returns the index focus should return to.
    pub fn close(&mut self) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.current)
    }

    /// Whether the viewer is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the item being shown.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether the "previous" control is shown.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Whether the "next" control is shown.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current + 1 < self.len
    }

    /// Step back; stays on the first item.
    pub fn show_prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    /// Step forward; stays on the last item.
    pub fn show_next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    /// What: Route a key while the viewer might be open.
    ///
    /// Inputs:
    /// - `key`: Key pressed
    ///
    /// Output:
    /// - `true` when the key was consumed (only while open).
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            LightboxKey::Escape => {
                self.close();
            }
            LightboxKey::Left => self.show_prev(),
            LightboxKey::Right => self.show_next(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Navigation clamps and controls reflect neighbors
    ///
    /// - Input: Open at 0 of 3, step around the ends
    /// - Output: No wrap; has_prev/has_next follow position
    fn navigation_clamps() {
        let mut lb = Lightbox::default();
        lb.open(0, 3);
        assert!(!lb.has_prev());
        lb.show_prev();
        assert_eq!(lb.current(), 0);
        lb.show_next();
        lb.show_next();
        lb.show_next();
        assert_eq!(lb.current(), 2);
        assert!(!lb.has_next());
        assert!(lb.has_prev());
    }

    #[test]
    /// What: Keys only act while open; Escape closes and reports focus target
    ///
    /// - Input: Right while closed, open at 1, Escape
    /// - Output: Ignored, then closed at index 1
    fn keys_only_when_open() {
        let mut lb = Lightbox::default();
        assert!(!lb.handle_key(LightboxKey::Right));
        lb.open(5, 2);
        assert_eq!(lb.current(), 1);
        assert!(lb.handle_key(LightboxKey::Escape));
        assert!(!lb.is_open());
        assert_eq!(lb.close(), None);
    }
}
