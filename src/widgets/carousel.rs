/// Minimum horizontal drag distance that counts as a swipe.
pub const SWIPE_THRESHOLD: i32 = 40;

/// Horizontal navigation input accepted by the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKey {
    /// Previous slide.
    Left,
    /// Next slide.
    Right,
}

/// Index-cycling slide viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    captions: Vec<String>,
    index: usize,
    drag_start: Option<i32>,
}

impl Carousel {
    /// What: Create a carousel over slides with the given captions.
    ///
    /// Inputs:
    /// - `captions`: One caption per slide (empty string when a slide has none)
    ///
    /// Output:
    /// - `None` when there are no slides; otherwise a carousel on slide 0.
    #[must_use]
    pub fn new(captions: Vec<String>) -> Option<Self> {
        if captions.is_empty() {
            tracing::warn!("carousel: no slides");
            return None;
        }
        Some(Self {
            captions,
            index: 0,
            drag_start: None,
        })
    }

    /// Current slide index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Always `false`; a carousel is never built without slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Caption of the current slide.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.captions.get(self.index).map_or("", String::as_str)
    }

    /// Jump to slide `i`, wrapping in both directions.
    pub fn go(&mut self, i: isize) {
        let len = isize::try_from(self.captions.len()).unwrap_or(isize::MAX);
        if len == 0 {
            return;
        }
        self.index = usize::try_from(i.rem_euclid(len)).unwrap_or(0);
    }

    /// Previous slide (wraps to the last).
    pub fn prev(&mut self) {
        self.go(self.signed_index() - 1);
    }

    /// Next slide (wraps to the first).
    pub fn next(&mut self) {
        self.go(self.signed_index() + 1);
    }

    /// Arrow-key navigation.
    pub fn handle_key(&mut self, key: CarouselKey) {
        match key {
            CarouselKey::Left => self.prev(),
            CarouselKey::Right => self.next(),
        }
    }

    /// Pointer went down at horizontal position `x`.
    pub fn pointer_down(&mut self, x: i32) {
        self.drag_start = Some(x);
    }

    /// What: Pointer released at horizontal position `x`.
    ///
    /// Inputs:
    /// - `x`: Release position
    ///
    /// Output:
    /// - Dragging right past the threshold goes back, left goes forward.
    pub fn pointer_up(&mut self, x: i32) {
        let Some(start) = self.drag_start.take() else {
            return;
        };
        let dx = x.saturating_sub(start);
        if dx > SWIPE_THRESHOLD {
            self.prev();
        } else if dx < -SWIPE_THRESHOLD {
            self.next();
        }
    }

    /// Current index as a signed value for offset arithmetic.
    fn signed_index(&self) -> isize {
        isize::try_from(self.index).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(vec!["a".into(), "b".into(), "c".into()]).expect("slides")
    }

    #[test]
    /// What: Navigation wraps in both directions
    ///
    /// - Input: prev from 0, next from last, go(-4)
    /// - Output: 2, 0, 2
    fn navigation_wraps() {
        let mut c = carousel();
        c.prev();
        assert_eq!(c.index(), 2);
        assert_eq!(c.caption(), "c");
        c.next();
        assert_eq!(c.index(), 0);
        c.go(-4);
        assert_eq!(c.index(), 2);
        c.handle_key(CarouselKey::Right);
        assert_eq!(c.index(), 0);
    }

    #[test]
    /// What: Swipes beyond the threshold move one slide
    ///
    /// - Input: Short drag, long left drag, long right drag, release without press
    /// - Output: 0, 1, 0, 0
    fn swipe_threshold() {
        let mut c = carousel();
        c.pointer_down(100);
        c.pointer_up(130);
        assert_eq!(c.index(), 0);
        c.pointer_down(100);
        c.pointer_up(50);
        assert_eq!(c.index(), 1);
        c.pointer_down(0);
        c.pointer_up(41);
        assert_eq!(c.index(), 0);
        c.pointer_up(500);
        assert_eq!(c.index(), 0);
    }

    #[test]
    /// What: No slides means no carousel
    ///
    /// - Input: Empty caption list
    /// - Output: None
    fn empty_is_not_initialized() {
        assert!(Carousel::new(Vec::new()).is_none());
    }
}
