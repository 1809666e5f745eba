/// Position of the home page's guild carousel.
///
/// `active` is always within `0..len` (or `0` for an empty list). Hovering sets
/// `paused`; the auto-advance task re-arms itself whenever this value changes,
/// so any manual move pushes the next automatic step a full interval out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether the auto-advance timer should be running.
    pub fn is_running(&self) -> bool {
        !self.paused && self.len > 0
    }

    /// Jump to any index, wrapping in both directions.
    pub fn go_to(&mut self, index: isize) {
        if self.len == 0 {
            return;
        }
        self.active = index.rem_euclid(self.len as isize) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.active as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.active as isize - 1);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Resize after a new list arrives, keeping the position when still valid.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.active >= len {
            self.active = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(10);
        carousel.go_to(9);

        carousel.next();

        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut carousel = Carousel::new(10);

        carousel.prev();

        assert_eq!(carousel.active(), 9);
    }

    #[test]
    fn jump_wraps_out_of_range_targets() {
        let mut carousel = Carousel::new(4);

        carousel.go_to(6);
        assert_eq!(carousel.active(), 2);

        carousel.go_to(-5);
        assert_eq!(carousel.active(), 3);
    }

    /// Index stays in range over a long mixed sequence of moves.
    #[test]
    fn index_stays_in_range() {
        let mut carousel = Carousel::new(3);
        for step in 0..200isize {
            match step % 5 {
                0 | 1 => carousel.next(),
                2 => carousel.prev(),
                3 => carousel.go_to(step * 7 - 300),
                _ => carousel.go_to(-step),
            }
            assert!(carousel.active() < carousel.len());
        }
    }

    #[test]
    fn empty_list_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.go_to(3);

        assert_eq!(carousel.active(), 0);
        assert!(!carousel.is_running());
    }

    #[test]
    fn hover_pauses() {
        let mut carousel = Carousel::new(2);
        assert!(carousel.is_running());

        carousel.set_paused(true);
        assert!(!carousel.is_running());

        carousel.set_paused(false);
        assert!(carousel.is_running());
    }

    #[test]
    fn resize_resets_out_of_range_position() {
        let mut carousel = Carousel::new(10);
        carousel.go_to(7);

        carousel.resize(8);
        assert_eq!(carousel.active(), 7);

        carousel.resize(5);
        assert_eq!(carousel.active(), 0);
    }
}
