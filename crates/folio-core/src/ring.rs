//! Wrap-around cursor over a fixed-size collection.

/// Index over `size` items that wraps in both directions.
///
/// An empty ring always reports index 0 and ignores every movement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IndexRing {
    size: u16,
    current: u16,
}

impl IndexRing {
    pub const fn new(size: u16) -> Self {
        Self { size, current: 0 }
    }

    pub const fn starting_at(size: u16, start: u16) -> Self {
        Self {
            size,
            current: if size == 0 { 0 } else { start % size },
        }
    }

    pub const fn size(&self) -> u16 {
        self.size
    }

    pub const fn current(&self) -> u16 {
        self.current
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Steps forward. Returns `false` when the ring has fewer than two items.
    pub fn next(&mut self) -> bool {
        if self.size <= 1 {
            return false;
        }
        self.current = rotate_forward(self.current, self.size);
        true
    }

    /// Steps backward. Returns `false` when the ring has fewer than two items.
    pub fn prev(&mut self) -> bool {
        if self.size <= 1 {
            return false;
        }
        self.current = rotate_back(self.current, self.size);
        true
    }

    /// Jumps to `index`, wrapping out-of-range requests. Returns whether the cursor moved.
    pub fn goto(&mut self, index: u16) -> bool {
        if self.size == 0 {
            return false;
        }
        let target = index % self.size;
        let moved = target != self.current;
        self.current = target;
        moved
    }

    pub fn resize(&mut self, size: u16) {
        self.size = size;
        self.current = if size == 0 { 0 } else { self.current % size };
    }

    pub fn peek_next(&self) -> Option<u16> {
        (self.size > 0).then(|| rotate_forward(self.current, self.size))
    }

    pub fn peek_prev(&self) -> Option<u16> {
        (self.size > 0).then(|| rotate_back(self.current, self.size))
    }

    /// Up to `count` consecutive indices starting at the cursor, wrapping at the end.
    pub fn window(&self, count: u16) -> Window {
        Window {
            start: self.current,
            size: self.size,
            remaining: count.min(self.size),
            offset: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Window {
    start: u16,
    size: u16,
    remaining: u16,
    offset: u16,
}

impl Iterator for Window {
    type Item = u16;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = ((self.start as u32 + self.offset as u32) % self.size as u32) as u16;
        self.offset += 1;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for Window {}

pub fn rotate_forward(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

pub fn rotate_back(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_size_times_returns_to_origin() {
        for size in 1..=7u16 {
            for start in 0..size {
                let mut ring = IndexRing::starting_at(size, start);
                for _ in 0..size {
                    ring.next();
                    assert!(ring.current() < size);
                }
                assert_eq!(ring.current(), start);
            }
        }
    }

    #[test]
    fn mixed_steps_stay_in_range() {
        let mut ring = IndexRing::new(5);
        let steps = [true, false, false, false, true, false, true, true, true, true, false];
        for forward in steps {
            if forward {
                ring.next();
            } else {
                ring.prev();
            }
            assert!(ring.current() < 5);
        }
        assert_eq!(ring.current(), 1);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut ring = IndexRing::new(4);
        assert!(ring.prev());
        assert_eq!(ring.current(), 3);
    }

    #[test]
    fn single_and_empty_rings_do_not_move() {
        let mut single = IndexRing::new(1);
        assert!(!single.next());
        assert!(!single.prev());
        assert_eq!(single.current(), 0);

        let mut empty = IndexRing::new(0);
        assert!(!empty.next());
        assert!(!empty.prev());
        assert!(!empty.goto(3));
        assert_eq!(empty.current(), 0);
        assert_eq!(empty.peek_next(), None);
    }

    #[test]
    fn goto_wraps_out_of_range_requests() {
        let mut ring = IndexRing::new(4);
        assert!(ring.goto(6));
        assert_eq!(ring.current(), 2);
        assert!(!ring.goto(2));
    }

    #[test]
    fn shrinking_clamps_with_modulo() {
        let mut ring = IndexRing::starting_at(6, 5);
        ring.resize(4);
        assert_eq!(ring.current(), 1);
        ring.resize(0);
        assert_eq!(ring.current(), 0);
        ring.resize(3);
        assert_eq!(ring.current(), 0);
    }

    #[test]
    fn neighbours_wrap() {
        let ring = IndexRing::new(3);
        assert_eq!(ring.peek_prev(), Some(2));
        assert_eq!(ring.peek_next(), Some(1));
    }

    #[test]
    fn window_wraps_and_caps_at_size() {
        let ring = IndexRing::starting_at(3, 2);
        let mut pair = [0u16; 2];
        for (slot, index) in pair.iter_mut().zip(ring.window(2)) {
            *slot = index;
        }
        assert_eq!(pair, [2, 0]);
        assert_eq!(ring.window(10).len(), 3);
        assert_eq!(IndexRing::new(0).window(2).next(), None);
    }
}
