//! Random index selection for shuffle navigation
//!
//! The navigator never touches a RNG directly; it asks an [`IndexPicker`]
//! for indices. The app injects a thread-RNG picker, tests inject a scripted
//! one, which keeps shuffle behavior deterministic under test.

use rand::Rng;

/// Source of uniformly distributed indices
pub trait IndexPicker {
    /// Pick an index in `0..len`. `len` is always non-zero when called
    /// from the navigator.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picker backed by the thread-local RNG
#[derive(Debug, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker that replays a fixed sequence of indices, clamped to range
///
/// Intended for tests; cycles when the sequence runs out.
#[derive(Debug)]
pub struct SequencePicker {
    indices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        let raw = self.indices.get(self.next).copied().unwrap_or(0);
        self.next = (self.next + 1) % self.indices.len().max(1);
        raw.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_picker_stays_in_range() {
        let mut picker = ThreadRngPicker;
        for _ in 0..100 {
            assert!(picker.pick(7) < 7);
        }
    }

    #[test]
    fn sequence_picker_replays_and_clamps() {
        let mut picker = SequencePicker::new(vec![2, 9]);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.pick(5), 4); // 9 clamped into range
        assert_eq!(picker.pick(5), 2); // cycles
    }
}
