use std::cmp::Ordering;

/// Probe event emitted by binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a, T> {
    /// Probe counter (1-based).
    pub iter: usize,
    /// Inclusive `[low, high]` bounds being searched.
    pub bounds: [usize; 2],
    /// Index of the probed element.
    pub mid: usize,
    /// The probed element.
    pub value: &'a T,
    /// How the probed element compares to the target.
    pub ordering: Ordering,
}
