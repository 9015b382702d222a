/// How a binary search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The target was found at this index.
    Found(usize),
    /// The bounds were exhausted without finding the target.
    NotFound,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,
    /// Number of probes made.
    pub iters: usize,
}

impl Solution {
    /// Returns the index of the target if it was found.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.status {
            Status::Found(index) => Some(index),
            Status::NotFound | Status::StoppedByObserver => None,
        }
    }
}
