/// Control actions supported by binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop searching before the bounds are exhausted.
    ///
    /// A probe that already matched the target is still reported as found.
    StopEarly,
}
