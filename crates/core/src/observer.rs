/// Receives algorithm events and decides how the iteration should proceed.
///
/// Algorithms that loop (such as binary search) emit one event per step.
/// An observer can record those events, log them, or steer the loop.
///
/// `observe` returns `Some(action)` to request an algorithm-specific action,
/// or `None` to let the algorithm continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
