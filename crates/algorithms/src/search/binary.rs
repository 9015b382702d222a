mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use std::cmp::Ordering;

use log::{debug, trace};
use tabula_core::Observer;

/// Sentinel reported by [`index_of`] when the target is absent.
pub const NOT_FOUND: isize = -1;

/// Searches a sorted slice for `target` using bisection.
/// Observers see every probe and may stop the search early.
///
/// The slice must be sorted in ascending order; this is not checked.
/// If `target` occurs more than once, the reported index is whichever
/// occurrence the bisection reaches first.
pub fn search<T, Obs>(seq: &[T], target: &T, mut observer: Obs) -> Solution
where
    T: Ord,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    if seq.is_empty() {
        debug!("binary search over empty sequence");
        return Solution {
            status: Status::NotFound,
            iters: 0,
        };
    }

    let mut low = 0;
    let mut high = seq.len() - 1;
    let mut iter = 0;

    while low <= high {
        iter += 1;
        let mid = low + (high - low) / 2;
        let ordering = seq[mid].cmp(target);

        trace!("probe {iter}: bounds [{low}, {high}], mid {mid}, {ordering:?}");

        let event = Event {
            iter,
            bounds: [low, high],
            mid,
            value: &seq[mid],
            ordering,
        };
        let action = observer.observe(&event);

        match ordering {
            Ordering::Equal => {
                debug!("binary search found target at {mid} after {iter} probes");
                return Solution {
                    status: Status::Found(mid),
                    iters: iter,
                };
            }
            _ if action == Some(Action::StopEarly) => {
                debug!("binary search stopped by observer after {iter} probes");
                return Solution {
                    status: Status::StoppedByObserver,
                    iters: iter,
                };
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => high = next,
                None => break,
            },
        }
    }

    debug!("binary search exhausted bounds after {iter} probes");
    Solution {
        status: Status::NotFound,
        iters: iter,
    }
}

/// Returns the index of `target` in the sorted slice, or `None` if absent.
///
/// # Examples
///
/// ```
/// use tabula_algorithms::search::binary_search;
///
/// assert_eq!(binary_search(&[2, 4, 6, 8, 10], &6), Some(2));
/// assert_eq!(binary_search(&[2, 4, 6, 8, 10], &5), None);
/// ```
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    search(seq, target, ()).index()
}

/// Returns the index of `target` in the sorted slice, or [`NOT_FOUND`] if absent.
#[must_use]
pub fn index_of<T: Ord>(seq: &[T], target: &T) -> isize {
    binary_search(seq, target)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}
