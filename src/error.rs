/// The error type for fallible `List` and `Cursor` operations.
///
/// Every precondition violation is reported to the immediate caller through
/// one of these variants; no operation silently ignores bad input. The
/// variants are disjoint so callers can tell "the list is fully traversed"
/// ([`NoSuchElement`]) apart from API misuse ([`IllegalState`]) and from a
/// stale cursor ([`ConcurrentModification`]).
///
/// [`NoSuchElement`]: Error::NoSuchElement
/// [`IllegalState`]: Error::IllegalState
/// [`ConcurrentModification`]: Error::ConcurrentModification
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index argument was outside the operation's valid bound.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// A value-based lookup found no element equal to the target.
    #[error("no matching element in the list")]
    ElementNotFound,

    /// A boundary operation was invoked on an empty list.
    #[error("the list is empty")]
    EmptyCollection,

    /// `next` or `previous` was invoked with no further element in that
    /// direction.
    #[error("no further element in that direction")]
    NoSuchElement,

    /// A cursor detected that the list was modified through another handle
    /// since the cursor's last snapshot.
    #[error("list modified outside this cursor since its last snapshot")]
    ConcurrentModification,

    /// A cursor mutation was invoked without a preceding qualifying
    /// traversal step, or twice without an intervening step.
    #[error("cursor mutation requires a fresh traversal step")]
    IllegalState,
}
