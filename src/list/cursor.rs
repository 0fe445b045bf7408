use crate::error::Error;
use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// Direction of the most recent traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// A fail-fast editing cursor over a [`List`].
///
/// A `Cursor` is like an iterator, except that it can move back and forth
/// and can mutate the list at its position. In a list with length *n*, there
/// are *n* + 1 valid positions for the cursor, indexed by 0, 1, ..., *n*,
/// where position *n* is "one past the last element" (the ghost node of the
/// list).
///
/// Unlike an ordinary iterator, a `Cursor` holds no borrow of its list;
/// every operation takes the list explicitly: `&List<T>` for traversal,
/// `&mut List<T>` for mutation. At creation the cursor snapshots the list's
/// version counter. Whenever the list is mutated through another handle (a
/// direct `List` call or another cursor), the version diverges from the
/// snapshot, and the cursor's next fallible call reports
/// [`Error::ConcurrentModification`] instead of touching the chain. A cursor
/// mutating through itself re-syncs its own snapshot and remains usable.
///
/// # Examples
///
/// Traversal returns elements and moves the cursor:
/// ```
/// use indexed_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C #] (the ghost node is denoted by `#`)
/// let list = List::from_iter(['A', 'B', 'C']);
///
/// // Create a cursor at start: [|A B C #] (position = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.next(&list), Ok(&'A')); // now [ A|B C #] (position = 1)
/// assert_eq!(cursor.next(&list), Ok(&'B')); // now [ A B|C #] (position = 2)
/// assert_eq!(cursor.previous(&list), Ok(&'B')); // back to [ A|B C #]
/// ```
///
/// Mutating the list through another handle invalidates the cursor:
/// ```
/// use indexed_list::{Error, List};
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start();
///
/// list.push_back(4);
/// assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
/// ```
///
/// Mutating through the cursor itself keeps it valid:
/// ```
/// use indexed_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([10, 20, 30]);
/// let mut cursor = list.cursor_start();
///
/// assert_eq!(cursor.next(&list), Ok(&10));
/// assert_eq!(cursor.remove(&mut list), Ok(10)); // list becomes [20, 30]
/// assert_eq!(cursor.next(&list), Ok(&20));
/// ```
///
/// # Mutation protocol
///
/// [`remove`] and [`set`] operate on the element most recently returned by
/// [`next`] or [`previous`], and are legal only once per traversal step:
/// calling either without a preceding step, or a second time before another
/// step, reports [`Error::IllegalState`]. [`insert`] is legal in any step
/// state, but it too counts as a mutation, so a following `remove`/`set` is
/// illegal until the cursor steps again.
///
/// [`next`]: Cursor::next
/// [`previous`]: Cursor::previous
/// [`remove`]: Cursor::remove
/// [`set`]: Cursor::set
/// [`insert`]: Cursor::insert
/// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
/// [`Error::IllegalState`]: crate::Error::IllegalState
pub struct Cursor<T> {
    /// Index of the element a forward step would return; `len` when the
    /// cursor sits at the ghost node.
    position: usize,
    /// The node a forward step would return; the ghost node when
    /// `position == len`. Dereferenced only while `snapshot` matches the
    /// list version.
    current: NonNull<Node<T>>,
    /// Id of the list this cursor was created from.
    list_id: u64,
    /// List version at creation, re-synced on every successful mutation
    /// through this cursor.
    snapshot: u64,
    /// `None` before any step and after `remove`.
    last_step: Option<Step>,
    /// Set by `remove`/`insert`; blocks further `remove`/`set` until the
    /// next step.
    mutated: bool,
}

impl<T> Cursor<T> {
    pub(crate) fn new(list: &List<T>, at: usize) -> Self {
        Self {
            position: at,
            current: list.node_at(at),
            list_id: list.id(),
            snapshot: list.version(),
            last_step: None,
            mutated: false,
        }
    }

    fn check_owner(&self, list: &List<T>) {
        assert!(
            self.list_id == list.id(),
            "Cannot apply a cursor to a list it does not belong to"
        );
    }

    /// Staleness comes before every other precondition: once the list has
    /// changed through another handle, the cursor's pointer may no longer be
    /// meaningful, so nothing else is even inspected.
    fn check_fresh(&self, list: &List<T>) -> Result<(), Error> {
        if self.snapshot != list.version() {
            return Err(Error::ConcurrentModification);
        }
        Ok(())
    }

    /// Returns `true` if a forward step would return an element.
    ///
    /// The answer is only meaningful for the list this cursor was created
    /// from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert!(cursor.has_next(&list));
    /// cursor.next(&list).unwrap();
    /// assert!(!cursor.has_next(&list));
    /// ```
    pub fn has_next(&self, list: &List<T>) -> bool {
        self.position < list.len()
    }

    /// Returns `true` if a backward step would return an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert!(!cursor.has_previous());
    /// cursor.next(&list).unwrap();
    /// assert!(cursor.has_previous());
    /// ```
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Returns the index of the element a subsequent [`next`] would return
    /// (the list length if the cursor is at the end).
    ///
    /// [`next`]: Cursor::next
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Returns the index of the element a subsequent [`previous`] would
    /// return, or `None` if the cursor is at the start.
    ///
    /// [`previous`]: Cursor::previous
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Returns the element in front of the cursor and advances past it.
    ///
    /// Fails with [`Error::ConcurrentModification`] if the list was mutated
    /// through another handle since this cursor's snapshot, and with
    /// [`Error::NoSuchElement`] if the cursor is already at the end.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list this cursor was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.next(&list), Err(Error::NoSuchElement));
    /// ```
    ///
    /// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
    /// [`Error::NoSuchElement`]: crate::Error::NoSuchElement
    pub fn next<'a>(&mut self, list: &'a List<T>) -> Result<&'a T, Error> {
        self.check_owner(list);
        self.check_fresh(list)?;
        if !self.has_next(list) {
            return Err(Error::NoSuchElement);
        }
        // SAFETY: the snapshot matches the list version and `position < len`,
        // so `current` is a live value-bearing node of `list`.
        let node = unsafe { &*self.current.as_ptr() };
        self.current = node.next;
        self.position += 1;
        self.last_step = Some(Step::Forward);
        self.mutated = false;
        Ok(&node.element)
    }

    /// Returns the element behind the cursor and moves back onto it.
    ///
    /// Alternating calls to `next` and `previous` return the same element
    /// repeatedly.
    ///
    /// Fails with [`Error::ConcurrentModification`] if the list was mutated
    /// through another handle since this cursor's snapshot, and with
    /// [`Error::NoSuchElement`] if the cursor is already at the start.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list this cursor was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_end();
    ///
    /// assert_eq!(cursor.previous(&list), Ok(&2));
    /// assert_eq!(cursor.previous(&list), Ok(&1));
    /// assert_eq!(cursor.previous(&list), Err(Error::NoSuchElement));
    /// ```
    ///
    /// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
    /// [`Error::NoSuchElement`]: crate::Error::NoSuchElement
    pub fn previous<'a>(&mut self, list: &'a List<T>) -> Result<&'a T, Error> {
        self.check_owner(list);
        self.check_fresh(list)?;
        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }
        // SAFETY: the snapshot matches the list version and `position > 0`,
        // so `current.prev` is a live value-bearing node of `list`.
        let prev = unsafe { self.current.as_ref().prev };
        self.current = prev;
        self.position -= 1;
        self.last_step = Some(Step::Backward);
        self.mutated = false;
        Ok(unsafe { &(*prev.as_ptr()).element })
    }

    /// Removes the element most recently returned by [`next`] or
    /// [`previous`] and returns it.
    ///
    /// After a forward step the removed node lies behind the cursor, so
    /// `position` decreases by one; after a backward step the cursor sits on
    /// the removed node and moves to its successor, keeping `position`
    /// unchanged. The removal bumps the list version and re-syncs this
    /// cursor's snapshot, so the cursor stays valid while any other live
    /// cursor becomes stale.
    ///
    /// Fails with [`Error::ConcurrentModification`] if the list was mutated
    /// through another handle since this cursor's snapshot, and with
    /// [`Error::IllegalState`] if no traversal step preceded this call or a
    /// `remove`/`insert` already happened since the last step.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list this cursor was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20, 30]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert_eq!(cursor.next(&list), Ok(&10));
    /// assert_eq!(cursor.remove(&mut list), Ok(10));
    /// assert_eq!(Vec::from_iter(&list), vec![&20, &30]);
    ///
    /// // A second remove without an intervening step is illegal.
    /// assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    /// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
    /// [`Error::IllegalState`]: crate::Error::IllegalState
    pub fn remove(&mut self, list: &mut List<T>) -> Result<T, Error> {
        self.check_owner(list);
        self.check_fresh(list)?;
        let step = self.last_step.ok_or(Error::IllegalState)?;
        if self.mutated {
            return Err(Error::IllegalState);
        }
        let value = match step {
            Step::Forward => {
                // SAFETY: the snapshot is fresh and the last step was
                // forward, so `current.prev` is the live node that step
                // returned.
                let victim = unsafe { self.current.as_ref().prev };
                self.position -= 1;
                unsafe { list.remove_node(victim) }
            }
            Step::Backward => {
                let victim = self.current;
                // SAFETY: the snapshot is fresh and the last step was
                // backward, so `current` is the live node that step returned.
                self.current = unsafe { victim.as_ref().next };
                unsafe { list.remove_node(victim) }
            }
        };
        self.snapshot = list.version();
        self.last_step = None;
        self.mutated = true;
        Ok(value)
    }

    /// Replaces the element most recently returned by [`next`] or
    /// [`previous`] and returns the previous value.
    ///
    /// The cursor position does not change, and `set` does not count as a
    /// structural mutation for this cursor's own protocol, so repeated `set`
    /// calls after a single step are legal. It still bumps the list version
    /// (re-syncing this cursor's snapshot), so sibling cursors become stale.
    ///
    /// Fails with [`Error::ConcurrentModification`] if the list was mutated
    /// through another handle since this cursor's snapshot, and with
    /// [`Error::IllegalState`] if no traversal step preceded this call or a
    /// `remove`/`insert` already happened since the last step.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list this cursor was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start();
    ///
    /// cursor.next(&list).unwrap();
    /// assert_eq!(cursor.set(&mut list, 9), Ok(1));
    /// assert_eq!(list.get(0), Ok(&9));
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    /// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
    /// [`Error::IllegalState`]: crate::Error::IllegalState
    pub fn set(&mut self, list: &mut List<T>, value: T) -> Result<T, Error> {
        self.check_owner(list);
        self.check_fresh(list)?;
        let step = self.last_step.ok_or(Error::IllegalState)?;
        if self.mutated {
            return Err(Error::IllegalState);
        }
        let target = match step {
            // SAFETY (both arms): the snapshot is fresh and a qualifying
            // step preceded, so the target is the live node that step
            // returned.
            Step::Forward => unsafe { self.current.as_ref().prev },
            Step::Backward => self.current,
        };
        let old = std::mem::replace(unsafe { &mut (*target.as_ptr()).element }, value);
        list.touch();
        self.snapshot = list.version();
        Ok(old)
    }

    /// Inserts `value` immediately before the element a subsequent [`next`]
    /// would return (and after the one a subsequent [`previous`] would
    /// return), incrementing the cursor position: a following `next` is
    /// unaffected, and a following `previous` returns the new element.
    ///
    /// Legal in any step state, including on a fresh cursor over an empty
    /// list. Counts as a mutation: a following `remove`/`set` is illegal
    /// until the cursor steps again.
    ///
    /// Fails with [`Error::ConcurrentModification`] if the list was mutated
    /// through another handle since this cursor's snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list this cursor was created from.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 3]);
    /// let mut cursor = list.cursor_start();
    ///
    /// cursor.insert(&mut list, 1).unwrap();
    /// assert_eq!(cursor.next_index(), 1);
    /// assert_eq!(cursor.previous(&list), Ok(&1));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    /// [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification
    pub fn insert(&mut self, list: &mut List<T>, value: T) -> Result<(), Error> {
        self.check_owner(list);
        self.check_fresh(list)?;
        // SAFETY: the snapshot is fresh, so `current` is a live node of
        // `list` (possibly the ghost).
        unsafe { list.insert_node_before(self.current, value) };
        self.position += 1;
        self.snapshot = list.version();
        self.mutated = true;
        Ok(())
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("last_step", &self.last_step)
            .field("mutated", &self.mutated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use quickcheck_macros::quickcheck;
    use std::iter::FromIterator;

    #[test]
    fn cursor_traverses_forward_in_order() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        let mut observed = Vec::new();
        while cursor.has_next(&list) {
            observed.push(*cursor.next(&list).unwrap());
        }
        assert_eq!(observed, Vec::from_iter(0..10));
        assert_eq!(cursor.next(&list), Err(Error::NoSuchElement));
        assert_eq!(cursor.next_index(), list.len());
    }

    #[test]
    fn cursor_traverses_backward_in_order() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_end();
        let mut observed = Vec::new();
        while cursor.has_previous() {
            observed.push(*cursor.previous(&list).unwrap());
        }
        assert_eq!(observed, Vec::from_iter((0..10).rev()));
        assert_eq!(cursor.previous(&list), Err(Error::NoSuchElement));
        assert_eq!(cursor.previous_index(), None);
    }

    #[test]
    fn cursor_alternating_steps_return_same_element() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.next(&list), Ok(&1));
        assert_eq!(cursor.previous(&list), Ok(&1));
        assert_eq!(cursor.next(&list), Ok(&1));
        assert_eq!(cursor.next(&list), Ok(&2));
        assert_eq!(cursor.previous(&list), Ok(&2));
    }

    #[test]
    fn cursor_starts_at_index() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor(2).unwrap();
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(&list), Ok(&3));

        let mut cursor = list.cursor(3).unwrap();
        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.previous(&list), Ok(&3));

        assert_eq!(
            list.cursor(4).err(),
            Some(Error::OutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn cursor_over_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert!(!cursor.has_next(&list));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next(&list), Err(Error::NoSuchElement));
        assert_eq!(cursor.previous(&list), Err(Error::NoSuchElement));
    }

    #[test]
    fn cursor_remove_after_next() {
        let mut list = List::from_iter([10, 20, 30]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.next(&list), Ok(&10));
        assert_eq!(cursor.remove(&mut list), Ok(10));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![20, 30]);
        assert_eq!(cursor.next_index(), 0);

        assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));

        // The cursor stays valid after mutating through itself.
        assert_eq!(cursor.next(&list), Ok(&20));
        assert_eq!(cursor.remove(&mut list), Ok(20));
        assert_eq!(cursor.next(&list), Ok(&30));
        assert_eq!(cursor.remove(&mut list), Ok(30));
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_remove_after_next_in_the_middle() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.next(&list), Ok(&2));
        assert_eq!(cursor.remove(&mut list), Ok(2));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(&list), Ok(&3));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3]);
    }

    #[test]
    fn cursor_remove_after_previous() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_end();
        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.remove(&mut list), Ok(3));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2]);
        // The cursor sat on the removed node and moved to its successor
        // (the ghost), so its position is unchanged and now equals `len`.
        assert_eq!(cursor.next_index(), 2);
        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.previous(&list), Ok(&2));
    }

    #[test]
    fn cursor_remove_without_step_is_illegal() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
    }

    #[test]
    fn cursor_set_after_next_and_previous() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();

        cursor.next(&list).unwrap();
        assert_eq!(cursor.set(&mut list, 9), Ok(1));
        // Repeated set after a single step is legal.
        assert_eq!(cursor.set(&mut list, 8), Ok(9));
        assert_eq!(list.get(0), Ok(&8));
        assert_eq!(list.len(), 3);

        cursor.next(&list).unwrap();
        assert_eq!(cursor.previous(&list), Ok(&2));
        assert_eq!(cursor.set(&mut list, 7), Ok(2));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![8, 7, 3]);
    }

    #[test]
    fn cursor_set_without_step_is_illegal() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.set(&mut list, 9), Err(Error::IllegalState));
    }

    #[test]
    fn cursor_set_after_remove_is_illegal() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();
        cursor.remove(&mut list).unwrap();
        assert_eq!(cursor.set(&mut list, 9), Err(Error::IllegalState));
    }

    #[test]
    fn cursor_insert_at_any_state() {
        let mut list = List::from_iter([2, 3]);
        let mut cursor = list.cursor_start();

        // No step has happened yet; insert is still legal.
        cursor.insert(&mut list, 1).unwrap();
        assert_eq!(cursor.next_index(), 1);
        // A following next is unaffected by the insertion.
        assert_eq!(cursor.next(&list), Ok(&2));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn cursor_insert_blocks_remove_and_set_until_next_step() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();

        cursor.next(&list).unwrap();
        cursor.insert(&mut list, 9).unwrap();
        assert_eq!(cursor.remove(&mut list), Err(Error::IllegalState));
        assert_eq!(cursor.set(&mut list, 8), Err(Error::IllegalState));

        // Another step re-arms the mutation protocol.
        assert_eq!(cursor.previous(&list), Ok(&9));
        assert_eq!(cursor.remove(&mut list), Ok(9));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn cursor_insert_into_empty_list() {
        let mut list = List::new();
        let mut cursor = list.cursor_start();
        cursor.insert(&mut list, 1).unwrap();
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous(&list), Ok(&1));
        assert_eq!(cursor.set(&mut list, 2), Ok(1));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2]);
    }

    #[test]
    fn cursor_detects_direct_list_mutation() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();

        list.push_back(4);
        assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
        assert_eq!(cursor.previous(&list), Err(Error::ConcurrentModification));
        assert_eq!(cursor.remove(&mut list), Err(Error::ConcurrentModification));
        assert_eq!(
            cursor.set(&mut list, 9),
            Err(Error::ConcurrentModification)
        );
        assert_eq!(
            cursor.insert(&mut list, 9),
            Err(Error::ConcurrentModification)
        );
    }

    #[test]
    fn cursor_detects_value_mutation_through_list_set() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        list.set(0, 9).unwrap();
        assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
    }

    #[test]
    fn cursor_detects_sibling_cursor_mutation() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut first = list.cursor_start();
        let mut second = list.cursor_start();

        first.next(&list).unwrap();
        first.remove(&mut list).unwrap();

        assert_eq!(second.next(&list), Err(Error::ConcurrentModification));
        // The mutating cursor itself stays valid.
        assert_eq!(first.next(&list), Ok(&2));
    }

    #[test]
    fn cursor_set_invalidates_sibling_cursors() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut first = list.cursor_start();
        let mut second = list.cursor_start();

        first.next(&list).unwrap();
        first.set(&mut list, 9).unwrap();

        assert_eq!(second.next(&list), Err(Error::ConcurrentModification));
        assert_eq!(first.next(&list), Ok(&2));
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn cursor_panics_on_foreign_list() {
        let list = List::from_iter([1, 2, 3]);
        let other = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        let _ = cursor.next(&other);
    }

    #[quickcheck]
    fn cursor_forward_traversal_matches_vec(seed: Vec<i32>) {
        let list = List::from_iter(seed.iter().copied());
        let mut cursor = list.cursor_start();
        let mut observed = Vec::new();
        while let Ok(element) = cursor.next(&list) {
            observed.push(*element);
        }
        assert_eq!(observed, seed);
    }

    #[quickcheck]
    fn cursor_backward_traversal_matches_reversed_vec(seed: Vec<i32>) {
        let list = List::from_iter(seed.iter().copied());
        let mut cursor = list.cursor_end();
        let mut observed = Vec::new();
        while let Ok(element) = cursor.previous(&list) {
            observed.push(*element);
        }
        observed.reverse();
        assert_eq!(observed, seed);
    }

    #[quickcheck]
    fn cursor_drains_list_in_order(seed: Vec<i32>) {
        let mut list = List::from_iter(seed.iter().copied());
        let mut cursor = list.cursor_start();
        let mut observed = Vec::new();
        while cursor.has_next(&list) {
            cursor.next(&list).unwrap();
            observed.push(cursor.remove(&mut list).unwrap());
        }
        assert_eq!(observed, seed);
        assert!(list.is_empty());
    }

    #[quickcheck]
    fn cursor_insert_after_each_step_duplicates_elements(seed: Vec<i32>) {
        let mut list = List::from_iter(seed.iter().copied());
        let mut cursor = list.cursor_start();
        while cursor.has_next(&list) {
            let element = *cursor.next(&list).unwrap();
            cursor.insert(&mut list, element).unwrap();
        }
        let expected: Vec<i32> = seed.iter().flat_map(|&v| vec![v, v]).collect();
        assert_eq!(Vec::from_iter(list.iter().copied()), expected);
    }
}
