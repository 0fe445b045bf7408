//! This crate provides a doubly-linked list with owned nodes and indexed
//! access, implemented as a cyclic list, together with a fail-fast editing
//! cursor.
//!
//! The [`List`] allows inserting and removing elements at any given position,
//! addressed by index. Reaching a position takes *O*(min(*i*, *n* − *i*))
//! time; the insertion or removal itself takes constant time. Operations
//! whose preconditions can be violated by the caller (indexed access out of
//! range, value lookups that find nothing, boundary operations on an empty
//! list) return `Result<_, Error>`; see [`Error`] for the full taxonomy.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use indexed_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! assert_eq!(list.get(0), Ok(&0));
//!
//! assert_eq!(list.remove(3), Ok(3));
//! assert_eq!(list.index_of(&4), Some(3));
//! assert_eq!(list.to_string(), "0, 1, 2, 4");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║ len       ║
//! ║ version   ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node, a value-less sentinel
//!   marking "one past the last element";
//! - a length field `len`;
//! - a `version` counter, bumped on every mutation, which cursors use to
//!   detect that the list changed under them.
//!
//! Each node of the list `List<T>` is allocated on the heap, and contains:
//! - the `next` pointer that points to the next element (or the ghost node if
//!   it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost
//!   node if it is the first element in the list);
//! - the actual payload `T`, except in the ghost node.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and
//! `prev` pointers point to itself.
//!
//! As elements are inserted into the list, `ghost.next` points to the first
//! element, and `ghost.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* − 1, and the ghost node is always indexed by *n*. (In an empty
//! list, the ghost node is indexed by 0, which is equal to its length 0).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic). [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use indexed_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the [`Cursor`] provides a more flexible way of walking
//! and editing a list. A cursor can move forward and backward, report the
//! index it stands at, and, unlike a plain iterator, mutate the list at
//! its position: [`remove`] and [`set`] act on the element most recently
//! stepped over, and [`insert`] splices a new element in at the cursor.
//!
//! A cursor holds no borrow of its list; every call takes the list
//! explicitly. Instead of borrow-based exclusion, staleness is detected
//! dynamically: the cursor snapshots the list's version counter, and once
//! the list is mutated through any other handle, the cursor's next call
//! fails with [`Error::ConcurrentModification`] rather than touching the
//! changed structure.
//!
//! ## Examples
//!
//! ```
//! use indexed_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start();
//! assert_eq!(cursor.next(&list), Ok(&1));
//!
//! // Remove the element just stepped over.
//! assert_eq!(cursor.remove(&mut list), Ok(1));
//! assert_eq!(Vec::from_iter(&list), vec![&2, &3, &4]);
//!
//! // The cursor re-synced its snapshot, so it is still usable ...
//! assert_eq!(cursor.next(&list), Ok(&2));
//!
//! // ... but a mutation through the list itself makes it stale.
//! list.push_back(5);
//! assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
//! ```
//!
//! [`List`]: crate::List
//! [`Error`]: crate::Error
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`remove`]: crate::list::cursor::Cursor::remove
//! [`set`]: crate::list::cursor::Cursor::set
//! [`insert`]: crate::list::cursor::Cursor::insert
//! [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

mod error;
pub mod list;
