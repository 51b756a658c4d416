//! Bidirectional cursors over level 0.
//!
//! A cursor is a position, not an iterator: it can sit on either sentinel,
//! and it only moves when asked. Stepping off either end panics, so check
//! `is_tail()` / `is_head()` first.

use std::fmt;

use rand::rngs::StdRng;
use rand_core::RngCore;

use crate::node::HEAD;
use crate::node::Idx;
use crate::node::NodeId;
use crate::node::TAIL;
use crate::ordering::Comparator;
use crate::ordering::Natural;
use crate::skip_list::SkipList;

/// A read-only position in a [`SkipList`].
pub struct Cursor<'a, T, C = Natural, R = StdRng> {
    list: &'a SkipList<T, C, R>,
    index: Idx,
}

impl<'a, T, C, R> Cursor<'a, T, C, R> {
    pub(crate) fn new(list: &'a SkipList<T, C, R>, index: Idx) -> Self {
        Cursor { list, index }
    }

    /// Handle of the node under the cursor.
    pub fn node(&self) -> NodeId {
        self.list.handle(self.index)
    }

    /// The value under the cursor, `None` on a sentinel.
    pub fn get(&self) -> Option<&'a T> {
        self.list.node(self.index).value()
    }

    pub fn is_head(&self) -> bool {
        self.index == HEAD
    }

    pub fn is_tail(&self) -> bool {
        self.index == TAIL
    }

    /// # Panics
    ///
    /// On the tail sentinel.
    pub fn move_next(&mut self) {
        assert!(self.index != TAIL, "cannot move past the tail sentinel");
        self.index = self.list.next(self.index, 0);
    }

    /// # Panics
    ///
    /// On the head sentinel.
    pub fn move_prev(&mut self) {
        assert!(self.index != HEAD, "cannot move before the head sentinel");
        self.index = self.list.node(self.index).prev;
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        if self.index == TAIL {
            return None;
        }
        self.list.node(self.list.next(self.index, 0)).value()
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        if self.index == HEAD {
            return None;
        }
        self.list.node(self.list.node(self.index).prev).value()
    }
}

impl<T, C, R> Clone for Cursor<'_, T, C, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C, R> Copy for Cursor<'_, T, C, R> {}

/// Two cursors are equal when they sit on the same node of the same list.
impl<T, C, R> PartialEq for Cursor<'_, T, C, R> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<T, C, R> Eq for Cursor<'_, T, C, R> {}

impl<T: fmt::Debug, C, R> fmt::Debug for Cursor<'_, T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node())
            .field("value", &self.get())
            .finish()
    }
}

/// A position in a [`SkipList`] that can edit the list around it.
pub struct CursorMut<'a, T, C = Natural, R = StdRng> {
    list: &'a mut SkipList<T, C, R>,
    index: Idx,
}

impl<'a, T, C, R> CursorMut<'a, T, C, R> {
    pub(crate) fn new(list: &'a mut SkipList<T, C, R>, index: Idx) -> Self {
        CursorMut { list, index }
    }

    pub fn node(&self) -> NodeId {
        self.list.handle(self.index)
    }

    pub fn get(&self) -> Option<&T> {
        self.list.node(self.index).value()
    }

    /// Mutable access to the value under the cursor.
    ///
    /// The caller must not change how the value orders against its
    /// neighbours; the list does not re-sort it.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.list.node_mut(self.index).value_mut()
    }

    pub fn is_head(&self) -> bool {
        self.index == HEAD
    }

    pub fn is_tail(&self) -> bool {
        self.index == TAIL
    }

    /// # Panics
    ///
    /// On the tail sentinel.
    pub fn move_next(&mut self) {
        assert!(self.index != TAIL, "cannot move past the tail sentinel");
        self.index = self.list.next(self.index, 0);
    }

    /// # Panics
    ///
    /// On the head sentinel.
    pub fn move_prev(&mut self) {
        assert!(self.index != HEAD, "cannot move before the head sentinel");
        self.index = self.list.node(self.index).prev;
    }

    pub fn peek_next(&self) -> Option<&T> {
        if self.index == TAIL {
            return None;
        }
        self.list.node(self.list.next(self.index, 0)).value()
    }

    pub fn peek_prev(&self) -> Option<&T> {
        if self.index == HEAD {
            return None;
        }
        self.list.node(self.list.node(self.index).prev).value()
    }

    /// A read-only view at the same position, borrowing this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T, C, R> {
        Cursor::new(&*self.list, self.index)
    }
}

impl<T, C, R> CursorMut<'_, T, C, R>
where
    C: Comparator<T>,
    R: RngCore,
{
    /// Insert `value` using the current node as the search hint. The cursor
    /// does not move.
    pub fn insert(&mut self, value: T) -> NodeId {
        let hint = self.node();
        self.list.insert_with_hint(value, hint)
    }

    /// Remove the value under the cursor and move to its successor. `None`
    /// (and no movement) on a sentinel.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.index == HEAD || self.index == TAIL {
            return None;
        }
        let next = self.list.next(self.index, 0);
        let value = self.list.unlink(self.index);
        self.index = next;
        Some(value)
    }
}

impl<'a, T, C, R> From<CursorMut<'a, T, C, R>> for Cursor<'a, T, C, R> {
    fn from(cursor: CursorMut<'a, T, C, R>) -> Self {
        let CursorMut { list, index } = cursor;
        Cursor::new(list, index)
    }
}

impl<T: fmt::Debug, C, R> fmt::Debug for CursorMut<'_, T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("node", &self.node())
            .field("value", &self.get())
            .finish()
    }
}
