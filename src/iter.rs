//! Iterators over level 0.

use std::iter::FusedIterator;

use crate::node::Idx;
use crate::node::Node;

/// Borrowing iterator over every value in order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], front: Idx, back: Idx, remaining: usize) -> Self {
        Iter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front as usize];
        self.front = node.forward[0];
        self.remaining -= 1;
        node.value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back as usize];
        self.back = node.prev;
        self.remaining -= 1;
        node.value()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// Borrowing iterator over the values between two nodes, both inclusive.
pub struct Range<'a, T> {
    nodes: &'a [Node<T>],
    front: Idx,
    back: Idx,
    done: bool,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], front: Idx, back: Idx, empty: bool) -> Self {
        Range {
            nodes,
            front,
            back,
            done: empty,
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let idx = self.front;
        let node = &self.nodes[idx as usize];
        if idx == self.back {
            self.done = true;
        } else {
            self.front = node.forward[0];
        }
        node.value()
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let idx = self.back;
        let node = &self.nodes[idx as usize];
        if idx == self.front {
            self.done = true;
        } else {
            self.back = node.prev;
        }
        node.value()
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range { ..*self }
    }
}

/// Owning iterator, produced by `SkipList::into_iter`.
pub struct IntoIter<T> {
    nodes: Vec<Node<T>>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(nodes: Vec<Node<T>>, front: Idx, back: Idx, remaining: usize) -> Self {
        IntoIter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &mut self.nodes[self.front as usize];
        // vacate() clears the links, so read them first.
        self.front = node.forward[0];
        self.remaining -= 1;
        node.vacate()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &mut self.nodes[self.back as usize];
        self.back = node.prev;
        self.remaining -= 1;
        node.vacate()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
