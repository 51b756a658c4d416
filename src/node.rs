//! Arena nodes and the handles that name them.
//!
//! Nodes live in a `Vec` owned by the list and point at each other by index.
//! Index 0 is always the head sentinel and index 1 the tail sentinel.

use smallvec::SmallVec;
use smallvec::smallvec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker, used for the tail's forward slots.
pub(crate) const NULL: Idx = Idx::MAX;

pub(crate) const HEAD: Idx = 0;
pub(crate) const TAIL: Idx = 1;

/// Forward slots stored inline before spilling to the heap. With p = 1/2
/// almost every node fits.
pub(crate) const INLINE_LEVELS: usize = 4;

pub(crate) type Forward = SmallVec<[Idx; INLINE_LEVELS]>;

/// What an arena slot currently holds.
#[derive(Clone)]
pub(crate) enum Slot<T> {
    /// Conceptual minimum: orders before every value.
    Head,
    /// Conceptual maximum: orders after every value.
    Tail,
    Occupied(T),
    /// Freed slot waiting on the free list.
    Vacant,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) slot: Slot<T>,
    /// Bumped each time the slot is freed, so old handles stop resolving.
    pub(crate) generation: u32,
    /// Level-0 predecessor. Lookup only, never used for ownership.
    pub(crate) prev: Idx,
    /// `forward[i]` is the next node at level `i`.
    pub(crate) forward: Forward,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, level: usize) -> Self {
        Node {
            slot: Slot::Occupied(value),
            generation: 0,
            prev: NULL,
            forward: smallvec![NULL; level + 1],
        }
    }

    pub(crate) fn head(max_level: usize) -> Self {
        Node {
            slot: Slot::Head,
            generation: 0,
            prev: NULL,
            forward: smallvec![TAIL; max_level + 1],
        }
    }

    pub(crate) fn tail(max_level: usize) -> Self {
        Node {
            slot: Slot::Tail,
            generation: 0,
            prev: HEAD,
            forward: smallvec![NULL; max_level + 1],
        }
    }

    /// Highest level index this node participates in.
    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        !matches!(self.slot, Slot::Vacant)
    }

    /// Reuse a vacant slot for a fresh value, keeping its generation.
    pub(crate) fn reoccupy(&mut self, value: T, level: usize) {
        debug_assert!(!self.is_live());
        self.slot = Slot::Occupied(value);
        self.prev = NULL;
        self.forward.clear();
        self.forward.resize(level + 1, NULL);
    }

    /// Take the value out and mark the slot free. Returns `None` for
    /// sentinels and vacant slots, which are left untouched.
    pub(crate) fn vacate(&mut self) -> Option<T> {
        if !matches!(self.slot, Slot::Occupied(_)) {
            return None;
        }
        let slot = std::mem::replace(&mut self.slot, Slot::Vacant);
        self.generation = self.generation.wrapping_add(1);
        self.prev = NULL;
        self.forward.clear();
        match slot {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }
}

/// A handle to a node of a particular [`SkipList`](crate::SkipList).
///
/// Handles are plain copies of an arena position and the generation of the
/// slot at the time the handle was made. Once the node is removed the handle
/// goes stale: lookups through it return `None` and structural operations
/// through it panic. A handle from one list means nothing to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId {
    pub(crate) index: Idx,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) const HEAD: NodeId = NodeId {
        index: HEAD,
        generation: 0,
    };

    pub(crate) const TAIL: NodeId = NodeId {
        index: TAIL,
        generation: 0,
    };

    pub(crate) fn new(index: Idx, generation: u32) -> Self {
        NodeId { index, generation }
    }

    /// True for the head or tail sentinel of any list.
    pub fn is_sentinel(self) -> bool {
        self.index == HEAD || self.index == TAIL
    }
}
