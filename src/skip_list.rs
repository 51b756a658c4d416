//! Skip List
//!
//! A sorted multiset with expected O(log n) search, insertion and removal.
//! Instead of rebalancing, every node draws a random level and joins that
//! many forward chains; higher chains are sparser, so a search can skip
//! most of the list before dropping down.
//!
//! # Structure
//!
//! Nodes live in an arena (`Vec<Node<T>>`) and link to each other by index.
//! Two sentinels frame the list: `HEAD` orders before every value and `TAIL`
//! after every value. Both span every level, so every chain starts at `HEAD`
//! and ends at `TAIL`.
//!
//! ```text
//! Level 2: HEAD --------------------> 20 ---------------------> TAIL
//! Level 1: HEAD --------> 10 -------> 20 --------> 30 --------> TAIL
//! Level 0: HEAD <-> 5 <-> 10 <-> 15 <-> 20 <-> 25 <-> 30 <-> 35 <-> TAIL
//! ```
//!
//! Level 0 is also linked backwards through `prev`, which is what lets
//! cursors and iterators walk from either end.
//!
//! # Operations
//!
//! - `find(value)`: O(log n) - rightmost node `<= value`, or `head()`
//! - `find_first(value)`: O(log n) - first node `>= value`, or `tail()`
//! - `insert(value)`: O(log n) - equal values land after existing ones
//! - `remove(node)`: O(log n) - unlink a node by handle
//! - `remove_all()`: O(n)
//! - `len()`, `front()`, `back()`, `head()`, `tail()`: O(1)
//!
//! # Handles
//!
//! Nodes are named by [`NodeId`]. Freed arena slots bump a generation
//! counter, so a handle to a removed node stops resolving instead of
//! silently pointing at whatever reused the slot. Structural operations on a
//! stale handle panic.

use std::fmt;
use std::ops::Bound;
use std::ops::RangeBounds;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::OsRng;
use rand_core::RngCore;
use rustc_hash::FxHashMap;

use crate::config::Config;
use crate::config::MAX_LEVEL_LIMIT;
use crate::config::ceil_log2;
use crate::cursor::Cursor;
use crate::cursor::CursorMut;
use crate::dump::Dump;
use crate::error::Error;
use crate::error::Result;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::iter::Range;
use crate::node::HEAD;
use crate::node::Idx;
use crate::node::NULL;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::Slot;
use crate::node::TAIL;
use crate::ordering::Comparator;
use crate::ordering::Natural;
use crate::profiling;

/// One predecessor per level, filled during a descent.
type Path = [Idx; MAX_LEVEL_LIMIT + 1];

/// A probabilistic ordered sequence.
///
/// `C` decides the order (see [`Comparator`]) and `R` drives the coin
/// tosses that pick node levels.
///
/// ```
/// use skipseq::SkipList;
///
/// let mut list = SkipList::new();
/// for value in [30, 10, 20, 10] {
///     list.insert(value);
/// }
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 10, 20, 30]);
///
/// let node = list.find_first(&20);
/// assert_eq!(list.value(node), Some(&20));
/// assert_eq!(list.remove(node), 20);
/// assert_eq!(list.len(), 3);
/// ```
pub struct SkipList<T, C = Natural, R = StdRng> {
    /// Arena of nodes. `nodes[0]` is the head, `nodes[1]` the tail.
    nodes: Vec<Node<T>>,
    /// Vacant slots available for reuse.
    free_list: Vec<Idx>,
    /// Number of real nodes.
    len: usize,
    /// Highest level index. Sentinels carry `max_level + 1` forward slots.
    max_level: usize,
    config: Config,
    cmp: C,
    rng: R,
}

impl<T: Ord> SkipList<T> {
    /// An empty list in natural order with the default [`Config`].
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Comparator<T>> SkipList<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(Config::default(), cmp)
    }

    /// # Panics
    ///
    /// If `config` is invalid or the level generator cannot be seeded.
    pub fn with_config(config: Config, cmp: C) -> Self {
        Self::try_with_config(config, cmp)
            .unwrap_or_else(|err| panic!("failed to build skip list: {err}"))
    }

    /// Build a list whose level generator is seeded from `config.seed`, or
    /// from the operating system when no seed is set.
    pub fn try_with_config(config: Config, cmp: C) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(OsRng)?,
        };
        Self::try_with_rng(config, cmp, rng)
    }
}

impl<T, C, R> SkipList<T, C, R> {
    // --- Accessors ---

    /// Number of stored values, sentinels excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head sentinel. Orders before every value.
    pub fn head(&self) -> NodeId {
        NodeId::HEAD
    }

    /// The tail sentinel. Orders after every value.
    pub fn tail(&self) -> NodeId {
        NodeId::TAIL
    }

    /// The first real node, or `tail()` when empty.
    pub fn front(&self) -> NodeId {
        self.handle(self.next(HEAD, 0))
    }

    /// The last real node, or `head()` when empty.
    pub fn back(&self) -> NodeId {
        self.handle(self.node(TAIL).prev)
    }

    pub fn first(&self) -> Option<&T> {
        self.node(self.next(HEAD, 0)).value()
    }

    pub fn last(&self) -> Option<&T> {
        self.node(self.node(TAIL).prev).value()
    }

    /// The value behind `id`. `None` for sentinels and stale handles.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).and_then(|idx| self.node(idx).value())
    }

    /// True while `id` names a real node of this list.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.value(id).is_some()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current highest level index. Only differs from `config().max_level`
    /// after adaptive growth.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    // --- Traversal ---

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.next(HEAD, 0), self.node(TAIL).prev, self.len)
    }

    /// A read-only cursor at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is stale.
    pub fn cursor(&self, id: NodeId) -> Cursor<'_, T, C, R> {
        let idx = self.expect_live(id);
        Cursor::new(self, idx)
    }

    /// A mutable cursor at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is stale.
    pub fn cursor_mut(&mut self, id: NodeId) -> CursorMut<'_, T, C, R> {
        let idx = self.expect_live(id);
        CursorMut::new(self, idx)
    }

    pub fn cursor_front(&self) -> Cursor<'_, T, C, R> {
        Cursor::new(self, self.next(HEAD, 0))
    }

    pub fn cursor_back(&self) -> Cursor<'_, T, C, R> {
        Cursor::new(self, self.node(TAIL).prev)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, C, R> {
        let idx = self.next(HEAD, 0);
        CursorMut::new(self, idx)
    }

    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, C, R> {
        let idx = self.node(TAIL).prev;
        CursorMut::new(self, idx)
    }

    /// Per-level chain printout, one line per level from the top down.
    /// Each node shows its level-0 predecessor in parentheses.
    pub fn dump(&self) -> Dump<'_, T> {
        Dump::new(&self.nodes, self.max_level)
    }

    /// Drop every value. O(n). All handles to real nodes go stale.
    pub fn remove_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(removed = self.len, "removing all nodes");

        let mut idx = self.next(HEAD, 0);
        while idx != TAIL {
            let next = self.next(idx, 0);
            drop(self.node_mut(idx).vacate());
            self.free_list.push(idx);
            idx = next;
        }
        for slot in self.node_mut(HEAD).forward.iter_mut() {
            *slot = TAIL;
        }
        self.node_mut(TAIL).prev = HEAD;
        self.len = 0;
    }

    // --- Node access helpers ---

    pub(crate) fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    pub(crate) fn next(&self, idx: Idx, level: usize) -> Idx {
        self.node(idx).forward[level]
    }

    pub(crate) fn handle(&self, idx: Idx) -> NodeId {
        NodeId::new(idx, self.node(idx).generation)
    }

    fn resolve(&self, id: NodeId) -> Option<Idx> {
        let node = self.nodes.get(id.index as usize)?;
        if node.is_live() && node.generation == id.generation {
            Some(id.index)
        } else {
            None
        }
    }

    fn expect_live(&self, id: NodeId) -> Idx {
        match self.resolve(id) {
            Some(idx) => idx,
            None => panic!("stale node handle {:?}", id),
        }
    }

    fn alloc_node(&mut self, value: T, level: usize) -> Result<Idx> {
        if let Some(idx) = self.free_list.pop() {
            self.node_mut(idx).reoccupy(value, level);
            return Ok(idx);
        }
        if self.nodes.len() >= NULL as usize {
            return Err(Error::CapacityOverflow);
        }
        self.nodes.try_reserve(1)?;
        let idx = self.nodes.len() as Idx;
        self.nodes.push(Node::new(value, level));
        Ok(idx)
    }

    /// Make room for `additional` more values without reallocating.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let fresh = additional.saturating_sub(self.free_list.len());
        self.nodes.try_reserve(fresh)?;
        Ok(())
    }

    /// Extend the sentinels to `target` levels. New levels start empty.
    fn grow_levels(&mut self, target: usize) {
        let target = target.min(MAX_LEVEL_LIMIT);
        if target <= self.max_level {
            return;
        }
        for _ in self.max_level..target {
            self.node_mut(HEAD).forward.push(TAIL);
            self.node_mut(TAIL).forward.push(NULL);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = self.max_level, to = target, len = self.len, "grew level cap");

        self.max_level = target;
        profiling::level_growth();
    }
}

impl<T, C, R> SkipList<T, C, R>
where
    C: Comparator<T>,
    R: RngCore,
{
    /// Build a list with an explicit level generator. `config.seed` is
    /// ignored.
    pub fn try_with_rng(config: Config, cmp: C, rng: R) -> Result<Self> {
        config.validate()?;
        let mut nodes = Vec::new();
        nodes.try_reserve(2)?;
        nodes.push(Node::head(config.max_level));
        nodes.push(Node::tail(config.max_level));
        Ok(SkipList {
            nodes,
            free_list: Vec::new(),
            len: 0,
            max_level: config.max_level,
            config,
            cmp,
            rng,
        })
    }

    /// # Panics
    ///
    /// If `config` is invalid.
    pub fn with_rng(config: Config, cmp: C, rng: R) -> Self {
        Self::try_with_rng(config, cmp, rng)
            .unwrap_or_else(|err| panic!("failed to build skip list: {err}"))
    }

    // --- Ordering against sentinels ---

    /// True if the node at `idx` orders strictly before `value`.
    fn precedes(&self, idx: Idx, value: &T) -> bool {
        match &self.node(idx).slot {
            Slot::Head => true,
            Slot::Tail => false,
            Slot::Occupied(v) => self.cmp.less(v, value),
            Slot::Vacant => panic!("INVARIANT VIOLATED: vacant node {} is linked", idx),
        }
    }

    /// True if the node at `idx` orders at or before `value`.
    fn not_after(&self, idx: Idx, value: &T) -> bool {
        match &self.node(idx).slot {
            Slot::Head => true,
            Slot::Tail => false,
            Slot::Occupied(v) => self.cmp.less_or_equal(v, value),
            Slot::Vacant => panic!("INVARIANT VIOLATED: vacant node {} is linked", idx),
        }
    }

    /// Walk from `start` down to level 0, moving right while `advance`
    /// accepts the next node. `path[level]` records where each level ended.
    fn descend(&self, start: Idx, path: &mut Path, advance: impl Fn(Idx) -> bool) -> Idx {
        let mut idx = start;
        let mut steps = 0u64;
        for level in (0..=self.node(start).level()).rev() {
            loop {
                let next = self.next(idx, level);
                if !advance(next) {
                    break;
                }
                idx = next;
                steps += 1;
            }
            path[level] = idx;
        }
        profiling::descent(steps);
        idx
    }

    /// Rightmost node `<= value`.
    fn upper_predecessor(&self, value: &T) -> Idx {
        let mut path = [HEAD; MAX_LEVEL_LIMIT + 1];
        self.descend(HEAD, &mut path, |next| self.not_after(next, value))
    }

    /// Rightmost node `< value`.
    fn lower_predecessor(&self, value: &T) -> Idx {
        let mut path = [HEAD; MAX_LEVEL_LIMIT + 1];
        self.descend(HEAD, &mut path, |next| self.precedes(next, value))
    }

    // --- Lookup ---

    /// The rightmost node whose value is `<= value`: the node a new `value`
    /// would be linked after. `head()` if every value is greater.
    pub fn find(&self, value: &T) -> NodeId {
        self.handle(self.upper_predecessor(value))
    }

    /// The first node equal to `value`, else the first node greater than it,
    /// else `tail()`.
    pub fn find_first(&self, value: &T) -> NodeId {
        let pred = self.lower_predecessor(value);
        self.handle(self.next(pred, 0))
    }

    pub fn contains(&self, value: &T) -> bool {
        let idx = self.next(self.lower_predecessor(value), 0);
        match self.node(idx).value() {
            Some(found) => self.cmp.equal(found, value),
            None => false,
        }
    }

    /// Iterate over the values inside `bounds`, resolved with the list's
    /// comparator.
    pub fn range(&self, bounds: impl RangeBounds<T>) -> Range<'_, T> {
        let start = match bounds.start_bound() {
            Bound::Included(v) => self.next(self.lower_predecessor(v), 0),
            Bound::Excluded(v) => self.next(self.upper_predecessor(v), 0),
            Bound::Unbounded => self.next(HEAD, 0),
        };
        let end = match bounds.end_bound() {
            Bound::Included(v) => self.upper_predecessor(v),
            Bound::Excluded(v) => self.lower_predecessor(v),
            Bound::Unbounded => self.node(TAIL).prev,
        };

        let empty = match (self.node(start).value(), self.node(end).value()) {
            (Some(first), Some(last)) => self.cmp.less(last, first),
            _ => true,
        };
        Range::new(&self.nodes, start, end, empty)
    }

    // --- Insertion ---

    /// Draw a level: start at 1 and keep climbing while the coin comes up,
    /// never past `max_level`.
    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen_bool(self.config.probability) {
            level += 1;
        }
        level
    }

    /// Use `hint` as the descent start if it is live, not the tail, orders
    /// at or before `value`, and is tall enough for a `level` node.
    fn accept_hint(&self, hint: NodeId, value: &T, level: usize) -> Idx {
        let accepted = match self.resolve(hint) {
            Some(idx) => idx != TAIL && self.node(idx).level() >= level && self.not_after(idx, value),
            None => false,
        };
        if accepted {
            profiling::hint_hit();
            return hint.index;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(hint = ?hint, level, "rejected insert hint");

        profiling::hint_miss();
        HEAD
    }

    /// Insert `value` after every value that orders at or before it.
    ///
    /// # Panics
    ///
    /// If the arena cannot grow. See [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, value: T) -> NodeId {
        self.try_insert(value)
            .unwrap_or_else(|err| panic!("skip list insert failed: {err}"))
    }

    /// Like [`insert`](Self::insert), starting the search at `hint` when it
    /// is a usable starting point, from the head otherwise.
    pub fn insert_with_hint(&mut self, value: T, hint: NodeId) -> NodeId {
        self.try_insert_with_hint(value, hint)
            .unwrap_or_else(|err| panic!("skip list insert failed: {err}"))
    }

    /// Insert `value`, reporting allocation failure. On error the list is
    /// unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<NodeId> {
        self.insert_from(value, None)
    }

    pub fn try_insert_with_hint(&mut self, value: T, hint: NodeId) -> Result<NodeId> {
        self.insert_from(value, Some(hint))
    }

    fn insert_from(&mut self, value: T, hint: Option<NodeId>) -> Result<NodeId> {
        if self.config.adaptive {
            self.grow_levels(ceil_log2(self.len + 1));
        }

        let level = self.random_level();
        let start = match hint {
            Some(hint) => self.accept_hint(hint, &value, level),
            None => HEAD,
        };

        let mut path = [HEAD; MAX_LEVEL_LIMIT + 1];
        self.descend(start, &mut path, |next| self.not_after(next, &value));

        // Allocate before touching any link so a failure leaves nothing behind.
        let idx = self.alloc_node(value, level)?;

        for (l, &pred) in path.iter().enumerate().take(level + 1) {
            let next = self.next(pred, l);
            self.node_mut(idx).forward[l] = next;
            self.node_mut(pred).forward[l] = idx;
        }
        let next = self.next(idx, 0);
        self.node_mut(idx).prev = path[0];
        self.node_mut(next).prev = idx;
        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(index = idx, level, len = self.len, "inserted node");

        Ok(self.handle(idx))
    }

    // --- Removal ---

    /// Unlink and return the value at `id`.
    ///
    /// # Panics
    ///
    /// If `id` is stale or names a sentinel.
    pub fn remove(&mut self, id: NodeId) -> T {
        let idx = self.expect_live(id);
        assert!(!id.is_sentinel(), "cannot remove a sentinel node");
        self.unlink(idx)
    }

    /// Remove the first value equal to `value`, if any.
    pub fn remove_first(&mut self, value: &T) -> Option<T> {
        let idx = self.next(self.lower_predecessor(value), 0);
        let found = match self.node(idx).value() {
            Some(found) => self.cmp.equal(found, value),
            None => false,
        };
        if found { Some(self.unlink(idx)) } else { None }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.unlink(self.next(HEAD, 0)))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        Some(self.unlink(self.node(TAIL).prev))
    }

    /// The node whose `forward[level]` is `target`, for every level `target`
    /// spans.
    ///
    /// Above the target's height we only pass strictly smaller values, which
    /// keeps the walk in front of any run of values equal to the target. At
    /// its own levels we walk through that run until the target turns up.
    fn unlink_path(&self, target: Idx) -> Path {
        let value = match self.node(target).value() {
            Some(value) => value,
            None => panic!("INVARIANT VIOLATED: node {} holds no value", target),
        };
        let height = self.node(target).level();

        let mut path = [HEAD; MAX_LEVEL_LIMIT + 1];
        let mut idx = HEAD;
        let mut steps = 0u64;
        for level in (0..=self.max_level).rev() {
            loop {
                let next = self.next(idx, level);
                if next == target {
                    break;
                }
                let advance = if level > height {
                    self.precedes(next, value)
                } else {
                    self.not_after(next, value)
                };
                if !advance {
                    break;
                }
                idx = next;
                steps += 1;
            }
            if level <= height {
                assert!(
                    self.next(idx, level) == target,
                    "INVARIANT VIOLATED: node {} is not linked at level {}",
                    target,
                    level
                );
            }
            path[level] = idx;
        }
        profiling::descent(steps);
        path
    }

    pub(crate) fn unlink(&mut self, idx: Idx) -> T {
        let path = self.unlink_path(idx);
        let height = self.node(idx).level();

        for (level, &pred) in path.iter().enumerate().take(height + 1) {
            let next = self.next(idx, level);
            self.node_mut(pred).forward[level] = next;
        }
        let next = self.next(idx, 0);
        let prev = self.node(idx).prev;
        self.node_mut(next).prev = prev;

        let Some(value) = self.node_mut(idx).vacate() else {
            panic!("INVARIANT VIOLATED: node {} holds no value", idx);
        };
        self.free_list.push(idx);
        self.len -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(index = idx, level = height, len = self.len, "removed node");

        value
    }

    // --- Invariant checking ---

    /// Walk every chain and panic if the structure is inconsistent: order,
    /// level subsequences, back-references, counts and the free list.
    pub fn check_invariants(&self) {
        assert!(
            matches!(self.node(HEAD).slot, Slot::Head) && matches!(self.node(TAIL).slot, Slot::Tail),
            "INVARIANT VIOLATED: sentinels moved"
        );
        assert_eq!(self.node(HEAD).level(), self.max_level, "INVARIANT VIOLATED: head height");
        assert_eq!(self.node(TAIL).level(), self.max_level, "INVARIANT VIOLATED: tail height");

        // Level 0: order, prev links, and a position for every node.
        let mut position: FxHashMap<Idx, usize> = FxHashMap::default();
        let mut prev = HEAD;
        let mut idx = self.next(HEAD, 0);
        while idx != TAIL {
            assert!(
                position.insert(idx, position.len()).is_none(),
                "INVARIANT VIOLATED: cycle at node {}",
                idx
            );
            let node = self.node(idx);
            let value = match node.value() {
                Some(value) => value,
                None => panic!("INVARIANT VIOLATED: node {} at level 0 holds no value", idx),
            };
            assert_eq!(node.prev, prev, "INVARIANT VIOLATED: prev of node {}", idx);
            assert!(
                node.level() <= self.max_level,
                "INVARIANT VIOLATED: node {} taller than max_level",
                idx
            );
            if let Some(before) = self.node(prev).value() {
                assert!(
                    !self.cmp.less(value, before),
                    "INVARIANT VIOLATED: level 0 out of order at node {}",
                    idx
                );
            }
            prev = idx;
            idx = node.forward[0];
        }
        assert_eq!(
            position.len(),
            self.len,
            "INVARIANT VIOLATED: level 0 count != len"
        );
        assert_eq!(self.node(TAIL).prev, prev, "INVARIANT VIOLATED: tail.prev");

        // Upper levels: subsequences of level 0 holding every tall enough node.
        for level in 1..=self.max_level {
            let expected = position.keys().filter(|&&i| self.node(i).level() >= level).count();
            let mut seen = 0usize;
            let mut last = None;
            let mut idx = self.next(HEAD, level);
            while idx != TAIL {
                let at = match position.get(&idx) {
                    Some(&at) => at,
                    None => panic!("INVARIANT VIOLATED: node {} at level {} not at level 0", idx, level),
                };
                assert!(
                    last.is_none_or(|last| last < at),
                    "INVARIANT VIOLATED: level {} is not a subsequence of level 0",
                    level
                );
                last = Some(at);
                seen += 1;
                idx = self.next(idx, level);
            }
            assert_eq!(seen, expected, "INVARIANT VIOLATED: level {} misses nodes", level);
        }

        // Everything else in the arena is free.
        for &free in &self.free_list {
            assert!(!self.node(free).is_live(), "INVARIANT VIOLATED: free node {} is live", free);
        }
        assert_eq!(
            self.nodes.len() - 2 - self.free_list.len(),
            self.len,
            "INVARIANT VIOLATED: arena accounting"
        );
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone, R: Clone> Clone for SkipList<T, C, R> {
    /// Copies the arena as is, so handles into `self` also name the
    /// corresponding nodes of the clone.
    fn clone(&self) -> Self {
        SkipList {
            nodes: self.nodes.clone(),
            free_list: self.free_list.clone(),
            len: self.len,
            max_level: self.max_level,
            config: self.config,
            cmp: self.cmp.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T: fmt::Debug, C, R> fmt::Debug for SkipList<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C, R> Extend<T> for SkipList<T, C, R>
where
    C: Comparator<T>,
    R: RngCore,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<T, C, R> IntoIterator for SkipList<T, C, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let front = self.next(HEAD, 0);
        let back = self.node(TAIL).prev;
        IntoIter::new(self.nodes, front, back, self.len)
    }
}

impl<'a, T, C, R> IntoIterator for &'a SkipList<T, C, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
