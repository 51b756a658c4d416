//! Human-readable per-level chain printout.

use std::fmt;

use crate::node::HEAD;
use crate::node::Idx;
use crate::node::Node;
use crate::node::Slot;
use crate::node::TAIL;

/// Display adapter returned by [`SkipList::dump`](crate::SkipList::dump).
///
/// ```text
/// L1: HEAD -> 20(10) -> TAIL(20)
/// L0: HEAD -> 10(HEAD) -> 20(10) -> TAIL(20)
/// ```
pub struct Dump<'a, T> {
    nodes: &'a [Node<T>],
    max_level: usize,
}

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], max_level: usize) -> Self {
        Dump { nodes, max_level }
    }

    fn label(&self, f: &mut fmt::Formatter<'_>, idx: Idx) -> fmt::Result
    where
        T: fmt::Debug,
    {
        match &self.nodes[idx as usize].slot {
            Slot::Head => write!(f, "HEAD"),
            Slot::Tail => write!(f, "TAIL"),
            Slot::Occupied(value) => write!(f, "{:?}", value),
            Slot::Vacant => write!(f, "<vacant {}>", idx),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..=self.max_level).rev() {
            write!(f, "L{}: HEAD", level)?;
            let mut idx = self.nodes[HEAD as usize].forward[level];
            loop {
                write!(f, " -> ")?;
                self.label(f, idx)?;
                let node = &self.nodes[idx as usize];
                write!(f, "(")?;
                self.label(f, node.prev)?;
                write!(f, ")")?;
                if idx == TAIL {
                    break;
                }
                idx = node.forward[level];
            }
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use crate::Natural;
    use crate::SkipList;

    #[test]
    fn empty_dump() {
        let list: SkipList<i32> =
            SkipList::with_config(Config::default().with_max_level(1).with_seed(1), Natural);
        assert_eq!(list.dump().to_string(), "L1: HEAD -> TAIL(HEAD)\nL0: HEAD -> TAIL(HEAD)");
    }

    #[test]
    fn every_level_reaches_tail() {
        let mut list = SkipList::with_config(Config::default().with_max_level(3).with_seed(4), Natural);
        list.extend([20, 10, 30]);
        let dump = list.dump().to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("L3: HEAD"));
        assert_eq!(lines[3], "L0: HEAD -> 10(HEAD) -> 20(10) -> 30(20) -> TAIL(30)");
        assert!(lines.iter().all(|line| line.ends_with("TAIL(30)")));
    }
}
