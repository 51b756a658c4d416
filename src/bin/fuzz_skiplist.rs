//! AFL Fuzz harness for the skip list
//!
//! Every operation is applied both to a `SkipList` and to a plain sorted
//! `Vec` model. After each step the two must hold the same values in the
//! same order, and the list's internal links must be consistent.
//!
//! Values are `(key, serial)` pairs ordered by key only, so duplicates are
//! common and their relative order (FIFO among equals) is checked too.

use afl::fuzz;
use skipseq::{Config, NodeId, SkipList};

type Item = (u8, u32);

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert a value with the given key
    Insert { key: u8 },
    /// Insert with a previously returned handle as the hint
    InsertHinted { key: u8, hint: u8 },
    /// Remove a live node picked by position
    Remove { pos_frac: u8 },
    /// Look a key up with find and find_first
    Find { key: u8 },
    /// Drop everything
    RemoveAll,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            // Inserts are weighted up so lists actually grow.
            0..=2 if !rest.is_empty() => Some((FuzzOp::Insert { key: rest[0] % 32 }, &rest[1..])),
            3 if rest.len() >= 2 => {
                let op = FuzzOp::InsertHinted {
                    key: rest[0] % 32,
                    hint: rest[1],
                };
                Some((op, &rest[2..]))
            }
            4 | 5 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            6 if !rest.is_empty() => Some((FuzzOp::Find { key: rest[0] % 32 }, &rest[1..])),
            7 => Some((FuzzOp::RemoveAll, rest)),
            _ => None,
        }
    }
}

fn by_key(a: &Item, b: &Item) -> bool {
    a.0 < b.0
}

fn main() {
    fuzz!(|data: &[u8]| {
        // Small level cap so tall towers and full-height nodes both show up.
        let config = Config::default().with_max_level(4).with_seed(0);
        let mut list = SkipList::with_config(config, by_key as fn(&Item, &Item) -> bool);
        let mut model: Vec<Item> = Vec::new();
        let mut handles: Vec<NodeId> = Vec::new();
        let mut serial = 0u32;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } | FuzzOp::InsertHinted { key, .. } => {
                    let item = (key, serial);
                    serial += 1;
                    let id = match op {
                        FuzzOp::InsertHinted { hint, .. } if !handles.is_empty() => {
                            let hint = handles[hint as usize % handles.len()];
                            list.insert_with_hint(item, hint)
                        }
                        _ => list.insert(item),
                    };
                    handles.push(id);

                    let at = model.partition_point(|m| m.0 <= key);
                    model.insert(at, item);
                }

                FuzzOp::Remove { pos_frac } => {
                    if model.is_empty() {
                        continue;
                    }
                    let pos = (pos_frac as usize * model.len() / 256).min(model.len() - 1);
                    let expected = model.remove(pos);

                    let id = handles
                        .iter()
                        .copied()
                        .find(|&id| list.value(id) == Some(&expected))
                        .expect("every model value has a live handle");
                    assert_eq!(list.remove(id), expected, "removed the wrong node");
                    assert!(!list.contains_node(id), "handle still live after remove");
                    handles.retain(|&h| h != id);
                }

                FuzzOp::Find { key } => {
                    let probe = (key, 0);
                    let upper = model.partition_point(|m| m.0 <= key);
                    let lower = model.partition_point(|m| m.0 < key);

                    let found = list.value(list.find(&probe)).copied();
                    let expected = upper.checked_sub(1).map(|i| model[i]);
                    assert_eq!(found, expected, "find({}) mismatch", key);

                    let first = list.value(list.find_first(&probe)).copied();
                    assert_eq!(first, model.get(lower).copied(), "find_first({}) mismatch", key);
                }

                FuzzOp::RemoveAll => {
                    list.remove_all();
                    model.clear();
                    handles.clear();
                }
            }

            list.check_invariants();
            assert_eq!(list.len(), model.len(), "Length mismatch");
        }

        let values: Vec<Item> = list.iter().copied().collect();
        assert_eq!(values, model, "Final contents diverged from model");

        let backwards: Vec<Item> = list.iter().rev().copied().collect();
        let mut reversed = model.clone();
        reversed.reverse();
        assert_eq!(backwards, reversed, "Backward walk diverged from model");
    });
}
