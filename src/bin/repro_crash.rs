//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use skipseq::{Config, NodeId, SkipList};

type Item = (u8, u32);

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u8 },
    InsertHinted { key: u8, hint: u8 },
    Remove { pos_frac: u8 },
    Find { key: u8 },
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
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }
    let data = fs::read(&args[1]).expect("Failed to read file");

    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    // Same config as the fuzzer, so the level draws match.
    let config = Config::default().with_max_level(4).with_seed(0);
    let mut list = SkipList::with_config(config, by_key as fn(&Item, &Item) -> bool);
    let mut model: Vec<Item> = Vec::new();
    let mut handles: Vec<NodeId> = Vec::new();
    let mut serial = 0u32;
    let mut remaining = data.as_slice();
    let mut op_num = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;

        match op {
            FuzzOp::Insert { key } | FuzzOp::InsertHinted { key, .. } => {
                let item = (key, serial);
                serial += 1;
                let id = match op {
                    FuzzOp::InsertHinted { hint, .. } if !handles.is_empty() => {
                        let hint = handles[hint as usize % handles.len()];
                        eprintln!("Op {}: insert {:?} with hint {:?}", op_num, item, hint);
                        list.insert_with_hint(item, hint)
                    }
                    _ => {
                        eprintln!("Op {}: insert {:?}", op_num, item);
                        list.insert(item)
                    }
                };
                handles.push(id);

                let at = model.partition_point(|m| m.0 <= key);
                model.insert(at, item);
            }

            FuzzOp::Remove { pos_frac } => {
                if model.is_empty() {
                    eprintln!("Op {}: remove (skipped, empty)", op_num);
                    continue;
                }
                let pos = (pos_frac as usize * model.len() / 256).min(model.len() - 1);
                let expected = model.remove(pos);
                eprintln!("Op {}: remove {:?} at pos={}", op_num, expected, pos);

                let id = handles
                    .iter()
                    .copied()
                    .find(|&id| list.value(id) == Some(&expected))
                    .expect("every model value has a live handle");
                assert_eq!(list.remove(id), expected, "removed the wrong node");
                handles.retain(|&h| h != id);
            }

            FuzzOp::Find { key } => {
                let probe = (key, 0);
                let found = list.value(list.find(&probe)).copied();
                let first = list.value(list.find_first(&probe)).copied();
                eprintln!("Op {}: find({}) = {:?}, find_first({}) = {:?}", op_num, key, found, key, first);

                let upper = model.partition_point(|m| m.0 <= key);
                let lower = model.partition_point(|m| m.0 < key);
                assert_eq!(found, upper.checked_sub(1).map(|i| model[i]), "find mismatch");
                assert_eq!(first, model.get(lower).copied(), "find_first mismatch");
            }

            FuzzOp::RemoveAll => {
                eprintln!("Op {}: remove_all ({} values)", op_num, list.len());
                list.remove_all();
                model.clear();
                handles.clear();
            }
        }

        eprintln!("{}", list.dump());
        list.check_invariants();
        assert_eq!(list.len(), model.len(), "Length mismatch");
    }

    let values: Vec<Item> = list.iter().copied().collect();
    eprintln!("\nFinal state: len={} {:?}", list.len(), values);
    assert_eq!(values, model, "Final contents diverged from model");

    eprintln!("{}", skipseq::profiling::report());
    eprintln!("\nAll checks passed!");
}
