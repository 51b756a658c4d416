//! Skipseq - A probabilistic ordered sequence (skip list).
//!
//! # Quick Start
//!
//! ```
//! use skipseq::{Config, Natural, SkipList};
//!
//! // A reproducible list: same seed, same node levels.
//! let mut list = SkipList::with_config(Config::default().with_seed(1), Natural);
//!
//! let twenty = list.insert(20);
//! list.insert(10);
//! list.insert(30);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//!
//! // Walk from a node in either direction.
//! let mut cursor = list.cursor(twenty);
//! cursor.move_prev();
//! assert_eq!(cursor.get(), Some(&10));
//!
//! list.remove(twenty);
//! assert_eq!(list.len(), 2);
//! ```

pub mod profiling;

mod config;
mod cursor;
mod dump;
mod error;
mod iter;
mod node;
mod ordering;
mod skip_list;

pub use config::Config;
pub use config::DEFAULT_MAX_LEVEL;
pub use config::DEFAULT_PROBABILITY;
pub use config::MAX_LEVEL_LIMIT;
pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use dump::Dump;
pub use error::Error;
pub use error::Result;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Range;
pub use node::NodeId;
pub use ordering::ByKey;
pub use ordering::Comparator;
pub use ordering::Natural;
pub use ordering::Reversed;
pub use skip_list::SkipList;
