//! Functional dependency machinery: closure computation, FD mining,
//! candidate key search, and dependency classification.

mod classify;
mod closure;
mod keys;
mod miner;
mod types;

pub use classify::{classify_dependencies, DependencyClassification};
pub use closure::{closure, is_superkey};
pub use keys::{find_candidate_keys, KeyFinderConfig};
pub use miner::{mine_fds, mine_pair_fds, mine_single_fds, MinerConfig};
pub use types::Fd;
