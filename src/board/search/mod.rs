//! Fixed-depth search.
//!
//! Features:
//! - Negamax with alpha-beta pruning over pseudo-legal moves
//! - One position copy per ply (no make/unmake)
//! - Pluggable evaluation through [`Evaluator`]
//!
//! A node without moves is scored by the evaluator like a leaf, so mate,
//! stalemate and generator gaps are not told apart.

mod negamax;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::Evaluator;
use super::{Move, Position};

pub use negamax::Searcher;

/// Score bound wider than any evaluation.
pub const INF: i32 = 1_000_000;

/// Depth used by the driver when none is given.
pub const DEFAULT_DEPTH: u32 = 3;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search below the root
    pub depth: u32,
    /// Add the mobility term to the baseline evaluation
    pub use_mobility: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            use_mobility: false,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        if self.use_mobility {
            Evaluator::with_mobility()
        } else {
            Evaluator::baseline()
        }
    }
}

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// First root move reaching the best score; `None` at depth 0 or
    /// when the root has no moves
    pub best_move: Option<Move>,
    /// Score for the side to move at the root
    pub score: i32,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Negamax score of `position` searched `depth` plies within `(alpha, beta)`
/// using the baseline evaluation.
#[must_use]
pub fn search(position: &Position, depth: u32, alpha: i32, beta: i32) -> i32 {
    let evaluator = Evaluator::baseline();
    let mut searcher = Searcher::new(&evaluator);
    searcher.search(position, depth, alpha, beta)
}

/// Search `depth` plies with the baseline evaluation and report the best root move.
#[must_use]
pub fn find_best_move(position: &Position, depth: u32) -> SearchResult {
    find_best_move_with_config(
        position,
        &SearchConfig {
            depth,
            ..SearchConfig::default()
        },
    )
}

#[must_use]
pub fn find_best_move_with_config(position: &Position, config: &SearchConfig) -> SearchResult {
    let evaluator = config.evaluator();
    Searcher::new(&evaluator).run(position, config.depth)
}
