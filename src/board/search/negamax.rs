use log::{debug, trace};

use super::{SearchResult, INF};
use crate::board::eval::Evaluator;
use crate::board::{Move, Position};

/// Search state for one root search.
pub struct Searcher<'a> {
    evaluator: &'a Evaluator,
    root_depth: u32,
    best_move: Option<Move>,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(evaluator: &'a Evaluator) -> Self {
        Searcher {
            evaluator,
            root_depth: 0,
            best_move: None,
            nodes: 0,
        }
    }

    /// Full-window search from `position`, recording the best root move.
    pub fn run(&mut self, position: &Position, depth: u32) -> SearchResult {
        let score = self.search(position, depth, -INF, INF);
        let result = SearchResult {
            best_move: self.best_move,
            score,
            nodes: self.nodes,
        };
        debug!(
            "depth {} score {} nodes {} best {}",
            depth,
            result.score,
            result.nodes,
            result
                .best_move
                .map_or_else(|| "none".to_string(), |mv| mv.to_string())
        );
        result
    }

    /// Search treating `position` as the root.
    pub fn search(&mut self, position: &Position, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.root_depth = depth;
        self.best_move = None;
        self.nodes = 0;
        self.negamax(position, depth, alpha, beta)
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn negamax(&mut self, position: &Position, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.evaluator.evaluate(position);
        }

        let moves = position.generate_moves();
        if moves.is_empty() {
            return self.evaluator.evaluate(position);
        }

        let is_root = depth == self.root_depth;
        let mut best = -INF;
        for &mv in &moves {
            let child = position.apply_move(mv);
            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if is_root {
                trace!("root move {mv} scored {score}");
            }
            // Strict comparison keeps the first move on ties.
            if score > best {
                best = score;
                if is_root {
                    self.best_move = Some(mv);
                }
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
