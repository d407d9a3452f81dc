//! Static evaluation.
//!
//! Scores are in centipawn-like units from the side to move's point of view
//! (positive favours the mover). The baseline score is middlegame material
//! plus piece-square values; further terms plug in through [`EvalTerm`].

mod mobility;

pub use mobility::{mobility, mobility_area, mobility_area_set, mobility_bonus};

use super::pst::{material, psqt, Phase};
use super::types::{Color, Piece};
use super::Position;

/// One additive component of an evaluation, scored for the side to move.
pub trait EvalTerm: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, position: &Position) -> i32;
}

/// Material and piece-square values for one game phase.
#[derive(Clone, Copy, Debug)]
pub struct MaterialPsqt {
    pub phase: Phase,
}

impl EvalTerm for MaterialPsqt {
    fn name(&self) -> &'static str {
        "material+psqt"
    }

    fn score(&self, position: &Position) -> i32 {
        let white = material_psqt(position, self.phase);
        if position.white_to_move() {
            white
        } else {
            -white
        }
    }
}

/// Mobility bonuses of the mover's pieces minus the opponent's.
#[derive(Clone, Copy, Debug)]
pub struct Mobility {
    pub phase: Phase,
}

impl EvalTerm for Mobility {
    fn name(&self) -> &'static str {
        "mobility"
    }

    fn score(&self, position: &Position) -> i32 {
        let us = position.side_to_move();
        mobility::side_mobility_bonus(position, us, self.phase)
            - mobility::side_mobility_bonus(position, us.opponent(), self.phase)
    }
}

/// A sum of evaluation terms.
pub struct Evaluator {
    terms: Vec<Box<dyn EvalTerm>>,
}

impl Evaluator {
    /// Evaluator with no terms; scores every position 0.
    #[must_use]
    pub fn new() -> Self {
        Evaluator { terms: Vec::new() }
    }

    /// Middlegame material and piece-square values, same as [`evaluate`].
    #[must_use]
    pub fn baseline() -> Self {
        Evaluator::new().with_term(MaterialPsqt {
            phase: Phase::Middlegame,
        })
    }

    /// Baseline plus middlegame mobility.
    #[must_use]
    pub fn with_mobility() -> Self {
        Evaluator::baseline().with_term(Mobility {
            phase: Phase::Middlegame,
        })
    }

    #[must_use]
    pub fn with_term(mut self, term: impl EvalTerm + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn term_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|t| t.name())
    }

    #[must_use]
    pub fn evaluate(&self, position: &Position) -> i32 {
        self.terms.iter().map(|t| t.score(position)).sum()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::baseline()
    }
}

/// Baseline score for the side to move.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    MaterialPsqt {
        phase: Phase::Middlegame,
    }
    .score(position)
}

/// White's material and piece-square total minus Black's. Black pieces
/// are looked up on the square rotated through the centre (`63 - sq`).
/// Kings contribute nothing.
fn material_psqt(position: &Position, phase: Phase) -> i32 {
    let mut score = 0;
    for piece in Piece::ALL {
        if piece == Piece::King {
            continue;
        }
        let value = material(phase, piece);
        for sq in position.pieces(Color::White, piece).iter() {
            score += value + psqt(phase, piece, sq.index());
        }
        for sq in position.pieces(Color::Black, piece).iter() {
            score -= value + psqt(phase, piece, sq.rotate().index());
        }
    }
    score
}
