use super::Position;

impl Position {
    /// Count leaf positions of the pseudo-legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.apply_move(mv).perft(depth - 1))
            .sum()
    }
}
