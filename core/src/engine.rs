use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a single dig.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    HitMine,
}

/// Valid transitions: `InProgress -> Won` and `InProgress -> Lost`, both
/// terminal. Never stored; derived on demand by [`BoardEngine::outcome`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Gameplay state over an immutable [`Minefield`]: the set of revealed
/// coordinates, the dig operation, and the queries derived from both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    minefield: Minefield,
    revealed: BTreeSet<Coord2>,
}

impl BoardEngine {
    pub fn new(minefield: Minefield) -> Self {
        Self {
            minefield,
            revealed: BTreeSet::new(),
        }
    }

    pub fn board_size(&self) -> Coord {
        self.minefield.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn total_cells(&self) -> CellCount {
        self.minefield.total_cells()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed.len() as CellCount
    }

    /// Safe cells still hidden; the input loop runs until this reaches zero.
    pub fn remaining_safe_cell_count(&self) -> CellCount {
        let revealed_safe = self
            .revealed
            .iter()
            .filter(|&&coords| !self.minefield[coords].is_mine())
            .count() as CellCount;
        self.minefield.safe_cell_count() - revealed_safe
    }

    /// Digs at `coords`.
    ///
    /// Already-revealed coordinates are a no-op reported as `Revealed`. A
    /// zero-count cell triggers the cascade; a mine ends the game with no
    /// cascade. Out-of-bounds coordinates leave the engine untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.minefield.validate_coords(coords)?;

        if !self.revealed.insert(coords) {
            return Ok(RevealOutcome::Revealed);
        }

        match self.minefield[coords] {
            CellValue::Mine => {
                log::debug!("mine hit at {:?}", coords);
                Ok(RevealOutcome::HitMine)
            }
            CellValue::Safe(0) => {
                self.flood_reveal(coords);
                Ok(RevealOutcome::Revealed)
            }
            CellValue::Safe(_) => Ok(RevealOutcome::Revealed),
        }
    }

    /// Work-list traversal from a zero cell: every neighbor is revealed, and
    /// revealed zero cells expand in turn. Membership in the revealed set is
    /// the sole termination condition; each coordinate is inserted before its
    /// neighbors are queued, so the walk is bounded by the cell count.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.minefield.iter_neighbors(start).collect();

        while let Some(coords) = to_visit.pop_front() {
            if !self.revealed.insert(coords) {
                continue;
            }
            log::trace!("cascade revealed {:?}", coords);

            // neighbors of a zero cell are safe by definition, so the
            // cascade never queues a mine
            if self.minefield[coords] == CellValue::Safe(0) {
                to_visit.extend(
                    self.minefield
                        .iter_neighbors(coords)
                        .filter(|pos| !self.revealed.contains(pos)),
                );
            }
        }
    }

    /// Derived win/loss state: lost as soon as a revealed coordinate is a
    /// mine, won once every safe cell has been revealed.
    pub fn outcome(&self) -> GameOutcome {
        if self
            .revealed
            .iter()
            .any(|&coords| self.minefield[coords].is_mine())
        {
            GameOutcome::Lost
        } else if self.revealed_count() == self.minefield.safe_cell_count() {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    /// Replaces the revealed set with the full coordinate space. Used once,
    /// after a loss, to prepare the final full-board view; irreversible.
    pub fn reveal_all(&mut self) {
        let size = self.board_size();
        for row in 0..size {
            for col in 0..size {
                self.revealed.insert((row, col));
            }
        }
    }

    pub fn visible_value(&self, coords: Coord2) -> VisibleTile {
        if !self.revealed.contains(&coords) {
            return VisibleTile::Hidden;
        }
        match self.minefield[coords] {
            CellValue::Mine => VisibleTile::Mine,
            CellValue::Safe(count) => VisibleTile::Count(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord, mines: &[Coord2]) -> BoardEngine {
        BoardEngine::new(Minefield::with_mines(size, mines).unwrap())
    }

    #[test]
    fn revealing_a_numbered_cell_does_not_cascade() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.revealed_count(), 1);
        assert_eq!(engine.visible_value((1, 1)), VisibleTile::Count(1));
        assert_eq!(engine.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn revealing_a_zero_cell_cascades_to_the_whole_safe_region() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((2, 2)).unwrap(), RevealOutcome::Revealed);

        assert_eq!(engine.revealed_count(), 8);
        assert_eq!(engine.outcome(), GameOutcome::Won);
        assert_eq!(engine.visible_value((0, 0)), VisibleTile::Hidden);
        assert_eq!(engine.visible_value((0, 1)), VisibleTile::Count(1));
        assert_eq!(engine.visible_value((2, 0)), VisibleTile::Count(0));
    }

    #[test]
    fn cascade_closure_covers_every_neighbor_of_revealed_zero_cells() {
        let mut engine = engine(5, &[(0, 0), (0, 1)]);

        engine.reveal((4, 4)).unwrap();

        let side = engine.board_size();
        for row in 0..side {
            for col in 0..side {
                let VisibleTile::Count(0) = engine.visible_value((row, col)) else {
                    continue;
                };
                for pos in engine.minefield.iter_neighbors((row, col)) {
                    assert_ne!(
                        engine.visible_value(pos),
                        VisibleTile::Hidden,
                        "neighbor {pos:?} of zero cell ({row}, {col}) left hidden"
                    );
                }
            }
        }
        assert_eq!(engine.outcome(), GameOutcome::Won);
    }

    #[test]
    fn reveal_is_idempotent_on_revealed_cells() {
        let mut engine = engine(3, &[(0, 0)]);
        engine.reveal((1, 1)).unwrap();
        let snapshot = engine.clone();

        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine, snapshot);
    }

    #[test]
    fn out_of_bounds_reveal_mutates_nothing() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(engine.reveal((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(engine.revealed_count(), 0);
        assert_eq!(engine.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn hitting_a_mine_loses_and_reveal_all_shows_the_board() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(engine.outcome(), GameOutcome::Lost);

        engine.reveal_all();

        assert_eq!(engine.revealed_count(), 9);
        assert_eq!(engine.outcome(), GameOutcome::Lost);
        assert_eq!(engine.visible_value((0, 0)), VisibleTile::Mine);
        assert_eq!(engine.visible_value((1, 1)), VisibleTile::Count(1));
        assert_eq!(engine.visible_value((2, 2)), VisibleTile::Count(0));
    }

    #[test]
    fn single_safe_cell_board_wins_on_first_reveal() {
        let mut engine = engine(1, &[]);

        assert_eq!(engine.remaining_safe_cell_count(), 1);
        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(engine.revealed_count(), 1);
        assert_eq!(engine.outcome(), GameOutcome::Won);
    }

    #[test]
    fn remaining_safe_cell_count_tracks_progress() {
        let mut engine = engine(3, &[(0, 0)]);

        assert_eq!(engine.remaining_safe_cell_count(), 8);
        engine.reveal((1, 1)).unwrap();
        assert_eq!(engine.remaining_safe_cell_count(), 7);
        engine.reveal((2, 2)).unwrap();
        assert_eq!(engine.remaining_safe_cell_count(), 0);
    }

    #[test]
    fn outcome_transitions_are_terminal() {
        assert!(!GameOutcome::InProgress.is_final());
        assert!(GameOutcome::Won.is_final());
        assert!(GameOutcome::Lost.is_final());
    }

    #[test]
    fn serde_round_trip_preserves_mid_game_state() {
        let mut engine = engine(3, &[(0, 0)]);
        engine.reveal((1, 1)).unwrap();

        let json = serde_json::to_string(&engine).unwrap();
        let restored: BoardEngine = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, engine);
        assert_eq!(restored.outcome(), GameOutcome::InProgress);
    }
}
