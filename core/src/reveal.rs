use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Player-driven reveal, a bomb detonates.
    #[default]
    Play,
    /// Post-loss sweep, only surfaces bombs and never detonates.
    Cleanup,
}

/// Cells exposed by a single reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealReport {
    pub mode: RevealMode,
    /// Safe cells exposed, in exposure order.
    pub exposed: Vec<Coord2>,
    /// Bomb exposed by this call, if any.
    pub bomb: Option<Coord2>,
}

impl RevealReport {
    fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exposed.is_empty() && self.bomb.is_none()
    }

    /// The bomb that ends the game, only ever set outside of cleanup.
    pub fn detonation(&self) -> Option<Coord2> {
        match self.mode {
            RevealMode::Play => self.bomb,
            RevealMode::Cleanup => None,
        }
    }
}

impl Board {
    /// Exposes `coords` and flood-fills any zero-count region reachable from it.
    ///
    /// Flagged and exposed cells are left untouched. Counters are not kept
    /// here, the caller accounts for the cells listed in the report.
    pub fn reveal(&mut self, coords: Coord2, mode: RevealMode) -> Result<RevealReport> {
        let coords = self.validate_coords(coords)?;
        let mut report = RevealReport::new(mode);
        let cell = self[coords];

        if !cell.is_revealable() {
            return Ok(report);
        }

        if cell.is_bomb() {
            self.cell_mut(coords).expose(None);
            report.bomb = Some(coords);
            match mode {
                RevealMode::Play => log::debug!("Bomb detonated at {:?}", coords),
                RevealMode::Cleanup => log::trace!("Bomb surfaced at {:?}", coords),
            }
            return Ok(report);
        }

        if mode == RevealMode::Cleanup {
            return Ok(report);
        }

        let count = self.count_adjacent_bombs(coords);
        self.cell_mut(coords).expose(Some(count));
        report.exposed.push(coords);
        log::debug!("Exposed cell at {:?}, bomb count: {}", coords, count);

        if count == 0 {
            self.flood_fill(coords, &mut report.exposed);
        }

        Ok(report)
    }

    /// Breadth-first cascade from an already exposed zero-count cell.
    ///
    /// Every cell is queued at most once and marked exposed before its
    /// neighbors are queued, so the loop ends after at most one pass over the board.
    fn flood_fill(&mut self, origin: Coord2, exposed: &mut Vec<Coord2>) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<Coord2> = VecDeque::new();
        self.queue_hidden_neighbors(origin, &mut visited, &mut to_visit);
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            // a neighbor of a zero-count cell is never a bomb
            debug_assert!(!self[visit_coords].is_bomb());
            if !self[visit_coords].is_revealable() {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            let visit_count = self.count_adjacent_bombs(visit_coords);
            self.cell_mut(visit_coords).expose(Some(visit_count));
            exposed.push(visit_coords);
            log::trace!(
                "Flood exposed cell at {:?}, bomb count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                self.queue_hidden_neighbors(visit_coords, &mut visited, &mut to_visit);
            }
        }
    }

    fn queue_hidden_neighbors(
        &self,
        coords: Coord2,
        visited: &mut BTreeSet<Coord2>,
        to_visit: &mut VecDeque<Coord2>,
    ) {
        for pos in self.iter_neighbors(coords) {
            if self[pos].is_revealable() && visited.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }
}
