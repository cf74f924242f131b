use crate::*;

impl Board {
    /// Flips the flag on a hidden cell, exposed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        if self[coords].is_exposed() {
            return Ok(FlagOutcome::NoChange);
        }

        Ok(if self.cell_mut(coords).toggle_flag() {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        })
    }
}
