//! Global flip and game-over state.
//!
//! These flags live in a single [`WorldState`] resource: exactly one
//! instance exists per world by construction, and systems receive it by
//! injection instead of a global lookup.
//!
//! Two orthogonal state axes are tracked by independent flags:
//! - `Idle -> Flipping -> Idle`, driven by the flip trigger and the
//!   completion of every tile animation
//! - `Idle -> GameOver`, terminal, driven by the per-tick all-players-on-goal
//!   check

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WorldState {
    is_flipping: bool,
    game_over: bool,
    /// Tile animations still in flight for the current flip.
    pending_tiles: usize,
}

impl WorldState {
    pub fn new() -> Self {
        WorldState::default()
    }

    /// True from flip-trigger acceptance until every tile has settled.
    pub fn is_flipping(&self) -> bool {
        self.is_flipping
    }

    /// True once all players have reached a goal. Never resets.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pending_tiles(&self) -> usize {
        self.pending_tiles
    }

    /// Arm the wait-for-all-tiles barrier for a new flip.
    ///
    /// A flip with zero tiles completes immediately: the flipping flag is
    /// never raised.
    pub fn begin_flip(&mut self, tile_count: usize) {
        self.pending_tiles = tile_count;
        self.is_flipping = tile_count > 0;
    }

    /// Mark one tile animation as finished.
    ///
    /// Returns true when this was the last pending tile and the flip is now
    /// complete.
    pub fn tile_settled(&mut self) -> bool {
        if self.pending_tiles > 0 {
            self.pending_tiles -= 1;
        }
        if self.pending_tiles == 0 && self.is_flipping {
            self.is_flipping = false;
            true
        } else {
            false
        }
    }

    /// Latch the terminal game-over flag.
    ///
    /// Returns true only on the transition; later calls are no-ops.
    pub fn latch_game_over(&mut self) -> bool {
        if self.game_over {
            false
        } else {
            self.game_over = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let ws = WorldState::new();
        assert!(!ws.is_flipping());
        assert!(!ws.game_over());
        assert_eq!(ws.pending_tiles(), 0);
    }

    #[test]
    fn test_begin_flip_arms_barrier() {
        let mut ws = WorldState::new();
        ws.begin_flip(3);
        assert!(ws.is_flipping());
        assert_eq!(ws.pending_tiles(), 3);
    }

    #[test]
    fn test_begin_flip_with_zero_tiles_completes_immediately() {
        let mut ws = WorldState::new();
        ws.begin_flip(0);
        assert!(!ws.is_flipping());
    }

    #[test]
    fn test_tile_settled_clears_flag_on_last_tile() {
        let mut ws = WorldState::new();
        ws.begin_flip(2);
        assert!(!ws.tile_settled());
        assert!(ws.is_flipping());
        assert!(ws.tile_settled());
        assert!(!ws.is_flipping());
    }

    #[test]
    fn test_game_over_latch_is_monotonic() {
        let mut ws = WorldState::new();
        assert!(ws.latch_game_over());
        assert!(ws.game_over());
        assert!(!ws.latch_game_over());
        assert!(ws.game_over());
    }
}
