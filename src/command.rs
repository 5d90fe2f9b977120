//! Command-based control for the game.

use crate::score::Score;
use crate::types::Difficulty;

/// Actions an outer game loop can hand to
/// [`ReactionGame::handle_action`](crate::ReactionGame::handle_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameAction {
    /// Play the start animation.
    StartAnimation,
    /// Play one round at the given difficulty.
    Round(Difficulty),
    /// Play the fail animation.
    FailAnimation,
    /// Blink out a score.
    ShowScore(Score),
}
