use log::debug;

use autotris_core::GameState;
use autotris_types::GameAction;

use crate::planner::{best_move, execute_move, AiMove, AiWeights};

/// Plans once per piece and replays the plan one action per call.
#[derive(Debug, Clone, PartialEq)]
pub struct Autopilot {
    weights: AiWeights,
    plan: Option<AiMove>,
    /// `piece_id` the plan was made for
    planned_for: Option<u32>,
}

impl Autopilot {
    pub fn new(weights: AiWeights) -> Self {
        Self {
            weights,
            plan: None,
            planned_for: None,
        }
    }

    pub fn weights(&self) -> &AiWeights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: AiWeights) {
        self.weights = weights;
        self.reset();
    }

    /// Remaining plan for the current piece.
    pub fn plan(&self) -> Option<AiMove> {
        self.plan
    }

    /// Forget the plan; the next call replans.
    pub fn reset(&mut self) {
        self.plan = None;
        self.planned_for = None;
    }

    /// Next action to dispatch for `state`.
    pub fn next_action(&mut self, state: &GameState) -> GameAction {
        if state.current().is_none() {
            return GameAction::Tick;
        }

        if self.planned_for != Some(state.piece_id()) {
            self.plan = best_move(state, &self.weights);
            self.planned_for = Some(state.piece_id());
            debug!("piece {} plan: {:?}", state.piece_id(), self.plan);
        }

        let Some(mv) = self.plan.as_mut() else {
            return GameAction::Tick;
        };

        let action = execute_move(state, mv);
        if action == GameAction::Rotate {
            mv.rotation -= 1;
        }
        action
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(AiWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotris_core::{Board, Tetromino};
    use autotris_types::PieceKind;

    #[test]
    fn test_replays_plan_to_the_drop() {
        let mut state = GameState::with_seed(1, 11)
            .with_board(Board::from_rows(&["JJJJ.JJJJJ"]))
            .with_current(Tetromino::new(PieceKind::I));
        let mut pilot = Autopilot::new(AiWeights {
            lines_cleared: 1000.0,
            holes: 0.0,
            height: 0.0,
            bumpiness: 0.0,
        });

        let first_piece = state.piece_id();
        let mut steps = 0;
        while state.piece_id() == first_piece {
            let action = pilot.next_action(&state);
            assert!(state.apply_action(action), "{:?} rejected", action);
            steps += 1;
            assert!(steps < 20);
        }

        assert_eq!(state.lines(), 1);
    }

    #[test]
    fn test_rotation_counts_down() {
        let mut state = GameState::with_seed(1, 3)
            .with_board(Board::from_rows(&["ZZZZZ...ZZ", "ZZZZZZ.ZZZ"]))
            .with_current(Tetromino::new(PieceKind::T));
        let mut pilot = Autopilot::default();
        let expected = best_move(&state, pilot.weights()).unwrap();

        let mut rotations = 0;
        loop {
            let action = pilot.next_action(&state);
            if action != GameAction::Rotate {
                break;
            }
            rotations += 1;
            state.apply_action(action);
        }

        assert_eq!(rotations, expected.rotation);
        assert_eq!(pilot.plan().unwrap().rotation, 0);
    }

    #[test]
    fn test_reset_forgets_plan() {
        let state = GameState::with_seed(1, 3);
        let mut pilot = Autopilot::default();
        pilot.next_action(&state);
        assert!(pilot.plan().is_some());
        pilot.reset();
        assert!(pilot.plan().is_none());
    }
}
