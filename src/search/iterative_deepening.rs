//! Iterative deepening search with max/min alpha-beta pruning.
//!
//! Every depth from 1 up to the target is searched from scratch. The root
//! keeps every move tied for the best score and picks among them with the
//! caller's random source, so equal moves vary between runs unless the rng is
//! seeded. Each node works on its own cloned position.
//!
//! The search always plays for the side to move: `root_side` is reset on the
//! root copy before any node is scored.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::make_move;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, HeuristicScorer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Depth used when the root has many moves.
    pub shallow_depth: u8,
    /// Depth used when the root has at most `narrow_branching_threshold` moves.
    pub deep_depth: u8,
    pub narrow_branching_threshold: usize,
    /// Nodes with a halfmove clock at or above this are terminal.
    pub fifty_move_limit: u16,
    /// Fixed target depth overriding the branching heuristic.
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            shallow_depth: 3,
            deep_depth: 4,
            narrow_branching_threshold: 5,
            fifty_move_limit: FIFTY_MOVE_HALFMOVE_LIMIT,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn target_depth(&self, root_move_count: usize) -> u8 {
        if let Some(depth) = self.max_depth {
            return depth.max(1);
        }

        if root_move_count <= self.narrow_branching_threshold {
            self.deep_depth.max(1)
        } else {
            self.shallow_depth.max(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    /// Root moves tied for `best_score` at the final depth.
    pub tied_moves: usize,
}

/// Pick a move for the side to move with the default generator, scorer, and config.
pub fn best_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> ChessResult<ChessMove> {
    iterative_deepening_search(
        game_state,
        &PseudoLegalMoveGenerator,
        &HeuristicScorer,
        SearchConfig::default(),
        rng,
    )
    .map(|result| result.best_move)
}

pub fn iterative_deepening_search<G: MoveGenerator, S: BoardScorer, R: Rng + ?Sized>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> ChessResult<SearchResult> {
    let root_moves = generator.generate_moves(game_state);
    if root_moves.is_empty() {
        return Err(ChessError::NoLegalMove);
    }

    let root = game_state.clone().with_root_side(game_state.side_to_move);

    let target_depth = config.target_depth(root_moves.len());
    let search = Search {
        generator,
        scorer,
        fifty_move_limit: config.fifty_move_limit,
    };

    let mut result = None;
    let mut nodes = 0u64;

    for depth in 1..=target_depth {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves = Vec::new();

        for &mv in &root_moves {
            let next = make_move(&root, mv);
            let score =
                search.min_value(&next, f64::NEG_INFINITY, f64::INFINITY, depth - 1, &mut nodes);
            trace!(depth, %mv, score, "scored root move");

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        let picked = *best_moves.choose(rng).ok_or(ChessError::NoLegalMove)?;
        debug!(
            depth,
            best_move = %picked,
            score = best_score,
            tied = best_moves.len(),
            nodes,
            "completed search depth"
        );

        result = Some(SearchResult {
            best_move: picked,
            best_score,
            reached_depth: depth,
            nodes,
            tied_moves: best_moves.len(),
        });
    }

    result.ok_or(ChessError::NoLegalMove)
}

struct Search<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    fifty_move_limit: u16,
}

impl<G: MoveGenerator, S: BoardScorer> Search<'_, G, S> {
    /// Leaf test: returns the node's moves when it should be expanded.
    fn expand(&self, game_state: &GameState, depth: u8) -> Option<Vec<ChessMove>> {
        if depth == 0 || game_state.halfmove_clock >= self.fifty_move_limit {
            return None;
        }

        let moves = self.generator.generate_moves(game_state);
        (!moves.is_empty()).then_some(moves)
    }

    fn max_value(
        &self,
        game_state: &GameState,
        mut alpha: f64,
        beta: f64,
        depth: u8,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;
        let Some(moves) = self.expand(game_state, depth) else {
            return self.scorer.score(game_state);
        };

        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let next = make_move(game_state, mv);
            value = value.max(self.min_value(&next, alpha, beta, depth - 1, nodes));
            alpha = alpha.max(value);
            if value >= beta {
                break;
            }
        }

        value
    }

    fn min_value(
        &self,
        game_state: &GameState,
        alpha: f64,
        mut beta: f64,
        depth: u8,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;
        let Some(moves) = self.expand(game_state, depth) else {
            return self.scorer.score(game_state);
        };

        let mut value = f64::INFINITY;
        for mv in moves {
            let next = make_move(game_state, mv);
            value = value.min(self.max_value(&next, alpha, beta, depth - 1, nodes));
            beta = beta.min(value);
            if value <= alpha {
                break;
            }
        }

        value
    }
}
