//! Iterative-deepening engine with seeded random tie-breaking.
//!
//! Searches on behalf of the side to move and reports progress as
//! `info ...` lines alongside the chosen move.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::HeuristicScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

pub struct IterativeEngine {
    config: SearchConfig,
    rng: StdRng,
    move_generator: PseudoLegalMoveGenerator,
    scorer: HeuristicScorer,
}

impl IterativeEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
            move_generator: PseudoLegalMoveGenerator,
            scorer: HeuristicScorer,
        }
    }

    /// Deterministic engine: the same seed and position give the same move.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn parse_option<T: std::str::FromStr>(name: &str, value: &str) -> ChessResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "PseudoChess Iterative"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = parse_option(name, value)?;
                self.config.max_depth = (depth > 0).then_some(depth);
            }
            "seed" => {
                let seed: u64 = parse_option(name, value)?;
                self.rng = StdRng::seed_from_u64(seed);
            }
            "fiftymovelimit" => {
                self.config.fifty_move_limit = parse_option(name, value)?;
            }
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        let mut config = self.config;
        if let Some(depth) = params.depth {
            config.max_depth = Some(depth);
        }

        let started = Utc::now();
        let result = iterative_deepening_search(
            game_state,
            &self.move_generator,
            &self.scorer,
            config,
            &mut self.rng,
        )?;
        let elapsed_ms = (Utc::now() - started).num_milliseconds();

        info!(
            best_move = %result.best_move,
            depth = result.reached_depth,
            nodes = result.nodes,
            elapsed_ms,
            "engine chose move"
        );

        let mut out = EngineOutput::default();
        out.best_move = Some(result.best_move);
        out.info_lines.push(format!(
            "info depth {} score {:.2} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string iterative_engine tied_moves {}",
            result.tied_moves
        ));
        if let Some(requested) = params.depth {
            out.info_lines.push(format!(
                "info string iterative_engine requested_depth {}",
                requested
            ));
        }

        Ok(out)
    }
}
