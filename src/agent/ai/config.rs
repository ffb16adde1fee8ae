//! Search configuration and difficulty presets.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 4
//! - **Hard**: Depth 6
//! - **Expert**: Depth 8 with a 5s time limit

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::evaluation::EvalWeights;

/// Deepest search the engine accepts; deeper requests are clamped.
pub const MAX_DEPTH: u8 = 10;

/// Which static evaluator bottoms out the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalKind {
    /// Material only.
    Simple,
    /// Material plus phase-dependent positional terms.
    #[default]
    Rich,
}

impl FromStr for EvalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(EvalKind::Simple),
            "rich" => Ok(EvalKind::Rich),
            other => Err(format!("unknown evaluator '{other}', expected simple or rich")),
        }
    }
}

/// AI difficulty levels that map to search depth and time controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Deepest search, cut off by a time budget.
    Expert,
}

impl Difficulty {
    /// Number of plies searched at this level.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        match self {
            Difficulty::Expert => Some(Duration::from_secs(5)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Parameters for one call to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub eval: EvalKind,
    pub weights: EvalWeights,
    /// Wall-clock budget. With one set, the root deepens iteratively and
    /// keeps the last completed iteration.
    pub time_limit: Option<Duration>,
    /// Extra plies searched when the root is already an endgame.
    pub endgame_extension: u8,
    /// Fixes the random choice between equally scored moves.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            eval: EvalKind::Rich,
            weights: EvalWeights::default(),
            time_limit: None,
            endgame_extension: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8, eval: EvalKind) -> Self {
        Self::default().with_depth(depth).with_eval(eval)
    }

    /// Depth is clamped to `1..=MAX_DEPTH`.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.clamp(1, MAX_DEPTH);
        self
    }

    pub fn with_eval(mut self, eval: EvalKind) -> Self {
        self.eval = eval;
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_endgame_extension(mut self, plies: u8) -> Self {
        self.endgame_extension = plies;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        let config = SearchConfig::default().with_depth(difficulty.max_depth());
        match difficulty.time_limit() {
            Some(limit) => config.with_time_limit(limit),
            None => config,
        }
    }
}
