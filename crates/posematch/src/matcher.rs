use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidates::{AffineStrategy, CandidateStrategy, DecomposedStrategy, Offset};
use crate::error::MatchError;
use crate::pose::{Pose, PoseSet};
use crate::validate::validate_offsets;

/// The tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Selects the candidate generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Full rigid transforms relative to the first model pose.
    #[default]
    Affine,
    /// Translation-only offsets from every rotation-matched pair.
    Decomposed,
}

impl FromStr for StrategyKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "affine" => Ok(Self::Affine),
            "decomposed" => Ok(Self::Decomposed),
            _ => Err(MatchError::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Affine => write!(f, "affine"),
            Self::Decomposed => write!(f, "decomposed"),
        }
    }
}

/// Configuration of a [`PoseMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Maximum allowed per-component difference for two values to be equal.
    pub tolerance: f64,
    /// The candidate generation strategy.
    pub strategy: StrategyKind,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            strategy: StrategyKind::default(),
        }
    }
}

impl MatcherConfig {
    /// Create a validated configuration.
    pub fn new(tolerance: f64, strategy: StrategyKind) -> Result<Self, MatchError> {
        let config = Self {
            tolerance,
            strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MatchError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Outcome of a full match run.
///
/// Offsets are reported as rigid transforms regardless of the strategy; a translation-only
/// offset becomes a transform with an identity rotation block.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// The strategy that produced the offsets.
    pub strategy: StrategyKind,
    /// The deduplicated candidates, in generation order.
    pub candidates: Vec<Pose>,
    /// The accepted offsets, in generation order.
    pub offsets: Vec<Pose>,
}

impl MatchReport {
    /// Check whether at least one offset was accepted.
    pub fn is_match(&self) -> bool {
        !self.offsets.is_empty()
    }
}

/// Locates the model pose set inside the space pose set.
///
/// Both pose sets are read-only for the lifetime of the matcher; every call returns freshly
/// allocated results.
#[derive(Debug, Clone)]
pub struct PoseMatcher {
    config: MatcherConfig,
    model: PoseSet,
    space: PoseSet,
}

impl PoseMatcher {
    /// Create a matcher, rejecting an invalid configuration.
    pub fn new(model: PoseSet, space: PoseSet, config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            config,
            model,
            space,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Get the configured tolerance.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Get as reference the model poses.
    pub fn model(&self) -> &PoseSet {
        &self.model
    }

    /// Get as reference the space poses.
    pub fn space(&self) -> &PoseSet {
        &self.space
    }

    /// Generate candidates with an explicit strategy.
    pub fn generate_candidates<S: CandidateStrategy>(&self, strategy: &S) -> Vec<S::Offset> {
        let candidates = strategy.generate(&self.model, &self.space, self.config.tolerance);
        if candidates.is_empty() {
            log::warn!("Strategy '{}' generated no candidates", strategy.name());
        } else {
            log::info!(
                "Strategy '{}' generated {} candidates",
                strategy.name(),
                candidates.len()
            );
        }
        candidates
    }

    /// Keep the candidates that map every model pose onto some space pose.
    pub fn validate_offsets<O: Offset>(&self, candidates: &[O]) -> Vec<O> {
        validate_offsets(candidates, &self.model, &self.space, self.config.tolerance)
    }

    /// Generate and validate with the configured strategy.
    pub fn run(&self) -> MatchReport {
        log::debug!(
            "Matching {} model poses against {} space poses, tolerance {}",
            self.model.len(),
            self.space.len(),
            self.config.tolerance
        );

        let (candidates, offsets) = match self.config.strategy {
            StrategyKind::Affine => self.run_with(&AffineStrategy),
            StrategyKind::Decomposed => self.run_with(&DecomposedStrategy),
        };

        MatchReport {
            strategy: self.config.strategy,
            candidates,
            offsets,
        }
    }

    fn run_with<S: CandidateStrategy>(&self, strategy: &S) -> (Vec<Pose>, Vec<Pose>) {
        let candidates = self.generate_candidates(strategy);
        let offsets = self.validate_offsets(&candidates);
        (
            candidates.iter().map(Offset::to_pose).collect(),
            offsets.iter().map(Offset::to_pose).collect(),
        )
    }
}
