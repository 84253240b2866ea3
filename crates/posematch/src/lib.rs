#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # posematch
//!
//! Locates a small rigid "model" set of poses inside a larger "space" set of observed
//! poses. Candidate transforms are generated from rotation-block correspondences, then
//! kept only if they map every model pose onto some space pose within tolerance.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use posematch::{MatcherConfig, Pose, PoseMatcher, PoseSet, StrategyKind};
//!
//! let model = PoseSet::from(vec![Pose::IDENTITY]);
//! let space = PoseSet::from(vec![Pose::from_translation(DVec3::new(1.0, 2.0, 3.0))]);
//!
//! let config = MatcherConfig::new(1e-4, StrategyKind::Decomposed).unwrap();
//! let matcher = PoseMatcher::new(model, space, config).unwrap();
//! let report = matcher.run();
//! assert_eq!(report.offsets.len(), 1);
//! ```

/// Candidate transform generation strategies.
pub mod candidates;

mod error;
pub use error::MatchError;

/// Matcher configuration and the generate/validate pipeline.
pub mod matcher;

/// Pose and pose set data model.
pub mod pose;

/// Rotation block to quaternion conversion.
pub mod quaternion;

/// Presentation data for a consumer rendering the match.
pub mod scene;

/// Elementwise approximate equality.
pub mod tolerance;

/// Candidate validation against the space set.
pub mod validate;

pub use candidates::{AffineStrategy, CandidateStrategy, DecomposedStrategy, Offset, Translation};
pub use matcher::{MatchReport, MatcherConfig, PoseMatcher, StrategyKind, DEFAULT_TOLERANCE};
pub use pose::{Pose, PoseSet};
pub use tolerance::ToleranceEq;
