use std::fmt::Debug;

use glam::DVec3;

use crate::pose::{Pose, PoseSet};
use crate::tolerance::{rotation_eq, ToleranceEq};

/// A hypothesized transform from the model frame to the space frame.
pub trait Offset: ToleranceEq + Copy + Debug {
    /// Map a model pose with this offset.
    fn apply(&self, pose: &Pose) -> Pose;

    /// The offset as a full rigid transform.
    fn to_pose(&self) -> Pose;
}

impl Offset for Pose {
    #[inline]
    fn apply(&self, pose: &Pose) -> Pose {
        *self * *pose
    }

    #[inline]
    fn to_pose(&self) -> Pose {
        *self
    }
}

/// A translation-only offset; the rotation of the mapped pose is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation(pub DVec3);

impl Translation {
    /// Create a translation offset from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }
}

impl ToleranceEq for Translation {
    fn tolerance_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.tolerance_eq(&other.0, epsilon)
    }
}

impl Offset for Translation {
    #[inline]
    fn apply(&self, pose: &Pose) -> Pose {
        Pose::new(pose.rotation(), pose.translation() + self.0)
    }

    #[inline]
    fn to_pose(&self) -> Pose {
        Pose::from_translation(self.0)
    }
}

/// A way of proposing candidate offsets from rotation-block correspondences.
pub trait CandidateStrategy {
    /// The kind of offset the strategy produces.
    type Offset: Offset;

    /// A short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Generate the deduplicated candidate offsets mapping `model` into `space`.
    ///
    /// Candidates are returned in generation order; a candidate that is tolerance-equal to
    /// an earlier one is dropped.
    fn generate(&self, model: &PoseSet, space: &PoseSet, tolerance: f64) -> Vec<Self::Offset>;
}

/// Full rigid transform candidates relative to the first model pose.
///
/// Every space pose whose rotation block matches the reference pose yields the transform
/// `space * reference^-1`, which maps the reference exactly onto that space pose.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffineStrategy;

impl CandidateStrategy for AffineStrategy {
    type Offset = Pose;

    fn name(&self) -> &'static str {
        "affine"
    }

    fn generate(&self, model: &PoseSet, space: &PoseSet, tolerance: f64) -> Vec<Pose> {
        let mut candidates = Vec::new();

        let Some(reference) = model.first() else {
            log::error!("No model poses, cannot pick a reference pose");
            return candidates;
        };
        if space.is_empty() {
            log::warn!("No space poses to generate candidates from");
            return candidates;
        }

        let reference_inv = reference.inverse();
        for s in space.iter().filter(|s| rotation_eq(reference, s, tolerance)) {
            insert_unique(&mut candidates, *s * reference_inv, tolerance);
        }

        log::debug!("Generated {} affine candidates", candidates.len());
        candidates
    }
}

/// Translation-only candidates from every rotation-matched model/space pair.
///
/// The relative rotation between matched poses is assumed to be the identity; pairs that
/// violate this produce candidates the validator rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposedStrategy;

impl CandidateStrategy for DecomposedStrategy {
    type Offset = Translation;

    fn name(&self) -> &'static str {
        "decomposed"
    }

    fn generate(&self, model: &PoseSet, space: &PoseSet, tolerance: f64) -> Vec<Translation> {
        let mut candidates = Vec::new();

        if model.is_empty() {
            log::error!("No model poses to generate candidates from");
            return candidates;
        }
        if space.is_empty() {
            log::warn!("No space poses to generate candidates from");
            return candidates;
        }

        for m in model.iter() {
            for s in space.iter().filter(|s| rotation_eq(m, s, tolerance)) {
                let offset = Translation(s.translation() - m.translation());
                insert_unique(&mut candidates, offset, tolerance);
            }
        }

        log::debug!("Generated {} translation candidates", candidates.len());
        candidates
    }
}

/// Push `candidate` unless an element tolerance-equal to it is already present.
///
/// Returns whether the candidate was inserted.
pub(crate) fn insert_unique<T: ToleranceEq>(
    items: &mut Vec<T>,
    candidate: T,
    tolerance: f64,
) -> bool {
    if items.iter().any(|c| c.tolerance_eq(&candidate, tolerance)) {
        return false;
    }
    items.push(candidate);
    true
}
