use crate::candidates::Offset;
use crate::pose::PoseSet;
use crate::tolerance::ToleranceEq;

/// Check that `offset` maps every model pose onto at least one space pose.
///
/// Stops at the first model pose without a match.
pub fn explains_model<O: Offset>(
    offset: &O,
    model: &PoseSet,
    space: &PoseSet,
    tolerance: f64,
) -> bool {
    model.iter().all(|m| {
        let mapped = offset.apply(m);
        space.iter().any(|s| mapped.tolerance_eq(s, tolerance))
    })
}

/// Keep the candidates that map every model pose onto some space pose.
///
/// # Arguments
///
/// * `candidates` - The deduplicated candidate offsets.
/// * `model` - The model pose set.
/// * `space` - The space pose set.
/// * `tolerance` - The per-component tolerance.
///
/// # Returns
///
/// The accepted offsets in generation order. An empty result is a valid outcome.
pub fn validate_offsets<O: Offset>(
    candidates: &[O],
    model: &PoseSet,
    space: &PoseSet,
    tolerance: f64,
) -> Vec<O> {
    if model.is_empty() {
        log::warn!(
            "No model poses, all {} candidates are trivially accepted",
            candidates.len()
        );
    }

    let valid = candidates
        .iter()
        .filter(|c| explains_model(*c, model, space, tolerance))
        .copied()
        .collect::<Vec<_>>();

    if valid.is_empty() {
        log::warn!("No valid offsets among {} candidates", candidates.len());
    } else {
        log::info!("Found {} valid offsets", valid.len());
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{AffineStrategy, CandidateStrategy, DecomposedStrategy, Translation};
    use crate::pose::Pose;
    use glam::{DMat3, DVec3};

    fn model() -> PoseSet {
        PoseSet::from(vec![
            Pose::IDENTITY,
            Pose::new(DMat3::from_rotation_z(0.5), DVec3::new(1.0, 0.0, 0.0)),
            Pose::new(DMat3::from_rotation_x(1.2), DVec3::new(0.0, 2.0, 1.0)),
        ])
    }

    fn shifted(set: &PoseSet, offset: DVec3) -> Vec<Pose> {
        set.iter()
            .map(|p| Pose::new(p.rotation(), p.translation() + offset))
            .collect()
    }

    #[test]
    fn test_single_pose_scenario() {
        let model = PoseSet::from(vec![Pose::IDENTITY]);
        let space = PoseSet::from(vec![Pose::from_translation(DVec3::new(1.0, 2.0, 3.0))]);
        let candidates = DecomposedStrategy.generate(&model, &space, 1e-4);
        let valid = validate_offsets(&candidates, &model, &space, 1e-4);
        assert_eq!(valid, vec![Translation::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_identity_case_validates() {
        let set = model();
        let candidates = DecomposedStrategy.generate(&set, &set, 0.0);
        let valid = validate_offsets(&candidates, &set, &set, 0.0);
        assert!(valid.contains(&Translation(DVec3::ZERO)));
        for pose in set.iter() {
            assert!(pose.tolerance_eq(pose, 0.0));
        }
    }

    #[test]
    fn test_finds_true_offset_among_clutter() {
        let model = model();
        let offset = DVec3::new(10.0, -4.0, 2.5);
        let mut space = shifted(&model, offset);
        // distractors sharing rotations with model poses
        space.push(Pose::from_translation(DVec3::new(-7.0, 1.0, 0.0)));
        space.push(Pose::new(DMat3::from_rotation_z(0.5), DVec3::new(3.0, 3.0, 3.0)));
        let space = PoseSet::from(space);

        let candidates = DecomposedStrategy.generate(&model, &space, 1e-6);
        assert!(candidates.len() > 1);
        let valid = validate_offsets(&candidates, &model, &space, 1e-6);
        assert_eq!(valid.len(), 1);
        assert!(valid[0].tolerance_eq(&Translation(offset), 1e-9));
    }

    #[test]
    fn test_rejects_when_one_image_missing() {
        let model = model();
        let offset = DVec3::new(1.5, 1.5, -2.0);
        let mut space = shifted(&model, offset);
        let candidate = Translation(offset);

        let full = PoseSet::from(space.clone());
        assert!(explains_model(&candidate, &model, &full, 1e-9));

        space.remove(1);
        let partial = PoseSet::from(space);
        assert!(!explains_model(&candidate, &model, &partial, 1e-9));
        assert!(validate_offsets(&[candidate], &model, &partial, 1e-9).is_empty());
    }

    #[test]
    fn test_affine_recovers_placement() {
        // rotated reference pose first, so the inverse is not trivial
        let model = model().iter().rev().copied().collect::<PoseSet>();
        let transform = Pose::from_translation(DVec3::new(-2.0, 0.5, 4.0));
        let mut space = model.iter().map(|m| transform * *m).collect::<Vec<_>>();
        space.push(Pose::new(DMat3::from_rotation_x(1.2), DVec3::new(8.0, 8.0, 8.0)));
        let space = PoseSet::from(space);

        let candidates = AffineStrategy.generate(&model, &space, 1e-6);
        assert_eq!(candidates.len(), 2);
        let valid = validate_offsets(&candidates, &model, &space, 1e-6);
        assert_eq!(valid.len(), 1);
        assert!(valid[0].tolerance_eq(&transform, 1e-9));
    }

    #[test]
    fn test_rotated_placement_is_not_proposed() {
        // both strategies pair poses by equal rotation blocks, so a placement that rotates
        // the model yields no candidates
        let model = model();
        let transform = Pose::new(DMat3::from_rotation_y(0.9), DVec3::new(-2.0, 0.5, 4.0));
        let space = model.iter().map(|m| transform * *m).collect::<PoseSet>();

        let affine = AffineStrategy.generate(&model, &space, 1e-6);
        assert!(validate_offsets(&affine, &model, &space, 1e-6).is_empty());

        let decomposed = DecomposedStrategy.generate(&model, &space, 1e-6);
        assert!(validate_offsets(&decomposed, &model, &space, 1e-6).is_empty());
    }

    #[test]
    fn test_keeps_generation_order() {
        // a model with a single pose is explained by every candidate
        let model = PoseSet::from(vec![Pose::IDENTITY]);
        let space = PoseSet::from(vec![
            Pose::from_translation(DVec3::new(3.0, 0.0, 0.0)),
            Pose::from_translation(DVec3::new(1.0, 0.0, 0.0)),
            Pose::from_translation(DVec3::new(2.0, 0.0, 0.0)),
        ]);
        let candidates = DecomposedStrategy.generate(&model, &space, 1e-6);
        let valid = validate_offsets(&candidates, &model, &space, 1e-6);
        assert_eq!(valid, candidates);
        assert_eq!(valid[0], Translation::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_candidates() {
        let set = model();
        let valid: Vec<Translation> = validate_offsets(&[], &set, &set, 1e-6);
        assert!(valid.is_empty());
    }

    #[test]
    fn test_empty_model_accepts_every_candidate() {
        let space = PoseSet::from(vec![Pose::from_translation(DVec3::new(1.0, 0.0, 0.0))]);
        let candidates = vec![Translation::new(1.0, 0.0, 0.0), Translation::new(5.0, 5.0, 5.0)];
        let valid = validate_offsets(&candidates, &PoseSet::default(), &space, 1e-6);
        assert_eq!(valid, candidates);
    }
}
