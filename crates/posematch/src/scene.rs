use glam::{DQuat, DVec3};

use crate::candidates::Offset;
use crate::pose::{Pose, PoseSet};

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Create a color from its components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// How each group of poses is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Color of the model poses.
    pub model_color: Color,
    /// Color of the model poses mapped by the selected offset.
    pub transformed_color: Color,
    /// Color of the space poses.
    pub space_color: Color,
    /// Box size of model and transformed poses.
    pub scale: DVec3,
    /// Factor applied to `scale` for the space poses, so coincident boxes stay visible.
    pub space_scale_factor: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            model_color: Color::BLUE,
            transformed_color: Color::GREEN,
            space_color: Color::WHITE,
            scale: DVec3::splat(0.5),
            space_scale_factor: 0.7,
        }
    }
}

/// A box placed at a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePrimitive {
    /// Position of the box center.
    pub position: DVec3,
    /// Orientation of the box.
    pub orientation: DQuat,
    /// Edge lengths of the box.
    pub scale: DVec3,
    /// Fill color.
    pub color: Color,
}

impl ScenePrimitive {
    fn at(pose: &Pose, scale: DVec3, color: Color) -> Self {
        Self {
            position: pose.translation(),
            orientation: pose.rotation_as_quaternion(),
            scale,
            color,
        }
    }
}

/// The primitives a consumer draws for one match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneLayout {
    /// One primitive per model pose.
    pub model: Vec<ScenePrimitive>,
    /// One primitive per model pose mapped by the selected offset; empty when no offset is
    /// selected.
    pub transformed: Vec<ScenePrimitive>,
    /// One primitive per space pose.
    pub space: Vec<ScenePrimitive>,
}

/// Lay out the model, the space and the model mapped by `offsets[selected]`.
///
/// An out-of-range `selected` index is tolerated: the transformed group is left empty.
pub fn build_scene<O: Offset>(
    model: &PoseSet,
    space: &PoseSet,
    offsets: &[O],
    selected: usize,
    style: &SceneStyle,
) -> SceneLayout {
    let model_prims = model
        .iter()
        .map(|m| ScenePrimitive::at(m, style.scale, style.model_color))
        .collect();

    let transformed = match offsets.get(selected) {
        Some(offset) => model
            .iter()
            .map(|m| ScenePrimitive::at(&offset.apply(m), style.scale, style.transformed_color))
            .collect(),
        None => {
            log::warn!(
                "Selected offset {} is out of range ({} offsets), skipping transformed poses",
                selected,
                offsets.len()
            );
            Vec::new()
        }
    };

    let space_scale = style.scale * style.space_scale_factor;
    let space_prims = space
        .iter()
        .map(|s| ScenePrimitive::at(s, space_scale, style.space_color))
        .collect();

    SceneLayout {
        model: model_prims,
        transformed,
        space: space_prims,
    }
}
