//! Ground detection via downward raycasts.
//!
//! Five rays approximate the capsule footprint: one from the body center
//! and four offset by half the radius along X and Z. Cheap compared to an
//! exact capsule-ground contact query; false negatives are possible between
//! sample points, false positives are not.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::FighterConfig;

/// Sample offsets for the capsule footprint, center first.
pub fn probe_offsets(radius: f32) -> [Vec3; 5] {
    let half = radius / 2.0;
    [
        Vec3::ZERO,
        Vec3::new(-half, 0.0, 0.0),
        Vec3::new(half, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -half),
        Vec3::new(0.0, 0.0, half),
    ]
}

/// Ray window below the body center: starts a third of the body height
/// down, ends at the configured max reach. Returns (start, length).
pub fn ray_window(height: f32, max_reach: f32) -> (f32, f32) {
    let start = height / 3.0;
    (start, (max_reach - start).max(0.0))
}

/// True if any footprint ray hits a non-sensor collider below the body.
///
/// Short-circuits on the first hit. The fighter's own colliders are
/// excluded so the feet capsule never grounds the body on itself.
pub fn is_grounded(
    context: &RapierContext,
    body: Entity,
    origin: Vec3,
    config: &FighterConfig,
) -> bool {
    let (start, length) = ray_window(config.height, config.grounded_ray_max);
    if length <= 0.0 {
        return false;
    }

    let filter = QueryFilter::default()
        .exclude_sensors()
        .exclude_rigid_body(body);

    for offset in probe_offsets(config.radius) {
        let ray_origin = origin + offset - Vec3::Y * start;
        if context
            .cast_ray(ray_origin, -Vec3::Y, length, true, filter)
            .is_some()
        {
            return true;
        }
    }
    false
}
