use glam::{Mat4, Vec3};

use crate::stack::MatrixStack;
use crate::vehicle::VehicleState;

/// Ground plane color (unlit path).
pub const GROUND_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Body panel and door color.
pub const BODY_COLOR: [f32; 3] = [1.0, 0.0, 1.0];
/// Roof pillar color.
pub const PILLAR_COLOR: [f32; 3] = [0.0, 1.0, 1.0];
/// Spoiler and wheel color.
pub const TRIM_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Number of boxes emitted per frame: the ground plus seventeen car parts.
pub const PART_COUNT: usize = 18;

/// One drawable box: a world transform for the shared unit cube, the
/// matching normal transform, a material color, and the shading path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Part {
    pub model: Mat4,
    pub normal: Mat4,
    pub color: [f32; 3],
    pub lit: bool,
}

impl Part {
    fn lit(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model,
            normal: normal_from_model(model),
            color,
            lit: true,
        }
    }

    fn unlit(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model,
            normal: normal_from_model(model),
            color,
            lit: false,
        }
    }
}

/// Inverse-transpose of a model matrix, for transforming normals under
/// non-uniform scale. A singular model (the ground's zero-height scale)
/// falls back to identity; such parts take the unlit path and never read
/// their normals.
pub fn normal_from_model(model: Mat4) -> Mat4 {
    if model.determinant().abs() <= f32::EPSILON {
        return Mat4::IDENTITY;
    }
    model.inverse().transpose()
}

fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

fn rotate_x(deg: f32) -> Mat4 {
    Mat4::from_rotation_x(deg.to_radians())
}

fn rotate_y(deg: f32) -> Mat4 {
    Mat4::from_rotation_y(deg.to_radians())
}

fn rotate_z(deg: f32) -> Mat4 {
    Mat4::from_rotation_z(deg.to_radians())
}

/// Composes the fixed part list for one frame: ground first, then the
/// seventeen car parts in draw order.
///
/// Every part is scoped by a push/pop pair on the transform stack, so each
/// sibling composes its locals onto the same restored parent frame. Car
/// parts share a root frame at the vehicle position (nudged +0.8 along z)
/// and each re-applies the yaw/tilt placement before its local offsets.
pub fn scene_parts(state: &VehicleState) -> Vec<Part> {
    let mut stack = MatrixStack::new();
    let mut parts = Vec::with_capacity(PART_COUNT);

    // Ground: world frame, squashed flat by the zero Y scale.
    let mut current = translate(0.0, -0.2, 0.0);
    stack.push(current);
    current *= scale(50.0, 0.0, 50.0);
    parts.push(Part::unlit(current, GROUND_COLOR));
    current = stack.pop();

    // Car root frame.
    current = translate(
        state.position.x,
        state.position.y,
        state.position.z + 0.8,
    );
    let placement = rotate_y(state.heading_deg) * rotate_x(state.tilt_deg);

    // Emits one car part: push the root, apply placement + locals, pop back.
    let mut part = |stack: &mut MatrixStack, color: [f32; 3], locals: &[Mat4]| {
        stack.push(current);
        let mut m = current * placement;
        for l in locals {
            m *= *l;
        }
        parts.push(Part::lit(m, color));
        current = stack.pop();
    };

    // Body panels.
    part(&mut stack, BODY_COLOR, &[scale(1.0, 0.1, 2.0)]);
    part(
        &mut stack,
        BODY_COLOR,
        &[translate(0.0, 0.5, 0.2), scale(0.8, 0.1, 0.8)],
    );
    part(
        &mut stack,
        BODY_COLOR,
        &[translate(0.0, 0.15, -0.6), scale(1.0, 0.2, 0.7)],
    );
    part(
        &mut stack,
        BODY_COLOR,
        &[translate(0.0, 0.2, 0.75), scale(1.0, 0.25, 0.4)],
    );

    // Doors: swing about the hinge, then re-anchor the panel center.
    part(
        &mut stack,
        BODY_COLOR,
        &[
            translate(-0.48, 0.15, -0.3),
            rotate_y(-state.door_deg),
            translate(0.0, 0.0, 0.425),
            scale(0.01, 0.25, 0.85),
        ],
    );
    part(
        &mut stack,
        BODY_COLOR,
        &[
            translate(0.48, 0.15, -0.3),
            rotate_y(state.door_deg),
            translate(0.0, 0.0, 0.425),
            scale(0.01, 0.25, 0.85),
        ],
    );

    // Roof pillars, raked front and rear.
    part(
        &mut stack,
        PILLAR_COLOR,
        &[
            translate(-0.4, 0.35, -0.2),
            rotate_x(35.0),
            rotate_z(-17.0),
            scale(0.1, 0.39, 0.1),
        ],
    );
    part(
        &mut stack,
        PILLAR_COLOR,
        &[
            translate(0.4, 0.35, -0.2),
            rotate_x(35.0),
            rotate_z(17.0),
            scale(0.1, 0.39, 0.1),
        ],
    );
    part(
        &mut stack,
        PILLAR_COLOR,
        &[
            translate(-0.4, 0.35, 0.6),
            rotate_x(-20.0),
            rotate_z(-10.0),
            scale(0.1, 0.3, 0.1),
        ],
    );
    part(
        &mut stack,
        PILLAR_COLOR,
        &[
            translate(0.4, 0.35, 0.6),
            rotate_x(-20.0),
            rotate_z(10.0),
            scale(0.1, 0.3, 0.1),
        ],
    );

    // Spoiler struts and blade.
    part(
        &mut stack,
        TRIM_COLOR,
        &[translate(-0.2, 0.35, 0.85), scale(0.05, 0.3, 0.05)],
    );
    part(
        &mut stack,
        TRIM_COLOR,
        &[translate(0.2, 0.35, 0.85), scale(0.05, 0.3, 0.05)],
    );
    part(
        &mut stack,
        TRIM_COLOR,
        &[
            translate(0.0, 0.5, 0.85),
            rotate_x(-5.0),
            scale(0.7, 0.01, 0.2),
        ],
    );

    // Wheels: fronts steer, all four roll.
    part(
        &mut stack,
        TRIM_COLOR,
        &[
            translate(-0.5, 0.0, -0.7),
            rotate_x(state.wheel_roll_deg),
            rotate_y(state.steering_deg),
            scale(0.1, 0.3, 0.3),
        ],
    );
    part(
        &mut stack,
        TRIM_COLOR,
        &[
            translate(0.5, 0.0, -0.7),
            rotate_x(state.wheel_roll_deg),
            rotate_y(state.steering_deg),
            scale(0.1, 0.3, 0.3),
        ],
    );
    part(
        &mut stack,
        TRIM_COLOR,
        &[
            translate(-0.5, 0.0, 0.7),
            rotate_x(state.wheel_roll_deg),
            scale(0.1, 0.3, 0.3),
        ],
    );
    part(
        &mut stack,
        TRIM_COLOR,
        &[
            translate(0.5, 0.0, 0.7),
            rotate_x(state.wheel_roll_deg),
            scale(0.1, 0.3, 0.3),
        ],
    );

    debug_assert!(stack.is_empty(), "unbalanced scene composition");
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleState;

    fn mat_close(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn emits_ground_plus_seventeen_car_parts() {
        let parts = scene_parts(&VehicleState::default());
        assert_eq!(parts.len(), PART_COUNT);
    }

    #[test]
    fn only_the_ground_is_unlit() {
        let parts = scene_parts(&VehicleState::default());
        assert!(!parts[0].lit);
        assert!(parts[1..].iter().all(|p| p.lit));
    }

    #[test]
    fn ground_transform_is_flat_and_centered() {
        let parts = scene_parts(&VehicleState::default());
        let expected =
            translate(0.0, -0.2, 0.0) * scale(50.0, 0.0, 50.0);
        assert!(mat_close(parts[0].model, expected));
        // Singular model falls back to an identity normal transform.
        assert_eq!(parts[0].normal, Mat4::IDENTITY);
    }

    #[test]
    fn body_bottom_matches_hand_composed_transform() {
        let state = VehicleState {
            position: glam::Vec3::new(3.0, 1.0, -2.0),
            heading_deg: 90.0,
            ..VehicleState::default()
        };
        let parts = scene_parts(&state);
        let expected = translate(3.0, 1.0, -1.2)
            * rotate_y(90.0)
            * rotate_x(0.0)
            * scale(1.0, 0.1, 2.0);
        assert!(mat_close(parts[1].model, expected));
    }

    #[test]
    fn door_angle_moves_only_the_doors() {
        let closed = scene_parts(&VehicleState::default());
        let open = scene_parts(&VehicleState {
            door_deg: 35.0,
            ..VehicleState::default()
        });

        for (i, (a, b)) in closed.iter().zip(open.iter()).enumerate() {
            // Parts 5 and 6 are the left and right doors.
            if i == 5 || i == 6 {
                assert!(!mat_close(a.model, b.model), "door {i} did not move");
            } else {
                assert!(mat_close(a.model, b.model), "part {i} moved unexpectedly");
            }
        }
    }

    #[test]
    fn steering_rotates_only_front_wheels() {
        let straight = scene_parts(&VehicleState::default());
        let steered = scene_parts(&VehicleState {
            steering_deg: 35.0,
            ..VehicleState::default()
        });

        // Parts 14..18 are the wheels: front pair first, then the rear pair.
        assert!(!mat_close(straight[14].model, steered[14].model));
        assert!(!mat_close(straight[15].model, steered[15].model));
        assert!(mat_close(straight[16].model, steered[16].model));
        assert!(mat_close(straight[17].model, steered[17].model));
    }

    #[test]
    fn wheel_roll_spins_all_wheels() {
        let still = scene_parts(&VehicleState::default());
        let rolling = scene_parts(&VehicleState {
            wheel_roll_deg: 90.0,
            ..VehicleState::default()
        });
        for i in 14..18 {
            assert!(!mat_close(still[i].model, rolling[i].model));
        }
    }

    #[test]
    fn normal_transform_is_inverse_transpose() {
        let parts = scene_parts(&VehicleState::default());
        // The body bottom has a non-uniform scale, so its normal transform
        // must differ from the model itself.
        let body = &parts[1];
        assert!(mat_close(body.normal, body.model.inverse().transpose()));
        assert!(!mat_close(body.normal, body.model));
    }

    #[test]
    fn colors_follow_the_material_groups() {
        let parts = scene_parts(&VehicleState::default());
        assert_eq!(parts[0].color, GROUND_COLOR);
        for p in &parts[1..7] {
            assert_eq!(p.color, BODY_COLOR);
        }
        for p in &parts[7..11] {
            assert_eq!(p.color, PILLAR_COLOR);
        }
        for p in &parts[11..18] {
            assert_eq!(p.color, TRIM_COLOR);
        }
    }
}
