use glam::Vec3;

/// Heading change per steering tick, in degrees.
pub const ANGLE_STEP: f32 = 3.0;

/// Wheel spin-up per acceleration tick, in degrees.
pub const WHEEL_STEP: f32 = 9.0;

/// Speed change per acceleration tick.
pub const ACCEL_STEP: f32 = 0.05;

/// Multiplicative speed growth while an acceleration key is held.
pub const SPEED_GROWTH: f32 = 1.03;

/// Per-tick damping divisor for speed and wheel speed.
pub const DAMPING: f32 = 1.05;

/// Steering lock angle, in degrees.
pub const STEER_LOCK_DEG: f32 = 35.0;

/// Door angle when open, in degrees.
pub const DOOR_OPEN_DEG: f32 = 35.0;

/// The pi literal used for degree-to-radian conversion in position
/// integration. Legacy constant; do not replace with `std::f32::consts::PI`.
pub const PI_APPROX: f32 = 3.141_592_6;

/// Half-extent of the drivable square before the heading bounces.
pub const WORLD_BOUND: f32 = 25.0;

/// Rounds to two decimal places, half away from zero.
///
/// Position integration quantizes its cos/sin factors through this. The
/// two-decimal precision loss is deliberate legacy behavior; keeping it as a
/// named step makes it visible and testable instead of an accident buried in
/// the integrator.
#[inline]
pub fn quantize2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Door-toggle behavior for the "toggle door" action.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DoorToggle {
    /// Toggle once per key press.
    #[default]
    EdgeTriggered,
    /// Toggle on every tick the key is held, producing a rapid open/close
    /// flicker. Kept for compatibility tests.
    LegacyPerTick,
}

/// Per-tick integrator configuration.
#[derive(Debug, Copy, Clone)]
pub struct TickConfig {
    pub door_toggle: DoorToggle,
    /// Half-extent of the world square; crossing it bounces the heading.
    pub bound: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            door_toggle: DoorToggle::default(),
            bound: WORLD_BOUND,
        }
    }
}

/// Driver input snapshot for one tick.
///
/// Held flags mirror the keyboard state when the tick runs. `door_pressed`
/// is an edge flag (true only for a tick in which the key transitioned to
/// down); `door_held` is the raw held state consumed by the legacy mode.
#[derive(Debug, Copy, Clone, Default)]
pub struct Controls {
    pub forward: bool,
    pub reverse: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub door_pressed: bool,
    pub door_held: bool,
}

/// Complete vehicle state advanced once per simulation tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VehicleState {
    /// World position; `y` is the vertical offset driven by the up/down keys.
    pub position: Vec3,
    /// Yaw around +Y in degrees, wrapped by a sign-preserving `% 360`.
    pub heading_deg: f32,
    /// Secondary body tilt around +X in degrees. Present in the model but
    /// never driven by input; stays 0.
    pub tilt_deg: f32,
    /// Signed longitudinal speed. Forward input drives it negative.
    pub speed: f32,
    /// Accumulated wheel roll in degrees, unbounded.
    pub wheel_roll_deg: f32,
    /// Wheel angular speed, damped independently of `speed`.
    pub wheel_speed: f32,
    /// Front-wheel steering angle in degrees, in [-35, 35].
    pub steering_deg: f32,
    /// Door hinge angle in degrees, one of {0, 35}.
    pub door_deg: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading_deg: 0.0,
            tilt_deg: 0.0,
            speed: 0.0,
            wheel_roll_deg: 0.0,
            wheel_speed: 0.0,
            steering_deg: 0.0,
            door_deg: 0.0,
        }
    }
}

/// Advances the vehicle by one fixed tick.
///
/// Update order matters; later steps read values written by earlier ones
/// within the same tick:
///
/// 1. acceleration (forward, then reverse; both may apply)
/// 2. steering + yaw (rate depends on the sign of the current speed)
/// 3. door toggle
/// 4. vertical offset
/// 5. position integration with quantized trig factors
/// 6. speed damping
/// 7. wheel roll accumulation + wheel speed damping
/// 8. boundary heading bounce
pub fn step(state: &mut VehicleState, input: &Controls, config: &TickConfig) {
    if input.forward {
        state.speed = state.speed * SPEED_GROWTH - ACCEL_STEP;
        state.wheel_speed -= WHEEL_STEP;
    }
    if input.reverse {
        state.speed = state.speed * SPEED_GROWTH + ACCEL_STEP;
        state.wheel_speed += WHEEL_STEP;
    }

    // Yaw rate is asymmetric: 2x the base step when rolling one way, 1x in
    // the opposite direction when rolling the other way, nothing when the
    // car is effectively stationary.
    if input.left {
        if state.speed > 0.05 {
            state.heading_deg = (state.heading_deg - ANGLE_STEP * 2.0) % 360.0;
        } else if state.speed < -0.05 {
            state.heading_deg = (state.heading_deg + ANGLE_STEP) % 360.0;
        }
        state.steering_deg = STEER_LOCK_DEG;
    }
    if input.right {
        if state.speed > 0.05 {
            state.heading_deg = (state.heading_deg + ANGLE_STEP * 2.0) % 360.0;
        } else if state.speed < -0.05 {
            state.heading_deg = (state.heading_deg - ANGLE_STEP) % 360.0;
        }
        state.steering_deg = -STEER_LOCK_DEG;
    }
    if !(input.left || input.right) {
        state.steering_deg = 0.0;
    }

    let toggle = match config.door_toggle {
        DoorToggle::EdgeTriggered => input.door_pressed,
        DoorToggle::LegacyPerTick => input.door_held,
    };
    if toggle {
        state.door_deg = if state.door_deg == 0.0 { DOOR_OPEN_DEG } else { 0.0 };
    }

    if input.up {
        state.position.y += 1.0;
    }
    if input.down {
        state.position.y -= 1.0;
    }

    let heading_rad = state.heading_deg * (PI_APPROX / 180.0);
    state.position.z += state.speed * quantize2(heading_rad.cos());
    state.position.x += state.speed * quantize2(heading_rad.sin());
    state.speed /= DAMPING;

    state.wheel_roll_deg += state.wheel_speed;
    state.wheel_speed /= DAMPING;

    // Heading bounce at the world edge. This reflects the heading only, not
    // the velocity, so the exit from the boundary is heuristic.
    if state.position.z.abs() > config.bound {
        state.heading_deg = 180.0 - state.heading_deg;
    }
    if state.position.x.abs() > config.bound {
        state.heading_deg = -state.heading_deg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: &mut VehicleState, input: &Controls) {
        step(state, input, &TickConfig::default());
    }

    // ── quantize2 ─────────────────────────────────────────────────────────

    #[test]
    fn quantize2_rounds_to_two_decimals() {
        assert_eq!(quantize2(0.766_044), 0.77);
        assert_eq!(quantize2(-0.766_044), -0.77);
        assert_eq!(quantize2(0.644), 0.64);
        assert_eq!(quantize2(1.0), 1.0);
        assert_eq!(quantize2(0.0), 0.0);
    }

    // ── no-input decay ────────────────────────────────────────────────────

    #[test]
    fn idle_state_is_stable() {
        let mut state = VehicleState::default();
        for _ in 0..100 {
            tick(&mut state, &Controls::default());
        }
        assert_eq!(state, VehicleState::default());
    }

    #[test]
    fn speed_decays_monotonically_but_never_reaches_zero() {
        let mut state = VehicleState {
            speed: 1.0,
            wheel_speed: 9.0,
            ..VehicleState::default()
        };

        let mut prev_speed = state.speed;
        let mut prev_wheel = state.wheel_speed;
        for _ in 0..200 {
            tick(&mut state, &Controls::default());
            assert!(state.speed < prev_speed);
            assert!(state.speed > 0.0);
            assert!(state.wheel_speed < prev_wheel);
            assert!(state.wheel_speed > 0.0);
            prev_speed = state.speed;
            prev_wheel = state.wheel_speed;
        }
    }

    #[test]
    fn steering_resets_when_no_turn_key_held() {
        let mut state = VehicleState {
            steering_deg: STEER_LOCK_DEG,
            ..VehicleState::default()
        };
        tick(&mut state, &Controls::default());
        assert_eq!(state.steering_deg, 0.0);
    }

    // ── steering asymmetry ────────────────────────────────────────────────

    #[test]
    fn left_turn_at_positive_speed_uses_double_rate() {
        let mut state = VehicleState {
            speed: 1.0,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                left: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.heading_deg, -(ANGLE_STEP * 2.0));
        assert_eq!(state.steering_deg, STEER_LOCK_DEG);
    }

    #[test]
    fn left_turn_at_negative_speed_uses_single_opposite_rate() {
        let mut state = VehicleState {
            speed: -1.0,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                left: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.heading_deg, ANGLE_STEP);
    }

    #[test]
    fn right_turn_mirrors_left() {
        let mut state = VehicleState {
            speed: 1.0,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                right: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.heading_deg, ANGLE_STEP * 2.0);
        assert_eq!(state.steering_deg, -STEER_LOCK_DEG);
    }

    #[test]
    fn no_yaw_when_effectively_stationary() {
        let mut state = VehicleState {
            speed: 0.04,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                left: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.heading_deg, 0.0);
        // Steering lock still applies even without yaw.
        assert_eq!(state.steering_deg, STEER_LOCK_DEG);
    }

    #[test]
    fn heading_wrap_preserves_sign() {
        let mut state = VehicleState {
            speed: 1.0,
            heading_deg: -359.0,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                left: true,
                ..Controls::default()
            },
        );
        // -359 - 6 = -365, wrapped by the sign-preserving remainder.
        assert_eq!(state.heading_deg, -5.0);
    }

    // ── door toggle ───────────────────────────────────────────────────────

    #[test]
    fn legacy_door_flips_every_tick_held() {
        let mut state = VehicleState::default();
        let config = TickConfig {
            door_toggle: DoorToggle::LegacyPerTick,
            ..TickConfig::default()
        };
        let input = Controls {
            door_held: true,
            ..Controls::default()
        };

        step(&mut state, &input, &config);
        assert_eq!(state.door_deg, DOOR_OPEN_DEG);
        step(&mut state, &input, &config);
        assert_eq!(state.door_deg, 0.0);
    }

    #[test]
    fn edge_door_latches_until_next_press() {
        let mut state = VehicleState::default();
        let pressed = Controls {
            door_pressed: true,
            door_held: true,
            ..Controls::default()
        };
        let held = Controls {
            door_held: true,
            ..Controls::default()
        };

        tick(&mut state, &pressed);
        assert_eq!(state.door_deg, DOOR_OPEN_DEG);
        tick(&mut state, &held);
        tick(&mut state, &held);
        assert_eq!(state.door_deg, DOOR_OPEN_DEG);
        tick(&mut state, &pressed);
        assert_eq!(state.door_deg, 0.0);
    }

    // ── vertical offset ───────────────────────────────────────────────────

    #[test]
    fn vertical_keys_move_one_unit_per_tick() {
        let mut state = VehicleState::default();
        tick(
            &mut state,
            &Controls {
                up: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.position.y, 1.0);
        tick(
            &mut state,
            &Controls {
                down: true,
                ..Controls::default()
            },
        );
        tick(
            &mut state,
            &Controls {
                down: true,
                ..Controls::default()
            },
        );
        assert_eq!(state.position.y, -1.0);
    }

    // ── boundary bounce ───────────────────────────────────────────────────

    #[test]
    fn z_boundary_mirrors_heading() {
        let mut state = VehicleState {
            position: Vec3::new(0.0, 0.0, 26.0),
            heading_deg: 40.0,
            ..VehicleState::default()
        };
        tick(&mut state, &Controls::default());
        assert_eq!(state.heading_deg, 140.0);
    }

    #[test]
    fn x_boundary_negates_heading() {
        let mut state = VehicleState {
            position: Vec3::new(26.0, 0.0, 0.0),
            heading_deg: 40.0,
            ..VehicleState::default()
        };
        tick(&mut state, &Controls::default());
        assert_eq!(state.heading_deg, -40.0);
    }

    // ── driving end-to-end ────────────────────────────────────────────────

    #[test]
    fn forward_drive_builds_speed_then_decays() {
        let mut state = VehicleState::default();
        // Unbounded world: a 50-tick drive travels well past the default
        // edge, and the heading bounce there would mask the recurrence
        // under test.
        let config = TickConfig {
            bound: f32::INFINITY,
            ..TickConfig::default()
        };
        let forward = Controls {
            forward: true,
            ..Controls::default()
        };

        for _ in 0..50 {
            step(&mut state, &forward, &config);
            // Forward input drives speed negative; the recurrence
            // s' = (1.03 s - 0.05) / 1.05 is bounded.
            assert!(state.speed < 0.0);
            assert!(state.speed > -3.0);
        }
        let speed_at_release = state.speed;

        // Position moves toward -z while speed is negative and heading is 0.
        let mut prev_z = f32::INFINITY;
        for _ in 0..50 {
            assert!(state.position.z < prev_z);
            prev_z = state.position.z;
            step(&mut state, &Controls::default(), &config);
            assert!(state.speed > speed_at_release);
            assert!(state.speed < 0.0);
        }
    }

    #[test]
    fn reverse_drive_moves_positive_z() {
        let mut state = VehicleState::default();
        let reverse = Controls {
            reverse: true,
            ..Controls::default()
        };
        for _ in 0..10 {
            tick(&mut state, &reverse);
        }
        assert!(state.speed > 0.0);
        assert!(state.position.z > 0.0);
        assert_eq!(state.position.x, 0.0);
    }

    #[test]
    fn wheel_roll_accumulates_while_driving() {
        let mut state = VehicleState::default();
        let forward = Controls {
            forward: true,
            ..Controls::default()
        };
        tick(&mut state, &forward);
        let after_one = state.wheel_roll_deg;
        assert!(after_one < 0.0);
        tick(&mut state, &forward);
        assert!(state.wheel_roll_deg < after_one);
    }

    #[test]
    fn both_accel_keys_apply_sequentially() {
        let mut state = VehicleState {
            speed: 1.0,
            ..VehicleState::default()
        };
        tick(
            &mut state,
            &Controls {
                forward: true,
                reverse: true,
                ..Controls::default()
            },
        );
        // (1.0 * 1.03 - 0.05) * 1.03 + 0.05, integrated then damped.
        let expected = ((1.0f32 * SPEED_GROWTH - ACCEL_STEP) * SPEED_GROWTH + ACCEL_STEP) / DAMPING;
        assert!((state.speed - expected).abs() < 1e-6);
    }

    #[test]
    fn position_integration_uses_quantized_trig() {
        let mut state = VehicleState {
            heading_deg: 40.0,
            speed: 1.0,
            ..VehicleState::default()
        };
        tick(&mut state, &Controls::default());
        // cos(40°) = 0.766..., sin(40°) = 0.642...; both quantized to two
        // decimals before scaling by speed.
        assert!((state.position.z - 0.77).abs() < 1e-6);
        assert!((state.position.x - 0.64).abs() < 1e-6);
    }
}
