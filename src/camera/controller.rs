use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::core::PerspectiveCamera;
use crate::input::InputProcessor;
use crate::options::{CameraOptions, KeybindingOptions};

/// First-person fly controls: drag to look, movement keys to translate.
///
/// Speeds are per frame, not per second; the host is expected to call
/// [`apply`](Self::apply) once per rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyController {
    movement_speed: f32,
    rotation_speed: f32,
    bindings: KeybindingOptions,
}

impl FlyController {
    /// Build from camera options and movement bindings.
    #[must_use]
    pub fn new(options: &CameraOptions, bindings: KeybindingOptions) -> Self {
        Self {
            movement_speed: options.movement_speed,
            rotation_speed: options.rotation_speed,
            bindings,
        }
    }

    /// World units per frame per held key.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Radians per pixel of drag.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Apply one frame of accumulated input to `camera`.
    ///
    /// While dragging, the accumulated motion turns the camera (x → yaw,
    /// y → pitch) and is consumed. Pitch is then clamped to ±π/2 whether or
    /// not a drag happened. Finally held movement keys are summed in camera
    /// space, rotated into world space and added to the position. The sum is
    /// not normalized, so diagonal movement is faster.
    pub fn apply(
        &self,
        camera: &mut PerspectiveCamera,
        input: &mut InputProcessor,
    ) {
        if input.mouse_down() {
            let delta = input.take_mouse_delta();
            camera.rotation.y -= delta.x * self.rotation_speed;
            camera.rotation.x -= delta.y * self.rotation_speed;
        }

        camera.rotation.x = camera.rotation.x.clamp(-FRAC_PI_2, FRAC_PI_2);

        let direction = self.local_translation(input);
        camera.position += camera.rotation.rotate(direction);
    }

    /// Camera-space translation for the currently held keys.
    #[must_use]
    pub fn local_translation(&self, input: &InputProcessor) -> Vec3 {
        input
            .keys()
            .held()
            .filter_map(|code| self.bindings.lookup(code))
            .map(|action| action.local_direction() * self.movement_speed)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::camera::core::Euler;
    use crate::input::{InputEvent, MouseButton};

    fn rig() -> (FlyController, PerspectiveCamera, InputProcessor) {
        let opts = CameraOptions::default();
        let controller =
            FlyController::new(&opts, KeybindingOptions::default());
        let mut camera =
            PerspectiveCamera::new(opts.fovy, 1.0, opts.znear, opts.zfar);
        camera.position = Vec3::from_array(opts.start_position);
        (controller, camera, InputProcessor::new())
    }

    fn key(input: &mut InputProcessor, code: &str, down: bool) {
        let code = code.to_owned();
        input.handle_event(if down {
            InputEvent::KeyDown { code }
        } else {
            InputEvent::KeyUp { code }
        });
    }

    fn drag(input: &mut InputProcessor, dx: f32, dy: f32) {
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        input.handle_event(InputEvent::MouseMove { dx, dy });
    }

    #[test]
    fn forward_moves_along_negative_z() {
        let (ctl, mut cam, mut input) = rig();
        key(&mut input, "KeyW", true);
        ctl.apply(&mut cam, &mut input);
        assert!((cam.position - Vec3::new(0.0, 0.0, 4.9)).length() < 1e-6);
    }

    #[test]
    fn opposite_keys_cancel() {
        let (ctl, mut cam, mut input) = rig();
        key(&mut input, "KeyA", true);
        key(&mut input, "KeyD", true);
        ctl.apply(&mut cam, &mut input);
        assert!((cam.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
    }

    #[test]
    fn diagonal_is_faster_than_single_axis() {
        let (ctl, mut single, mut input) = rig();
        key(&mut input, "KeyW", true);
        ctl.apply(&mut single, &mut input);

        let (ctl, mut diagonal, mut input) = rig();
        key(&mut input, "KeyW", true);
        key(&mut input, "KeyD", true);
        ctl.apply(&mut diagonal, &mut input);

        let start = Vec3::new(0.0, 0.0, 5.0);
        let single_len = (single.position - start).length();
        let diagonal_len = (diagonal.position - start).length();
        assert!(diagonal_len > single_len);
        assert!((diagonal_len - 0.1 * 2f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn movement_follows_yaw() {
        let (ctl, mut cam, mut input) = rig();
        cam.rotation = Euler::new(0.0, FRAC_PI_2, 0.0);
        key(&mut input, "KeyW", true);
        ctl.apply(&mut cam, &mut input);
        assert!((cam.position - Vec3::new(-0.1, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn drag_rotates_and_consumes_delta() {
        let (ctl, mut cam, mut input) = rig();
        drag(&mut input, 10.0, 5.0);
        ctl.apply(&mut cam, &mut input);
        assert!((cam.rotation.y - (-10.0 * 0.002)).abs() < 1e-6);
        assert!((cam.rotation.x - (-5.0 * 0.002)).abs() < 1e-6);
        assert_eq!(input.mouse_delta(), glam::Vec2::ZERO);

        // Nothing new accumulated: a second frame is a no-op.
        let before = cam.rotation;
        ctl.apply(&mut cam, &mut input);
        assert_eq!(cam.rotation, before);
    }

    #[test]
    fn pitch_clamped_without_drag() {
        let (ctl, mut cam, mut input) = rig();
        cam.rotation.x = 3.0;
        ctl.apply(&mut cam, &mut input);
        assert_eq!(cam.rotation.x, FRAC_PI_2);
        cam.rotation.x = -3.0;
        ctl.apply(&mut cam, &mut input);
        assert_eq!(cam.rotation.x, -FRAC_PI_2);
    }

    #[test]
    fn unbound_keys_do_not_move() {
        let (ctl, mut cam, mut input) = rig();
        key(&mut input, "KeyQ", true);
        ctl.apply(&mut cam, &mut input);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
    }

    fn movement_key() -> impl Strategy<Value = (&'static str, bool)> {
        (
            prop::sample::select(vec!["KeyW", "KeyA", "KeyS", "KeyD"]),
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn keys_alone_never_rotate(
            frames in prop::collection::vec(
                prop::collection::vec(movement_key(), 0..4),
                1..20,
            )
        ) {
            let (ctl, mut cam, mut input) = rig();
            for frame in frames {
                for (code, down) in frame {
                    key(&mut input, code, down);
                }
                ctl.apply(&mut cam, &mut input);
                prop_assert_eq!(cam.rotation, Euler::default());
            }
        }

        #[test]
        fn pitch_stays_clamped(
            drags in prop::collection::vec(
                (-2000.0f32..2000.0, -2000.0f32..2000.0),
                1..30,
            )
        ) {
            let (ctl, mut cam, mut input) = rig();
            for (dx, dy) in drags {
                drag(&mut input, dx, dy);
                ctl.apply(&mut cam, &mut input);
                prop_assert!(cam.rotation.x >= -FRAC_PI_2);
                prop_assert!(cam.rotation.x <= FRAC_PI_2);
            }
        }

        #[test]
        fn one_drag_frame_changes_angles_by_scaled_delta(
            dx in -100.0f32..100.0,
            dy in -100.0f32..100.0,
        ) {
            let (ctl, mut cam, mut input) = rig();
            drag(&mut input, dx, dy);
            ctl.apply(&mut cam, &mut input);
            let r = ctl.rotation_speed();
            prop_assert!((cam.rotation.y - (-dx * r)).abs() < 1e-5);
            // |dy * r| <= 0.2 stays inside the clamp range.
            prop_assert!((cam.rotation.x - (-dy * r)).abs() < 1e-5);
            prop_assert_eq!(input.mouse_delta(), glam::Vec2::ZERO);
        }
    }
}
