//! The editor camera rig.
//!
//! [`Editor`] owns the scene root and a perspective camera. Input reaches it
//! through an [`InputSource`] subscription established by
//! [`init`](Editor::init); the host calls [`update`](Editor::update) once per
//! frame, after that frame's input events and before rendering.
//!
//! # Example
//!
//! ```
//! use scenekit::input::InputEvent;
//! use scenekit::options::Options;
//! use scenekit::Editor;
//!
//! let mut editor = Editor::new(Options::default(), 16.0 / 9.0);
//! let input = editor.input_sink();
//! input.push(InputEvent::KeyDown { code: "KeyW".into() });
//! editor.update(1.0 / 60.0, None);
//! assert!(editor.camera().position.z < 5.0);
//! ```

pub mod controls;
pub mod host;

use glam::Vec3;

pub use self::controls::{EditorControls, OrbitControls, TransformGizmo};
pub use self::host::{OutlinePass, RenderHost};
use crate::camera::{FlyController, PerspectiveCamera};
use crate::error::EditorError;
use crate::input::{InputProcessor, InputSink, InputSource, Subscription};
use crate::options::Options;
use crate::scene::{HemisphereLight, LightId, Scene};

/// Camera rig for the scene editor.
pub struct Editor {
    options: Options,
    scene: Scene,
    camera: PerspectiveCamera,
    controller: FlyController,
    input: InputSink,
    subscription: Option<Subscription>,
    ambient_light: Option<LightId>,
    controls: Option<EditorControls>,
    /// Set when the outline pass has not seen the latest selection.
    outline_stale: bool,
    elapsed: f32,
}

impl Editor {
    /// Build the scene and camera. Nothing is subscribed until
    /// [`init`](Self::init).
    #[must_use]
    pub fn new(options: Options, aspect: f32) -> Self {
        let cam = &options.camera;
        let mut camera =
            PerspectiveCamera::new(cam.fovy, aspect, cam.znear, cam.zfar);
        camera.position = Vec3::from_array(cam.start_position);
        let controller =
            FlyController::new(&options.camera, options.keybindings.clone());

        Self {
            options,
            scene: Scene::new(),
            camera,
            controller,
            input: InputSink::new(InputProcessor::new()),
            subscription: None,
            ambient_light: None,
            controls: None,
            outline_stale: false,
            elapsed: 0.0,
        }
    }

    /// Subscribe to `source` and light the scene.
    ///
    /// Listeners are registered exactly once: calling this again while
    /// subscribed does nothing. The hemisphere light is added on the first
    /// call only, so init → teardown → init keeps a single light.
    pub fn init(&mut self, source: &dyn InputSource) -> Result<(), EditorError> {
        if self.subscription.is_some() {
            log::warn!("editor already initialized, ignoring init");
            return Ok(());
        }
        self.subscription = Some(source.subscribe(self.input.clone())?);
        log::debug!("editor input subscribed");

        if self.ambient_light.is_none() {
            let light = HemisphereLight::from(&self.options.lighting);
            self.ambient_light = Some(self.scene.add_light(light));
        }
        Ok(())
    }

    /// [`init`](Self::init), then wire the gizmo, orbit controls, selector
    /// and the host's outline pass.
    pub fn init_with_host(
        &mut self,
        source: &dyn InputSource,
        host: &mut dyn RenderHost,
    ) -> Result<(), EditorError> {
        self.init(source)?;

        let (width, height) = host.surface_size();
        self.resize(width, height);

        if self.controls.is_none() {
            self.controls = Some(EditorControls::new(&self.options.controls));
            let _ = self.input.with(|input| input.set_queue_controls(true));
        }

        let pass = host.outline_pass_mut();
        pass.apply_style(&self.options.outline);
        self.outline_stale = true;
        self.sync_outline(host);
        Ok(())
    }

    /// Unregister all listeners and drop the host-wired controls.
    ///
    /// Held keys, the drag flag and unconsumed mouse motion are released so
    /// a later init does not resume a stale drag.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::debug!("editor input unsubscribed");
        }
        self.controls = None;
        self.outline_stale = false;
        let _ = self.input.with(|input| {
            input.release_all();
            input.set_queue_controls(false);
        });
    }

    /// Advance one frame: apply accumulated input to the camera and route
    /// queued pointer/selection events to the controls.
    ///
    /// `host`, when given, receives the current selection in its outline
    /// pass if the selection changed since it was last written.
    pub fn update(
        &mut self,
        delta_seconds: f32,
        host: Option<&mut dyn RenderHost>,
    ) {
        self.elapsed += delta_seconds;

        let controller = &self.controller;
        let camera = &mut self.camera;
        let Some(events) = self.input.with(|input| {
            controller.apply(camera, input);
            input.drain_control_events()
        }) else {
            log::warn!("input processor busy, skipping frame update");
            return;
        };

        if let Some(controls) = self.controls.as_mut() {
            for event in events {
                self.outline_stale |= controls.handle(event, &self.scene);
            }
            self.outline_stale |= controls.prune(&self.scene);
        }

        if let Some(host) = host {
            self.sync_outline(host);
        }
    }

    fn sync_outline(&mut self, host: &mut dyn RenderHost) {
        if !self.outline_stale {
            return;
        }
        if let Some(controls) = &self.controls {
            host.outline_pass_mut().selected_objects =
                controls.selector.selection().to_vec();
            self.outline_stale = false;
        }
    }

    /// Update the camera aspect ratio for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Replace the options, re-applying camera projection, fly speeds,
    /// keybindings and control settings. The hemisphere light keeps its
    /// original parameters.
    pub fn set_options(&mut self, options: Options) {
        self.camera.fovy = options.camera.fovy;
        self.camera.znear = options.camera.znear;
        self.camera.zfar = options.camera.zfar;
        self.controller =
            FlyController::new(&options.camera, options.keybindings.clone());
        if let Some(controls) = self.controls.as_mut() {
            controls.gizmo.set_mode(options.controls.gizmo_mode);
            let enabled = controls.orbit.enabled;
            controls.orbit = OrbitControls::new(&options.controls);
            controls.orbit.enabled = enabled;
        }
        self.options = options;
    }

    /// Whether input listeners are currently registered.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handle for feeding input directly, bypassing any [`InputSource`].
    #[must_use]
    pub fn input_sink(&self) -> InputSink {
        self.input.clone()
    }

    /// The scene root.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene root.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The hemisphere light added by init, if any.
    #[must_use]
    pub fn ambient_light(&self) -> Option<LightId> {
        self.ambient_light
    }

    /// The editor camera.
    #[must_use]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Mutable editor camera.
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    /// The fly controller.
    #[must_use]
    pub fn controller(&self) -> &FlyController {
        &self.controller
    }

    /// Host-wired controls, present after
    /// [`init_with_host`](Self::init_with_host).
    #[must_use]
    pub fn controls(&self) -> Option<&EditorControls> {
        self.controls.as_ref()
    }

    /// Mutable host-wired controls.
    pub fn controls_mut(&mut self) -> Option<&mut EditorControls> {
        self.controls.as_mut()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Sum of all `delta_seconds` passed to [`update`](Self::update).
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
