//! Editor scene root: lights and a flat list of editable objects.
//!
//! The editor never renders anything itself. The scene is the data the host
//! renderer reads: which objects exist, where they are, and which lights
//! contribute to them.

mod selection;

use glam::Vec3;
pub use selection::Selector;

use crate::options::LightingOptions;
use crate::util::color::Color;

/// Stable identifier of a scene object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Convert a JS number. `None` unless it is a whole number in `u32`
    /// range.
    #[must_use]
    pub fn from_f64(n: f64) -> Option<Self> {
        let whole = n.is_finite() && n.fract() == 0.0;
        (whole && (0.0..=f64::from(u32::MAX)).contains(&n))
            .then(|| Self(n as u32))
    }
}

/// Stable identifier of a scene light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightId(pub u32);

/// Sky/ground ambient light.
#[derive(Clone, Debug, PartialEq)]
pub struct HemisphereLight {
    /// Color contributed from above.
    pub sky_color: Color,
    /// Color contributed from below.
    pub ground_color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Position; its direction from the origin orients the hemisphere.
    pub position: Vec3,
}

impl From<&LightingOptions> for HemisphereLight {
    fn from(opts: &LightingOptions) -> Self {
        Self {
            sky_color: opts.sky_color,
            ground_color: opts.ground_color,
            intensity: opts.intensity,
            position: Vec3::from_array(opts.position),
        }
    }
}

/// An editable object placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    id: ObjectId,
    /// Display name shown in editor panels.
    pub name: String,
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl SceneObject {
    /// Object id assigned by the scene.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }
}

/// The scene root. Owns lights and objects in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    lights: Vec<(LightId, HemisphereLight)>,
    objects: Vec<SceneObject>,
    next_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Generation counter, bumped by every mutation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Add a light and return its id.
    pub fn add_light(&mut self, light: HemisphereLight) -> LightId {
        let id = LightId(self.allocate_id());
        self.lights.push((id, light));
        self.invalidate();
        id
    }

    /// Remove a light. Returns it if it was present.
    pub fn remove_light(&mut self, id: LightId) -> Option<HemisphereLight> {
        let idx = self.lights.iter().position(|(lid, _)| *lid == id)?;
        let (_, light) = self.lights.remove(idx);
        self.invalidate();
        Some(light)
    }

    /// Look up a light.
    #[must_use]
    pub fn light(&self, id: LightId) -> Option<&HemisphereLight> {
        self.lights
            .iter()
            .find_map(|(lid, light)| (*lid == id).then_some(light))
    }

    /// All lights in insertion order.
    pub fn lights(&self) -> impl Iterator<Item = &HemisphereLight> {
        self.lights.iter().map(|(_, light)| light)
    }

    /// Add an object at the origin with unit scale.
    pub fn add_object(&mut self, name: impl Into<String>) -> ObjectId {
        let id = ObjectId(self.allocate_id());
        self.objects.push(SceneObject {
            id,
            name: name.into(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        });
        self.invalidate();
        id
    }

    /// Remove an object. Returns it if it was present.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        let object = self.objects.remove(idx);
        self.invalidate();
        Some(object)
    }

    /// Look up an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Mutable access to an object. Marks the scene changed only when the
    /// object exists.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        self.invalidate();
        self.objects.get_mut(idx)
    }

    /// Whether an object with this id exists.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.object(id).is_some()
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}
