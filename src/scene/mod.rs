pub mod camera;
pub mod demo;
pub mod light;

pub use camera::CameraInfo;
pub use light::LightInfo;

use crate::error::SceneError;
use crate::math::Matrix4;
use crate::tessellation::TriangleMesh;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a mesh in the scene description.
    pub struct MeshId;
}

/// One of the three parallel attribute streams of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeStream {
    /// Vertex positions.
    Position,
    /// Flat per-vertex normals.
    Normal,
    /// Texture coordinates.
    TexCoord,
}

/// Assignment of one mesh attribute stream to a vertex-attribute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBinding {
    /// Destination vertex-attribute slot.
    pub slot: u32,
    /// Mesh the stream is read from.
    pub mesh: MeshId,
    /// Which of the mesh's streams feeds the slot.
    pub stream: AttributeStream,
}

impl AttributeBinding {
    /// Creates a new attribute binding.
    #[must_use]
    pub fn new(slot: u32, mesh: MeshId, stream: AttributeStream) -> Self {
        Self { slot, mesh, stream }
    }
}

/// The geometry a scene object is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshBinding {
    /// A single mesh drawn as-is.
    Single(MeshId),
    /// Two meshes of identical topology blended in the vertex stage.
    MorphPair {
        /// Mesh shown at blend factor 0.
        base: MeshId,
        /// Mesh shown at blend factor 1.
        target: MeshId,
    },
}

impl MeshBinding {
    /// Enumerates the vertex-attribute slot layout for this binding.
    ///
    /// A single mesh binds position, normal, and texcoord to slots 0, 1,
    /// and 2. A morph pair binds base position/normal to slots 0 and 1,
    /// target position/normal to slots 2 and 3, and texcoords to slot 4.
    /// The pair's texcoord streams are identical, so slot 4 reads from the
    /// base mesh.
    #[must_use]
    pub fn attribute_bindings(&self) -> Vec<AttributeBinding> {
        match *self {
            Self::Single(mesh) => vec![
                AttributeBinding::new(0, mesh, AttributeStream::Position),
                AttributeBinding::new(1, mesh, AttributeStream::Normal),
                AttributeBinding::new(2, mesh, AttributeStream::TexCoord),
            ],
            Self::MorphPair { base, target } => vec![
                AttributeBinding::new(0, base, AttributeStream::Position),
                AttributeBinding::new(1, base, AttributeStream::Normal),
                AttributeBinding::new(2, target, AttributeStream::Position),
                AttributeBinding::new(3, target, AttributeStream::Normal),
                AttributeBinding::new(4, base, AttributeStream::TexCoord),
            ],
        }
    }
}

/// The shading program a scene object is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    /// Lit dual-texture surface blending between a morph pair.
    Morph,
    /// Unlit solid color, used for the light marker.
    Marker,
    /// Cubemap background drawn behind everything else.
    Skybox,
}

/// Appearance of a scene object.
///
/// Textures are referenced by name only; resolving and decoding them is
/// the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    /// Shading program.
    pub shader: ShaderKind,
    /// Primary texture name, if any.
    pub base_texture: Option<String>,
    /// Secondary texture name layered over the base, if any.
    pub detail_texture: Option<String>,
    /// Whether the object is drawn with alpha blending.
    pub transparent: bool,
}

/// A drawable entry of the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Display name used in diagnostics.
    pub name: String,
    /// Geometry reference.
    pub binding: MeshBinding,
    /// Model transform.
    pub transform: Matrix4,
    /// Appearance.
    pub material: Material,
}

impl SceneObject {
    /// Creates an object with an identity transform.
    #[must_use]
    pub fn new(name: &str, binding: MeshBinding, material: Material) -> Self {
        Self {
            name: name.to_owned(),
            binding,
            transform: Matrix4::identity(),
            material,
        }
    }
}

/// Speed constants of the two shader-driven blend cycles.
///
/// The renderer evaluates the alphas every frame; the scene only carries
/// the speeds, so this is plain data rather than an animation system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphAnimation {
    /// Texture pulse cycle speed in radians per frame.
    pub pulse_speed: f32,
    /// Shape morph cycle speed in radians per frame.
    pub morph_speed: f32,
}

impl MorphAnimation {
    /// Creates a new animation description.
    #[must_use]
    pub fn new(pulse_speed: f32, morph_speed: f32) -> Self {
        Self {
            pulse_speed,
            morph_speed,
        }
    }

    /// Texture pulse blend factor at the given frame, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pulse_alpha(&self, frame: u32) -> f32 {
        0.5 * (self.pulse_speed * frame as f32).sin() + 0.5
    }

    /// Shape morph blend factor at the given frame, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn morph_alpha(&self, frame: u32) -> f32 {
        0.5 * (self.morph_speed * frame as f32).sin() + 0.5
    }
}

/// Immutable description of everything a renderer draws.
///
/// Assembled once at startup: meshes first, then objects referencing them
/// by ID, then the light, camera, and animation constants. The type owns
/// only attribute data; GPU handles stay with the renderer.
#[derive(Debug, Default)]
pub struct SceneDescription {
    meshes: SlotMap<MeshId, TriangleMesh>,
    objects: Vec<SceneObject>,
    light: Option<LightInfo>,
    camera: Option<CameraInfo>,
    animation: Option<MorphAnimation>,
}

impl SceneDescription {
    /// Creates a new, empty scene description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mesh operations ---

    /// Inserts a mesh and returns its ID.
    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    /// Returns a reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the scene.
    pub fn mesh(&self, id: MeshId) -> Result<&TriangleMesh, SceneError> {
        self.meshes.get(id).ok_or(SceneError::MeshNotFound)
    }

    /// Returns the number of meshes in the scene.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // --- Object operations ---

    /// Appends a drawable object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object references a mesh that is not in the
    /// scene, or if a morph pair's meshes have different vertex counts.
    pub fn add_object(&mut self, object: SceneObject) -> Result<(), SceneError> {
        match object.binding {
            MeshBinding::Single(mesh) => {
                self.mesh(mesh)?;
            }
            MeshBinding::MorphPair { base, target } => {
                let base_count = self.mesh(base)?.vertex_count();
                let target_count = self.mesh(target)?.vertex_count();
                if base_count != target_count {
                    return Err(SceneError::MorphPairMismatch {
                        base: base_count,
                        target: target_count,
                    });
                }
            }
        }
        self.objects.push(object);
        Ok(())
    }

    /// Returns the drawable objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    // --- Environment ---

    /// Sets the light.
    pub fn set_light(&mut self, light: LightInfo) {
        self.light = Some(light);
    }

    /// Returns the light, if one was set.
    #[must_use]
    pub fn light(&self) -> Option<&LightInfo> {
        self.light.as_ref()
    }

    /// Sets the camera.
    pub fn set_camera(&mut self, camera: CameraInfo) {
        self.camera = Some(camera);
    }

    /// Returns the camera, if one was set.
    #[must_use]
    pub fn camera(&self) -> Option<&CameraInfo> {
        self.camera.as_ref()
    }

    /// Sets the animation constants.
    pub fn set_animation(&mut self, animation: MorphAnimation) {
        self.animation = Some(animation);
    }

    /// Returns the animation constants, if set.
    #[must_use]
    pub fn animation(&self) -> Option<MorphAnimation> {
        self.animation
    }
}
