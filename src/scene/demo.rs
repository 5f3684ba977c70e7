//! Ready-made demo scene: a Klein bottle morphing into a Möbius strip,
//! with a marker sphere at the light position and a cubemap skybox.

use crate::error::Result;
use crate::geometry::surface::{klein, moebius, PositionFn};
use crate::math::{Point3, Vector3};
use crate::operations::creation::{MakeCube, MakeSphere};
use crate::tessellation::{GridResolution, TessellateMorphPair};

use super::{
    CameraInfo, LightInfo, Material, MeshBinding, MorphAnimation, SceneDescription, SceneObject,
    ShaderKind,
};

const MARKER_RADIUS: f32 = 0.1;
const MARKER_SEGMENTS: usize = 100;
const SKYBOX_HALF_EXTENT: f32 = 10.0;

/// Builds the demo scene at the given grid resolution.
///
/// The morph pair tessellates the Klein bottle and the Möbius strip over
/// their natural domains at half scale; the marker sphere and skybox cube
/// are fixed-size. Light, camera, and animation constants frame the morph
/// surface at the origin.
///
/// # Errors
///
/// Returns an error if `resolution` has a zero cell count on either axis.
pub fn klein_bottle_scene(resolution: GridResolution) -> Result<SceneDescription> {
    let mut scene = SceneDescription::new();

    let pair = TessellateMorphPair::new(
        PositionFn::KleinBottle,
        klein::natural_domain(),
        PositionFn::MoebiusStrip,
        moebius::natural_domain(),
        resolution,
    )
    .execute()?;
    let base = scene.add_mesh(pair.base);
    let target = scene.add_mesh(pair.target);
    scene.add_object(SceneObject::new(
        "klein-bottle",
        MeshBinding::MorphPair { base, target },
        Material {
            shader: ShaderKind::Morph,
            base_texture: Some("snake-skin-2.jpg".to_owned()),
            detail_texture: Some("veins.png".to_owned()),
            transparent: true,
        },
    ))?;

    let marker = scene.add_mesh(MakeSphere::new(MARKER_RADIUS, MARKER_SEGMENTS).execute()?);
    scene.add_object(SceneObject::new(
        "light-marker",
        MeshBinding::Single(marker),
        Material {
            shader: ShaderKind::Marker,
            base_texture: None,
            detail_texture: None,
            transparent: false,
        },
    ))?;

    let skybox = scene.add_mesh(MakeCube::new(SKYBOX_HALF_EXTENT).execute()?);
    scene.add_object(SceneObject::new(
        "skybox",
        MeshBinding::Single(skybox),
        Material {
            shader: ShaderKind::Skybox,
            base_texture: Some("cube".to_owned()),
            detail_texture: None,
            transparent: false,
        },
    ))?;

    scene.set_light(LightInfo::new(
        10.0,
        2.65,
        0.48,
        Vector3::new(0.2, 0.2, 0.2),
        Vector3::new(0.8, 0.8, 0.8),
        Vector3::new(1.0, 1.0, 1.0),
    ));
    scene.set_camera(CameraInfo::new(
        Point3::new(-5.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, 0.5),
        Vector3::z(),
        45.0_f32.to_radians(),
        0.1,
        100.0,
    ));
    scene.set_animation(MorphAnimation::new(0.02, 0.01));

    Ok(scene)
}
