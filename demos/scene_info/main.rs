//! Scene info: builds the morphing Klein bottle demo scene and reports
//! mesh statistics without rendering anything.
//!
//! Usage:
//! ```text
//! cargo run --example scene_info             # default 256x256 grid
//! cargo run --example scene_info -- 1000     # 1000x1000 grid
//! ```

use std::time::Instant;

use paramesh::scene::{demo, MeshBinding};
use paramesh::tessellation::GridResolution;
use paramesh::ParameshError;

const DEFAULT_CELLS: usize = 256;

fn main() -> Result<(), ParameshError> {
    // Default: WARN for everything, INFO for this example and paramesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=paramesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scene_info=info".parse().unwrap_or_default())
        .add_directive("paramesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cells = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_CELLS);

    let start = Instant::now();
    let scene = demo::klein_bottle_scene(GridResolution::new(cells, cells))?;
    let elapsed = start.elapsed();

    tracing::info!(
        cells,
        meshes = scene.mesh_count(),
        objects = scene.objects().len(),
        ?elapsed,
        "scene built"
    );

    for object in scene.objects() {
        match object.binding {
            MeshBinding::Single(id) => {
                let mesh = scene.mesh(id)?;
                tracing::info!(
                    name = %object.name,
                    shader = ?object.material.shader,
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    "object"
                );
            }
            MeshBinding::MorphPair { base, target } => {
                let base = scene.mesh(base)?;
                let target = scene.mesh(target)?;
                tracing::info!(
                    name = %object.name,
                    shader = ?object.material.shader,
                    vertices = base.vertex_count(),
                    triangles = base.triangle_count(),
                    target_vertices = target.vertex_count(),
                    "morph object"
                );
            }
        }
    }

    if let Some(light) = scene.light() {
        let position = light.position();
        tracing::info!(
            x = position.x,
            y = position.y,
            z = position.z,
            "light position"
        );
    }

    Ok(())
}
