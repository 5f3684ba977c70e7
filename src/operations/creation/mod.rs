mod make_cube;
mod make_ground_plane;
mod make_screen_quad;
mod make_sphere;

pub use make_cube::MakeCube;
pub use make_ground_plane::MakeGroundPlane;
pub use make_screen_quad::MakeScreenQuad;
pub use make_sphere::MakeSphere;
