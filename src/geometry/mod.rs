pub mod surface;

pub use surface::{CustomPositionFn, PositionFn, SurfaceDomain};
