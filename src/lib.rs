pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use error::{ParameshError, Result};
