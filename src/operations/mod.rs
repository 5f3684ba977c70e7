//! Mesh creation operations.
//!
//! Each operation is a struct configured through `new` and run with
//! `execute`, producing a [`TriangleMesh`](crate::tessellation::TriangleMesh)
//! ready for attribute upload.

pub mod creation;
