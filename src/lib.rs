//! **Implicitly Connected Quadrilateral (ICQ)** shape models,
//! built around a six-face vertex lattice of resolution `q` where each face is a
//! `(q+1)×(q+1)` grid and faces share their edge and corner vertices redundantly.
//! The format is the plain-text vertex-list convention used for small-body shape
//! models (a resolution header followed by one coordinate triple per line).
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**obj-io**](https://en.wikipedia.org/wiki/Wavefront_.obj_file): `.obj` export
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod vertex;
pub mod shape;
pub mod shapes;
pub mod triangulated;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use shape::IcqShape;
pub use vertex::Vertex;
