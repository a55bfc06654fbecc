//! Core building blocks: square-canvas normalization (padding/resize), the
//! selection and session state, and the sequential batch runner. These are
//! the primitives consumed by the high-level `api` module and the GUI.
pub mod batch;
pub mod params;
pub mod processing;
pub mod selection;
pub mod session;
