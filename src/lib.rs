//! Apple-leaf condition diagnosis service: an ONNX classifier behind an
//! axum upload endpoint, with localized agronomic advice.

pub mod adapters;
pub mod application;
pub mod domain;
