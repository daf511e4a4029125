pub mod advice;
pub mod http;
pub mod onnx;
