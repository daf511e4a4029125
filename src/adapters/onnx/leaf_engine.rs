use anyhow::{ensure, Result};
use image::{imageops::FilterType, RgbImage};
use ndarray::Array4;
use ort::session::Session;
use ort::value::Tensor;
use std::fs;

use crate::domain::prediction::NUM_CONDITIONS;

/// Model input resolution (EfficientNet-B3 export).
const INPUT_SIZE: u32 = 300;

/// ONNX session around the pre-trained leaf classifier. Loaded once at
/// startup; the model ends in softmax, so the output is already a
/// probability vector in the fixed class ordering.
pub struct OnnxLeafEngine {
    session: Session,
}

impl OnnxLeafEngine {
    pub fn load(path: &str) -> Result<Self> {
        let builder = Session::builder()?.with_intra_threads(4)?;

        let model_bytes = fs::read(path)?;
        let session = builder.commit_from_memory(&model_bytes)?;

        Ok(Self { session })
    }

    /// Run one inference. Input contract: square RGB, pixel values / 255,
    /// NHWC layout.
    pub fn infer(&mut self, rgb: &RgbImage) -> Result<[f32; NUM_CONDITIONS]> {
        let size = INPUT_SIZE as usize;
        let resized = image::imageops::resize(rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Nearest);

        let mut input = Array4::<f32>::zeros((1, size, size, 3));
        for (x, y, pixel) in resized.enumerate_pixels() {
            input[[0, y as usize, x as usize, 0]] = pixel[0] as f32 / 255.0;
            input[[0, y as usize, x as usize, 1]] = pixel[1] as f32 / 255.0;
            input[[0, y as usize, x as usize, 2]] = pixel[2] as f32 / 255.0;
        }

        let shape = [1i64, size as i64, size as i64, 3];
        let (data, _) = input.into_raw_vec_and_offset();
        let input_tensor = Tensor::from_array((shape, data.into_boxed_slice()))?;

        let outputs = self.session.run(ort::inputs![input_tensor])?;
        let (out_shape, out_data) = outputs[0].try_extract_tensor::<f32>()?;

        let dims: &[i64] = out_shape;
        ensure!(
            out_data.len() >= NUM_CONDITIONS,
            "unexpected output shape: {dims:?}, expected [1, {NUM_CONDITIONS}]"
        );

        let mut probs = [0f32; NUM_CONDITIONS];
        probs.copy_from_slice(&out_data[..NUM_CONDITIONS]);
        Ok(probs)
    }
}
