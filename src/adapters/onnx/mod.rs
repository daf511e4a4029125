pub mod classifier;
pub mod leaf_engine;
