pub mod assemble;
pub mod engine;
pub mod transform;

pub use engine::TransformEngine;
