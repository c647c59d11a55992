//! SIMD-accelerated batch evaluation.
//!
//! The engines are generic over the scalar field, so a four-lane float
//! vector can act as the scalar: one pass of the recurrence then evaluates a
//! polynomial at four parameters at once.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! casteljau = { version = "0.1", features = ["simd"] }
//! ```

mod batch;
mod lanes;

pub use batch::{eval_batch, eval_batch_vec2};
pub use lanes::F32x4;
