//! De Casteljau evaluation and subdivision engines.
//!
//! Both engines work on caller-owned buffers and never allocate. Each comes
//! in three flavors: native operations (`evaluate`, `subdivide`), separate
//! operations (`_with`), and a bundled algebra (`_in`).

mod evaluate;
mod subdivide;

pub use evaluate::{evaluate, evaluate_in, evaluate_range, evaluate_with};
pub use subdivide::{
    subdivide, subdivide_in, subdivide_range, subdivide_with, subdivided_len, try_subdivide_in,
};
