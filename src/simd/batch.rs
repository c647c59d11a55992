//! Batch evaluation with four parameters per pass.

use crate::algebra::{NativeAlgebra, VectorSpaceAlgebra};
use crate::casteljau::evaluate_in;
use crate::primitives::Vec2;

use super::lanes::F32x4;

/// Evaluates a scalar Bernstein polynomial at many parameter values.
///
/// Parameters are processed in batches of 4; the tail is evaluated lane by
/// lane. Returns one value per parameter, or nothing if `coefficients` is
/// empty.
pub fn eval_batch(coefficients: &[f32], params: &[f32]) -> Vec<f32> {
    if coefficients.is_empty() {
        return Vec::new();
    }

    let lanes = NativeAlgebra::<F32x4>::native();
    let mut scratch = Vec::with_capacity(coefficients.len());
    let mut result = Vec::with_capacity(params.len());

    let mut chunks = params.chunks_exact(4);
    for chunk in &mut chunks {
        let t = F32x4::new([chunk[0], chunk[1], chunk[2], chunk[3]]);
        scratch.clear();
        scratch.extend(coefficients.iter().map(|&c| F32x4::splat(c)));
        if let Some(value) = evaluate_in(&mut scratch, t, &lanes) {
            result.extend_from_slice(&value.to_array());
        }
    }

    let scalar = NativeAlgebra::<f32>::native();
    let mut tail = Vec::with_capacity(coefficients.len());
    for &t in chunks.remainder() {
        tail.clear();
        tail.extend_from_slice(coefficients);
        if let Some(value) = evaluate_in(&mut tail, t, &scalar) {
            result.push(*value);
        }
    }

    result
}

/// Evaluates a 2D Bézier curve at many parameter values.
///
/// Each control point is split into an `x` and a `y` lane group, and the
/// algebra adds and scales both groups.
pub fn eval_batch_vec2(points: &[Vec2<f32>], params: &[f32]) -> Vec<Vec2<f32>> {
    if points.is_empty() {
        return Vec::new();
    }

    let lanes = VectorSpaceAlgebra::<F32x4, _, _>::new(
        |v: [F32x4; 2], u: [F32x4; 2]| [v[0] + u[0], v[1] + u[1]],
        |a: F32x4, v: [F32x4; 2]| [a * v[0], a * v[1]],
    );
    let mut scratch = Vec::with_capacity(points.len());
    let mut result = Vec::with_capacity(params.len());

    let mut chunks = params.chunks_exact(4);
    for chunk in &mut chunks {
        let t = F32x4::new([chunk[0], chunk[1], chunk[2], chunk[3]]);
        scratch.clear();
        scratch.extend(
            points
                .iter()
                .map(|p| [F32x4::splat(p.x), F32x4::splat(p.y)]),
        );
        if let Some([x, y]) = evaluate_in(&mut scratch, t, &lanes).copied() {
            let (x, y) = (x.to_array(), y.to_array());
            result.extend((0..4).map(|i| Vec2::new(x[i], y[i])));
        }
    }

    let scalar = NativeAlgebra::<f32>::native();
    let mut tail = Vec::with_capacity(points.len());
    for &t in chunks.remainder() {
        tail.clear();
        tail.extend_from_slice(points);
        if let Some(value) = evaluate_in(&mut tail, t, &scalar) {
            result.push(*value);
        }
    }

    result
}
