//! Single-octave 2D gradient (Perlin) noise.
//!
//! Evaluates classic improved Perlin noise at a continuous coordinate using
//! a seeded [`PermutationTable`], quintic fade interpolation, and the fixed
//! 12-direction gradient set. The gradient set is the 3D edge-vector family
//! `(±1,±1,0), (±1,0,±1), (0,±1,±1)` evaluated with an implicit z of 0, so
//! only the x/y components contribute. Output is approximately [-1, 1] and
//! exactly 0 at every integer lattice point.

use crate::permutation::PermutationTable;

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at t = 0 and t = 1, which removes
/// visible grid artifacts from the interpolation.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the hashed gradient direction with the offset (x, y).
///
/// `hash & 15` picks one of 16 slots over the 12 directions (four repeat);
/// the low two bits carry the component signs.
#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Samples single-octave gradient noise at `(x, y)`.
///
/// Cell coordinates wrap at 256 via `floor(x) as i64 & 255`, which matches
/// two's-complement masking for negative coordinates, so the noise is
/// periodic with period 256 on both axes.
pub fn sample(table: &PermutationTable, x: f64, y: f64) -> f64 {
    let xi = x.floor();
    let yi = y.floor();
    let cx = (xi as i64 & 255) as usize;
    let cy = (yi as i64 & 255) as usize;
    let xf = x - xi;
    let yf = y - yi;

    let u = fade(xf);
    let v = fade(yf);

    let a = table.lookup(cx) as usize + cy;
    let b = table.lookup(cx + 1) as usize + cy;

    let grad_aa = grad(table.lookup(a), xf, yf);
    let grad_ba = grad(table.lookup(b), xf - 1.0, yf);
    let grad_ab = grad(table.lookup(a + 1), xf, yf - 1.0);
    let grad_bb = grad(table.lookup(b + 1), xf - 1.0, yf - 1.0);

    lerp(lerp(grad_aa, grad_ba, u), lerp(grad_ab, grad_bb, u), v)
}
