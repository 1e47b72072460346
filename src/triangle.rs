//! Solid triangle filling.
//!
//! Two interchangeable algorithms implement [`TriangleFiller`]:
//! a bounding-box walk with a barycentric inside test, and a y-sorted
//! scanline sweep. Both cover a pixel iff its integer lattice point lies
//! inside the *closed* triangle (edges and vertices included), and both
//! evaluate that rule in exact integer arithmetic, so they fill identical
//! pixel sets. Zero-area triangles fill nothing.
//!
//! Products of two `i32` coordinate differences overflow `i64`, so the
//! arithmetic runs in `i128`; any `i32` vertex is accepted.

use crate::canvas::RasterTarget;
use crate::color_utils::Color;
use clap::ValueEnum;
use nalgebra::{Point2, Vector3};
use serde::Deserialize;

/// Fills the interior of a 2D triangle with a solid color.
pub trait TriangleFiller {
    fn fill<T: RasterTarget + ?Sized>(
        &self,
        v0: Point2<i32>,
        v1: Point2<i32>,
        v2: Point2<i32>,
        target: &mut T,
        color: Color,
    );
}

/// Selects the fill algorithm for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMethod {
    Barycentric,
    #[default]
    Scanline,
}

impl FillMethod {
    pub fn fill<T: RasterTarget + ?Sized>(
        self,
        v0: Point2<i32>,
        v1: Point2<i32>,
        v2: Point2<i32>,
        target: &mut T,
        color: Color,
    ) {
        match self {
            FillMethod::Barycentric => BarycentricFiller.fill(v0, v1, v2, target, color),
            FillMethod::Scanline => ScanlineFiller.fill(v0, v1, v2, target, color),
        }
    }
}

#[inline]
fn widen(p: Point2<i32>) -> Point2<i128> {
    Point2::new(p.x as i128, p.y as i128)
}

/// Twice the signed area of the triangle; zero iff the vertices are collinear or coincide.
#[inline]
fn doubled_area(a: Point2<i128>, b: Point2<i128>, c: Point2<i128>) -> i128 {
    (c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y)
}

/// Barycentric weights of `p`, scaled by the signed doubled area `u.z`.
///
/// `u = (C.x−A.x, B.x−A.x, A.x−P.x) × (C.y−A.y, B.y−A.y, A.y−P.y)` gives the
/// weights `(1 − (u.x+u.y)/u.z, u.y/u.z, u.x/u.z)`. Multiplying through by
/// `u.z` keeps them integral. `u.z` equals [`doubled_area`], so callers
/// reject degenerate triangles once, before the pixel loop.
fn barycentric(
    a: Point2<i128>,
    b: Point2<i128>,
    c: Point2<i128>,
    p: Point2<i128>,
) -> Vector3<i128> {
    let u = Vector3::new(c.x - a.x, b.x - a.x, a.x - p.x)
        .cross(&Vector3::new(c.y - a.y, b.y - a.y, a.y - p.y));
    Vector3::new(u.z - u.x - u.y, u.y, u.x)
}

/// Walks the clamped bounding box and keeps pixels whose weights are all non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarycentricFiller;

impl TriangleFiller for BarycentricFiller {
    fn fill<T: RasterTarget + ?Sized>(
        &self,
        v0: Point2<i32>,
        v1: Point2<i32>,
        v2: Point2<i32>,
        target: &mut T,
        color: Color,
    ) {
        let (a, b, c) = (widen(v0), widen(v1), widen(v2));
        let area = doubled_area(a, b, c);
        if area == 0 {
            return;
        }
        // Clockwise triangles have negative weights inside.
        let sign = area.signum();

        let max_x = target.width() as i128 - 1;
        let max_y = target.height() as i128 - 1;
        let bbox_min_x = a.x.min(b.x).min(c.x).max(0);
        let bbox_min_y = a.y.min(b.y).min(c.y).max(0);
        let bbox_max_x = a.x.max(b.x).max(c.x).min(max_x);
        let bbox_max_y = a.y.max(b.y).max(c.y).min(max_y);

        for y in bbox_min_y..=bbox_max_y {
            for x in bbox_min_x..=bbox_max_x {
                let weights = barycentric(a, b, c, Point2::new(x, y)) * sign;
                if weights.x >= 0 && weights.y >= 0 && weights.z >= 0 {
                    target.set_pixel(x as i32, y as i32, color);
                }
            }
        }
    }
}

/// Sorts by y and sweeps rows, splitting at the middle vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineFiller;

/// Integer x range of edge `from -> to` on row `y`: `(ceil(x_left), floor(x_right))`.
///
/// For a sloped edge both ends are the single crossing point `from.x + dx·(y−from.y)/dy`.
/// A horizontal edge covers its whole extent.
fn edge_span(from: Point2<i128>, to: Point2<i128>, y: i128) -> (i128, i128) {
    let height = to.y - from.y;
    if height == 0 {
        return (from.x.min(to.x), from.x.max(to.x));
    }
    // Keep the denominator positive so euclidean division gives floor.
    let (num, den) = if height > 0 {
        ((to.x - from.x) * (y - from.y), height)
    } else {
        (-(to.x - from.x) * (y - from.y), -height)
    };
    let floor = from.x + num.div_euclid(den);
    let ceil = from.x - (-num).div_euclid(den);
    (ceil, floor)
}

impl ScanlineFiller {
    /// Fills the rows of one short edge, between it and the long edge.
    ///
    /// The long edge is crossed at `α = (y − y0) / total_height`, the short one
    /// at `β = (y − segment_start) / segment_height`; both as exact fractions.
    fn fill_half<T: RasterTarget + ?Sized>(
        long: (Point2<i128>, Point2<i128>),
        short: (Point2<i128>, Point2<i128>),
        target: &mut T,
        color: Color,
    ) {
        let segment_height = short.1.y - short.0.y;
        if segment_height == 0 {
            return;
        }

        let max_x = target.width() as i128 - 1;
        let y_start = short.0.y.max(0);
        let y_end = short.1.y.min(target.height() as i128 - 1);

        for y in y_start..=y_end {
            let (a_left, a_right) = edge_span(long.0, long.1, y);
            let (b_left, b_right) = edge_span(short.0, short.1, y);
            let left = a_left.min(b_left).max(0);
            let right = a_right.max(b_right).min(max_x);
            for x in left..=right {
                target.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

impl TriangleFiller for ScanlineFiller {
    fn fill<T: RasterTarget + ?Sized>(
        &self,
        v0: Point2<i32>,
        v1: Point2<i32>,
        v2: Point2<i32>,
        target: &mut T,
        color: Color,
    ) {
        let mut pts = [widen(v0), widen(v1), widen(v2)];
        // Covers the all-x-equal and all-y-equal cases as well as any other collinear input.
        if doubled_area(pts[0], pts[1], pts[2]) == 0 {
            return;
        }
        pts.sort_by_key(|p| p.y);
        let [t0, t1, t2] = pts;

        Self::fill_half((t0, t2), (t0, t1), target, color);
        Self::fill_half((t0, t2), (t1, t2), target, color);
    }
}
