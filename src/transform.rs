use nalgebra::{Point2, Point3};

/// Maps one normalized coordinate in [-1, 1] to a pixel index in `[0, dimension)`.
///
/// `(ndc + 1) * dimension / 2`, truncated toward zero and clamped, so points on
/// or beyond the +1 edge land on the last pixel instead of past it.
pub fn ndc_to_pixel_axis(ndc: f32, dimension: usize) -> i32 {
    if dimension == 0 {
        return 0;
    }
    let pixel = (ndc + 1.0) * dimension as f32 / 2.0;
    // NaN falls through to 0 via the saturating cast.
    (pixel as i32).clamp(0, dimension as i32 - 1)
}

/// Projects a model-space vertex onto the screen by dropping z.
///
/// Y grows upward here; the canvas is flipped once the pass is done.
pub fn ndc_to_pixel(ndc: &Point3<f32>, width: usize, height: usize) -> Point2<i32> {
    Point2::new(
        ndc_to_pixel_axis(ndc.x, width),
        ndc_to_pixel_axis(ndc.y, height),
    )
}

/// Projects a whole face at once.
pub fn face_to_screen(face: &[Point3<f32>; 3], width: usize, height: usize) -> [Point2<i32>; 3] {
    face.map(|v| ndc_to_pixel(&v, width, height))
}
