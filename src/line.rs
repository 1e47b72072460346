use crate::canvas::RasterTarget;
use crate::color_utils::Color;
use nalgebra::Point2;

/// Draws a straight segment from `p0` to `p1` (both endpoints included).
///
/// Bresenham's algorithm: steep segments are transposed so the loop always
/// advances one pixel along the dominant axis, and the endpoints are ordered
/// left to right so `draw_line(a, b)` and `draw_line(b, a)` plot the same pixels.
///
/// Only the part of the dominant axis that overlaps the target is walked;
/// the error term is advanced in closed form to the first visible step.
pub fn draw_line<T: RasterTarget + ?Sized>(
    p0: Point2<i32>,
    p1: Point2<i32>,
    target: &mut T,
    color: Color,
) {
    let (mut x0, mut y0, mut x1, mut y1) = (p0.x as i64, p0.y as i64, p1.x as i64, p1.y as i64);

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let extent = if steep { target.height() } else { target.width() } as i64;
    let x_start = x0.max(0);
    let x_end = x1.min(extent - 1);
    if x_start > x_end {
        return;
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let derror = dy.abs() * 2;
    let y_step = if y1 > y0 { 1 } else { -1 };

    // After k steps the error sits in (-dx, dx], which fixes the number of y steps taken.
    let (mut y, mut error) = if dx == 0 {
        (y0, 0)
    } else {
        let accumulated = (x_start - x0) as i128 * derror as i128;
        let twice_dx = 2 * dx as i128;
        let steps = -(dx as i128 - accumulated).div_euclid(twice_dx);
        (
            y0 + y_step * steps as i64,
            (accumulated - steps * twice_dx) as i64,
        )
    };

    // Branch on steepness outside the loop.
    if steep {
        for x in x_start..=x_end {
            target.set_pixel(y as i32, x as i32, color);
            error += derror;
            if error > dx {
                y += y_step;
                error -= dx * 2;
            }
        }
    } else {
        for x in x_start..=x_end {
            target.set_pixel(x as i32, y as i32, color);
            error += derror;
            if error > dx {
                y += y_step;
                error -= dx * 2;
            }
        }
    }
}
