use crate::canvas::RasterTarget;
use crate::color_utils::Color;
use nalgebra::Point2;

/// One-dimensional visibility buffer: per x-column, the highest y drawn so far.
///
/// A column is only repainted when a segment reaches strictly higher than
/// everything drawn there before, so the final buffer depends on the set of
/// segments and not on their order. On equal heights the first color stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YBuffer {
    values: Vec<i32>,
}

impl YBuffer {
    /// Every column starts at `i32::MIN`, standing in for negative infinity.
    pub fn new(width: usize) -> Self {
        YBuffer {
            values: vec![i32::MIN; width],
        }
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, x: usize) -> Option<i32> {
        self.values.get(x).copied()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Draws the segment `p0 -> p1` seen edge-on, painting the whole target
    /// column for every x where the segment is the highest so far.
    ///
    /// Interpolation runs in `i64`/`f64`, so any pair of `i32` endpoints is accepted.
    pub fn rasterize<T: RasterTarget + ?Sized>(
        &mut self,
        mut p0: Point2<i32>,
        mut p1: Point2<i32>,
        target: &mut T,
        color: Color,
    ) {
        if p0.x > p1.x {
            std::mem::swap(&mut p0, &mut p1);
        }

        let x_start = p0.x.max(0);
        let x_end = (p1.x as i64).min(self.width() as i64 - 1);
        let run = p1.x as i64 - p0.x as i64;

        for x in x_start as i64..=x_end {
            let y = if run == 0 {
                p0.y.max(p1.y)
            } else {
                let t = (x - p0.x as i64) as f64 / run as f64;
                (p0.y as f64 * (1.0 - t) + p1.y as f64 * t).round() as i32
            };

            let slot = &mut self.values[x as usize];
            if y > *slot {
                *slot = y;
                for row in 0..target.height() {
                    target.set_pixel(x as i32, row as i32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color_utils::{BLUE, GREEN, RED};

    fn p(x: i32, y: i32) -> Point2<i32> {
        Point2::new(x, y)
    }

    #[test]
    fn fresh_buffer_is_negative_infinity() {
        let buffer = YBuffer::new(5);
        assert_eq!(buffer.values(), &[i32::MIN; 5]);
    }

    #[test]
    fn scenario_line_fills_every_column() {
        let mut canvas = Canvas::new(800, 1);
        let mut buffer = YBuffer::new(800);
        buffer.rasterize(p(20, 34), p(744, 400), &mut canvas, RED);

        for x in 0..800usize {
            let value = buffer.get(x).unwrap();
            if (20..=744).contains(&x) {
                let exact = 34.0 + (400.0 - 34.0) * (x as f64 - 20.0) / 724.0;
                assert!(
                    (value as f64 - exact).abs() <= 0.5 + 1e-3,
                    "column {} holds {}, expected about {}",
                    x,
                    value,
                    exact
                );
                assert_eq!(canvas.get_pixel(x as i32, 0), Some(RED));
            } else {
                assert_eq!(value, i32::MIN);
            }
        }
        assert_eq!(buffer.get(20), Some(34));
        assert_eq!(buffer.get(744), Some(400));
        assert!(buffer.values()[20..=744].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn draw_order_does_not_change_heights() {
        let segments = [
            (p(20, 34), p(744, 400), RED),
            (p(120, 434), p(444, 400), GREEN),
            (p(330, 463), p(594, 200), BLUE),
        ];
        let run = |order: &[usize]| {
            let mut canvas = Canvas::new(800, 4);
            let mut buffer = YBuffer::new(800);
            for &i in order {
                let (a, b, color) = segments[i];
                buffer.rasterize(a, b, &mut canvas, color);
            }
            buffer
        };

        let reference = run(&[0, 1, 2]);
        for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            assert_eq!(run(&order), reference, "order {:?}", order);
        }
    }

    #[test]
    fn lower_segment_does_not_overwrite() {
        let mut canvas = Canvas::new(50, 1);
        let mut buffer = YBuffer::new(50);
        buffer.rasterize(p(0, 30), p(49, 30), &mut canvas, RED);
        buffer.rasterize(p(49, 10), p(0, 10), &mut canvas, GREEN);
        assert!(buffer.values().iter().all(|&v| v == 30));
        assert!((0..50).all(|x| canvas.get_pixel(x, 0) == Some(RED)));
    }

    #[test]
    fn reversed_endpoints_match() {
        let mut forward = YBuffer::new(100);
        let mut backward = YBuffer::new(100);
        let mut canvas = Canvas::new(100, 1);
        forward.rasterize(p(5, 3), p(90, 77), &mut canvas, RED);
        backward.rasterize(p(90, 77), p(5, 3), &mut canvas, RED);
        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_width_segment_takes_the_higher_end() {
        let mut canvas = Canvas::new(10, 1);
        let mut buffer = YBuffer::new(10);
        buffer.rasterize(p(4, 2), p(4, 9), &mut canvas, BLUE);
        assert_eq!(buffer.get(4), Some(9));
        assert_eq!(canvas.painted_pixels(), vec![(4, 0)]);

        let mut other = YBuffer::new(10);
        other.rasterize(p(4, 9), p(4, 2), &mut canvas, BLUE);
        assert_eq!(other, buffer);
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let mut canvas = Canvas::new(8, 2);
        let mut buffer = YBuffer::new(8);
        buffer.rasterize(p(i32::MIN, 0), p(i32::MAX, 5), &mut canvas, RED);
        // The raster sits at the middle of the run, halfway up.
        assert!(buffer.values().iter().all(|&v| v == 3), "{:?}", buffer.values());
        assert_eq!(canvas.painted_pixels().len(), 16);

        buffer.rasterize(p(i32::MAX, i32::MAX), p(i32::MAX, i32::MIN), &mut canvas, GREEN);
        buffer.rasterize(p(i32::MIN, i32::MAX), p(i32::MIN, i32::MAX), &mut canvas, GREEN);
        assert!(buffer.values().iter().all(|&v| v == 3));
    }

    #[test]
    fn columns_outside_the_buffer_are_skipped() {
        let mut canvas = Canvas::new(10, 1);
        let mut buffer = YBuffer::new(10);
        buffer.rasterize(p(-20, 0), p(30, 50), &mut canvas, GREEN);
        assert!(buffer.values().iter().all(|&v| v > i32::MIN));
        assert_eq!(canvas.painted_pixels().len(), 10);
    }
}
