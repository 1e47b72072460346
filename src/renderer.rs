use crate::canvas::{Canvas, RasterTarget};
use crate::color_utils::{BLUE, GREEN, RED, WHITE, get_face_color};
use crate::config::{RenderMode, RenderSettings};
use crate::line::draw_line;
use crate::loaders::{Model, load_obj};
use crate::shading::{DirectionalLight, FaceShade, face_normal, shade_face};
use crate::transform::{face_to_screen, ndc_to_pixel};
use crate::triangle::FillMethod;
use crate::ybuffer::YBuffer;
use log::{debug, info};
use nalgebra::Point2;
use std::time::Instant;

/// Face counts for one pass over a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    /// Facing away from the light.
    pub culled: usize,
    /// Zero area in model space.
    pub degenerate: usize,
}

pub struct Renderer {
    pub canvas: Canvas,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer {
            canvas: Canvas::new(width, height),
        }
    }

    /// Draws every face edge in white.
    ///
    /// Zero-area faces still get their edges drawn, but are counted as
    /// degenerate rather than drawn, matching the filled passes.
    pub fn render_wireframe(&mut self, model: &Model) -> RenderStats {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let mut stats = RenderStats::default();
        for i in 0..model.face_count() {
            if face_normal(&model.face_vertices(i)).is_some() {
                stats.drawn += 1;
            } else {
                stats.degenerate += 1;
            }
            let face = model.face(i);
            for j in 0..3 {
                let v0 = model.vert(face[j]);
                let v1 = model.vert(face[(j + 1) % 3]);
                draw_line(
                    ndc_to_pixel(&v0, width, height),
                    ndc_to_pixel(&v1, width, height),
                    &mut self.canvas,
                    WHITE,
                );
            }
        }
        stats
    }

    /// Fills faces with one gray level each, from the angle between normal and light.
    pub fn render_flat(
        &mut self,
        model: &Model,
        fill: FillMethod,
        light: &DirectionalLight,
    ) -> RenderStats {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let mut stats = RenderStats::default();

        for i in 0..model.face_count() {
            let world = model.face_vertices(i);
            match shade_face(&world, light) {
                FaceShade::Lit { color, .. } => {
                    let [s0, s1, s2] = face_to_screen(&world, width, height);
                    fill.fill(s0, s1, s2, &mut self.canvas, color);
                    stats.drawn += 1;
                }
                FaceShade::Culled => stats.culled += 1,
                FaceShade::Degenerate => stats.degenerate += 1,
            }
        }
        stats
    }

    /// Fills every face with its own pseudo-random color. Nothing is culled.
    pub fn render_random(&mut self, model: &Model, fill: FillMethod) -> RenderStats {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let mut stats = RenderStats::default();

        for i in 0..model.face_count() {
            let world = model.face_vertices(i);
            if face_normal(&world).is_none() {
                stats.degenerate += 1;
                continue;
            }
            let [s0, s1, s2] = face_to_screen(&world, width, height);
            fill.fill(s0, s1, s2, &mut self.canvas, get_face_color(i));
            stats.drawn += 1;
        }
        stats
    }

    /// The three fixed demo triangles with white outlines.
    pub fn render_demo_triangles(&mut self, fill: FillMethod) {
        let triangles = [
            ([(10, 70), (50, 160), (70, 80)], RED),
            ([(180, 50), (150, 1), (70, 180)], WHITE),
            ([(180, 150), (120, 160), (130, 180)], GREEN),
        ];
        for (points, color) in triangles {
            let [a, b, c] = points.map(|(x, y)| Point2::new(x, y));
            fill.fill(a, b, c, &mut self.canvas, color);
            draw_line(a, b, &mut self.canvas, WHITE);
            draw_line(b, c, &mut self.canvas, WHITE);
            draw_line(c, a, &mut self.canvas, WHITE);
        }
    }

    /// Side view of three segments, resolved per column through a y-buffer.
    ///
    /// Each segment's x is scaled from the 800-wide scene to the canvas width.
    pub fn render_ybuffer_scene(&mut self) -> YBuffer {
        let width = self.canvas.width();
        let scale = |x: i32| (x as i64 * width as i64 / 800) as i32;
        let segments = [
            ((20, 34), (744, 400), RED),
            ((120, 434), (444, 400), GREEN),
            ((330, 463), (594, 200), BLUE),
        ];

        let mut ybuffer = YBuffer::new(width);
        for ((x0, y0), (x1, y1), color) in segments {
            ybuffer.rasterize(
                Point2::new(scale(x0), y0),
                Point2::new(scale(x1), y1),
                &mut self.canvas,
                color,
            );
        }
        ybuffer
    }
}

/// Runs one complete pass for `settings` and returns the unflipped canvas.
pub fn render_pass(settings: &RenderSettings) -> Result<Canvas, String> {
    let (width, height) = settings.dimensions();
    let mut renderer = Renderer::new(width, height);
    info!(
        "Rendering {:?} at {}x{} ({:?} fill)",
        settings.mode, width, height, settings.fill
    );

    let start_time = Instant::now();
    if settings.mode.needs_model() {
        let model = load_obj(&settings.obj)?;
        let stats = match settings.mode {
            RenderMode::Wireframe => renderer.render_wireframe(&model),
            RenderMode::Random => renderer.render_random(&model, settings.fill),
            _ => renderer.render_flat(&model, settings.fill, &settings.light()?),
        };
        info!(
            "Faces drawn: {}, culled: {}, degenerate: {}",
            stats.drawn, stats.culled, stats.degenerate
        );
    } else if settings.mode == RenderMode::Triangles {
        renderer.render_demo_triangles(settings.fill);
    } else {
        let ybuffer = renderer.render_ybuffer_scene();
        let covered = ybuffer.values().iter().filter(|&&y| y > i32::MIN).count();
        debug!("Y-buffer covers {} of {} columns", covered, ybuffer.width());
    }

    debug!(
        "Painted {} pixels in {:?}",
        renderer.canvas.painted_pixels().len(),
        start_time.elapsed()
    );
    Ok(renderer.canvas)
}
