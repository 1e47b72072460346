use crate::color_utils::{Color, gray_from_intensity};
use nalgebra::{Point3, Unit, Vector3};

const MIN_NORMAL_LENGTH: f32 = 1e-12;

/// Directional light; `direction` points the way the light travels.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    direction: Unit<Vector3<f32>>,
}

impl DirectionalLight {
    /// Returns `None` for a zero-length direction.
    pub fn new(direction: Vector3<f32>) -> Option<Self> {
        Unit::try_new(direction, MIN_NORMAL_LENGTH).map(|direction| DirectionalLight { direction })
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction.into_inner()
    }
}

impl Default for DirectionalLight {
    /// Light shining into the screen, along -Z.
    fn default() -> Self {
        DirectionalLight {
            direction: Unit::new_unchecked(Vector3::new(0.0, 0.0, -1.0)),
        }
    }
}

/// Outcome of shading one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceShade {
    Lit { color: Color, intensity: f32 },
    /// Facing away from the light; not drawn.
    Culled,
    /// Zero-area face, no normal exists.
    Degenerate,
}

/// Unit normal `(v2 − v0) × (v1 − v0)`, or `None` when the face has no area.
pub fn face_normal(face: &[Point3<f32>; 3]) -> Option<Vector3<f32>> {
    let n = (face[2] - face[0]).cross(&(face[1] - face[0]));
    n.try_normalize(MIN_NORMAL_LENGTH)
}

/// Lambert term between a unit normal and the light.
#[inline]
pub fn intensity(normal: &Vector3<f32>, light: &DirectionalLight) -> f32 {
    normal.dot(&light.direction())
}

/// Color for a given intensity, `None` when the face should be culled (intensity ≤ 0).
pub fn shade(intensity: f32) -> Option<Color> {
    if intensity > 0.0 {
        Some(gray_from_intensity(intensity))
    } else {
        None
    }
}

/// Flat-shades a face in model space.
pub fn shade_face(face: &[Point3<f32>; 3], light: &DirectionalLight) -> FaceShade {
    let Some(normal) = face_normal(face) else {
        return FaceShade::Degenerate;
    };
    let intensity = intensity(&normal, light);
    match shade(intensity) {
        Some(color) => FaceShade::Lit { color, intensity },
        None => FaceShade::Culled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_utils::WHITE;

    // Counter-clockwise when seen from +Z, so its normal points along -Z.
    fn facing_viewer() -> [Point3<f32>; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn normal_follows_winding() {
        let face = facing_viewer();
        assert_eq!(face_normal(&face), Some(Vector3::new(0.0, 0.0, -1.0)));
        let reversed = [face[0], face[2], face[1]];
        assert_eq!(face_normal(&reversed), Some(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn light_along_normal_is_full_white() {
        let light = DirectionalLight::default();
        match shade_face(&facing_viewer(), &light) {
            FaceShade::Lit { color, intensity } => {
                assert_eq!(color, WHITE);
                assert!((intensity - 1.0).abs() < 1e-6);
            }
            other => panic!("expected a lit face, got {:?}", other),
        }
    }

    #[test]
    fn light_opposite_normal_is_culled() {
        let light = DirectionalLight::new(Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(shade_face(&facing_viewer(), &light), FaceShade::Culled);
        assert_eq!(shade(0.0), None);
        assert_eq!(shade(-0.3), None);
    }

    #[test]
    fn oblique_light_scales_gray() {
        let light = DirectionalLight::new(Vector3::new(0.0, 1.0, -1.0)).unwrap();
        let normal = face_normal(&facing_viewer()).unwrap();
        let i = intensity(&normal, &light);
        assert!((i - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert_eq!(shade(i), Some(gray_from_intensity(i)));
    }

    #[test]
    fn zero_area_faces_are_degenerate() {
        let p = Point3::new(0.3, 0.2, 0.1);
        let collinear = [
            Point3::origin(),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        let light = DirectionalLight::default();
        assert_eq!(shade_face(&[p, p, p], &light), FaceShade::Degenerate);
        assert_eq!(face_normal(&collinear), None);
        assert_eq!(shade_face(&collinear, &light), FaceShade::Degenerate);
    }

    #[test]
    fn zero_light_direction_is_rejected() {
        assert!(DirectionalLight::new(Vector3::zeros()).is_none());
    }
}
