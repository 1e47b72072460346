use image::Rgba;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Represents an RGBA color with 8-bit components.
pub type Color = Rgba<u8>;

pub const BLACK: Color = Rgba([0, 0, 0, 255]);
pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const RED: Color = Rgba([255, 0, 0, 255]);
pub const GREEN: Color = Rgba([0, 255, 0, 255]);
pub const BLUE: Color = Rgba([0, 0, 255, 255]);

/// Converts a light intensity in [0.0, 1.0] into an opaque gray.
///
/// The intensity is replicated across R, G and B; values outside the range are clamped.
pub fn gray_from_intensity(intensity: f32) -> Color {
    let level = (intensity * 255.0).clamp(0.0, 255.0) as u8;
    Rgba([level, level, level, 255])
}

/// Gets a pseudo-random opaque color for a face.
///
/// Seeded with the face index, so the same face always gets the same color.
pub fn get_face_color(face_index: usize) -> Color {
    let mut rng = StdRng::seed_from_u64(face_index as u64);
    Rgba([
        (rng.random::<f32>() * 255.0) as u8,
        (rng.random::<f32>() * 255.0) as u8,
        (rng.random::<f32>() * 255.0) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_maps_to_gray() {
        assert_eq!(gray_from_intensity(1.0), WHITE);
        assert_eq!(gray_from_intensity(0.0), BLACK);
        assert_eq!(gray_from_intensity(0.5), Rgba([127, 127, 127, 255]));
        assert_eq!(gray_from_intensity(3.0), WHITE);
    }

    #[test]
    fn face_colors_are_deterministic_and_opaque() {
        for i in 0..32 {
            let c = get_face_color(i);
            assert_eq!(c, get_face_color(i));
            assert_eq!(c.0[3], 255);
        }
        assert_ne!(get_face_color(1), get_face_color(2));
    }
}
