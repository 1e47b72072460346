use crate::config::RenderMode;
use crate::triangle::FillMethod;
use clap::Parser;

/// Every option is optional so that values from `--config` survive unless
/// they are given explicitly on the command line.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input OBJ file (defaults to the bundled obj/diamond.obj)
    pub obj: Option<String>,

    /// Output image path; the format follows the extension (default "output.tga")
    #[arg(short, long)]
    pub output: Option<String>,

    /// Width of the output image
    #[arg(long)]
    pub width: Option<usize>,

    /// Height of the output image
    #[arg(long)]
    pub height: Option<usize>,

    /// What to draw
    #[arg(short, long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Triangle fill algorithm
    #[arg(short, long, value_enum)]
    pub fill: Option<FillMethod>,

    /// Direction the light travels, as "x,y,z"
    #[arg(long, allow_negative_numbers = true)]
    pub light_dir: Option<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

/// Parses `"x,y,z"` into a vector; whitespace around each number is ignored.
pub fn parse_vec3(s: &str) -> Result<nalgebra::Vector3<f32>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 comma-separated values, got '{}'", s));
    }
    let mut coords = [0.0f32; 3];
    for (coord, part) in coords.iter_mut().zip(&parts) {
        *coord = part
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("Invalid number '{}': {}", part, e))?;
    }
    Ok(nalgebra::Vector3::from(coords))
}
