use crate::args::{Args, parse_vec3};
use crate::shading::DirectionalLight;
use crate::triangle::FillMethod;
use clap::ValueEnum;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_OBJ: &str = "obj/diamond.obj";
pub const DEFAULT_OUTPUT: &str = "output.tga";

/// What a render pass draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Face edges as white lines
    Wireframe,
    /// Faces filled with flat lighting, back faces culled
    #[default]
    Flat,
    /// Faces filled with a random color each
    Random,
    /// Three fixed demo triangles, no model needed
    Triangles,
    /// Side view of three segments through the y-buffer, as a strip
    Ybuffer,
}

impl RenderMode {
    pub fn needs_model(self) -> bool {
        matches!(
            self,
            RenderMode::Wireframe | RenderMode::Flat | RenderMode::Random
        )
    }

    fn default_size(self) -> (usize, usize) {
        match self {
            RenderMode::Triangles => (200, 200),
            RenderMode::Ybuffer => (800, 16),
            _ => (800, 800),
        }
    }
}

/// Settings for one render pass, after merging defaults, config file and CLI.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub obj: String,
    pub output: String,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub mode: RenderMode,
    pub fill: FillMethod,
    pub light_dir: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            obj: DEFAULT_OBJ.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            width: None,
            height: None,
            mode: RenderMode::default(),
            fill: FillMethod::default(),
            light_dir: "0,0,-1".to_string(),
        }
    }
}

impl RenderSettings {
    /// Canvas size; unset dimensions fall back to the mode's default.
    pub fn dimensions(&self) -> (usize, usize) {
        let (w, h) = self.mode.default_size();
        (self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    pub fn light(&self) -> Result<DirectionalLight, String> {
        let direction =
            parse_vec3(&self.light_dir).map_err(|e| format!("Invalid light_dir: {}", e))?;
        DirectionalLight::new(direction)
            .ok_or_else(|| format!("Invalid light_dir '{}': zero length", self.light_dir))
    }

    /// Defaults, then the config file named by `--config`, then explicit CLI flags.
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let mut settings = match &args.config {
            Some(path) => TomlConfigLoader::load_from_file(path)?,
            None => RenderSettings::default(),
        };

        if let Some(obj) = &args.obj {
            settings.obj = obj.clone();
        }
        if let Some(output) = &args.output {
            settings.output = output.clone();
        }
        if args.width.is_some() {
            settings.width = args.width;
        }
        if args.height.is_some() {
            settings.height = args.height;
        }
        if let Some(mode) = args.mode {
            settings.mode = mode;
        }
        if let Some(fill) = args.fill {
            settings.fill = fill;
        }
        if let Some(light_dir) = &args.light_dir {
            settings.light_dir = light_dir.clone();
        }

        settings.validate()?;
        debug!("Render settings: {:?}", settings);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(format!("Invalid image size {}x{}", width, height));
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(format!("Image size {}x{} is too large", width, height));
        }
        self.light().map(|_| ())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    files: FilesSection,
    render: RenderSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FilesSection {
    obj: Option<String>,
    output: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RenderSection {
    width: Option<usize>,
    height: Option<usize>,
    mode: Option<RenderMode>,
    fill: Option<FillMethod>,
    light_dir: Option<String>,
}

/// Reads render settings from TOML. Missing keys keep their defaults.
///
/// ```toml
/// [files]
/// obj = "obj/diamond.obj"
/// output = "output.tga"
///
/// [render]
/// width = 800
/// height = 800
/// mode = "flat"          # wireframe | flat | random | triangles | ybuffer
/// fill = "scanline"      # barycentric | scanline
/// light_dir = "0,0,-1"
/// ```
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings, String> {
        let path_ref = path.as_ref();
        info!("Loading config file: {:?}", path_ref);
        let content = std::fs::read_to_string(path_ref)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path_ref, e))?;
        Self::load_from_content(&content)
    }

    pub fn load_from_content(content: &str) -> Result<RenderSettings, String> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| format!("Failed to parse TOML: {}", e))?;

        let mut settings = RenderSettings::default();
        if let Some(obj) = file.files.obj {
            settings.obj = obj;
        }
        if let Some(output) = file.files.output {
            settings.output = output;
        }
        settings.width = file.render.width;
        settings.height = file.render.height;
        if let Some(mode) = file.render.mode {
            settings.mode = mode;
        }
        if let Some(fill) = file.render.fill {
            settings.fill = fill;
        }
        if let Some(light_dir) = file.render.light_dir {
            settings.light_dir = light_dir;
        }
        Ok(settings)
    }
}
