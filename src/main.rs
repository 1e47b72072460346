use clap::Parser;
use log::info;
use rasterizer::args::Args;
use rasterizer::config::RenderSettings;
use rasterizer::renderer::render_pass;
use std::time::Instant;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<(), String> {
    init_logging();
    let args = Args::parse();
    let start_time = Instant::now();

    let settings = RenderSettings::from_args(&args)?;
    let mut canvas = render_pass(&settings)?;

    // Origin at the bottom-left while drawing, top-left in the file.
    canvas.flip_vertically();
    canvas.write_file(&settings.output)?;

    info!("Total execution time: {:?}", start_time.elapsed());
    Ok(())
}
