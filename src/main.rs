use clap::Parser;
use log::{error, info};
use phong_shade::app;
use phong_shade::io::config::Config;

/// Flat-shades a triangle mesh with the Phong lighting model.
#[derive(Parser, Debug)]
#[command(name = "phong-shade")]
#[command(about = "Per-face Phong lighting for triangle meshes")]
struct Cli {
    /// Scene configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// OBJ mesh to shade, overrides [mesh].path
    #[arg(long, value_name = "FILE")]
    obj: Option<String>,

    /// PNG swatch sheet to write, overrides [output].path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Specular exponent, overrides [lighting].shininess
    #[arg(long)]
    shininess: Option<f32>,

    /// Skip degenerate faces instead of aborting
    #[arg(long)]
    skip_degenerate: bool,
}

fn main() -> Result<(), String> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let mut config = if let Some(path) = &cli.config {
        info!("Loading config file: {}", path);
        Config::load(path).map_err(|e| {
            error!("{}", e);
            "Failed to load config".to_string()
        })?
    } else {
        info!("Using default settings");
        Config::default()
    };

    if let Some(obj) = cli.obj {
        config.mesh.path = Some(obj);
    }
    if let Some(output) = cli.output {
        config.output.path = Some(output);
    }
    if let Some(shininess) = cli.shininess {
        config.lighting.shininess = shininess;
    }
    config.mesh.skip_degenerate |= cli.skip_degenerate;

    let faces = app::run(&config).map_err(|e| {
        error!("{}", e);
        "Shading failed".to_string()
    })?;

    info!("Done. {} faces shaded.", faces.len());
    Ok(())
}
