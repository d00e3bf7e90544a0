use crate::constants::{DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_WIDTH, VERSION};
use crate::types::AppConfig;
use crate::utils::{collect_png_jobs, hex_to_rgba, prepare_output_dir};

use clap::{App, Arg};
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

#[derive(Debug, Deserialize)]
struct SerializedAppConfig {
    outline_width: String,
    outline_color: String,
}

fn load_config(config_path: Option<&str>) -> Result<SerializedAppConfig, config::ConfigError> {
    let mut builder = ConfigBuilder::default();

    builder = builder
        .set_default("outline_width", DEFAULT_OUTLINE_WIDTH)?
        .set_default("outline_color", DEFAULT_OUTLINE_COLOR)?;

    let default_config_path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from(""))
        .join(".config/icon-outliner/config.toml");

    if default_config_path.exists() {
        builder = ConfigBuilder::<DefaultState>::add_source(
            builder,
            File::from(default_config_path).required(false),
        );
    }

    if let Some(path) = config_path {
        builder = builder.add_source(File::with_name(path).required(true));
    }

    let config = builder.build()?;

    config.try_deserialize()
}

pub fn init() -> Result<AppConfig> {
    let matches = App::new("Icon Outliner")
        .version(VERSION)
        .author("Taylor Beeston")
        .about("Gives transparent PNG icons a soft glowing outline")
        .after_help("Config should be a TOML that contains an Outline Width and an Outline Color.\n\nOutline Width is a positive integer number of pixels. It sets how much transparent padding is added around each icon and how far the glow bleeds past the silhouette. Outline Color is a '#RRGGBB' or '#RRGGBBAA' hex string used as the flat color of the glow. Outlined copies are written to an 'outlined' subdirectory inside the target folder, one per PNG, keeping filenames.")
        .arg(
            Arg::with_name("Outline Width")
                .short('w')
                .long("outline-width")
                .value_name("PIXELS")
                .help("[1+] Overrides the outline width set in config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Outline Color")
                .long("outline-color")
                .value_name("HEX")
                .help("[#RRGGBB|#RRGGBBAA] Overrides the outline color set in config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .short('c')
                .long("config")
                .value_name("/path/to/config.toml")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("Folder Path")
                .help("Folder whose PNGs you'd like to outline")
                .required(true)
                .index(1),
        )
        .get_matches();

    let config = load_config(matches.value_of("config"))?;
    let folder_path = Path::new(matches.value_of("Folder Path").unwrap());

    let outline_width = matches
        .value_of("Outline Width")
        .unwrap_or(&config.outline_width);

    let outline_width: u32 = outline_width
        .parse()
        .map_err(|e| anyhow!("Failed to parse outline_width: {}", e))?;

    if outline_width == 0 {
        return Err(anyhow!(
            "outline_width must be at least 1, a zero-width outline would be invisible"
        ));
    }

    let outline_color = matches
        .value_of("Outline Color")
        .unwrap_or(&config.outline_color);

    let outline_color = hex_to_rgba(outline_color)?;

    let output_dir = prepare_output_dir(folder_path)?;
    let input_output_pairs = collect_png_jobs(folder_path, &output_dir)?;

    Ok(AppConfig {
        input_output_pairs,
        outline_width,
        outline_color,
    })
}
