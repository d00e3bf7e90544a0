use std::path::PathBuf;

use image::Rgba;

#[derive(Debug)]
pub struct AppConfig {
    pub input_output_pairs: Vec<(PathBuf, PathBuf)>,
    pub outline_width: u32,
    pub outline_color: Rgba<u8>,
}
