mod config;
mod constants;
mod outline;
mod types;
mod utils;

use crate::config::init;
use crate::outline::outline;
use crate::types::AppConfig;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> Result<()> {
    let config = init()?;

    let results: Vec<Result<()>> = config
        .input_output_pairs
        .iter()
        .map(|(input_path, output_path)| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message(format!("Processing: {}", input_path.display()));

            let result = process_image(input_path, output_path, &config, &pb);

            if result.is_ok() {
                pb.finish_with_message(format!("✅ Outlined saved: {}", output_path.display()));
            } else {
                pb.finish_with_message(format!("Failed: {}", input_path.display()));
            }

            result
        })
        .collect();

    // Check for any errors
    results.into_iter().collect::<Result<Vec<_>, _>>()?;

    Ok(())
}

fn process_image(
    input_path: &Path,
    output_path: &Path,
    config: &AppConfig,
    pb: &ProgressBar,
) -> Result<()> {
    let img = image::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let final_output = outline(&img, config, pb);
    final_output
        .save(output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;
    Ok(())
}
