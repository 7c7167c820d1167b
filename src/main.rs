use anyhow::{Context, Result};
use downpage::Config;
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let context = downpage::build_context(&config).context("Failed to assemble page context")?;
    let html = downpage::pages::maintenance::render(&context);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    downpage::write_css_assets(&assets_dir)?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write maintenance page: {}", index_path.display()))?;

    println!("Maintenance page written to {}", index_path.display());

    if config.open {
        open::that(&index_path).context("Failed to open page in browser")?;
    }

    Ok(())
}
