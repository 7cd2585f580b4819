use color_eyre::eyre::{eyre, Result};
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use conditional_gauss::figure::{Figure, FigureParameters};
use conditional_gauss::visualize::plot;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = env::args().collect::<Vec<String>>();
    let config_path = args.get(1).ok_or_else(|| eyre!("usage: from_config <config.yaml> [output_folder] [file_name]"))?;
    let output_folder = args.get(2).map(|s| s.as_str()).unwrap_or("output");

    let parameters = FigureParameters::from_yaml_file(config_path)?;
    let file_name = match args.get(3) {
        Some(name) => name.clone(),
        None => format!("conditional_gauss_{}.png", parameters)
    };

    let figure = Figure::new(&parameters)?;
    plot::draw_figure(&figure, output_folder, &file_name)?;
    Ok(())
}
