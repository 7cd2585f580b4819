use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use conditional_gauss::figure::{Figure, FigureParameters, Observations, Trend};
use conditional_gauss::visualize::plot;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let parameters = FigureParameters {
        positions: vec!(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0),
        modes: None,
        trend: Some(Trend { intercept: -2.0, slope: 1.0 }),
        observations: Some(Observations { per_position: 40, seed: 7 }),
        title: String::from("Simulated Observations around a Linear Trend"),
        ..FigureParameters::default()
    };

    let figure = Figure::new(&parameters)?;
    plot::draw_figure(&figure, "output", "observations.svg")?;
    Ok(())
}
