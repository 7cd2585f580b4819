use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use conditional_gauss::figure::{Figure, FigureParameters};
use conditional_gauss::visualize::plot;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let parameters = FigureParameters::default();
    let figure = Figure::new(&parameters)?;
    plot::draw_figure(&figure, "output", "abc_assumption.png")?;
    Ok(())
}
