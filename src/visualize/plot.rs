extern crate plotters;

use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::series::DashedLineSeries;
use std::{fs, path::Path};
use tracing::info;

use crate::Result;
use crate::figure::Figure;

const CURVE_COLOR: RGBColor = BLUE;
const MODE_COLOR: RGBColor = RED;
const TREND_COLOR: RGBColor = BLACK;
const OBSERVATION_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Writes the figure to `output_folder/file_name`. A `.svg` extension selects
/// the SVG backend, everything else is rasterized.
pub fn draw_figure(figure: &Figure, output_folder: &str, file_name: &str) -> Result<String> {
    fs::create_dir_all(output_folder)?;
    let path = format!("{}/{}",output_folder,file_name);
    let size = (figure.width, figure.height);

    match is_svg(file_name) {
        true => draw_on(SVGBackend::new(&path, size).into_drawing_area(), figure)?,
        false => draw_on(BitMapBackend::new(&path, size).into_drawing_area(), figure)?
    };

    info!("wrote {}", path);
    Ok(path)
}

fn is_svg(file_name: &str) -> bool {
    Path::new(file_name).extension().map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
}

pub fn draw_on<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption(&figure.title, ("sans-serif", 24))
        .build_cartesian_2d(figure.x_range(), figure.y_range())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(figure.x_desc.as_str())
        .y_desc(figure.y_desc.as_str())
        .draw()?;

    for curve in &figure.curves {
        chart.draw_series(
            LineSeries::new(curve.points(), CURVE_COLOR.stroke_width(2))
        )?;
    }

    chart.draw_series(
        figure.observations.iter().map(|&point| Circle::new(point, 2, OBSERVATION_COLOR.filled()))
    )?;

    chart.draw_series(
        DashedLineSeries::new(figure.trend(), 10, 6, TREND_COLOR.stroke_width(2))
    )?;

    chart.draw_series(
        figure.modes().into_iter().map(|point| Circle::new(point, 5, MODE_COLOR.filled()))
    )?;

    root.present()?;
    Ok(())
}
