extern crate nalgebra as na;

use na::DVector;
use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Normal};
use std::ops::Range;
use tracing::{debug, info};

use crate::{Float,float,FigureError,Result};
use crate::numerics::{get_min_max, trapezoid, gauss::GaussianDensity};

pub mod figure_parameters;

pub use figure_parameters::{FigureParameters, Observations, Trend};

const RANGE_PADDING: Float = 0.05;

/// One conditional density, laid on its side at `position`.
#[derive(Debug, Clone)]
pub struct ConditionalCurve {
    pub position: Float,
    pub mode: Float,
    /// Values along the vertical axis.
    pub support: DVector<Float>,
    /// `density + position` for every support value.
    pub offsets: DVector<Float>,
    /// Probability mass covered by `support`.
    pub mass: Float
}

impl ConditionalCurve {
    pub fn new(gauss: &GaussianDensity, position: Float, sigma_span: Float, samples: usize) -> ConditionalCurve {
        let support = gauss.support(sigma_span, samples);
        let density = gauss.evaluate(&support);
        let mass = trapezoid(&support, &density);
        let offsets = density.add_scalar(position);
        ConditionalCurve {position, mode: gauss.mean(), support, offsets, mass}
    }

    pub fn points(&self) -> impl Iterator<Item = (Float,Float)> + '_ {
        self.offsets.iter().zip(self.support.iter()).map(|(&x, &y)| (x, y))
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
    pub curves: Vec<ConditionalCurve>,
    /// Observed (position, value) pairs, empty unless requested.
    pub observations: Vec<(Float,Float)>
}

impl Figure {
    pub fn new(parameters: &FigureParameters) -> Result<Figure> {
        parameters.validate()?;
        let modes = parameters.resolved_modes()?;

        let curves = parameters.positions.iter().zip(modes.iter()).map(|(&position, &mode)| {
            let gauss = GaussianDensity::new(mode, parameters.std)?;
            let curve = ConditionalCurve::new(&gauss, position, parameters.sigma_span, parameters.samples);
            debug!(position, mode, mass = curve.mass, "conditional curve");
            Ok(curve)
        }).collect::<Result<Vec<ConditionalCurve>>>()?;

        let observations = match &parameters.observations {
            Some(observations) => simulate_observations(&curves, parameters.std, observations)?,
            None => Vec::new()
        };

        info!(curves = curves.len(), observations = observations.len(), "built figure {}", parameters);

        Ok(Figure {
            title: parameters.title.clone(),
            x_desc: parameters.x_desc.clone(),
            y_desc: parameters.y_desc.clone(),
            width: parameters.width,
            height: parameters.height,
            curves,
            observations
        })
    }

    pub fn modes(&self) -> Vec<(Float,Float)> {
        self.curves.iter().map(|c| (c.position, c.mode)).collect()
    }

    /// Polyline through the modes, in the order the positions were given.
    pub fn trend(&self) -> Vec<(Float,Float)> {
        self.modes()
    }

    pub fn x_range(&self) -> Range<Float> {
        let positions = DVector::from_iterator(self.curves.len(), self.curves.iter().map(|c| c.position));
        let observed = DVector::from_iterator(self.observations.len(), self.observations.iter().map(|o| o.0));
        let mut series = self.curves.iter().map(|c| &c.offsets).collect::<Vec<_>>();
        series.push(&positions);
        series.push(&observed);
        padded(get_min_max(series))
    }

    pub fn y_range(&self) -> Range<Float> {
        let modes = DVector::from_iterator(self.curves.len(), self.curves.iter().map(|c| c.mode));
        let observed = DVector::from_iterator(self.observations.len(), self.observations.iter().map(|o| o.1));
        let mut series = self.curves.iter().map(|c| &c.support).collect::<Vec<_>>();
        series.push(&modes);
        series.push(&observed);
        padded(get_min_max(series))
    }
}

fn padded((min,max): (Float,Float)) -> Range<Float> {
    let pad = RANGE_PADDING*(max - min);
    (min - pad).max(float::MIN)..(max + pad).min(float::MAX)
}

fn simulate_observations(curves: &[ConditionalCurve], std: Float, observations: &Observations) -> Result<Vec<(Float,Float)>> {
    let total = curves.len().checked_mul(observations.per_position).ok_or_else(|| FigureError::InvalidParameter {
        name: "observations",
        reason: format!("{} per position overflows", observations.per_position)
    })?;
    let mut rng = SmallRng::seed_from_u64(observations.seed);
    let mut points = Vec::with_capacity(total);
    for curve in curves {
        let normal = Normal::new(curve.mode, std).map_err(|_| FigureError::InvalidStd(std))?;
        points.extend(normal.sample_iter(&mut rng).take(observations.per_position).map(|v| (curve.position, v)));
    }
    Ok(points)
}
