extern crate nalgebra as na;

use na::DVector;
use crate::{Float,float,FigureError,Result};
use float::consts::PI;
use super::linspace;

/// Normal density with a fixed mean and standard deviation.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GaussianDensity {
    mean: Float,
    std: Float
}

impl GaussianDensity {
    pub fn new(mean: Float, std: Float) -> Result<GaussianDensity> {
        if !mean.is_finite() {
            return Err(FigureError::InvalidMean(mean));
        }
        if !std.is_finite() || std <= 0.0 {
            return Err(FigureError::InvalidStd(std));
        }
        Ok(GaussianDensity {mean, std})
    }

    pub fn mean(&self) -> Float {
        self.mean
    }

    pub fn std(&self) -> Float {
        self.std
    }

    pub fn variance(&self) -> Float {
        self.std.powi(2)
    }

    pub fn sample(&self, x: Float) -> Float {
        let exponent = (-0.5*((x-self.mean)/self.std).powi(2)).exp();
        let factor = 1.0/(self.std*(2.0*PI).sqrt());
        factor*exponent
    }

    /// Density at the mode.
    pub fn peak(&self) -> Float {
        self.sample(self.mean)
    }

    pub fn evaluate(&self, grid: &DVector<Float>) -> DVector<Float> {
        grid.map(|x| self.sample(x))
    }

    /// Evenly spaced grid over `mean ± sigma_span*std`.
    pub fn support(&self, sigma_span: Float, samples: usize) -> DVector<Float> {
        let half_width = sigma_span*self.std;
        linspace(self.mean - half_width, self.mean + half_width, samples)
    }
}
