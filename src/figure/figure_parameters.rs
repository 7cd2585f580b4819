use serde::{Serialize, Deserialize};
use std::{fmt, fs, path::Path};

use crate::{Float,FigureError,Result};
use crate::numerics::gauss::GaussianDensity;

/// Upper bound on simulated observations across all positions.
pub const MAX_OBSERVATIONS: usize = 1_000_000;

pub const DEFAULT_TITLE: &str = "Vertical Gaussian Distributions with Linear Trend through Means";

/// Straight line `mode = intercept + slope*position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub intercept: Float,
    pub slope: Float
}

impl Trend {
    pub fn mode_at(&self, position: Float) -> Float {
        self.intercept + self.slope*position
    }
}

/// Simulated draws from each conditional distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    pub per_position: usize,
    #[serde(default)]
    pub seed: u64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureParameters {
    pub std: Float,
    pub positions: Vec<Float>,
    pub modes: Option<Vec<Float>>,
    pub trend: Option<Trend>,
    pub samples: usize,
    pub sigma_span: Float,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
    pub observations: Option<Observations>
}

impl Default for FigureParameters {
    fn default() -> FigureParameters {
        FigureParameters {
            std: (2.0 as Float).sqrt(),
            positions: vec!(2.0, 4.0, 6.0),
            modes: Some(vec!(0.0, 2.0, 4.0)),
            trend: None,
            samples: 300,
            sigma_span: 4.0,
            title: String::from(DEFAULT_TITLE),
            x_desc: String::from("y"),
            y_desc: String::from("Density"),
            width: 1000,
            height: 600,
            observations: None
        }
    }
}

impl FigureParameters {
    pub fn from_yaml_str(yaml: &str) -> Result<FigureParameters> {
        let parameters: FigureParameters = serde_yaml::from_str(yaml)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<FigureParameters> {
        let yaml = fs::read_to_string(path)?;
        FigureParameters::from_yaml_str(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let peak = GaussianDensity::new(0.0, self.std)?.peak();

        if self.positions.is_empty() {
            return Err(FigureError::NoPositions);
        }
        if let Some(p) = self.positions.iter().find(|p| !p.is_finite()) {
            return Err(FigureError::InvalidParameter { name: "positions", reason: format!("{} is not finite", p) });
        }

        match (&self.trend, &self.modes) {
            (Some(trend), _) if !(trend.intercept.is_finite() && trend.slope.is_finite()) => {
                return Err(FigureError::InvalidParameter { name: "trend", reason: String::from("intercept and slope must be finite") })
            },
            (Some(_), _) => (),
            (None, Some(modes)) if modes.len() != self.positions.len() => {
                return Err(FigureError::ModeCountMismatch { positions: self.positions.len(), modes: modes.len() })
            },
            (None, Some(_)) => (),
            (None, None) => return Err(FigureError::MissingModes)
        };

        if self.samples < 2 {
            return Err(FigureError::InvalidParameter { name: "samples", reason: format!("need at least 2, got {}", self.samples) });
        }
        if !self.sigma_span.is_finite() || self.sigma_span <= 0.0 {
            return Err(FigureError::InvalidParameter { name: "sigma_span", reason: format!("must be finite and > 0, got {}", self.sigma_span) });
        }
        if self.width == 0 || self.height == 0 {
            return Err(FigureError::InvalidParameter { name: "width/height", reason: format!("{}x{} is empty", self.width, self.height) });
        }

        if !peak.is_finite() {
            return Err(FigureError::InvalidStd(self.std));
        }
        let half_width = self.sigma_span*self.std;
        if !half_width.is_finite() {
            return Err(FigureError::InvalidParameter { name: "sigma_span", reason: format!("sigma_span*std = {} is not finite", half_width) });
        }
        let modes = self.resolved_modes()?;
        if let Some(m) = modes.iter().find(|m| !m.is_finite()) {
            return Err(FigureError::InvalidMean(*m));
        }

        // support and position extents feed the chart ranges
        let lowest = modes.iter().cloned().fold(Float::INFINITY, Float::min) - half_width;
        let highest = modes.iter().cloned().fold(Float::NEG_INFINITY, Float::max) + half_width;
        if !(highest - lowest).is_finite() {
            return Err(FigureError::InvalidParameter { name: "sigma_span", reason: format!("support {}..{} is not finite", lowest, highest) });
        }
        let leftmost = self.positions.iter().cloned().fold(Float::INFINITY, Float::min);
        let rightmost = self.positions.iter().cloned().fold(Float::NEG_INFINITY, Float::max) + peak;
        if !(rightmost - leftmost).is_finite() {
            return Err(FigureError::InvalidParameter { name: "positions", reason: format!("extent {}..{} is not finite", leftmost, rightmost) });
        }

        if let Some(observations) = &self.observations {
            match observations.per_position.checked_mul(self.positions.len()) {
                Some(total) if total <= MAX_OBSERVATIONS => (),
                _ => return Err(FigureError::InvalidParameter {
                    name: "observations",
                    reason: format!("{} per position over {} positions exceeds {}", observations.per_position, self.positions.len(), MAX_OBSERVATIONS)
                })
            }
        }

        Ok(())
    }

    /// A trend, when given, wins over the explicit modes.
    pub fn resolved_modes(&self) -> Result<Vec<Float>> {
        match (&self.trend, &self.modes) {
            (Some(trend), _) => Ok(self.positions.iter().map(|&p| trend.mode_at(p)).collect()),
            (None, Some(modes)) => Ok(modes.clone()),
            (None, None) => Err(FigureError::MissingModes)
        }
    }
}

impl fmt::Display for FigureParameters {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        let mut display = format!("std_{:+e}_n_{}_s_{}",self.std,self.positions.len(),self.samples);
        match &self.trend {
            Some(trend) => display.push_str(format!("_trend_{:+e}_{:+e}",trend.intercept,trend.slope).as_str()),
            _ => display.push_str("_modes")
        };
        if let Some(observations) = &self.observations {
            display.push_str(format!("_obs_{}_seed_{}",observations.per_position,observations.seed).as_str());
        }
        write!(f, "{}", display)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_file_name_safe() {
        let tag = FigureParameters::default().to_string();
        assert!(tag.starts_with("std_"));
        assert!(!tag.contains(' '));
        assert!(!tag.contains('/'));
    }

    #[test]
    fn trend_mode() {
        let trend = Trend { intercept: -2.0, slope: 1.0 };
        assert_eq!(trend.mode_at(6.0), 4.0);
    }
}
