extern crate nalgebra as na;

use na::DVector;
use crate::{Float,float};

pub mod gauss;

/// `samples` evenly spaced values from `start` to `end`, both endpoints included.
pub fn linspace(start: Float, end: Float, samples: usize) -> DVector<Float> {
    match samples {
        0 => DVector::<Float>::zeros(0),
        1 => DVector::<Float>::from_element(1, start),
        _ => {
            let step = (end - start)/((samples - 1) as Float);
            DVector::<Float>::from_fn(samples, |i, _| match i {
                i if i == samples - 1 => end,
                i => start + step*(i as Float)
            })
        }
    }
}

pub fn trapezoid(xs: &DVector<Float>, ys: &DVector<Float>) -> Float {
    assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return 0.0;
    }

    (0..xs.len()-1).map(|i| 0.5*(ys[i] + ys[i+1])*(xs[i+1] - xs[i])).sum()
}

pub fn get_min_max<'a, I>(data_vectors: I) -> (Float,Float) where I: IntoIterator<Item = &'a DVector<Float>> {

    let mut min = float::MAX;
    let mut max = float::MIN;

    for data in data_vectors {
        for &v in data.iter() {
            if v < min {
                min = v;
            }

            if v > max {
                max = v;
            }
        }
    }

    if (max-min) < 1e-5 {
        max = min + 1e-5;
    }

    (min,max)
}
