pub mod error;
pub mod numerics;
pub mod figure;
pub mod visualize;

pub use error::{FigureError, Result};

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);
