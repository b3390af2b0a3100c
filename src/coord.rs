use serde::{Deserialize, Serialize};
use bincode::{Encode, Decode};

/// A point in the complex plane: `re` + `im`·i.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Coord {
    pub re: f64,
    pub im: f64,
}

impl Coord {
    pub fn new(re: f64, im: f64) -> Self {
        Coord { re, im }
    }

    /// Euclidean distance to another point.
    pub fn dist(&self, other: Coord) -> f64 {
        let dr = self.re - other.re;
        let di = self.im - other.im;
        (dr * dr + di * di).sqrt()
    }

    /// Both components are ordinary numbers (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}
