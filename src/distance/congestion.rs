//! Congestion factors.

use rand::Rng;

use crate::error::ConfigError;

/// Bounds for congestion factors. `1.0` is free-flowing traffic, `2.0`
/// doubles the effective distance.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::CongestionRange;
///
/// let range = CongestionRange::default();
/// assert_eq!((range.min, range.max), (1.0, 2.0));
/// assert!(range.validate().is_ok());
/// assert!(CongestionRange::new(2.0, 1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CongestionRange {
    /// Smallest factor.
    pub min: f64,
    /// Largest factor.
    pub max: f64,
}

impl CongestionRange {
    /// Creates a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Checks `0 <= min <= max`, both finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 || self.min > self.max {
            return Err(ConfigError::InvalidCongestionRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns `true` if `factor` lies within the range.
    pub fn contains(&self, factor: f64) -> bool {
        factor >= self.min && factor <= self.max
    }
}

impl Default for CongestionRange {
    fn default() -> Self {
        Self { min: 1.0, max: 2.0 }
    }
}

/// Symmetric per-edge congestion factors. The diagonal is unused and set
/// to `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CongestionMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CongestionMatrix {
    /// A matrix with every factor equal to `1.0` (no congestion).
    pub fn uniform(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    /// Draws every edge factor uniformly from `range`.
    pub fn random<R: Rng>(size: usize, range: CongestionRange, rng: &mut R) -> Result<Self, ConfigError> {
        range.validate()?;
        let mut cm = Self::uniform(size);
        for i in 0..size {
            for j in (i + 1)..size {
                let factor = rng.random_range(range.min..=range.max);
                cm.set(i, j, factor);
                cm.set(j, i, factor);
            }
        }
        Ok(cm)
    }

    /// Creates a congestion matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, ConfigError> {
        if data.len() != size * size {
            return Err(ConfigError::WrongDataLength {
                len: data.len(),
                expected: size * size,
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the factor on edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, factor: f64) {
        self.data[from * self.size + to] = factor;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks that off-diagonal factors are symmetric and inside `range`.
    pub fn validate(&self, range: &CongestionRange) -> Result<(), ConfigError> {
        range.validate()?;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if (a - b).abs() > 1e-9 {
                    return Err(ConfigError::AsymmetricMatrix { i, j, a, b });
                }
                if !range.contains(a) {
                    return Err(ConfigError::CongestionOutOfRange {
                        i,
                        j,
                        value: a,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }
        Ok(())
    }
}
