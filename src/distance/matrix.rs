//! Dense distance matrix.

use crate::error::{ConfigError, NetworkError};
use crate::models::Site;

use super::CongestionMatrix;

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports Euclidean distance computation from site coordinates and
/// explicit distance import.
///
/// # Examples
///
/// ```
/// use fuel_routing::models::Site;
/// use fuel_routing::distance::DistanceMatrix;
///
/// let sites = vec![Site::depot(), Site::new(1, 3.0, 4.0), Site::new(2, 6.0, 8.0)];
/// let dm = DistanceMatrix::from_sites(&sites);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from site coordinates.
    pub fn from_sites(sites: &[Site]) -> Self {
        let n = sites.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = sites[i].distance_to(&sites[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, ConfigError> {
        if data.len() != size * size {
            return Err(ConfigError::WrongDataLength {
                len: data.len(),
                expected: size * size,
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Fails if any row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ConfigError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(ConfigError::NonSquareMatrix {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance, or an error if either index is out of range.
    pub fn try_get(&self, from: usize, to: usize) -> Result<f64, NetworkError> {
        for site in [from, to] {
            if site >= self.size {
                return Err(NetworkError::SiteOutOfRange {
                    site,
                    num_sites: self.size,
                });
            }
        }
        Ok(self.get(from, to))
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that the matrix is a usable base distance matrix: finite,
    /// non-negative, zero diagonal and symmetric within `tol`.
    pub fn validate(&self, tol: f64) -> Result<(), ConfigError> {
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.get(i, j);
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteValue { i, j });
                }
                if value < 0.0 {
                    return Err(ConfigError::NegativeDistance { i, j, value });
                }
            }
            let diagonal = self.get(i, i);
            if diagonal.abs() > tol {
                return Err(ConfigError::NonZeroDiagonal {
                    site: i,
                    value: diagonal,
                });
            }
        }
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if (a - b).abs() > tol {
                    return Err(ConfigError::AsymmetricMatrix { i, j, a, b });
                }
            }
        }
        Ok(())
    }

    /// Element-wise product with a congestion matrix of the same size.
    pub fn scaled_by(&self, congestion: &CongestionMatrix) -> Result<Self, ConfigError> {
        if congestion.size() != self.size {
            return Err(ConfigError::SizeMismatch {
                what: "congestion matrix",
                found: congestion.size(),
                expected: self.size,
            });
        }
        let mut adjusted = self.clone();
        for i in 0..self.size {
            for j in 0..self.size {
                adjusted.set(i, j, self.get(i, j) * congestion.get(i, j));
            }
        }
        Ok(adjusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sites() -> Vec<Site> {
        vec![Site::depot(), Site::new(1, 3.0, 4.0), Site::new(2, 0.0, 8.0)]
    }

    #[test]
    fn test_from_sites() {
        let dm = DistanceMatrix::from_sites(&sample_sites());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert!(dm.validate(1e-9).is_ok());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(matches!(
            DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]),
            Err(ConfigError::WrongDataLength { len: 3, expected: 4 })
        ));
    }

    #[test]
    fn test_from_rows_non_square() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            DistanceMatrix::from_rows(&rows),
            Err(ConfigError::NonSquareMatrix { row: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_try_get_out_of_range() {
        let dm = DistanceMatrix::from_sites(&sample_sites());
        assert_eq!(
            dm.try_get(0, 3),
            Err(NetworkError::SiteOutOfRange {
                site: 3,
                num_sites: 3
            })
        );
        assert!(dm.try_get(2, 1).is_ok());
    }

    #[test]
    fn test_validate_rejects_asymmetric() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
        assert!(matches!(
            dm.validate(1e-10),
            Err(ConfigError::AsymmetricMatrix { i: 0, j: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, -1.0, -1.0, 0.0]).expect("len");
        assert!(matches!(
            dm.validate(1e-10),
            Err(ConfigError::NegativeDistance { .. })
        ));
        let dm = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, f64::NAN, 0.0]).expect("len");
        assert!(matches!(
            dm.validate(1e-10),
            Err(ConfigError::NonFiniteValue { .. })
        ));
        let dm = DistanceMatrix::from_data(2, vec![1.0, 2.0, 2.0, 0.0]).expect("len");
        assert!(matches!(
            dm.validate(1e-10),
            Err(ConfigError::NonZeroDiagonal { site: 0, .. })
        ));
    }

    #[test]
    fn test_scaled_by() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 10.0, 0.0]).expect("len");
        let cm = CongestionMatrix::from_data(2, vec![1.0, 1.5, 1.5, 1.0]).expect("len");
        let adjusted = dm.scaled_by(&cm).expect("same size");
        assert!((adjusted.get(0, 1) - 15.0).abs() < 1e-10);
        assert_eq!(adjusted.get(0, 0), 0.0);
        assert!(dm.scaled_by(&CongestionMatrix::uniform(3)).is_err());
    }
}
