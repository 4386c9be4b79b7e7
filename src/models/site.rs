//! Site positions.

/// A site (depot or delivery stop) with a 2-D position.
///
/// Positions are only needed to generate a network or to draw it; the
/// solvers work on the distance matrices alone.
///
/// # Examples
///
/// ```
/// use fuel_routing::models::Site;
///
/// let depot = Site::depot();
/// let stop = Site::new(1, 3.0, 4.0);
/// assert_eq!(depot.id(), 0);
/// assert!((depot.distance_to(&stop) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Site {
    id: usize,
    x: f64,
    y: f64,
}

impl Site {
    /// Creates a site at the given coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates the depot at the origin.
    pub fn depot() -> Self {
        Self::new(super::DEPOT, 0.0, 0.0)
    }

    /// Site index (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.id == super::DEPOT
    }

    /// Euclidean distance to another site.
    pub fn distance_to(&self, other: &Site) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
