//! Tour type.

use super::DEPOT;

/// An ordered visiting sequence: depot, every stop once, depot.
///
/// A tour is only a candidate. Whether it is well formed and what it costs
/// is decided by [`TourEvaluator`](crate::evaluation::TourEvaluator); the
/// tour itself stores neither.
///
/// # Examples
///
/// ```
/// use fuel_routing::models::Tour;
///
/// let tour = Tour::from_stops(&[2, 1, 3]);
/// assert_eq!(tour.sites(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.stops(), &[2, 1, 3]);
/// assert_eq!(tour.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Tour {
    sites: Vec<usize>,
}

impl Tour {
    /// Wraps a raw site sequence without checking it.
    pub fn new(sites: Vec<usize>) -> Self {
        Self { sites }
    }

    /// Builds a tour from the stop order, adding the depot at both ends.
    pub fn from_stops(stops: &[usize]) -> Self {
        let mut sites = Vec::with_capacity(stops.len() + 2);
        sites.push(DEPOT);
        sites.extend_from_slice(stops);
        sites.push(DEPOT);
        Self { sites }
    }

    /// The full site sequence, depots included.
    pub fn sites(&self) -> &[usize] {
        &self.sites
    }

    /// The stops between the two depot visits.
    ///
    /// Empty when the tour has fewer than two sites.
    pub fn stops(&self) -> &[usize] {
        if self.sites.len() < 2 {
            &[]
        } else {
            &self.sites[1..self.sites.len() - 1]
        }
    }

    /// Number of sites in the sequence, depots included.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Returns `true` if the sequence starts and ends at the depot.
    pub fn is_depot_anchored(&self) -> bool {
        self.sites.len() >= 2
            && self.sites.first() == Some(&DEPOT)
            && self.sites.last() == Some(&DEPOT)
    }

    /// Consecutive `(from, to)` legs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sites.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consumes the tour, returning the site sequence.
    pub fn into_sites(self) -> Vec<usize> {
        self.sites
    }
}

impl From<Vec<usize>> for Tour {
    fn from(sites: Vec<usize>) -> Self {
        Self::new(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stops() {
        let t = Tour::from_stops(&[3, 1, 2]);
        assert_eq!(t.sites(), &[0, 3, 1, 2, 0]);
        assert!(t.is_depot_anchored());
        assert_eq!(t.legs().collect::<Vec<_>>(), vec![(0, 3), (3, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_stops_of_degenerate() {
        assert!(Tour::new(vec![]).stops().is_empty());
        assert!(Tour::new(vec![0]).stops().is_empty());
        assert!(!Tour::new(vec![0]).is_depot_anchored());
        assert!(!Tour::new(vec![1, 2, 0]).is_depot_anchored());
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let t = Tour::from_stops(&[1, 2]);
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, "[0,1,2,0]");
    }
}
