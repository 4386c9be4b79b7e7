//! Tour failures and solver outcomes.

use thiserror::Error;

use super::Tour;

/// Why a tour was rejected.
///
/// The first five variants mean the tour does not cover the right site set;
/// the last two mean it covers the right sites but runs out of fuel or loses
/// the guarantee of getting home.
#[derive(Error, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TourFailure {
    /// The tour does not start and end at the depot.
    #[error("wrong site set: tour must start and end at the depot")]
    NotDepotAnchored,
    /// A site index outside the network.
    #[error("wrong site set: site {site} does not exist")]
    UnknownSite {
        /// Offending site index.
        site: usize,
    },
    /// The depot appears between the first and last position.
    #[error("wrong site set: depot visited mid-tour at position {position}")]
    InteriorDepotVisit {
        /// Position in the site sequence.
        position: usize,
    },
    /// A stop appears more than once.
    #[error("wrong site set: stop {site} is visited more than once")]
    RepeatedStop {
        /// Repeated stop.
        site: usize,
    },
    /// The number of visited stops differs from the number of stops.
    #[error("wrong site set: expected {expected} stops, found {found}")]
    WrongStopCount {
        /// Stops in the network.
        expected: usize,
        /// Stops in the tour.
        found: usize,
    },
    /// A leg needs more fuel than remains.
    #[error("insufficient fuel for leg {from} -> {to} (need {needed:.1}, have {available:.1})")]
    InsufficientFuel {
        /// Leg origin.
        from: usize,
        /// Leg destination.
        to: usize,
        /// Fuel the leg needs.
        needed: f64,
        /// Fuel left before the leg.
        available: f64,
    },
    /// After delivering at `site`, the direct return leg is out of reach.
    #[error("cannot guarantee return to depot from stop {site} (need {needed:.1}, have {available:.1})")]
    CannotReturn {
        /// Stop just served.
        site: usize,
        /// Fuel the return leg needs.
        needed: f64,
        /// Fuel left at the stop.
        available: f64,
    },
}

impl TourFailure {
    /// Returns `true` if the tour does not visit the right set of sites.
    pub fn is_site_set_error(&self) -> bool {
        matches!(
            self,
            Self::NotDepotAnchored
                | Self::UnknownSite { .. }
                | Self::InteriorDepotVisit { .. }
                | Self::RepeatedStop { .. }
                | Self::WrongStopCount { .. }
        )
    }

    /// Returns `true` if the tour failed the fuel simulation.
    pub fn is_fuel_failure(&self) -> bool {
        !self.is_site_set_error()
    }
}

/// The result of a tour-construction run.
///
/// A solver that finds no feasible tour reports an infeasible outcome rather
/// than an error.
///
/// # Examples
///
/// ```
/// use fuel_routing::models::{SolveOutcome, Tour};
///
/// let found = SolveOutcome::feasible(Tour::from_stops(&[1]), 12.5);
/// assert!(found.is_feasible());
/// assert_eq!(found.cost(), Some(12.5));
///
/// let none = SolveOutcome::infeasible();
/// assert!(none.tour().is_none());
/// assert_eq!(none.cost_or_infinity(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolveOutcome {
    tour: Option<Tour>,
    cost: Option<f64>,
    feasible: bool,
}

impl SolveOutcome {
    /// A feasible tour with its total fuel cost.
    pub fn feasible(tour: Tour, cost: f64) -> Self {
        Self {
            tour: Some(tour),
            cost: Some(cost),
            feasible: true,
        }
    }

    /// No feasible tour was found.
    pub fn infeasible() -> Self {
        Self {
            tour: None,
            cost: None,
            feasible: false,
        }
    }

    /// The tour, if one was found.
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Total fuel cost, if a tour was found.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Total fuel cost, or `+∞` when infeasible.
    pub fn cost_or_infinity(&self) -> f64 {
        self.cost.unwrap_or(f64::INFINITY)
    }

    /// Returns `true` if a feasible tour was found.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Consumes the outcome, returning the tour.
    pub fn into_tour(self) -> Option<Tour> {
        self.tour
    }
}
