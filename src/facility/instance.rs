//! Uncapacitated facility-location instances.

use crate::error::InstanceError;
use crate::random::create_rng;
use log::debug;
use rand::Rng;

/// `NF` candidate facilities serving a fixed set of customers.
///
/// Row `f` of the distance table holds the distance from facility `f` to
/// every customer; `cost(f)` is the price of opening facility `f`.
/// Instances are immutable once built.
///
/// With the `serde` feature, deserialization runs the same shape checks as
/// [`from_vecs`](Self::from_vecs).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct Instance<const NF: usize> {
    distances: Vec<Vec<f64>>,
    costs: Vec<f64>,
}

/// Unchecked serialized form of an [`Instance`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    distances: Vec<Vec<f64>>,
    costs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl<const NF: usize> TryFrom<RawInstance> for Instance<NF> {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Self::from_vecs(raw.distances, raw.costs)
    }
}

impl<const NF: usize> Instance<NF> {
    /// Number of candidate facilities.
    pub const NUMBER_FACILITY: usize = NF;

    /// Builds an instance from explicit rows.
    ///
    /// # Panics
    /// Panics if there are no customers or the rows differ in length.
    pub fn from_rows(distances: [Vec<f64>; NF], costs: [f64; NF]) -> Self {
        Self::from_vecs(distances.into(), costs.into()).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Builds an instance from rows of unchecked shape.
    ///
    /// Requires exactly `NF` distance rows and `NF` costs, and rows of one
    /// common, non-zero length.
    pub fn from_vecs(distances: Vec<Vec<f64>>, costs: Vec<f64>) -> Result<Self, InstanceError> {
        if distances.len() != NF {
            return Err(InstanceError::RowCount {
                expected: NF,
                found: distances.len(),
            });
        }
        if costs.len() != NF {
            return Err(InstanceError::CostCount {
                expected: NF,
                found: costs.len(),
            });
        }

        let number_customer = distances.first().map_or(0, Vec::len);
        if NF > 0 && number_customer == 0 {
            return Err(InstanceError::NoCustomer);
        }
        if let Some((facility, row)) = distances
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != number_customer)
        {
            return Err(InstanceError::RaggedRow {
                facility,
                expected: number_customer,
                found: row.len(),
            });
        }

        Ok(Self { distances, costs })
    }

    /// Draws distances and opening costs uniformly from `[0, 1)`.
    ///
    /// # Panics
    /// Panics if `number_customer` is 0.
    pub fn random(number_customer: usize, seed: u64) -> Self {
        assert!(number_customer > 0, "instance needs at least one customer");
        let mut rng = create_rng(seed);
        let distances = (0..NF)
            .map(|_| (0..number_customer).map(|_| rng.random::<f64>()).collect())
            .collect();
        let costs = (0..NF).map(|_| rng.random::<f64>()).collect();
        debug!(
            "random instance: {} facilities, {} customers, seed {}",
            NF, number_customer, seed
        );
        Self { distances, costs }
    }

    /// Places facilities and customers uniformly in the unit square and uses
    /// Euclidean distances; opening costs are uniform in `[0, 1)`.
    ///
    /// # Panics
    /// Panics if `number_customer` is 0.
    pub fn random_metric(number_customer: usize, seed: u64) -> Self {
        assert!(number_customer > 0, "instance needs at least one customer");
        let mut rng = create_rng(seed);
        let mut point = || (rng.random::<f64>(), rng.random::<f64>());
        let facilities: Vec<(f64, f64)> = (0..NF).map(|_| point()).collect();
        let customers: Vec<(f64, f64)> = (0..number_customer).map(|_| point()).collect();
        let distances = facilities
            .iter()
            .map(|&(fx, fy)| {
                customers
                    .iter()
                    .map(|&(cx, cy)| (fx - cx).hypot(fy - cy))
                    .collect()
            })
            .collect();
        let costs = (0..NF).map(|_| rng.random::<f64>()).collect();
        debug!(
            "metric instance: {} facilities, {} customers, seed {}",
            NF, number_customer, seed
        );
        Self { distances, costs }
    }

    /// Number of customers every facility row covers.
    pub fn number_customer(&self) -> usize {
        self.distances.first().map_or(0, Vec::len)
    }

    /// Distance from `facility` to `customer`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn distance(&self, facility: usize, customer: usize) -> f64 {
        self.distances[facility][customer]
    }

    /// Opening cost of `facility`.
    pub fn cost(&self, facility: usize) -> f64 {
        self.costs[facility]
    }

    /// Distances from `facility` to every customer.
    pub fn row(&self, facility: usize) -> &[f64] {
        &self.distances[facility]
    }
}
