//! Facility-location objective over open/closed bit patterns.

use super::instance::Instance;
use crate::ga::{BitString, Objective};

/// Scores an open-facility pattern: opening costs plus, for every customer,
/// the distance to its nearest open facility.
///
/// Bit `f` set means facility `f` is open. A pattern with nothing open
/// scores `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_redundancy::facility::{FacilityObjective, Instance};
/// use u_redundancy::ga::{BitString, Objective};
///
/// let instance = Instance::<2>::from_rows([vec![1.0, 5.0], vec![5.0, 1.0]], [1.0, 1.0]);
/// let objective = FacilityObjective::new(&instance);
/// assert_eq!(objective.evaluate(&BitString::from_bits([true, true])), 4.0);
/// assert_eq!(objective.evaluate(&BitString::from_bits([true, false])), 7.0);
/// assert_eq!(objective.evaluate(&BitString::zeros()), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FacilityObjective<'a, const NF: usize> {
    instance: &'a Instance<NF>,
}

impl<'a, const NF: usize> FacilityObjective<'a, NF> {
    /// Scores patterns against `instance`, which must outlive the objective.
    pub fn new(instance: &'a Instance<NF>) -> Self {
        Self { instance }
    }

    /// The scored instance.
    pub fn instance(&self) -> &'a Instance<NF> {
        self.instance
    }
}

impl<const NF: usize> Objective<BitString<NF>> for FacilityObjective<'_, NF> {
    fn evaluate(&self, individual: &BitString<NF>) -> f64 {
        let open = move || (0..NF).filter(move |&f| individual[f]);
        if open().next().is_none() {
            return f64::INFINITY;
        }

        let opening: f64 = open().map(|f| self.instance.cost(f)).sum();
        let service: f64 = (0..self.instance.number_customer())
            .map(|c| {
                open()
                    .map(|f| self.instance.distance(f, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum();
        opening + service
    }
}
