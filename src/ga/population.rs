//! Ranked population.
//!
//! [`Population`] is a multiset of `(fitness, individual)` pairs kept in
//! ascending fitness order, so the best individual is always at index 0.
//! Fitness is cached at insertion and never recomputed.

/// A fitness-ordered multiset of individuals.
///
/// Duplicated individuals and equal fitness values are allowed. Among
/// entries of equal fitness the order is unspecified.
///
/// # Examples
///
/// ```
/// use u_redundancy::ga::Population;
///
/// let mut population = Population::new();
/// population.insert(3.0, 'c');
/// population.insert(1.0, 'a');
/// population.insert(2.0, 'b');
///
/// assert_eq!(population.best(), Some(&(1.0, 'a')));
/// assert_eq!(population.fitnesses().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Population<I> {
    entries: Vec<(f64, I)>,
}

impl<I> Population<I> {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty population with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts an evaluated individual at its rank.
    ///
    /// # Panics
    /// Panics if `fitness` is NaN.
    pub fn insert(&mut self, fitness: f64, individual: I) {
        assert!(!fitness.is_nan(), "objective returned NaN fitness");
        let pos = self.entries.partition_point(|(f, _)| *f <= fitness);
        self.entries.insert(pos, (fitness, individual));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the population has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the lowest fitness.
    pub fn best(&self) -> Option<&(f64, I)> {
        self.entries.first()
    }

    /// The entry at `rank` (0 = best).
    pub fn get(&self, rank: usize) -> Option<&(f64, I)> {
        self.entries.get(rank)
    }

    /// Iterates over entries from best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, (f64, I)> {
        self.entries.iter()
    }

    /// Iterates over the cached fitness values from best to worst.
    pub fn fitnesses(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    /// Entries from best to worst as a slice.
    pub fn as_slice(&self) -> &[(f64, I)] {
        &self.entries
    }

    /// Keeps only the `len` best entries.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<I> Default for Population<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FromIterator<(f64, I)> for Population<I> {
    /// Collects evaluated entries in any order.
    ///
    /// # Panics
    /// Panics if any fitness is NaN.
    fn from_iter<T: IntoIterator<Item = (f64, I)>>(iter: T) -> Self {
        let mut entries: Vec<(f64, I)> = iter.into_iter().collect();
        assert!(
            entries.iter().all(|(f, _)| !f.is_nan()),
            "objective returned NaN fitness"
        );
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { entries }
    }
}

impl<I> IntoIterator for Population<I> {
    type Item = (f64, I);
    type IntoIter = std::vec::IntoIter<(f64, I)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a Population<I> {
    type Item = &'a (f64, I);
    type IntoIter = std::slice::Iter<'a, (f64, I)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
