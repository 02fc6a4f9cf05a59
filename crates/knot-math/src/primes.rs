//! Prime numbers and low-discrepancy sequences built on them.
//!
//! [`PrimeCache`] is owned by the caller and grows on demand; two caches
//! never share state, so a test can start from a fresh or reset cache.

/// Growing cache of the primes in ascending order.
///
/// # Example
///
/// ```rust
/// use knot_math::primes::PrimeCache;
///
/// let mut cache = PrimeCache::new();
/// assert_eq!(cache.nth(0), 2);
/// assert_eq!(cache.nth(9), 29);
/// assert_eq!(cache.primes_up_to(20), &[2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeCache {
    primes: Vec<u64>,
}

impl PrimeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `n`-th prime, counting from zero (`nth(0) == 2`).
    pub fn nth(&mut self, n: usize) -> u64 {
        while self.primes.len() <= n {
            self.push_next();
        }
        self.primes[n]
    }

    /// All primes `<= limit`.
    pub fn primes_up_to(&mut self, limit: u64) -> &[u64] {
        while self.primes.last().map_or(true, |&p| p < limit) {
            self.push_next();
        }
        let end = self.primes.partition_point(|&p| p <= limit);
        &self.primes[..end]
    }

    /// Number of primes computed so far.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// True if nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Discards every computed prime.
    pub fn reset(&mut self) {
        self.primes.clear();
    }

    /// Point `index` of the Halton sequence in `dimensions` dimensions, one
    /// prime base per dimension.
    pub fn halton(&mut self, index: u64, dimensions: usize) -> Vec<f64> {
        (0..dimensions)
            .map(|d| radical_inverse(self.nth(d), index))
            .collect()
    }

    fn push_next(&mut self) {
        let next = match self.primes.last() {
            None => 2,
            Some(2) => 3,
            Some(&last) => {
                let mut candidate = last + 2;
                while !self.is_prime_cached(candidate) {
                    candidate += 2;
                }
                candidate
            }
        };
        self.primes.push(next);
    }

    /// Trial division by cached primes; valid while the cache reaches
    /// `sqrt(candidate)`.
    fn is_prime_cached(&self, candidate: u64) -> bool {
        self.primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

/// Van der Corput radical inverse of `index` in `base`.
///
/// Mirrors the base-`base` digits of `index` about the radix point, giving a
/// value in `[0, 1)`. Bases below 2 have no digits and return NaN.
#[must_use]
pub fn radical_inverse(base: u64, mut index: u64) -> f64 {
    if base < 2 {
        return f64::NAN;
    }
    let inv_base = 1.0 / base as f64;
    let mut factor = inv_base;
    let mut result = 0.0;
    while index > 0 {
        result += (index % base) as f64 * factor;
        index /= base;
        factor *= inv_base;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_primes() {
        let mut cache = PrimeCache::new();
        let first: Vec<u64> = (0..12).map(|n| cache.nth(n)).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
        assert_eq!(cache.len(), 12);
    }

    #[test]
    fn test_thousandth_prime() {
        let mut cache = PrimeCache::new();
        assert_eq!(cache.nth(999), 7919);
    }

    #[test]
    fn test_primes_up_to() {
        let mut cache = PrimeCache::new();
        assert_eq!(cache.primes_up_to(1), &[] as &[u64]);
        assert_eq!(cache.primes_up_to(2), &[2]);
        assert_eq!(cache.primes_up_to(30).len(), 10);
        // A later smaller query reuses the cache.
        assert_eq!(cache.primes_up_to(10), &[2, 3, 5, 7]);
    }

    #[test]
    fn test_reset() {
        let mut cache = PrimeCache::new();
        cache.nth(50);
        assert!(!cache.is_empty());

        cache.reset();
        assert!(cache.is_empty());
        assert_eq!(cache, PrimeCache::new());
        assert_eq!(cache.nth(3), 7);
    }

    #[test]
    fn test_radical_inverse() {
        assert_eq!(radical_inverse(2, 0), 0.0);
        assert_relative_eq!(radical_inverse(2, 1), 0.5);
        assert_relative_eq!(radical_inverse(2, 6), 0.375);
        assert_relative_eq!(radical_inverse(3, 5), 7.0 / 9.0);
        assert!(radical_inverse(1, 5).is_nan());
    }

    #[test]
    fn test_halton_uses_prime_bases() {
        let mut cache = PrimeCache::new();
        let point = cache.halton(1, 3);
        assert_relative_eq!(point[0], 0.5);
        assert_relative_eq!(point[1], 1.0 / 3.0);
        assert_relative_eq!(point[2], 0.2);
        assert_eq!(cache.len(), 3);
    }
}
