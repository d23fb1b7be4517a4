/// A caller-owned source of uniformly distributed indices.
///
/// Every `rand::Rng` is one, so a seeded `StdRng` gives reproducible
/// shuffles. Implement it directly to drive `shuffle` from anything else.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `low..high`. Requires
    /// `low < high`.
    fn next_index(&mut self, low: usize, high: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_index(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}
