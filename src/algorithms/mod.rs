use crate::error::{error_if_not, Error, Result};
use crate::random::RandomSource;

mod batch;
pub use self::batch::{batch, Batch, BatchExt};

/// Reverses `data` in place by swapping from both ends toward the middle.
///
/// Returns the number of swaps, which is always `data.len() / 2`.
///
/// # Examples
///
/// ```
/// # use typext::algorithms::reverse;
/// let mut data = [1, 2, 3];
/// assert_eq!(reverse(&mut data), 1);
/// assert_eq!(data, [3, 2, 1]);
/// ```
pub fn reverse<T>(data: &mut [T]) -> usize {
    let mut swaps = 0;
    let (mut front, mut back) = (0, data.len());
    while front + 1 < back {
        back -= 1;
        data.swap(front, back);
        front += 1;
        swaps += 1;
    }
    swaps
}

/// Exchanges the elements at `i` and `j`.
///
/// Both indices are checked before anything moves.
///
/// # Examples
///
/// ```
/// # use typext::algorithms::swap;
/// let mut data = vec!['a', 'b', 'c'];
/// swap(&mut data, 0, 2).unwrap();
/// assert_eq!(data, ['c', 'b', 'a']);
/// assert!(swap(&mut data, 0, 3).is_err());
/// ```
pub fn swap<T>(data: &mut [T], i: usize, j: usize) -> Result<()> {
    let len = data.len();
    error_if_not(i < len, || Error::out_of_range("index", i, len))?;
    error_if_not(j < len, || Error::out_of_range("index", j, len))?;
    data.swap(i, j);
    Ok(())
}

/// Fisher-Yates shuffle, front to back.
///
/// Position `i` is swapped with one drawn uniformly from `i..len`, so every
/// permutation is equally likely when `eng` is uniform.
///
/// # Examples
///
/// ```
/// # use typext::algorithms::shuffle;
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut data: Vec<u32> = (0..10).collect();
/// shuffle(&mut data, &mut rng);
/// data.sort();
/// assert_eq!(data, (0..10).collect::<Vec<_>>());
/// ```
pub fn shuffle<T, G: RandomSource + ?Sized>(data: &mut [T], eng: &mut G) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let j = eng.next_index(i, n);
        data.swap(i, j);
    }
}

/// Method syntax for the in-place slice helpers.
///
/// The names avoid the inherent `reverse` and `swap` on slices, which would
/// otherwise win method resolution.
pub trait SliceExt {
    fn reverse_in_place(&mut self) -> usize;
    fn try_swap(&mut self, i: usize, j: usize) -> Result<()>;
    fn shuffle_with<G: RandomSource + ?Sized>(&mut self, eng: &mut G);
}

impl<T> SliceExt for [T] {
    fn reverse_in_place(&mut self) -> usize {
        reverse(self)
    }

    fn try_swap(&mut self, i: usize, j: usize) -> Result<()> {
        swap(self, i, j)
    }

    fn shuffle_with<G: RandomSource + ?Sized>(&mut self, eng: &mut G) {
        shuffle(self, eng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    // Hands out scripted offsets and records every range it was asked for.
    struct Scripted {
        offsets: Vec<usize>,
        calls: Vec<(usize, usize)>,
    }

    impl RandomSource for Scripted {
        fn next_index(&mut self, low: usize, high: usize) -> usize {
            let offset = self.offsets[self.calls.len()];
            self.calls.push((low, high));
            low + offset % (high - low)
        }
    }

    #[test]
    fn test_reverse() {
        let mut data = [1, 2, 3];
        assert_eq!(reverse(&mut data), 1);
        assert_eq!(data, [3, 2, 1]);

        let mut data = [1, 2, 3, 4];
        assert_eq!(reverse(&mut data), 2);
        assert_eq!(data, [4, 3, 2, 1]);

        let mut empty: [i32; 0] = [];
        assert_eq!(reverse(&mut empty), 0);

        let mut one = ["x"];
        assert_eq!(reverse(&mut one), 0);
        assert_eq!(one, ["x"]);
    }

    #[test]
    fn test_reverse_swap_count() {
        for n in 0..12 {
            let mut data: Vec<usize> = (0..n).collect();
            assert_eq!(reverse(&mut data), n / 2);
            assert_eq!(data, (0..n).rev().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_reverse_involution() {
        for n in 0..20 {
            let original: Vec<usize> = (0..n).collect();
            let mut data = original.clone();
            reverse(&mut data);
            let mut expected = original.clone();
            expected.reverse();
            assert_eq!(data, expected);
            reverse(&mut data);
            assert_eq!(data, original);
        }
    }

    #[test]
    fn test_swap() {
        let mut data = vec![0, 1, 2, 3, 4];
        swap(&mut data, 1, 3).unwrap();
        assert_eq!(data, [0, 3, 2, 1, 4]);
        swap(&mut data, 1, 3).unwrap();
        assert_eq!(data, [0, 1, 2, 3, 4]);
        swap(&mut data, 2, 2).unwrap();
        assert_eq!(data, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut data = vec![0, 1, 2];
        assert_eq!(
            swap(&mut data, 0, 3),
            Err(Error::OutOfRange { what: "index", index: 3, len: 3 })
        );
        assert_eq!(
            swap(&mut data, 5, 0),
            Err(Error::OutOfRange { what: "index", index: 5, len: 3 })
        );
        assert_eq!(data, [0, 1, 2]);

        let mut empty: Vec<i32> = Vec::new();
        assert!(swap(&mut empty, 0, 0).is_err());
    }

    #[test]
    fn test_shuffle_draw_ranges() {
        let mut eng = Scripted { offsets: vec![2, 0, 1, 0], calls: Vec::new() };
        let mut data = ['a', 'b', 'c', 'd', 'e'];
        shuffle(&mut data, &mut eng);
        assert_eq!(eng.calls, [(0, 5), (1, 5), (2, 5), (3, 5)]);
        // swaps: (0,2) (1,1) (2,3) (3,3)
        assert_eq!(data, ['c', 'b', 'd', 'a', 'e']);
    }

    #[test]
    fn test_shuffle_small() {
        let mut eng = Scripted { offsets: Vec::new(), calls: Vec::new() };
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut eng);
        let mut one = [7];
        shuffle(&mut one, &mut eng);
        assert_eq!(one, [7]);
        assert!(eng.calls.is_empty());
    }

    #[test]
    fn test_shuffle_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut data: Vec<i32> = (0..1000).collect();
        shuffle(&mut data, &mut rng);
        assert_ne!(data, (0..1000).collect::<Vec<_>>());
        data.sort();
        assert_eq!(data, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_reproducible() {
        let mut a: Vec<i32> = (0..50).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(7));
        shuffle(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_uniform() {
        const N: usize = 5;
        const TRIALS: usize = 50_000;
        let mut rng = StdRng::seed_from_u64(1);
        let mut counts = [[0usize; N]; N];
        for _ in 0..TRIALS {
            let mut data: Vec<usize> = (0..N).collect();
            shuffle(&mut data, &mut rng);
            for (pos, &src) in data.iter().enumerate() {
                counts[pos][src] += 1;
            }
        }

        let expected = (TRIALS / N) as f64;
        for row in counts.iter() {
            for &count in row.iter() {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {} vs {}", count, expected);
            }
        }
    }

    #[test]
    fn test_slice_ext() {
        let mut data = vec![1, 2, 3, 4, 5];
        assert_eq!(data.reverse_in_place(), 2);
        assert_eq!(data, [5, 4, 3, 2, 1]);
        data.try_swap(0, 4).unwrap();
        assert_eq!(data, [1, 4, 3, 2, 5]);
        assert!(data.try_swap(0, 5).is_err());

        let mut rng = StdRng::seed_from_u64(3);
        data.shuffle_with(&mut rng);
        data.sort();
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }
}
