use std::cmp;

use crate::stats::Float;

/// A "view" into the decile cut points of a sample
///
/// The nine cut points divide the sorted series into ten equal-count bins:
/// index 0 is the 10th percentile, index 8 the 90th. Cut point `k`
/// (1-based) is the value at 1-based rank `floor(k * n / 10)`, floored to
/// the first element for very short series. No interpolation is performed.
pub struct Deciles<A>(Box<[A]>)
where
    A: Float;

impl<A> Deciles<A>
where
    A: Float,
{
    pub(crate) fn new(sorted: Box<[A]>) -> Deciles<A> {
        debug_assert!(!sorted.is_empty());

        Deciles(sorted)
    }

    /// Returns the cut point at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the `[0, 8]` range
    pub fn at(&self, index: usize) -> A {
        assert!(index < 9);

        let rank = (index + 1) * self.0.len() / 10;

        self.0[cmp::max(rank, 1) - 1]
    }

    /// Returns the 10th percentile
    pub fn p10(&self) -> A {
        self.at(0)
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(4)
    }

    /// Returns the 90th percentile
    pub fn p90(&self) -> A {
        self.at(8)
    }
}

#[cfg(test)]
mod test {
    use crate::stats::Sample;

    #[test]
    fn eleven_distinct_values() {
        let v: Vec<f64> = (1..=11).map(|i| i as f64).collect();
        let deciles = Sample::new(&v).deciles();

        assert_eq!(deciles.p10(), 1.0);
        assert_eq!(deciles.p90(), 9.0);
    }

    #[test]
    fn ten_distinct_values() {
        let v: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let deciles = Sample::new(&v).deciles();

        // Every cut point lands exactly on a rank.
        for index in 0..9 {
            assert_eq!(deciles.at(index), (index + 1) as f64);
        }
    }

    #[test]
    fn twenty_distinct_values() {
        let v: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let deciles = Sample::new(&v).deciles();

        assert_eq!(deciles.p10(), 2.0);
        assert_eq!(deciles.median(), 10.0);
        assert_eq!(deciles.p90(), 18.0);
    }

    #[test]
    fn unsorted_input() {
        let v = vec![9.0, 1.0, 7.0, 3.0, 5.0, 4.0, 6.0, 2.0, 8.0, 10.0];
        let deciles = Sample::new(&v).deciles();

        assert_eq!(deciles.p10(), 1.0);
        assert_eq!(deciles.p90(), 9.0);
    }

    #[test]
    fn short_series_floors_to_first_element() {
        let deciles = Sample::new(&[4.0, 8.0]).deciles();

        assert_eq!(deciles.p10(), 4.0);
        // rank floor(9 * 2 / 10) = 1, the first element
        assert_eq!(deciles.p90(), 4.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let v: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        Sample::new(&v).deciles().at(9);
    }
}
