//! Univariate descriptive statistics backing the cohort baselines.

mod deciles;
mod sample;

pub use self::deciles::Deciles;
pub use self::sample::Sample;

use cast::From;
use num_traits::float;

/// This is an extension of `num_traits::float::Float` that adds safe
/// casting from the integer widths the decile machinery needs.
pub trait Float: float::Float + From<usize, Output = Self> + From<f32, Output = Self> {}

impl Float for f32 {}
impl Float for f64 {}

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
