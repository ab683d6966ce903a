// minigrad-core/src/ops/functional.rs

//! Small higher-order helpers over sequences of floats.

use super::arithmetic::{add, mul, neg};
use num_traits::Float;

/// Applies `f` to every element.
pub fn map<F, Func, I>(f: Func, items: I) -> Vec<F>
where
    F: Float,
    Func: Fn(F) -> F,
    I: IntoIterator<Item = F>,
{
    items.into_iter().map(f).collect()
}

/// Combines two sequences element by element. Stops at the shorter one.
pub fn zip_with<F, Func, A, B>(f: Func, a: A, b: B) -> Vec<F>
where
    F: Float,
    Func: Fn(F, F) -> F,
    A: IntoIterator<Item = F>,
    B: IntoIterator<Item = F>,
{
    a.into_iter().zip(b).map(|(x, y)| f(x, y)).collect()
}

/// Left fold seeded with the first element.
///
/// There is no single value that is right for every `f` on an empty input, so
/// the caller states it: `empty` is returned when `items` yields nothing.
pub fn reduce<F, Func, I>(f: Func, items: I, empty: F) -> F
where
    F: Float,
    Func: Fn(F, F) -> F,
    I: IntoIterator<Item = F>,
{
    let mut iter = items.into_iter();
    match iter.next() {
        Some(first) => iter.fold(first, f),
        None => empty,
    }
}

/// Negates every element.
pub fn neg_list<F, I>(items: I) -> Vec<F>
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    map(neg, items)
}

/// Element-wise sum of two sequences.
pub fn add_lists<F, A, B>(a: A, b: B) -> Vec<F>
where
    F: Float,
    A: IntoIterator<Item = F>,
    B: IntoIterator<Item = F>,
{
    zip_with(add, a, b)
}

/// Sum of all elements, `0` when empty.
pub fn sum<F, I>(items: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    reduce(add, items, F::zero())
}

/// Product of all elements.
///
/// An empty input gives `0`, the same fallback as the other folds in this
/// module. Use [`prod_or_one`] when the multiplicative identity is wanted.
pub fn prod<F, I>(items: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    reduce(mul, items, F::zero())
}

/// Product of all elements, `1` when empty.
pub fn prod_or_one<F, I>(items: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    reduce(mul, items, F::one())
}

#[cfg(test)]
#[path = "functional_test.rs"]
mod tests;
