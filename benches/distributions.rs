use num_traits::{Bounded, FromPrimitive, One, PrimInt, Zero};
use rand::{
    distributions::{uniform::SampleUniform, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

const SEED: u64 = 0x5eed;

pub const DISTRIBUTIONS: [(&str, fn(usize) -> Vec<u32>); 7] = [
    ("uniform", uniform),
    ("sorted", sorted),
    ("reverse", reverse),
    ("almost_sorted", almost_sorted),
    ("sorted_unsorted_tail", sorted_unsorted_tail),
    ("few_distinct", few_distinct),
    ("sawtooth", sawtooth),
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Best case: no swaps, `len - 1` comparisons.
pub fn sorted<T>(len: usize) -> Vec<T>
where
    T: PrimInt + Zero + One,
{
    let mut count = T::zero();
    let fun = move || {
        count = count + T::one();
        Some(count)
    };
    std::iter::from_fn(fun).take(len).collect()
}

/// Worst case: every pair is an inversion.
pub fn reverse<T>(len: usize) -> Vec<T>
where
    T: PrimInt,
{
    let mut v: Vec<T> = sorted(len);
    v.reverse();
    v
}

pub fn uniform<T>(len: usize) -> Vec<T>
where
    T: Bounded + SampleUniform,
{
    let dist = Uniform::new_inclusive(T::min_value(), T::max_value());
    rng().sample_iter(dist).take(len).collect()
}

/// Sorted input with about `sqrt(len)` adjacent pairs swapped.
pub fn almost_sorted<T>(len: usize) -> Vec<T>
where
    T: PrimInt + Zero + One,
{
    let mut v: Vec<T> = sorted(len);
    if len < 2 {
        return v;
    }
    let mut rng = rng();
    let swaps = (len as f64).sqrt() as usize;
    for _ in 0..swaps {
        let i = rng.gen_range(0..len - 1);
        v.swap(i, i + 1);
    }
    v
}

/// Sorted prefix followed by a random tail of `len^(7/8)` elements.
pub fn sorted_unsorted_tail<T>(len: usize) -> Vec<T>
where
    T: PrimInt + Zero + One + Bounded + SampleUniform,
{
    let tail_len = (len as f64).powf(7_f64 / 8_f64) as usize;
    let mut rng = rng();
    let dist = Uniform::new_inclusive(T::min_value(), T::max_value());
    let mut v: Vec<T> = sorted(len);
    for x in v.iter_mut().skip(len - tail_len.min(len)) {
        *x = rng.sample(&dist);
    }
    v
}

/// Lots of ties, which must not cost any swaps among themselves.
pub fn few_distinct<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt + SampleUniform,
{
    let distinct = T::from_usize((len as f64).sqrt().max(1.0) as usize).unwrap();
    let mut rng = rng();
    std::iter::from_fn(|| Some(rng.gen_range(T::zero()..distinct)))
        .take(len)
        .collect()
}

/// Ascending runs of length `sqrt(len)`.
pub fn sawtooth<T>(len: usize) -> Vec<T>
where
    T: FromPrimitive + PrimInt,
{
    let run = ((len as f64).sqrt() as usize).max(1);
    (0..len).map(|i| T::from_usize(i % run).unwrap()).collect()
}
