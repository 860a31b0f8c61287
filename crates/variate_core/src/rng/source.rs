//! The uniform source abstraction.

/// A supplier of independent draws uniformly distributed on [0, 1).
///
/// Implementations advance internal state on every call and have no other
/// observable effect. Samplers are generic over this trait (static
/// dispatch), so deterministic stubs can be substituted in tests.
pub trait UniformSource {
    /// Returns the next draw in the half-open interval [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Draws one uniform value that is safe to pass to `ln`.
///
/// An exact `0.0` draw is mapped to `f64::MIN_POSITIVE`, so the logarithm
/// stays finite. Exactly one draw is consumed either way.
#[inline]
pub fn positive_uniform<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    source.next_uniform().max(f64::MIN_POSITIVE)
}
