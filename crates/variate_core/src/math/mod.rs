//! Numerical helpers used by the theoretical moments of the distributions.

pub mod special;
