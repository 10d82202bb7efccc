// src/random/traits.rs

/// Supplies the uniform draws that drive a simulation run.
///
/// Every draw is expected to lie in `[0, 1)`. The engine checks this and
/// rejects a run as soon as a source breaks the contract.
///
/// Returning `None` means the source has run out of draws.
///
/// Any `FnMut() -> f64` closure is a source, so a test can pass `|| 0.0`.
pub trait RandomSource {
    fn next_draw(&mut self) -> Option<f64>;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_draw(&mut self) -> Option<f64> {
        Some(self())
    }
}
