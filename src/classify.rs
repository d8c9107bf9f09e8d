use crate::outcome::Outcome;

/// Seam for the eventual real registry lookup. Rendering code only ever
/// talks to this trait, so swapping the stub out later touches nothing else.
pub trait Classifier {
    fn classify(&self, query: &str) -> Outcome;
}

/// Demo classifier: picks one of the four outcomes uniformly at random.
/// The query text never influences the pick.
pub struct RandomStub {
    sample: fn() -> f64,
}

impl RandomStub {
    /// `sample` must return values in [0, 1).
    pub fn new(sample: fn() -> f64) -> Self {
        Self { sample }
    }
}

impl Default for RandomStub {
    fn default() -> Self {
        Self::new(js_random)
    }
}

fn js_random() -> f64 {
    js_sys::Math::random()
}

impl Classifier for RandomStub {
    fn classify(&self, _query: &str) -> Outcome {
        let r = (self.sample)();
        let idx = ((r * Outcome::ALL.len() as f64) as usize).min(Outcome::ALL.len() - 1);
        Outcome::ALL[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_quadrant_maps_to_one_outcome() {
        assert_eq!(RandomStub::new(|| 0.0).classify("x"), Outcome::NotFound);
        assert_eq!(RandomStub::new(|| 0.30).classify("x"), Outcome::EinMismatch);
        assert_eq!(RandomStub::new(|| 0.60).classify("x"), Outcome::WatchlistHit);
        assert_eq!(RandomStub::new(|| 0.99).classify("x"), Outcome::Verified);
    }

    #[test]
    fn top_of_range_stays_in_bounds() {
        // Math.random never returns 1.0, but guard anyway.
        assert_eq!(RandomStub::new(|| 1.0).classify("x"), Outcome::Verified);
    }

    #[test]
    fn pick_ignores_the_query() {
        let stub = RandomStub::new(|| 0.10);
        assert_eq!(stub.classify(""), stub.classify("Acme LLC"));
        assert_eq!(stub.classify("12-3456789"), Outcome::NotFound);
    }
}
