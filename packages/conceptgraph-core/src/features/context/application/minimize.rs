//! Minimal generating intents
//!
//! A subset `s` of a concept's intent generates the concept when
//! `prime(s) == extent`. Candidates are tried in shortlex order, so the first
//! hit is the shortlex-minimal generator.

use crate::features::bitset::BitVector;
use crate::features::context::domain::{Context, Derivation};

/// All generating subsets of `intent` in shortlex order
///
/// The empty extent is generated only by the full intent.
pub fn generators<'a>(
    derivation: Derivation<'a>,
    extent: &'a BitVector,
    intent: &'a BitVector,
) -> Box<dyn Iterator<Item = BitVector> + Send + 'a> {
    if extent.is_empty() {
        return Box::new(std::iter::once(intent.clone()));
    }
    Box::new(
        intent
            .subsets()
            .filter(move |candidate| &derivation.prime(candidate) == extent),
    )
}

/// Shortlex-minimal generating subset of `intent`
pub fn minimal(derivation: Derivation<'_>, extent: &BitVector, intent: &BitVector) -> BitVector {
    generators(derivation, extent, intent)
        .next()
        .unwrap_or_else(|| intent.clone())
}

impl Context {
    /// Shortlex-minimal property set generating the closed pair
    pub fn minimal(&self, extent: &BitVector, intent: &BitVector) -> BitVector {
        minimal(self.relation().properties(), extent, intent)
    }

    /// All property sets generating the closed pair, shortlex ordered
    pub fn generators<'a>(
        &'a self,
        extent: &'a BitVector,
        intent: &'a BitVector,
    ) -> impl Iterator<Item = BitVector> + 'a {
        generators(self.relation().properties(), extent, intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context::new(
            ["A", "B", "C", "D"],
            ["p0", "p1", "p2", "p3", "p4", "p5"],
            vec![
                vec![true, true, true, false, false, false],
                vec![true, false, true, true, true, true],
                vec![true, true, false, false, true, false],
                vec![false, true, true, false, false, false],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_is_first_generator() {
        let context = context();
        let (extent, intent) = context.closure(&["C"]).unwrap();
        assert_eq!(extent.bits(), "0010");
        assert_eq!(intent.bits(), "110010");

        let all: Vec<String> = context
            .generators(&extent, &intent)
            .map(|g| g.bits())
            .collect();
        assert_eq!(all, vec!["010010", "110010"]);
        assert_eq!(context.minimal(&extent, &intent).bits(), "010010");
    }

    #[test]
    fn test_infimum_generated_by_full_intent() {
        let context = context();
        let extent = BitVector::empty(4);
        let intent = BitVector::full(6);
        let all: Vec<_> = context.generators(&extent, &intent).collect();
        assert_eq!(all, vec![intent.clone()]);
    }

    #[test]
    fn test_supremum_generated_by_empty_set() {
        let context = context();
        let extent = BitVector::full(4);
        let intent = context.relation().objects().prime(&extent);
        assert!(intent.is_empty());
        assert!(context.minimal(&extent, &intent).is_empty());
    }
}
