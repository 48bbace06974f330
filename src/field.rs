//! Finite field GF(p) bundling the two group structures

use crate::element::FieldElement;
use crate::error::FieldError;
use crate::group::structure::AlgebraicStructure;
use crate::group::{AdditiveGroup, MultiplicativeGroup};
use rand::Rng;

/// The finite field GF(p), composed of an additive and a multiplicative
/// group sharing the same prime modulus
///
/// The field itself carries no axiom logic; it is a named bundle that
/// guarantees both structures agree on the modulus and offers the single
/// construction path for field values. Elements copy the modulus value and
/// hold no reference back to the field, so they may outlive it; operations
/// are always re-resolved through the field or one of its groups.
///
/// # Example
/// ```
/// use gfp::field::FiniteField;
/// use gfp::group::AlgebraicStructure;
///
/// let gf5 = FiniteField::new(5).unwrap();
/// let a = gf5.element(3);
/// let b = gf5.element(4);
/// let sum = gf5.additive().operation(a, b).unwrap();
/// assert_eq!(sum, gf5.element(2)); // 3 + 4 = 7 ≡ 2 (mod 5)
/// ```
#[derive(Clone, Debug)]
pub struct FiniteField {
    modulus: u64,
    additive: AdditiveGroup,
    multiplicative: MultiplicativeGroup,
}

impl FiniteField {
    /// Creates GF(p) over the prime `modulus`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidModulus` if `modulus` is not prime.
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        let additive = AdditiveGroup::new(modulus)?;
        let multiplicative = MultiplicativeGroup::new(modulus)?;
        Ok(Self {
            modulus,
            additive,
            multiplicative,
        })
    }

    /// The prime modulus
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Creates a field element, normalizing `value` into `[0, p)`
    ///
    /// Infallible: the modulus was validated when the field was built.
    pub fn element(&self, value: i64) -> FieldElement {
        FieldElement::normalized(value, self.modulus)
    }

    /// The additive group structure
    pub fn additive(&self) -> &AdditiveGroup {
        &self.additive
    }

    /// The multiplicative group structure
    pub fn multiplicative(&self) -> &MultiplicativeGroup {
        &self.multiplicative
    }

    /// Draws a uniformly random element of the field
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        self.additive.sample(rng)
    }

    /// Draws a uniformly random nonzero element of the field
    pub fn random_nonzero_element<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        self.multiplicative.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_construction_requires_prime() {
        assert!(FiniteField::new(5).is_ok());
        assert!(matches!(
            FiniteField::new(4),
            Err(FieldError::InvalidModulus(4))
        ));
    }

    #[test]
    fn test_groups_share_modulus() {
        let gf = FiniteField::new(7).unwrap();
        assert_eq!(gf.additive().modulus(), 7);
        assert_eq!(gf.multiplicative().modulus(), 7);
    }

    #[test]
    fn test_element_normalizes() {
        let gf = FiniteField::new(5).unwrap();
        assert_eq!(gf.element(7), gf.element(2));
        assert_eq!(gf.element(-1), gf.element(4));
    }

    #[test]
    fn test_random_samplers() {
        let gf = FiniteField::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let e = gf.random_element(&mut rng);
            assert!(e.value() < 5);
            let n = gf.random_nonzero_element(&mut rng);
            assert!(n.value() >= 1 && n.value() < 5);
        }
    }
}
