//! Multiplicative group of GF(p)

use crate::element::{is_prime, FieldElement};
use crate::error::FieldError;
use crate::group::structure::AlgebraicStructure;
use rand::Rng;

/// The multiplicative group of GF(p): the nonzero residues `[1, p)` under
/// multiplication mod p
///
/// Zero is not a member. Every member has an inverse because p is prime:
/// by Fermat's little theorem `a^(p-1) ≡ 1 (mod p)`, so `a^(p-2)` is the
/// multiplicative inverse of `a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplicativeGroup {
    modulus: u64,
}

impl MultiplicativeGroup {
    /// Creates the multiplicative group over the prime `modulus`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidModulus` if `modulus` is not prime.
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        if !is_prime(modulus) {
            return Err(FieldError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    /// The prime modulus
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn check_member(&self, e: FieldElement) -> Result<(), FieldError> {
        if !self.contains(e) {
            return Err(FieldError::DomainError(format!(
                "{} is not a member of the multiplicative group modulo {}",
                e, self.modulus
            )));
        }
        Ok(())
    }
}

impl AlgebraicStructure for MultiplicativeGroup {
    fn identity(&self) -> FieldElement {
        FieldElement::reduced(1, self.modulus)
    }

    /// `(a * b) mod p`
    fn operation(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement, FieldError> {
        self.check_member(a)?;
        self.check_member(b)?;
        let product =
            ((a.value() as u128 * b.value() as u128) % self.modulus as u128) as u64;
        Ok(FieldElement::reduced(product, self.modulus))
    }

    /// `a^(p-2) mod p` by Fermat's little theorem
    fn inverse(&self, a: FieldElement) -> Result<FieldElement, FieldError> {
        if a.modulus() != self.modulus {
            return Err(FieldError::DomainError(format!(
                "{} is not a member of the multiplicative group modulo {}",
                a, self.modulus
            )));
        }
        if a.is_zero() {
            return Err(FieldError::UndefinedOperation(format!(
                "zero has no multiplicative inverse in GF({})",
                self.modulus
            )));
        }
        let inv = pow_mod(a.value(), self.modulus - 2, self.modulus);
        Ok(FieldElement::reduced(inv, self.modulus))
    }

    fn contains(&self, element: FieldElement) -> bool {
        element.modulus() == self.modulus && !element.is_zero()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        // At p = 2 the carrier is exactly {1}
        let value = rng.random_range(1..self.modulus);
        FieldElement::reduced(value, self.modulus)
    }
}

/// Modular exponentiation by binary square-and-multiply, LSB-first
///
/// 128-bit intermediates keep the squarings exact for any u64 modulus.
fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut result = 1u128;
    let mut base = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn g5() -> MultiplicativeGroup {
        MultiplicativeGroup::new(5).unwrap()
    }

    #[test]
    fn test_operation() {
        let g = g5();
        let a = FieldElement::new(3, 5).unwrap();
        let b = FieldElement::new(4, 5).unwrap();
        let prod = g.operation(a, b).unwrap();

        assert_eq!(prod, FieldElement::new(2, 5).unwrap()); // 3 * 4 = 12 ≡ 2 (mod 5)
    }

    #[test]
    fn test_identity() {
        let g = g5();
        let a = FieldElement::new(3, 5).unwrap();

        assert_eq!(g.identity().value(), 1);
        assert_eq!(g.operation(a, g.identity()).unwrap(), a);
        assert_eq!(g.operation(g.identity(), a).unwrap(), a);
    }

    #[test]
    fn test_inverse_by_fermat() {
        let g = g5();
        let a = FieldElement::new(3, 5).unwrap();
        let inv = g.inverse(a).unwrap();

        assert_eq!(inv.value(), 2); // 3 * 2 = 6 ≡ 1 (mod 5)
        assert_eq!(g.operation(a, inv).unwrap(), g.identity());
    }

    #[test]
    fn test_inverse_exhaustive() {
        // a * a^(p-2) ≡ 1 for every nonzero residue
        for p in [2u64, 3, 5, 7, 11, 13] {
            let g = MultiplicativeGroup::new(p).unwrap();
            for v in 1..p {
                let a = FieldElement::new(v as i64, p).unwrap();
                let inv = g.inverse(a).unwrap();
                assert_eq!(g.operation(a, inv).unwrap(), g.identity());
            }
        }
    }

    #[test]
    fn test_zero_is_excluded() {
        let g = g5();
        let zero = FieldElement::new(0, 5).unwrap();
        let a = FieldElement::new(3, 5).unwrap();

        assert!(!g.contains(zero));
        assert!(matches!(
            g.operation(a, zero),
            Err(FieldError::DomainError(_))
        ));
        assert!(matches!(
            g.operation(zero, a),
            Err(FieldError::DomainError(_))
        ));
    }

    #[test]
    fn test_inverse_of_zero_is_undefined() {
        let g = g5();
        let zero = FieldElement::new(0, 5).unwrap();
        assert!(matches!(
            g.inverse(zero),
            Err(FieldError::UndefinedOperation(_))
        ));
    }

    #[test]
    fn test_wrong_modulus_is_domain_error() {
        let g = g5();
        let foreign = FieldElement::new(3, 7).unwrap();
        assert!(matches!(g.inverse(foreign), Err(FieldError::DomainError(_))));
    }

    #[test]
    fn test_gf2_carrier_is_one() {
        let g = MultiplicativeGroup::new(2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(g.sample(&mut rng), g.identity());
        }
    }

    #[test]
    fn test_sample_in_carrier() {
        let g = g5();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let e = g.sample(&mut rng);
            assert!(g.contains(e));
            assert!(e.value() >= 1 && e.value() < 5);
        }
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(2, 10, 11), 1); // Fermat: 2^10 ≡ 1 (mod 11)
        assert_eq!(pow_mod(2, 5, 11), 10); // 32 ≡ 10 (mod 11)
        assert_eq!(pow_mod(3, 0, 7), 1);
        // Exponent near the word size finishes in 64 squarings
        assert_eq!(pow_mod(2, u64::MAX, 3), 2);
    }
}
