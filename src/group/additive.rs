//! Additive group of GF(p)

use crate::element::{is_prime, FieldElement};
use crate::error::FieldError;
use crate::group::structure::AlgebraicStructure;
use rand::Rng;

/// The additive group of GF(p): all residues `[0, p)` under addition mod p
///
/// The identity is 0 and every element has an inverse, so membership only
/// requires a matching modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdditiveGroup {
    modulus: u64,
}

impl AdditiveGroup {
    /// Creates the additive group over the prime `modulus`
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
                "{} is not a member of the additive group modulo {}",
                e, self.modulus
            )));
        }
        Ok(())
    }
}

impl AlgebraicStructure for AdditiveGroup {
    fn identity(&self) -> FieldElement {
        FieldElement::reduced(0, self.modulus)
    }

    /// `(a + b) mod p`
    fn operation(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement, FieldError> {
        self.check_member(a)?;
        self.check_member(b)?;
        // 128-bit intermediate so the sum cannot wrap at large primes
        let sum = ((a.value() as u128 + b.value() as u128) % self.modulus as u128) as u64;
        Ok(FieldElement::reduced(sum, self.modulus))
    }

    /// `(p - a) mod p`, so the inverse of 0 is 0
    fn inverse(&self, a: FieldElement) -> Result<FieldElement, FieldError> {
        self.check_member(a)?;
        let inv = (self.modulus - a.value()) % self.modulus;
        Ok(FieldElement::reduced(inv, self.modulus))
    }

    fn contains(&self, element: FieldElement) -> bool {
        element.modulus() == self.modulus
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        let value = rng.random_range(0..self.modulus);
        FieldElement::reduced(value, self.modulus)
    }
}
