//! Algebraic structure trait
//!
//! This module defines the `AlgebraicStructure` trait, the contract shared
//! by the additive and multiplicative groups of GF(p).

use crate::element::FieldElement;
use crate::error::FieldError;
use rand::Rng;

/// Contract for a group structure over field elements
///
/// A structure is a stateless policy keyed by its modulus: it owns no
/// elements, it decides membership and carries out the operation. Keeping
/// `contains` separate from `operation` and `inverse` lets a property
/// checker assert closure explicitly (apply the operation, then re-check
/// membership) instead of assuming it.
///
/// # Laws
/// Any implementation must satisfy the group axioms on its carrier:
/// - Closure: `operation(a, b)` is a member whenever `a` and `b` are
/// - Associativity: `operation(operation(a, b), c) == operation(a, operation(b, c))`
/// - Identity: `operation(a, identity()) == a == operation(identity(), a)`
/// - Inverse: `operation(a, inverse(a)) == identity() == operation(inverse(a), a)`
///
/// The structures in this crate are additionally commutative. These laws are
/// exactly what [`crate::axioms`] verifies by sampling.
pub trait AlgebraicStructure {
    /// The structure's neutral element
    fn identity(&self) -> FieldElement;

    /// Applies the group operation to two members
    ///
    /// # Errors
    /// Returns `FieldError::DomainError` if either operand fails the
    /// membership test (wrong modulus, or zero for the multiplicative
    /// structure).
    fn operation(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement, FieldError>;

    /// Computes the inverse of a member
    ///
    /// # Errors
    /// Returns `FieldError::DomainError` if `a` has the wrong modulus, and
    /// `FieldError::UndefinedOperation` if `a` is the multiplicative zero
    /// (zero is a valid field element, just not an invertible one).
    fn inverse(&self, a: FieldElement) -> Result<FieldElement, FieldError>;

    /// Membership test; never fails
    fn contains(&self, element: FieldElement) -> bool;

    /// Draws a uniformly random member from the carrier
    ///
    /// The generator is injected by the caller so that sampling is
    /// reproducible under a seeded generator.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement;
}
