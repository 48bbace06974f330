//! Randomized verification of group and field axioms
//!
//! Each check draws fresh random samples from a structure and asserts one
//! algebraic law, failing fast on the first counterexample. Checks are pure
//! functions of a structure, a trial count, and an injected generator, so a
//! seeded generator makes every run reproducible.

use crate::element::FieldElement;
use crate::error::FieldError;
use crate::field::FiniteField;
use crate::group::structure::AlgebraicStructure;
use rand::Rng;

/// Trials per check when the caller has no reason to choose otherwise
pub const DEFAULT_TRIALS: usize = 50;

/// A sampled counterexample to an algebraic law
///
/// Carries the operands and both sides of the failed equation so the
/// violation can be diagnosed without re-running the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxiomViolation {
    /// An operation result (or inverse) left the carrier
    NotContained {
        law: &'static str,
        operands: Vec<FieldElement>,
        result: FieldElement,
    },
    /// Two sides of a law's equation disagree
    NotEqual {
        law: &'static str,
        operands: Vec<FieldElement>,
        lhs: FieldElement,
        rhs: FieldElement,
    },
    /// The structure refused an operation on its own sampled members
    Rejected {
        law: &'static str,
        source: FieldError,
    },
}

impl std::fmt::Display for AxiomViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxiomViolation::NotContained {
                law,
                operands,
                result,
            } => write!(
                f,
                "{} failed: {} from operands [{}] is not a member of the structure",
                law,
                result,
                join(operands)
            ),
            AxiomViolation::NotEqual {
                law,
                operands,
                lhs,
                rhs,
            } => write!(
                f,
                "{} failed for operands [{}]: {} != {}",
                law,
                join(operands),
                lhs,
                rhs
            ),
            AxiomViolation::Rejected { law, source } => {
                write!(f, "{} check could not apply the operation: {}", law, source)
            }
        }
    }
}

impl std::error::Error for AxiomViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AxiomViolation::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn join(operands: &[FieldElement]) -> String {
    operands
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply<S: AlgebraicStructure>(
    structure: &S,
    law: &'static str,
    a: FieldElement,
    b: FieldElement,
) -> Result<FieldElement, AxiomViolation> {
    structure
        .operation(a, b)
        .map_err(|source| AxiomViolation::Rejected { law, source })
}

/// Closure: the operation on two members yields a member
pub fn check_closure<S, R>(structure: &S, trials: usize, rng: &mut R) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    for _ in 0..trials {
        let a = structure.sample(rng);
        let b = structure.sample(rng);
        let result = apply(structure, "closure", a, b)?;
        if !structure.contains(result) {
            return Err(AxiomViolation::NotContained {
                law: "closure",
                operands: vec![a, b],
                result,
            });
        }
    }
    Ok(())
}

/// Associativity: `(a op b) op c == a op (b op c)`
pub fn check_associativity<S, R>(
    structure: &S,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    for _ in 0..trials {
        let a = structure.sample(rng);
        let b = structure.sample(rng);
        let c = structure.sample(rng);
        let ab = apply(structure, "associativity", a, b)?;
        let lhs = apply(structure, "associativity", ab, c)?;
        let bc = apply(structure, "associativity", b, c)?;
        let rhs = apply(structure, "associativity", a, bc)?;
        if lhs != rhs {
            return Err(AxiomViolation::NotEqual {
                law: "associativity",
                operands: vec![a, b, c],
                lhs,
                rhs,
            });
        }
    }
    Ok(())
}

/// Identity: `a op e == a == e op a`
pub fn check_identity<S, R>(structure: &S, trials: usize, rng: &mut R) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    let e = structure.identity();
    for _ in 0..trials {
        let a = structure.sample(rng);
        let right = apply(structure, "identity", a, e)?;
        if right != a {
            return Err(AxiomViolation::NotEqual {
                law: "identity",
                operands: vec![a, e],
                lhs: right,
                rhs: a,
            });
        }
        let left = apply(structure, "identity", e, a)?;
        if left != a {
            return Err(AxiomViolation::NotEqual {
                law: "identity",
                operands: vec![e, a],
                lhs: left,
                rhs: a,
            });
        }
    }
    Ok(())
}

/// Inverse: `a⁻¹` is a member and `a op a⁻¹ == e == a⁻¹ op a`
pub fn check_inverse<S, R>(structure: &S, trials: usize, rng: &mut R) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    let e = structure.identity();
    for _ in 0..trials {
        let a = structure.sample(rng);
        let inv = structure
            .inverse(a)
            .map_err(|source| AxiomViolation::Rejected {
                law: "inverse",
                source,
            })?;
        if !structure.contains(inv) {
            return Err(AxiomViolation::NotContained {
                law: "inverse",
                operands: vec![a],
                result: inv,
            });
        }
        let right = apply(structure, "inverse", a, inv)?;
        if right != e {
            return Err(AxiomViolation::NotEqual {
                law: "inverse",
                operands: vec![a, inv],
                lhs: right,
                rhs: e,
            });
        }
        let left = apply(structure, "inverse", inv, a)?;
        if left != e {
            return Err(AxiomViolation::NotEqual {
                law: "inverse",
                operands: vec![inv, a],
                lhs: left,
                rhs: e,
            });
        }
    }
    Ok(())
}

/// Commutativity: `a op b == b op a`
///
/// Only meaningful for structures claimed commutative; both groups in this
/// crate are.
pub fn check_commutativity<S, R>(
    structure: &S,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    for _ in 0..trials {
        let a = structure.sample(rng);
        let b = structure.sample(rng);
        let lhs = apply(structure, "commutativity", a, b)?;
        let rhs = apply(structure, "commutativity", b, a)?;
        if lhs != rhs {
            return Err(AxiomViolation::NotEqual {
                law: "commutativity",
                operands: vec![a, b],
                lhs,
                rhs,
            });
        }
    }
    Ok(())
}

/// Runs the four group axioms in sequence, failing on the first violation
pub fn check_group_axioms<S, R>(
    structure: &S,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    check_closure(structure, trials, rng)?;
    check_associativity(structure, trials, rng)?;
    check_identity(structure, trials, rng)?;
    check_inverse(structure, trials, rng)?;
    Ok(())
}

/// Group axioms plus commutativity
pub fn check_commutative_group<S, R>(
    structure: &S,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    S: AlgebraicStructure,
    R: Rng + ?Sized,
{
    check_group_axioms(structure, trials, rng)?;
    check_commutativity(structure, trials, rng)?;
    Ok(())
}

/// Distributivity: `a(b + c) == ab + ac` and `(a + b)c' == ac' + bc'`
///
/// The law must hold for all field elements including zero addends, but the
/// multiplicative operation itself is undefined at zero, so only the
/// multiplier is drawn from the nonzero carrier. Products with a zero
/// factor are zero by the field law and bypass the group operation.
pub fn check_distributivity<R>(
    field: &FiniteField,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    R: Rng + ?Sized,
{
    let add = field.additive();
    for _ in 0..trials {
        let a = field.random_nonzero_element(rng);
        let b = field.random_element(rng);
        let c = field.random_element(rng);

        // Left: a * (b + c) == a*b + a*c
        let b_plus_c = apply(add, "left distributivity", b, c)?;
        let lhs = field_mul(field, a, b_plus_c)?;
        let ab = field_mul(field, a, b)?;
        let ac = field_mul(field, a, c)?;
        let rhs = apply(add, "left distributivity", ab, ac)?;
        if lhs != rhs {
            return Err(AxiomViolation::NotEqual {
                law: "left distributivity",
                operands: vec![a, b, c],
                lhs,
                rhs,
            });
        }

        // Right: (a + b) * c' == a*c' + b*c', with a fresh nonzero multiplier
        let c2 = field.random_nonzero_element(rng);
        let a_plus_b = apply(add, "right distributivity", a, b)?;
        let lhs = field_mul(field, a_plus_b, c2)?;
        let ac2 = field_mul(field, a, c2)?;
        let bc2 = field_mul(field, b, c2)?;
        let rhs = apply(add, "right distributivity", ac2, bc2)?;
        if lhs != rhs {
            return Err(AxiomViolation::NotEqual {
                law: "right distributivity",
                operands: vec![a, b, c2],
                lhs,
                rhs,
            });
        }
    }
    Ok(())
}

// Field multiplication is total: a product with a zero factor is zero,
// nonzero factors go through the multiplicative structure.
fn field_mul(
    field: &FiniteField,
    a: FieldElement,
    b: FieldElement,
) -> Result<FieldElement, AxiomViolation> {
    if a.is_zero() || b.is_zero() {
        return Ok(field.element(0));
    }
    field
        .multiplicative()
        .operation(a, b)
        .map_err(|source| AxiomViolation::Rejected {
            law: "distributivity",
            source,
        })
}

/// Verifies that GF(p) is a field: both structures are commutative groups
/// and multiplication distributes over addition
pub fn check_field_axioms<R>(
    field: &FiniteField,
    trials: usize,
    rng: &mut R,
) -> Result<(), AxiomViolation>
where
    R: Rng + ?Sized,
{
    check_commutative_group(field.additive(), trials, rng)?;
    check_commutative_group(field.multiplicative(), trials, rng)?;
    check_distributivity(field, trials, rng)?;
    Ok(())
}
