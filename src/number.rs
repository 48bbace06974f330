//! Arithmetic facade with operator overloading
//!
//! `FieldNumber` wraps a field element together with a borrow of its field
//! and overloads the standard operators by delegating to the two group
//! structures. It is purely a convenience layer: no arithmetic of its own,
//! no invariants beyond those of the structures it routes through.

use crate::element::FieldElement;
use crate::error::FieldError;
use crate::field::FiniteField;
use crate::group::structure::AlgebraicStructure;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A field element with natural arithmetic syntax
///
/// Borrows its `FiniteField` non-exclusively; many numbers may share one
/// field and none of them mutates it. The `checked_*` methods are the
/// error-propagating path; the operator impls delegate to them and panic
/// with the error's message on misuse (mixing fields, dividing by zero).
///
/// Mixed operations with a raw integer are permitted on either side; the
/// integer is lifted into the field first.
///
/// # Example
/// ```
/// use gfp::field::FiniteField;
/// use gfp::number::FieldNumber;
///
/// let gf7 = FiniteField::new(7).unwrap();
/// let a = FieldNumber::new(&gf7, 3);
/// let b = FieldNumber::new(&gf7, 5);
/// assert_eq!(a + b, 1);     // 3 + 5 = 8 ≡ 1 (mod 7)
/// assert_eq!(a * b, 1);     // 3 * 5 = 15 ≡ 1 (mod 7)
/// assert_eq!(2 * b, 3);     // integers lift into the field
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldNumber<'f> {
    field: &'f FiniteField,
    element: FieldElement,
}

impl<'f> FieldNumber<'f> {
    /// Lifts a raw integer into the field
    pub fn new(field: &'f FiniteField, value: i64) -> Self {
        Self {
            field,
            element: field.element(value),
        }
    }

    /// Wraps an existing element
    ///
    /// An element whose modulus differs from the field's surfaces as a
    /// `DomainError` on the first operation.
    pub fn from_element(field: &'f FiniteField, element: FieldElement) -> Self {
        Self { field, element }
    }

    /// The canonical residue of the wrapped element
    pub fn value(&self) -> u64 {
        self.element.value()
    }

    /// The wrapped element
    pub fn element(&self) -> FieldElement {
        self.element
    }

    /// Addition through the additive structure
    pub fn checked_add(&self, other: &FieldNumber<'_>) -> Result<FieldNumber<'f>, FieldError> {
        let sum = self.field.additive().operation(self.element, other.element)?;
        Ok(Self::from_element(self.field, sum))
    }

    /// Subtraction: `a + (-b)` through the additive structure
    pub fn checked_sub(&self, other: &FieldNumber<'_>) -> Result<FieldNumber<'f>, FieldError> {
        let add = self.field.additive();
        let neg = add.inverse(other.element)?;
        let diff = add.operation(self.element, neg)?;
        Ok(Self::from_element(self.field, diff))
    }

    /// Multiplication through the multiplicative structure
    ///
    /// Zero operands are not members of the multiplicative group, so a zero
    /// factor is a `DomainError`.
    pub fn checked_mul(&self, other: &FieldNumber<'_>) -> Result<FieldNumber<'f>, FieldError> {
        let product = self
            .field
            .multiplicative()
            .operation(self.element, other.element)?;
        Ok(Self::from_element(self.field, product))
    }

    /// Division: `a * b⁻¹` through the multiplicative structure
    ///
    /// # Errors
    /// Division by an element whose value is 0 propagates the group's
    /// `UndefinedOperation`.
    pub fn checked_div(&self, other: &FieldNumber<'_>) -> Result<FieldNumber<'f>, FieldError> {
        let mult = self.field.multiplicative();
        let inv = mult.inverse(other.element)?;
        let quotient = mult.operation(self.element, inv)?;
        Ok(Self::from_element(self.field, quotient))
    }

    /// Additive inverse
    pub fn checked_neg(&self) -> Result<FieldNumber<'f>, FieldError> {
        let neg = self.field.additive().inverse(self.element)?;
        Ok(Self::from_element(self.field, neg))
    }

    /// Exponentiation by repeated multiplicative operation
    ///
    /// A non-negative exponent multiplies the base onto the multiplicative
    /// identity `exp` times, so `x^0 == 1` for every element, including
    /// zero: `0^0 == 1` in this field's convention. A negative exponent
    /// inverts first and raises the inverse to `-exp`.
    ///
    /// # Errors
    /// Raising zero to a positive power is rejected by the multiplicative
    /// structure with a `DomainError`; a negative exponent on zero
    /// propagates `UndefinedOperation` from the inverse.
    pub fn checked_pow(&self, exp: i64) -> Result<FieldNumber<'f>, FieldError> {
        let element = if exp < 0 {
            let inv = self.field.multiplicative().inverse(self.element)?;
            self.pow_repeated(inv, exp.unsigned_abs())?
        } else {
            self.pow_repeated(self.element, exp as u64)?
        };
        Ok(Self::from_element(self.field, element))
    }

    fn pow_repeated(&self, base: FieldElement, times: u64) -> Result<FieldElement, FieldError> {
        let mult = self.field.multiplicative();
        let mut result = mult.identity();
        for _ in 0..times {
            result = mult.operation(result, base)?;
        }
        Ok(result)
    }
}

impl PartialEq for FieldNumber<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl Eq for FieldNumber<'_> {}

impl PartialEq<i64> for FieldNumber<'_> {
    fn eq(&self, other: &i64) -> bool {
        // Lift the integer into this number's field before comparing
        self.element == self.field.element(*other)
    }
}

impl PartialEq<FieldNumber<'_>> for i64 {
    fn eq(&self, other: &FieldNumber<'_>) -> bool {
        other == self
    }
}

impl<'f> Add for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn add(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        self.checked_add(&other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'f> Sub for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn sub(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        self.checked_sub(&other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'f> Mul for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn mul(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        self.checked_mul(&other).unwrap_or_else(|e| panic!("{}", e))
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'f> Div for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn div(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        self.checked_div(&other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'f> Neg for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn neg(self) -> FieldNumber<'f> {
        self.checked_neg().unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'f> Add<i64> for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn add(self, other: i64) -> FieldNumber<'f> {
        self + FieldNumber::new(self.field, other)
    }
}

impl<'f> Add<FieldNumber<'f>> for i64 {
    type Output = FieldNumber<'f>;

    fn add(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        FieldNumber::new(other.field, self) + other
    }
}

impl<'f> Sub<i64> for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn sub(self, other: i64) -> FieldNumber<'f> {
        self - FieldNumber::new(self.field, other)
    }
}

impl<'f> Sub<FieldNumber<'f>> for i64 {
    type Output = FieldNumber<'f>;

    fn sub(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        FieldNumber::new(other.field, self) - other
    }
}

impl<'f> Mul<i64> for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn mul(self, other: i64) -> FieldNumber<'f> {
        self * FieldNumber::new(self.field, other)
    }
}

impl<'f> Mul<FieldNumber<'f>> for i64 {
    type Output = FieldNumber<'f>;

    fn mul(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        FieldNumber::new(other.field, self) * other
    }
}

impl<'f> Div<i64> for FieldNumber<'f> {
    type Output = FieldNumber<'f>;

    fn div(self, other: i64) -> FieldNumber<'f> {
        self / FieldNumber::new(self.field, other)
    }
}

impl<'f> Div<FieldNumber<'f>> for i64 {
    type Output = FieldNumber<'f>;

    fn div(self, other: FieldNumber<'f>) -> FieldNumber<'f> {
        FieldNumber::new(other.field, self) / other
    }
}

impl fmt::Display for FieldNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)
    }
}
