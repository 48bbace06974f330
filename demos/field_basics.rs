//! Example: GF(p) basics
//!
//! Demonstrates constructing a field, doing arithmetic through the group
//! structures, and the operator facade.

use gfp::field::FiniteField;
use gfp::group::AlgebraicStructure;
use gfp::number::FieldNumber;

fn main() {
    println!("Constructing GF(97):\n");

    let gf = FiniteField::new(97).unwrap();
    let a = gf.element(50);
    let b = gf.element(60);

    println!("  a = {}, b = {}", a, b);
    println!("  a + b = {}", gf.additive().operation(a, b).unwrap());
    println!("  a * b = {}", gf.multiplicative().operation(a, b).unwrap());
    println!("  a⁻¹   = {}", gf.multiplicative().inverse(a).unwrap());

    println!("\nSame arithmetic through the facade:\n");

    let x = FieldNumber::new(&gf, 50);
    let y = FieldNumber::new(&gf, 60);
    println!("  x + y = {}", x + y);
    println!("  x - y = {}", x - y);
    println!("  x * y = {}", x * y);
    println!("  x / y = {}", x / y);
    println!("  x ** (-2) = {}", x.checked_pow(-2).unwrap());

    println!("\nNegative raw values normalize into [0, p):");
    println!("  -1 in GF(97) = {}", gf.element(-1));
}
