//! Finite Field Demonstration Driver
//!
//! Prints arithmetic tables for small GF(p), shows the operator facade, and
//! runs the randomized axiom checks across a list of primes.
//!
//! Run with: cargo run

use gfp::axioms::{self, DEFAULT_TRIALS};
use gfp::field::FiniteField;
use gfp::group::AlgebraicStructure;
use gfp::number::FieldNumber;

fn main() {
    let mut rng = rand::rng();

    println!("================================================================================");
    println!("Finite Field GF(p) - Arithmetic and Axiom Verification");
    println!("================================================================================\n");

    println!("Quick check in GF(5):");
    let gf5 = FiniteField::new(5).unwrap();
    let a = gf5.element(3);
    let b = gf5.element(4);
    println!("  3 + 4 = {}", gf5.additive().operation(a, b).unwrap());
    println!("  3 * 4 = {}", gf5.multiplicative().operation(a, b).unwrap());
    println!("  1 / 3 = {}", gf5.multiplicative().inverse(a).unwrap());
    println!();

    demonstrate_basic_operations(7);
    demonstrate_operator_overloading(7);

    println!("--------------------------------------------------------------------------------");
    println!("Axiom verification ({} trials per law)", DEFAULT_TRIALS);
    println!("--------------------------------------------------------------------------------");
    for p in [2u64, 3, 5, 7, 11] {
        let gf = FiniteField::new(p).unwrap();
        print!("GF({:>2}): ", p);
        match axioms::check_field_axioms(&gf, DEFAULT_TRIALS, &mut rng) {
            Ok(()) => println!("all field axioms hold"),
            Err(e) => println!("FAILED: {}", e),
        }
    }
    println!();

    println!("Constructing a field over a composite modulus:");
    match FiniteField::new(4) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  GF(4) rejected: {}", e),
    }
}

fn demonstrate_basic_operations(p: u64) {
    println!("--------------------------------------------------------------------------------");
    println!("Basic operations in GF({})", p);
    println!("--------------------------------------------------------------------------------");

    let gf = FiniteField::new(p).unwrap();

    println!("Additive inverses:");
    for i in 0..p {
        let elem = gf.element(i as i64);
        let inv = gf.additive().inverse(elem).unwrap();
        println!(
            "  -{} = {}  (check: {} + {} = {})",
            i,
            inv.value(),
            i,
            inv.value(),
            (i + inv.value()) % p
        );
    }

    println!("Multiplicative inverses:");
    for i in 1..p {
        let elem = gf.element(i as i64);
        let inv = gf.multiplicative().inverse(elem).unwrap();
        println!(
            "  1/{} = {}  (check: {} * {} = {})",
            i,
            inv.value(),
            i,
            inv.value(),
            (i * inv.value()) % p
        );
    }
    println!();
}

fn demonstrate_operator_overloading(p: u64) {
    println!("--------------------------------------------------------------------------------");
    println!("Operator facade in GF({})", p);
    println!("--------------------------------------------------------------------------------");

    let gf = FiniteField::new(p).unwrap();
    let a = FieldNumber::new(&gf, 3);
    let b = FieldNumber::new(&gf, 5);
    let c = FieldNumber::new(&gf, 2);

    println!("a = {}, b = {}, c = {}", a, b, c);
    println!("  a + b     = {}", a + b);
    println!("  a - b     = {}", a - b);
    println!("  a * b     = {}", a * b);
    println!("  a / b     = {}", a / b);
    println!("  a + 2     = {}", a + 2);
    println!("  3 * b     = {}", 3 * b);
    println!("  a ** 2    = {}", a.checked_pow(2).unwrap());
    println!("  a ** (-1) = {}", a.checked_pow(-1).unwrap());
    println!("  -a        = {}", -a);
    println!("  1 / a     = {}", 1 / a);

    // a * (c + c) vs a*c + a*c keeps every product inside the carrier
    let left = a * (c + c);
    let right = a * c + a * c;
    println!("Distributive identity: a * (c + c) = {}, a*c + a*c = {}", left, right);
    println!("  holds: {}\n", left == right);
}
