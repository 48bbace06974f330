//! Example: axiom verification
//!
//! Runs every law check against both group structures of a field with a
//! seeded generator, reporting each outcome separately.

use gfp::axioms::{self, DEFAULT_TRIALS};
use gfp::field::FiniteField;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2025);
    let gf = FiniteField::new(13).unwrap();

    println!("Verifying GF(13) with {} trials per law:\n", DEFAULT_TRIALS);

    report(
        "additive closure",
        axioms::check_closure(gf.additive(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "additive associativity",
        axioms::check_associativity(gf.additive(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "additive identity",
        axioms::check_identity(gf.additive(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "additive inverse",
        axioms::check_inverse(gf.additive(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "additive commutativity",
        axioms::check_commutativity(gf.additive(), DEFAULT_TRIALS, &mut rng),
    );

    report(
        "multiplicative closure",
        axioms::check_closure(gf.multiplicative(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "multiplicative associativity",
        axioms::check_associativity(gf.multiplicative(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "multiplicative identity",
        axioms::check_identity(gf.multiplicative(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "multiplicative inverse",
        axioms::check_inverse(gf.multiplicative(), DEFAULT_TRIALS, &mut rng),
    );
    report(
        "multiplicative commutativity",
        axioms::check_commutativity(gf.multiplicative(), DEFAULT_TRIALS, &mut rng),
    );

    report(
        "distributivity",
        axioms::check_distributivity(&gf, DEFAULT_TRIALS, &mut rng),
    );
}

fn report(law: &str, outcome: Result<(), axioms::AxiomViolation>) {
    match outcome {
        Ok(()) => println!("  {:<32} passed", law),
        Err(e) => println!("  {:<32} FAILED: {}", law, e),
    }
}
