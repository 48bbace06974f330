//! Integration tests exercising the public surface across a range of primes

use gfp::axioms::{self, DEFAULT_TRIALS};
use gfp::element::FieldElement;
use gfp::error::FieldError;
use gfp::field::FiniteField;
use gfp::group::{AlgebraicStructure, MultiplicativeGroup};
use gfp::number::FieldNumber;
use rand::rngs::StdRng;
use rand::SeedableRng;

const PRIMES: [u64; 6] = [2, 3, 5, 7, 11, 13];

#[test]
fn field_axioms_hold_for_all_tested_primes() {
    let mut rng = StdRng::seed_from_u64(0xF1E1D);
    for p in PRIMES {
        let gf = FiniteField::new(p).unwrap();
        axioms::check_field_axioms(&gf, DEFAULT_TRIALS, &mut rng)
            .unwrap_or_else(|e| panic!("GF({}): {}", p, e));
    }
}

#[test]
fn group_axioms_hold_for_both_structures() {
    let mut rng = StdRng::seed_from_u64(0xA51);
    for p in PRIMES {
        let gf = FiniteField::new(p).unwrap();
        axioms::check_commutative_group(gf.additive(), DEFAULT_TRIALS, &mut rng)
            .unwrap_or_else(|e| panic!("additive GF({}): {}", p, e));
        axioms::check_commutative_group(gf.multiplicative(), DEFAULT_TRIALS, &mut rng)
            .unwrap_or_else(|e| panic!("multiplicative GF({}): {}", p, e));
    }
}

#[test]
fn fermat_inverse_is_exhaustively_correct() {
    // a * a^(p-2) ≡ 1 (mod p) for every a in [1, p)
    for p in PRIMES {
        let g = MultiplicativeGroup::new(p).unwrap();
        for v in 1..p {
            let a = FieldElement::new(v as i64, p).unwrap();
            let inv = g.inverse(a).unwrap();
            assert_eq!(
                g.operation(a, inv).unwrap(),
                g.identity(),
                "inverse of {} failed in GF({})",
                v,
                p
            );
        }
    }
}

#[test]
fn zero_is_excluded_from_every_multiplicative_carrier() {
    for p in PRIMES {
        let g = MultiplicativeGroup::new(p).unwrap();
        let zero = FieldElement::new(0, p).unwrap();
        assert!(!g.contains(zero));
        assert!(matches!(
            g.inverse(zero),
            Err(FieldError::UndefinedOperation(_))
        ));
    }
}

#[test]
fn normalization_is_idempotent() {
    for p in PRIMES {
        let gf = FiniteField::new(p).unwrap();
        for v in [-100i64, -1, 0, 1, 42, 1000] {
            let direct = gf.element(v);
            let reduced = gf.element(direct.value() as i64);
            assert_eq!(direct, reduced);
        }
    }
}

#[test]
fn facade_matches_direct_structure_calls() {
    let mut rng = StdRng::seed_from_u64(0xFACADE);
    for p in PRIMES {
        let gf = FiniteField::new(p).unwrap();
        let add = gf.additive();
        let mult = gf.multiplicative();

        for _ in 0..20 {
            let a = gf.random_element(&mut rng);
            let b = gf.random_nonzero_element(&mut rng);
            let x = FieldNumber::from_element(&gf, a);
            let y = FieldNumber::from_element(&gf, b);

            assert_eq!(
                x.checked_add(&y).unwrap().element(),
                add.operation(a, b).unwrap()
            );
            assert_eq!(
                x.checked_sub(&y).unwrap().element(),
                add.operation(a, add.inverse(b).unwrap()).unwrap()
            );
            assert_eq!(x.checked_neg().unwrap().element(), add.inverse(a).unwrap());
            if !a.is_zero() {
                assert_eq!(
                    x.checked_mul(&y).unwrap().element(),
                    mult.operation(a, b).unwrap()
                );
                assert_eq!(
                    x.checked_div(&y).unwrap().element(),
                    mult.operation(a, mult.inverse(b).unwrap()).unwrap()
                );
                assert_eq!(
                    x.checked_pow(-1).unwrap().element(),
                    mult.inverse(a).unwrap()
                );
            }
        }
    }
}

#[test]
fn known_arithmetic_in_gf5() {
    let gf = FiniteField::new(5).unwrap();
    let a = gf.element(3);
    let b = gf.element(4);

    // 3 + 4 = 7 ≡ 2 (mod 5)
    assert_eq!(gf.additive().operation(a, b).unwrap(), gf.element(2));
    // 3 * 4 = 12 ≡ 2 (mod 5)
    assert_eq!(gf.multiplicative().operation(a, b).unwrap(), gf.element(2));
    // 3 * 2 = 6 ≡ 1 (mod 5)
    assert_eq!(gf.multiplicative().inverse(a).unwrap(), gf.element(2));
}

#[test]
fn negative_exponent_matches_inverse_in_gf7() {
    let gf = FiniteField::new(7).unwrap();
    let a = FieldNumber::new(&gf, 3);

    let inv = gf.multiplicative().inverse(gf.element(3)).unwrap();
    assert_eq!(a.checked_pow(-1).unwrap().element(), inv);
}

#[test]
fn gf2_multiplicative_carrier_is_trivial() {
    let gf = FiniteField::new(2).unwrap();
    let g = gf.multiplicative();
    let one = gf.element(1);

    assert!(g.contains(one));
    assert!(!g.contains(gf.element(0)));
    assert_eq!(g.operation(one, one).unwrap(), one);
    assert_eq!(g.inverse(one).unwrap(), one);

    // Identity law passes trivially on the one-element carrier
    let mut rng = StdRng::seed_from_u64(9);
    axioms::check_identity(g, DEFAULT_TRIALS, &mut rng).unwrap();
}

#[test]
fn composite_moduli_are_rejected() {
    for m in [0u64, 1, 4, 6, 9, 100] {
        assert_eq!(FiniteField::new(m).err(), Some(FieldError::InvalidModulus(m)));
    }
}
