// tests/decomposition_tests.rs

use num_complex::Complex64;
use quop::validation::random_unitary;
use quop::{Quop, QuopError, check_non_negative_diagonal, check_unitarity};
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use std::f64::consts::FRAC_1_SQRT_2;

const TEST_TOLERANCE: f64 = 1e-6;

/// Asserts that two operators are approximately equal entry by entry.
/// Panics if the distance between any pair of entries exceeds tolerance.
fn assert_quop_approx_equal(actual: &Quop, expected: &Quop, tolerance: f64, context: &str) {
    for (i, (a, e)) in actual.entries().iter().zip(expected.entries().iter()).enumerate() {
        let dist = (a - e).norm();
        assert!(
            dist < tolerance,
            "Entry mismatch at index {} - Actual: {}, Expected: {}, Dist: {:.3e}, Context: {}",
            i, a, e, dist, context
        );
    }
}

fn random_matrix(rng: &mut StdRng) -> Quop {
    let range = Uniform::new(-1.0, 1.0).expect("valid range");
    let mut entry = || Complex64::new(range.sample(rng), range.sample(rng));
    Quop::new(entry(), entry(), entry(), entry())
}

fn check_svd(m: &Quop, context: &str) -> Result<(), QuopError> {
    let svd = m.svd();
    assert_quop_approx_equal(&svd.reconstruct(), m, TEST_TOLERANCE, context);
    check_non_negative_diagonal(&svd.s, Some(1e-9))?;
    check_unitarity(&svd.u, Some(TEST_TOLERANCE))?;
    check_unitarity(&svd.v, Some(TEST_TOLERANCE))?;
    let (s1, s2) = svd.singular_values();
    assert!(s1 + 1e-12 >= s2, "singular values out of order for {}: {} < {}", context, s1, s2);
    Ok(())
}

#[test]
fn test_svd_of_named_gates() -> Result<(), QuopError> {
    let gates = [
        ("I", Quop::identity()),
        ("X", Quop::pauli_x()),
        ("Y", Quop::pauli_y()),
        ("Z", Quop::pauli_z()),
        ("H", Quop::hadamard()),
    ];
    for (name, gate) in gates {
        check_svd(&gate, name)?;
        let (s1, s2) = gate.svd().singular_values();
        assert!((s1 - 1.0).abs() < 1e-9 && (s2 - 1.0).abs() < 1e-9, "{} has singular values {}, {}", name, s1, s2);
    }
    Ok(())
}

#[test]
fn test_svd_of_random_complex_matrices() -> Result<(), QuopError> {
    let mut rng = StdRng::seed_from_u64(2015);
    for i in 0..500 {
        let m = random_matrix(&mut rng);
        check_svd(&m, &format!("random matrix #{}: {}", i, m))?;
    }
    Ok(())
}

#[test]
fn test_svd_of_singular_and_sparse_matrices() -> Result<(), QuopError> {
    let cases = [
        Quop::new(1.0, 1.0, 1.0, 1.0),                                   // rank one
        Quop::new(0.0, 0.0, 0.0, 2.0),                                   // single entry
        Quop::new(0.0, Complex64::new(0.0, 3.0), 0.0, 0.0),              // nilpotent
        Quop::new(Complex64::new(0.0, 1.0), 0.0, Complex64::new(2.0, -1.0), 0.0), // zero column
        Quop::new(1.0, 2.0, 3.0, 4.0),                                   // negative determinant
    ];
    for m in cases {
        check_svd(&m, &format!("{}", m))?;
    }
    Ok(())
}

#[test]
fn test_adjoint_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let m = random_matrix(&mut rng);
        assert_eq!(m.adjoint().adjoint(), m);
    }
}

#[test]
fn test_svd_factors_of_scaled_hadamard() {
    let m = Quop::hadamard().scaled_by(Complex64::new(0.0, 2.0));
    let svd = m.svd();
    let (s1, s2) = svd.singular_values();
    assert!((s1 - 2.0).abs() < 1e-9 && (s2 - 2.0).abs() < 1e-9);
    assert_quop_approx_equal(&svd.u.times(&svd.v), &Quop::hadamard().scaled_by(Complex64::i()), 1e-9, "u*v");
}

#[test]
fn test_repair_produces_unitary_close_to_input() -> Result<(), QuopError> {
    let mut rng = StdRng::seed_from_u64(99);
    let noise = Uniform::new(-0.01, 0.01).expect("valid range");
    for _ in 0..100 {
        let u = random_unitary(&mut rng);
        let noisy = Quop::new(
            u.a() + noise.sample(&mut rng),
            u.b() + noise.sample(&mut rng),
            u.c() + noise.sample(&mut rng),
            u.d() + noise.sample(&mut rng),
        );
        let repaired = noisy.repair().operator;
        check_unitarity(&repaired, None)?;
        assert_quop_approx_equal(&repaired, &u, 0.05, "repair of noisy unitary");
    }
    Ok(())
}

#[test]
fn test_breakdown_of_hadamard() {
    let b = Quop::hadamard().ubreakdown();
    let expected = [0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2];
    for (got, want) in b.coefficients().iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {} want {}", got, want);
    }
    assert_quop_approx_equal(&b.recompose(), &Quop::hadamard(), 1e-12, "recompose H");
}

#[test]
fn test_breakdown_is_phase_invariant() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let u = random_unitary(&mut rng);
        let phased = u.scaled_by(Complex64::from_polar(1.0, 0.7));
        let (b1, b2) = (u.ubreakdown(), phased.ubreakdown());
        // Same point up to the sign of the double cover.
        assert!((b1.dot(&b2).abs() - 1.0).abs() < 1e-9);
    }
}
