// tests/parsing_tests.rs

use num_complex::Complex64;
use quop::validation::is_unitary;
use quop::{Quop, QuopError, RepairSyndrome, approx_eq, check_non_negative_diagonal, parse_operator, ulerp};

#[test]
fn test_entered_matrices_are_classified() -> Result<(), QuopError> {
    let cases = [
        ("1, 0, 0, 1", RepairSyndrome::AlreadyUnitary),
        ("0.7, 0.7, 0.7, -0.7", RepairSyndrome::AlreadyUnitary),
        ("0, -i, i, 0", RepairSyndrome::AlreadyUnitary),
        ("2, 0, 0, 2", RepairSyndrome::FixedByScaling),
        ("0, 3i, 3, 0", RepairSyndrome::FixedByScaling),
        ("1, 0, 0, 0.5", RepairSyndrome::FixedBySvd),
        ("1, 1, 0, 1", RepairSyndrome::FixedBySvd),
    ];
    for (text, expected) in cases {
        let repair = parse_operator(text)?.repair();
        assert_eq!(repair.syndrome, expected, "syndrome for {:?}", text);
        assert!(is_unitary(&repair.operator, None), "repair of {:?} is not unitary: {}", text, repair.operator);
    }
    Ok(())
}

#[test]
fn test_syndrome_labels() -> Result<(), QuopError> {
    let labels: Vec<&str> = ["h", "2i, 0, 0, 2i", "1, 2, 3, 4"]
        .iter()
        .map(|text| text.parse::<Quop>().map(|op| op.repair().syndrome.label()))
        .collect::<Result<_, _>>()?;
    assert_eq!(labels, vec!["", "(fixed by scaling)", "(fixed by svd)"]);
    Ok(())
}

#[test]
fn test_typed_sqrt_x_matches_interpolated_midpoint() -> Result<(), QuopError> {
    let typed: Quop = "0.5+0.5i, 0.5-0.5i, 0.5 - 0.5i, 0.5 + 0.5i".parse()?;
    let half = ulerp(&Quop::identity(), &Quop::pauli_x(), 0.5);
    assert!(approx_eq(&typed, &half, 1e-9), "typed {} vs interpolated {}", typed, half);
    Ok(())
}

#[test]
fn test_svd_of_entered_matrix() -> Result<(), QuopError> {
    let op = parse_operator("1e0, 2, 3, 4")?;
    let svd = op.svd();
    assert!(approx_eq(&svd.reconstruct(), &op, 1e-9));
    check_non_negative_diagonal(&svd.s, None)?;
    let (s1, s2) = svd.singular_values();
    assert!(s1 >= s2);
    assert!((s1 * s2 - 2.0).abs() < 1e-9, "product of singular values is |det| = 2");
    Ok(())
}

#[test]
fn test_scientific_notation_entries() -> Result<(), QuopError> {
    let op = parse_operator("1e-3, -2.5e+1i, 0, 1E2 - 1e-1i")?;
    assert_eq!(op.a(), Complex64::new(1e-3, 0.0));
    assert_eq!(op.b(), Complex64::new(0.0, -25.0));
    assert_eq!(op.d(), Complex64::new(100.0, -0.1));
    Ok(())
}

#[test]
fn test_rejected_input_reports_text() {
    let err = parse_operator("1, 2, 3").unwrap_err();
    assert_eq!(
        err,
        QuopError::Parse {
            input: "1, 2, 3".to_string(),
            message: "need 4 values".to_string(),
        }
    );

    match parse_operator("1, 0, zero, 1") {
        Err(QuopError::Parse { input, message }) => {
            assert_eq!(input, " zero");
            assert!(message.starts_with("not a number"), "message: {}", message);
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    let shown = format!("{}", "1, , 0, 1".parse::<Quop>().unwrap_err());
    assert!(shown.contains("need 4 values"), "display: {}", shown);
}
