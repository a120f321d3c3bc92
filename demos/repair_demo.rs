//! Example entering operators as text and snapping them onto the unitaries.
//! Shows the singular values behind each repair classification.

use quop::{Quop, QuopError, check_unitarity, parse_operator};

fn main() -> Result<(), QuopError> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("--- quop Example: Repairing Entered Operators ---");

    let inputs = [
        "h",
        "0.7, 0.7, 0.7, -0.7",
        "2i, 0, 0, 2i",
        "1, 2, 3, 4",
        "0.5+0.5i, 0.5-0.5i, 0.5-0.5i, 0.5+0.5i",
        "1, 2, 3",
    ];

    for text in inputs {
        println!("\nInput: {:?}", text);
        let entered: Quop = match parse_operator(text) {
            Ok(op) => op,
            Err(e) => {
                eprintln!("  Rejected: {}", e);
                continue;
            }
        };

        let svd = entered.svd();
        let (s1, s2) = svd.singular_values();
        println!("  Parsed:          {:.4}", entered);
        println!("  Singular values: {:.4}, {:.4}", s1, s2);

        let repair = entered.repair();
        check_unitarity(&repair.operator, None)?;
        println!("  Repaired:        {:.4} {}", repair.operator, repair.syndrome.label());

        let breakdown = repair.operator.ubreakdown();
        println!(
            "  Pauli breakdown: t={:.4} x={:.4} y={:.4} z={:.4} phase={:.4}",
            breakdown.t, breakdown.x, breakdown.y, breakdown.z, breakdown.phase
        );
    }

    Ok(())
}
