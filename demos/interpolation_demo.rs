//! Example sweeping the shortest arc from the identity to a bit flip.
//! Prints evenly spaced frames, then a few oscillating clock ticks.

use quop::{Interpolator, InterpolatorConfig, Quop, QuopError, check_unitarity};

fn main() -> Result<(), QuopError> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("--- quop Example: Interpolating I -> X ---");

    let interp = Interpolator::new(Quop::identity(), Quop::pauli_x());
    println!("\nStart: {:.3}", interp.start().operator);
    println!("End:   {:.3}", interp.end().operator);

    // --- Evenly spaced frames ---
    println!("\nFrames:");
    for frame in interp.frames(5) {
        check_unitarity(&frame.operator, None)?;
        println!("  {:.3}", frame);
    }

    // The midpoint is sqrt(X) up to global phase: 0.5 * [[1+i, 1-i], [1-i, 1+i]].
    println!("\nMidpoint: {:.3}", interp.at(0.5));

    // --- Animation clock ---
    let mut animated = Interpolator::with_config(
        Quop::identity(),
        Quop::hadamard(),
        InterpolatorConfig { clock_step: 0.5, ..Default::default() },
    );
    println!("\nTicks toward H (t = sin(clock)/2 + 1/2):");
    for _ in 0..8 {
        let frame = animated.tick();
        println!("  {:.3}", frame);
    }

    Ok(())
}
