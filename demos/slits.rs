//! Example running the three classical-to-quantum experiments: boolean
//! marbles, probabilistic bullets through slits and photons through slits.
//!
//! Run with `RUST_LOG=qlinear=trace` to see every evolution step.

use qlinear::core::FRAC_1_SQRT_2;
use qlinear::experiments::{classical_slits, marbles, quantum_slits};
use qlinear::{ComplexMatrix, ComplexVector, EvolutionSequence, Evolver, QlinearError, StateKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Helper printing one bar per position
fn print_probabilities(label: &str, state: &ComplexVector) {
    println!("{}", label);
    for (position, p) in state.probabilities().iter().enumerate() {
        let bar = "#".repeat((p * 40.0).round() as usize);
        println!("  {:>2}: {:.4} {}", position, p, bar);
    }
}

fn main() -> Result<(), QlinearError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("--- qlinear Example: From Classical to Quantum ---");

    // --- Boolean Marbles ---
    let marble_op = ComplexMatrix::from_real(&[
        &[0.0, 0.0, 1.0, 0.0],
        &[0.0, 1.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ])?;
    let marble_start = ComplexVector::from_real(&[1.0, 0.0, 0.0, 0.0]);
    let after_click = marbles(&marble_op, &marble_start, 1, None)?;
    println!("\nMarbles after one click: {}", after_click);

    // --- Probabilistic Slits ---
    // The source column is all zeros, so the bullet leaves the system
    let bullet_op = ComplexMatrix::from_real(&[&[0.0, 0.5, 0.5], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])?;
    let bullet_start = ComplexVector::from_real(&[1.0, 0.0, 0.0]);
    let bullets = classical_slits(&bullet_op, &bullet_start, 1, None)?;
    print_probabilities("\nBullets after one step:", &bullets);

    // --- Quantum Slits ---
    let s = FRAC_1_SQRT_2;
    let photon_op = ComplexMatrix::from_real(&[&[0.0, s, s], &[s, 0.0, s], &[s, s, 0.0]])?;
    let photon_start = ComplexVector::from_real(&[1.0, 0.0, 0.0]);
    let photons = quantum_slits(&photon_op, &photon_start, 1, None)?;
    println!("\nPhoton amplitudes after one step: {}", photons);
    print_probabilities("Photon probabilities:", &photons);

    // --- Full Trajectory ---
    // Same photon matrix, three steps, every state recorded
    let evolver = Evolver::with_validation(StateKind::Amplitude);
    match evolver.run(&EvolutionSequence::repeat(photon_op, 3), &photon_start) {
        Ok(trace) => {
            println!("\n{}", trace);
            print_probabilities("Final probabilities (unnormalized, the matrix is not unitary):", trace.final_state());
        }
        Err(e) => {
            eprintln!("\n--- Evolution Failed ---");
            eprintln!("Error: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
