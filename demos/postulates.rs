//! Example walking through the measurement postulates: position
//! probabilities, transition amplitudes, the statistics of an observable and
//! its spectrum.

use num_complex::Complex;
use qlinear::observable::{normalized_transition_amplitude, sample_position};
use qlinear::{
    ComplexMatrix, ComplexVector, Observable, QlinearError, eigen_probabilities, probability_at_index,
    transition_amplitude,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), QlinearError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("--- qlinear Example: Quantum Postulates ---");

    // --- Position ---
    let v = ComplexVector::new(vec![
        Complex::new(-3.0, -1.0),
        Complex::new(0.0, -2.0),
        Complex::new(0.0, 1.0),
        Complex::new(2.0, 0.0),
    ]);
    println!("\nParticle state: {}", v);
    println!("P(position 2) = {:.6} (expected 1/19 = {:.6})", probability_at_index(&v, 2)?, 1.0 / 19.0);

    let mut rng = StdRng::seed_from_u64(19);
    let samples = (0..10)
        .map(|_| sample_position(&v, &mut rng))
        .collect::<Result<Vec<usize>, _>>()?;
    println!("Ten seeded detections: {:?}", samples);

    // --- Transition ---
    let h = std::f64::consts::SQRT_2 / 2.0;
    let v1 = ComplexVector::new(vec![Complex::new(h, 0.0), Complex::new(0.0, h)]);
    let v2 = ComplexVector::new(vec![Complex::new(0.0, h), Complex::new(-h, 0.0)]);
    println!("\n<v1, v2> / (|v1| |v2|) = {:.4}", normalized_transition_amplitude(&v1, &v2)?);
    println!("|<v2, v1>|^2 = {:.4}", transition_amplitude(&v1, &v2)?);

    // --- Observable ---
    let omega = Observable::new(
        ComplexMatrix::new(vec![
            vec![Complex::new(1.0, 0.0), Complex::new(0.0, -1.0)],
            vec![Complex::new(0.0, 1.0), Complex::new(2.0, 0.0)],
        ])?,
        None,
    )?;
    let psi = ComplexVector::new(vec![Complex::new(h, 0.0), Complex::new(0.0, h)]);
    let stats = omega.mean_and_variance(&psi, None)?;
    println!("\nObservable:\n{}", omega.matrix());
    println!("mean = {:.4}, variance = {:.4}, std dev = {:.4}", stats.mean, stats.variance, stats.std_dev());

    let eig = omega.eigen_decompose()?;
    for (lambda, vector) in eig.pairs() {
        println!("  eigenvalue {:.4} with eigenvector {}", lambda.re, vector);
    }

    let candidates = [ComplexVector::from_real(&[1.0, 0.0]), ComplexVector::from_real(&[0.0, 1.0])];
    let result = eigen_probabilities(omega.matrix(), &psi, &candidates, None)?;
    println!("Eigenvalues {:?}, transition probabilities {:?}", result.eigenvalues, result.probabilities);

    // --- Rejection ---
    let shear = ComplexMatrix::from_real(&[&[1.0, 1.0], &[0.0, 1.0]])?;
    if let Err(e) = Observable::new(shear, None) {
        println!("\nShear matrix rejected: {}", e);
    }

    Ok(())
}
