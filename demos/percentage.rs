use covenant::{Validator, ensure, require};

/// Accepts finite values in `0.0..=100.0`.
struct Percent;

impl Validator<f64> for Percent {
    fn validate(&self, value: &f64) -> bool {
        value.is_finite() && (0.0..=100.0).contains(value)
    }
}

fn calculate_percentage(part: f64, whole: f64) -> f64 {
    require!(part >= 0.0, "part must be non-negative");
    require!(part <= whole, "part must not exceed whole");
    require!(whole, |w| *w > 0.0, "whole must be positive");

    let output = 100.0 * part / whole;

    ensure!(output, Percent, "result is a percentage");
    output
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // This call satisfies the contract and runs fine.
    println!("25 out of 100 = {}%", calculate_percentage(25.0, 100.0));

    // This call violates the precondition: it panics in a debug build and is
    // only logged when built with `--features log`.
    println!("10 out of 0 = {}%", calculate_percentage(10.0, 0.0));
}
