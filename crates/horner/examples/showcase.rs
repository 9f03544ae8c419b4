//! Walkthrough of polynomial construction, arithmetic and calculus.
//!
//! Run with: cargo run --example showcase
//! Set `HORNER_LOG=trace` to see coefficient store growth.

use horner::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn log_level() -> Level {
    match std::env::var("HORNER_LOG").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("warn") => Level::WARN,
        Ok("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<(), PolyError> {
    let subscriber = FmtSubscriber::builder().with_max_level(log_level()).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    println!("--- Integer Polynomial ---");
    // (x + 1) * (x + 1) = x² + 2x + 1
    let p1 = Polynomial::from([1, 1]);
    let p2 = Polynomial::from([1, 1]);
    let p3 = &p1 * &p2;
    println!("P1: {p1}");
    println!("P1 * P2 = {p3}");

    println!("\n--- Floating Polynomial ---");
    let p_float = Polynomial::from([2.5, 0.0, 0.5]);
    println!("P_float: {p_float}");
    println!("P_float(2) = {}", p_float.solve(&2.0));

    println!("\n--- Derivative ---");
    println!("({p3})' = {}", p3.derivative());

    println!("\n--- Division ---");
    let q = p3.checked_div(&p1)?;
    println!("({p3}) / ({p1}) = {q}");

    println!("\n--- Composition ---");
    let shifted = Polynomial::from([0, 0, 1]).compose(&Polynomial::from([-1, 1]));
    println!("x² at (x - 1) = {shifted}");

    println!("\n--- Growth ---");
    let mut grown = Polynomial::constant(1);
    for c in 2..=6 {
        grown.add_new_term(c);
        tracing::info!(degree = grown.degree(), capacity = grown.capacity(), "appended term");
    }
    let caret = FormatOptions::default().with_variable("t").with_powers(PowerStyle::Caret);
    println!("{}", grown.display_with(&caret));

    println!("\n--- Edge Cases ---");
    let zero = Polynomial::<i32>::with_degree(0)?;
    println!("Default polynomial: {zero}");
    println!("Is empty? {}", if zero.is_empty() { "Yes" } else { "No" });
    match Polynomial::<i32>::with_degree(-1) {
        Ok(_) => println!("Negative degree accepted?"),
        Err(e) => println!("Negative degree: {e}"),
    }
    match p3.checked_div(&Polynomial::from([1, 0])) {
        Ok(_) => println!("Division by zero leading coefficient accepted?"),
        Err(e) => println!("Division fault: {e}"),
    }

    Ok(())
}
