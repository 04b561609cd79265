//! Green Book appraisal demo
//!
//! Prints sample NPV, BCR and optimism bias results

use green_book_appraisal::{
    apply_optimism_bias, calculate_bcr, calculate_npv, format::pounds, ProjectType, RateCategory,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Green Book NPV Calculator");
    println!("{}", "=".repeat(40));

    // 5-year infrastructure project
    let cash_flows = [-1_000_000.0, 200_000.0, 250_000.0, 300_000.0, 350_000.0, 400_000.0];
    let npv = calculate_npv(&cash_flows, None, RateCategory::Standard)?;
    println!("Cash flows: {:?}", cash_flows);
    println!("NPV: {}", pounds(npv));

    let costs = [1_000_000.0, 50_000.0, 50_000.0, 50_000.0, 50_000.0];
    let benefits = [0.0, 300_000.0, 320_000.0, 340_000.0, 360_000.0];
    let bcr = calculate_bcr(&costs, &benefits, None, RateCategory::Standard)?;
    println!("\nBCR: {:.2}", bcr);

    let initial_cost = 10_000_000.0;
    let adjusted = apply_optimism_bias(initial_cost, ProjectType::default());
    println!("\nInitial cost: {}", pounds(initial_cost));
    println!("With optimism bias: {}", pounds(adjusted));

    Ok(())
}
