//! Demand smoothing walkthrough
//!
//! Feeds a short burst of noisy queue counts through one demand filter and
//! prints how the smoothed estimate trails the raw jumps.
//!
//! Run with: cargo run --example 01_demand_smoothing

use greenwave_core::{DemandFilter, FilterConfig, TimingResult};

fn main() -> TimingResult<()> {
    let mut filter = DemandFilter::new(FilterConfig::default());

    println!("Demand smoothing");
    println!("================");
    println!("{:>6} {:>10} {:>12}", "raw", "smoothed", "uncertainty");

    // A queue building up: quiet readings, then a platoon arrives
    for raw in [5.0, 6.0, 4.0, 10.0, 12.0, 11.0] {
        let smoothed = filter.update(raw)?;
        println!(
            "{:>6.1} {:>10.2} {:>12.3}",
            raw,
            smoothed,
            filter.uncertainty()
        );
    }

    println!();
    println!(
        "Estimate settles near the recent readings while the jumps are damped; \
         uncertainty converges to its fixed point."
    );

    Ok(())
}
