use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rand::Rng;

use earnings_chart::finance::{FinanceData, FinancePeriod, FinanceRecord, Graph, Slots};

/// A utility for creating random finance data for manually testing the earnings chart.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the JSON document to.
    #[arg(long, short)]
    output_path: String,

    /// The number of snapshots to generate. Only the first one is charted.
    #[arg(long, default_value_t = 1)]
    periods: usize,

    /// The probability that a slot has no data.
    #[arg(long, default_value_t = 0.1)]
    missing_ratio: f64,
}

/// Create a finance document with random earnings.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    if !(0.0..=1.0).contains(&args.missing_ratio) {
        eprintln!("The missing ratio must be between 0 and 1.");
        exit(1);
    }

    let mut rng = rand::thread_rng();
    let periods = (0..args.periods)
        .map(|_| FinancePeriod {
            graph: Graph {
                year: random_slots(&mut rng, 12, args.missing_ratio),
                half_year: random_slots(&mut rng, 6, args.missing_ratio),
                month: random_slots(&mut rng, 31, args.missing_ratio),
            },
        })
        .collect();

    let data = FinanceData {
        finance: FinanceRecord { periods },
    };

    println!("Writing mock data to {output_path:#?}");
    fs::write(output_path, serde_json::to_string_pretty(&data)?)?;

    println!("Success!");

    Ok(())
}

fn random_slots(rng: &mut impl Rng, count: usize, missing_ratio: f64) -> Slots {
    (0..count)
        .map(|slot| {
            let amount = if rng.gen_bool(missing_ratio) {
                None
            } else {
                Some(f64::from(rng.gen_range(5..=120) * 1000))
            };

            (slot.to_string(), amount)
        })
        .collect()
}
