use clap::Parser;
use market_core::parse_seeds;
use std::path::PathBuf;
use std::process;

mod parallel;

#[derive(Parser)]
#[command(name = "market")]
#[command(about = "Secret-number sequence and trading-signal analyzer", long_about = None)]
struct Args {
    /// Input file with one seed per line
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    let input = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let seeds = match parse_seeds(&input) {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    };

    let report = parallel::evaluate_parallel(&seeds, market_eval::ROUNDS);

    // Results on stdout, exactly two lines.
    println!("{}", report.final_secret_sum);
    println!("{}", report.best_profit);

    // Statistics to stderr.
    eprintln!("Processed {} seeds", seeds.len());
}
