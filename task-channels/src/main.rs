use std::fs;

use clap::Parser;
use leibniz_pi_core::JobParameters;
use leibniz_pi_task_channels::calculate;

/// Estimates pi with a truncated Leibniz series spread over a pool of
/// worker actors behind a round-robin router
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of worker actors in the pool
    #[arg(long, default_value = "4")]
    workers: usize,

    /// Number of work messages the master emits per run
    #[arg(long, default_value = "10000")]
    messages: usize,

    /// Number of series terms covered by each message
    #[arg(long, default_value = "10000")]
    elements_per_message: usize,

    /// JSON file holding the full parameter set; replaces the flags above
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let parameters = match args.config {
        Some(path) => {
            let contents = fs::read_to_string(&path)?;
            let parameters: JobParameters = serde_json::from_str(&contents)?;
            parameters.validate()?
        }
        None => JobParameters::new(args.workers, args.messages, args.elements_per_message)?,
    };

    println!("=== LEIBNIZ PI ESTIMATION ===");
    println!("Configuration:");
    println!("  - Workers: {}", parameters.worker_count);
    println!("  - Messages: {}", parameters.message_count);
    println!("  - Elements per message: {}", parameters.elements_per_message);
    println!("  - Series terms: {}", parameters.total_elements());

    calculate(parameters).await?;

    Ok(())
}
