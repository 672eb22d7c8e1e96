use clap::Parser;
use dictation_analytics::analytics::derive_overall_stats;
use dictation_analytics::cli::parse_today;
use dictation_analytics::date_provider::{DateProvider, FixedDateProvider, SystemDateProvider};
use dictation_analytics::fixtures::{sample_lessons, synthetic_words};
use dictation_analytics::store::Snapshot;

/// Generates a synthetic analytics snapshot as JSON on stdout.
#[derive(Parser, Debug)]
#[command(about = "Generates a synthetic analytics fixture for the dashboard")]
struct GeneratorArgs {
    /// Seed for the pseudo-random generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of word records to generate
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// Date the derived streak is measured against (YYYY-MM-DD format)
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
}

fn main() {
    env_logger::init();
    let args = GeneratorArgs::parse();

    let date_provider: Box<dyn DateProvider> = match parse_today(args.today.as_deref()) {
        Ok(Some(date)) => Box::new(FixedDateProvider::new(date)),
        Ok(None) => Box::new(SystemDateProvider),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let words = synthetic_words(args.seed, args.count);
    let lessons = sample_lessons();
    let overall_stats = derive_overall_stats(&words, &lessons, date_provider.today());

    let snapshot = Snapshot {
        words,
        lessons,
        overall_stats,
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing fixture: {}", e);
            std::process::exit(1);
        }
    }
}
