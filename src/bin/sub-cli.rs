use clap::{Parser, Subcommand};

use clash_merge::config::ObservabilityConfig;
use clash_merge::observability::init_logging;
use clash_merge::subscription::{decode_line, FieldMap, SubscriptionFetcher};

#[derive(Parser)]
#[command(name = "sub-cli")]
#[command(about = "Inspect how subscription links decode", long_about = None)]
struct Cli {
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode links given on the command line
    Decode {
        #[arg(required = true)]
        links: Vec<String>,
    },
    /// Download a subscription and decode every link in it
    Fetch { url: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&ObservabilityConfig {
        log_level: cli.log_level,
        ..Default::default()
    });

    let proxies: Vec<FieldMap> = match cli.command {
        Commands::Decode { links } => {
            let mut proxies = Vec::new();
            for link in &links {
                match decode_line(link)? {
                    Some(record) => proxies.push(record.to_field_map()),
                    None => eprintln!("skipped (unsupported scheme): {}", link),
                }
            }
            proxies
        }
        Commands::Fetch { url } => {
            let fetcher = SubscriptionFetcher::new(reqwest::Client::new());
            fetcher
                .fetch(&url)
                .await?
                .iter()
                .map(|record| record.to_field_map())
                .collect()
        }
    };

    print!("{}", serde_yaml::to_string(&proxies)?);
    Ok(())
}
