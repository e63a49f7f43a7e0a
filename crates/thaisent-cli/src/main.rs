use clap::{Parser, Subcommand};
use thaisent_model::SentimentModel;

#[derive(Debug, Parser)]
#[command(name = "thaisent-cli")]
#[command(about = "Thai sentiment service command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single text and print the prediction as JSON.
    Classify { text: String },
    /// Print summary information about the configured model artifact.
    Inspect,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = thaisent_core::load_app_config_from_env()?;
    let model = SentimentModel::load(&config.model_path)?;

    match cli.command {
        Commands::Classify { text } => {
            let prediction = model.classify(&text);
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
        Commands::Inspect => {
            let labels: Vec<String> = model.labels().iter().map(ToString::to_string).collect();
            println!("model: {}", config.model_path.display());
            println!("analyzer: {}", model.analyzer());
            println!("labels: {}", labels.join(", "));
            println!("vocabulary: {} terms", model.vocabulary_size());
        }
    }

    Ok(())
}
