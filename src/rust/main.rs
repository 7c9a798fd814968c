use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use spamfilter::{
    load_tsv_file, send_message, serve_once, BuiltinDataset, Classifier, Corpus, DatasetManager,
    ServiceConfig,
};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train on a dataset and classify a single message
    Classify {
        #[command(flatten)]
        training: TrainingArgs,
        /// Message to classify
        text: String,
    },
    /// Train on a dataset, then classify one message received over TCP
    Serve {
        #[command(flatten)]
        training: TrainingArgs,
        /// Address to listen on
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Send a message to a running service; reads a line from stdin when omitted
    Send {
        /// Address of the service
        #[arg(short, long)]
        addr: Option<String>,
        message: Option<String>,
    },
}

#[derive(Args)]
struct TrainingArgs {
    /// Built-in dataset to download and train on (spam01, spam02)
    #[arg(short, long)]
    dataset: Option<BuiltinDataset>,
    /// Local tab-separated dataset to train on instead of a download
    #[arg(long)]
    dataset_path: Option<PathBuf>,
    /// Force a fresh download of the dataset
    #[arg(short, long)]
    fresh: bool,
}

impl TrainingArgs {
    fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(dataset) = self.dataset {
            config.dataset = dataset;
        }
        if self.dataset_path.is_some() {
            config.dataset_path = self.dataset_path;
        }
        config.fresh |= self.fresh;
        config
    }
}

async fn load_corpus(config: &ServiceConfig) -> Result<Corpus> {
    if let Some(path) = &config.dataset_path {
        return load_tsv_file(path).with_context(|| format!("Failed to read dataset {:?}", path));
    }

    let manager = DatasetManager::new_default().context("Failed to create dataset cache")?;
    let info = config.dataset.info();

    if config.fresh {
        info!("Fresh download requested - removing any cached copy of '{}'...", info.name);
        manager.remove_download(&info)?;
    }
    manager
        .ensure_dataset_downloaded(&info)
        .await
        .with_context(|| format!("Failed to download dataset '{}'", info.name))?;
    Ok(manager.load_dataset(&info)?)
}

async fn train(config: &ServiceConfig) -> Result<Classifier> {
    let start_time = Instant::now();
    let corpus = load_corpus(config).await?;

    let mut classifier = Classifier::new();
    classifier.train(&corpus);

    let classifier_info = classifier.info();
    info!(
        "=== Classifier trained on {} sentences, {} distinct words (took {:.2?}) ===",
        classifier_info.spam_sentences + classifier_info.not_spam_sentences,
        classifier_info.vocabulary_size,
        start_time.elapsed()
    );
    Ok(classifier)
}

fn read_stdin_line() -> Result<String> {
    print!("Enter message: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ServiceConfig::from_env();

    match cli.command {
        Command::Classify { training, text } => {
            let config = training.apply(config);
            let classifier = train(&config).await?;
            let (label, scores) = classifier.predict(&text)?;
            println!("Predicted label: {}", label);
            let mut scores: Vec<_> = scores.into_iter().collect();
            scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (label, score) in scores {
                println!("  {}: {:e}", label, score);
            }
        }
        Command::Serve { training, addr } => {
            let mut config = training.apply(config);
            if let Some(addr) = addr {
                config.listen_addr = addr;
            }
            let classifier = train(&config).await?;
            let listener = TcpListener::bind(&config.listen_addr)
                .await
                .with_context(|| format!("Failed to listen on {}", config.listen_addr))?;
            info!("Listening on {}", config.listen_addr);

            let classification = serve_once(&listener, &classifier).await?;
            println!("Message received: {}", classification.message);
            println!("...The message is {}", classification.label);
        }
        Command::Send { addr, message } => {
            let addr = addr.unwrap_or(config.listen_addr);
            let message = match message {
                Some(message) => message,
                None => read_stdin_line()?,
            };
            let label = send_message(&addr, &message)
                .await
                .with_context(|| format!("Failed to send message to {}", addr))?;
            println!("{}", label);
        }
    }

    Ok(())
}
