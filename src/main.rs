use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use rostrum::{Bot, BotConfig};

#[derive(Parser)]
#[command(name = "rostrum")]
#[command(author, version, about = "Hansard search bot: ranks legislative speakers by topical relevance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query and print the summary
    Ask {
        /// Free-text topic query, e.g. "Who spoke about teenage boys in care last year?"
        query: String,

        /// Maximum rows requested from the search API
        #[arg(long)]
        num: Option<u32>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive loop reading queries from stdin
    Chat {
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            num,
            verbose,
        } => {
            setup_logging(verbose);
            let mut config = BotConfig::from_env();
            if let Some(num) = num.filter(|&n| n >= 1) {
                config.result_limit = num;
            }
            warn_if_unconfigured(&config);

            let bot = Bot::from_config(config);
            println!("{}", bot.answer(&query).await);
            Ok(())
        }
        Commands::Chat { verbose } => {
            setup_logging(verbose);
            let config = BotConfig::from_env();
            warn_if_unconfigured(&config);
            chat_loop(Bot::from_config(config)).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn warn_if_unconfigured(config: &BotConfig) {
    if !config.has_credential() {
        warn!("THEYWORKFORYOU_API_KEY is not set; queries will report a configuration error");
    }
}

/// Line-oriented stand-in for the chat transport: one line in, one
/// rendered reply out.
async fn chat_loop(bot: Bot) -> Result<()> {
    println!("{}", bot.welcome());
    println!("Type a query, or /quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();

        match query {
            "" => continue,
            "/quit" | "/exit" => break,
            "/start" => {
                println!("{}", bot.welcome());
                continue;
            }
            _ => {}
        }

        println!("Searching Hansard for: '{}'...", query);
        println!("{}\n", bot.answer(query).await);
    }

    Ok(())
}
