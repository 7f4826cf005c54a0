use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser as ClapParser, Subcommand};
use log::info;

use jobfeed::bot::{JobBot, Pacing, TelegramClient};
use jobfeed::{Config, HttpScraper, JobService, JsonFileRepository, Language, VacancyFetcher, VacancyParser};

#[derive(Debug, ClapParser)]
#[command(name = "jobfeed", version, about = "DOU vacancies delivered over Telegram")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the Telegram bot (default)
    Bot,
    /// Fetch one category once and write it to the output file
    Scrape {
        /// java, python, ruby or sql
        language: Language,
        /// Destination file; defaults to JOBS_OUTPUT_PATH or work.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn build_service(config: &Config) -> anyhow::Result<JobService> {
    let scraper = HttpScraper::new(config.fetch_timeout).context("building HTTP client")?;
    let fetcher = VacancyFetcher::with_base_url(Arc::new(scraper), config.jobs_base_url.clone());
    let parser = VacancyParser::new()?;
    let repository = JsonFileRepository::new(&config.output_path);

    Ok(JobService::new(fetcher, Arc::new(parser), Arc::new(repository)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let service = build_service(&config)?;

    match cli.command.unwrap_or(Command::Bot) {
        Command::Scrape { language, output } => {
            let records = service.get_jobs(language.slug(), output.as_deref()).await?;
            let path = output.unwrap_or_else(|| config.output_path.clone());
            println!("{} {} vacancies saved to {}", records.len(), language, path.display());
        }
        Command::Bot => {
            let token = config.require_bot_token()?;
            let client = TelegramClient::new(&config.telegram_api_url, token, config.poll_timeout)?;
            let service = Arc::new(service);
            let pacing = Pacing::new(config.delivery_batch_size, config.delivery_pause);
            let bot = Arc::new(JobBot::new(Arc::new(client.clone()), Arc::clone(&service), pacing));

            tokio::select! {
                _ = bot.run(&client, config.poll_timeout) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down");
                }
            }
            service.stats().log_summary();
        }
    }

    Ok(())
}
