use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;

use podcastr::{
    ApiConfig, EpisodeViewModel, ListQuery, ReqwestClient, load_episode_page, load_home_page,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", "[*] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static CALENDAR: Emoji<'_, '_> = Emoji("📅 ", "");
static CLOCK: Emoji<'_, '_> = Emoji("⏱️  ", "");

/// Default address of the json-server style episodes API
const DEFAULT_API_URL: &str = "http://localhost:3333";

/// How many episodes the listing page requests
const HOME_EPISODE_LIMIT: usize = 12;

/// Browse podcastr episodes from the terminal
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Browse podcastr episodes from the terminal")]
#[command(version)]
struct Args {
    /// Base URL of the episodes API
    #[arg(long, default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the latest episodes
    List {
        /// Maximum number of episodes to list
        #[arg(short, long, default_value_t = HOME_EPISODE_LIMIT)]
        limit: usize,
    },
    /// Show one episode in detail
    Show {
        /// Episode identifier (slug)
        id: String,
    },
}

fn print_episode_line(episode: &EpisodeViewModel) {
    println!(
        "  {} {} {} {}",
        episode.id.cyan(),
        episode.published_at.dimmed(),
        episode.duration_as_string.yellow(),
        episode.title.bold()
    );
    println!("      {}", episode.members.dimmed());
}

async fn run_list(client: &ReqwestClient, config: &ApiConfig, limit: usize) -> Result<()> {
    let query = ListQuery {
        limit: Some(limit),
        ..ListQuery::default()
    };

    let page = load_home_page(client, config, &query)
        .await
        .context("Failed to load episode listing")?;

    println!("{SPARKLES}{}", "Últimos lançamentos".bold().green());
    for episode in &page.latest_episodes {
        print_episode_line(episode);
    }

    if !page.all_episodes.is_empty() {
        println!("\n{HEADPHONES}{}", "Todos episódios".bold().green());
        for episode in &page.all_episodes {
            print_episode_line(episode);
        }
    }

    Ok(())
}

async fn run_show(client: &ReqwestClient, config: &ApiConfig, id: &str) -> Result<()> {
    let episode = load_episode_page(client, config, id)
        .await
        .with_context(|| format!("Failed to load episode '{id}'"))?;

    println!("{}", episode.title.bold().green());
    println!("{}", episode.members.dimmed());
    println!(
        "{CALENDAR}{}  {CLOCK}{}",
        episode.published_at.cyan(),
        episode.duration_as_string.yellow()
    );
    println!("\n{}", nanohtml2text::html2text(&episode.description).trim());
    println!("\n{} {}", "Audio:".bold(), episode.url.cyan());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "\n{}{} {}\n",
        MICROPHONE,
        "podcastr".bold().magenta(),
        "- O melhor para você ouvir, sempre".dimmed()
    );

    let client = ReqwestClient::new();
    let config = ApiConfig::new(&args.api_url)
        .with_context(|| format!("Invalid API URL '{}'", args.api_url))?;

    match &args.command {
        Command::List { limit } => run_list(&client, &config, *limit).await?,
        Command::Show { id } => run_show(&client, &config, id).await?,
    }

    println!();

    Ok(())
}
