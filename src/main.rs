#![deny(clippy::all)]
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use sankaku_fetcher::cli::{print_posts, print_profile, Cli, Commands};
use sankaku_fetcher::{Credentials, Post, SankakuClient, ServerConfig, UserProfile};
use std::process::exit;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    env_logger::builder().format_timestamp(None).init();

    let config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load server config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    let query = match &args.mode {
        Commands::Search(fetch) | Commands::Favorites(fetch) => Some(fetch.query(&config)?),
        Commands::Profile => None,
    };

    let credentials = Credentials::new(
        args.username.clone().unwrap_or_default(),
        args.password.clone().unwrap_or_default(),
    )?;

    if !args.json {
        println!(
            "{} {}",
            "Logging into:".bold(),
            config.pretty_name.green().bold()
        );
    }

    let client = SankakuClient::with_config(config)?
        .login(&credentials)
        .await
        .context("Failed to log in")?;

    let result = match (&args.mode, &query) {
        (Commands::Search(_), Some(query)) => client.get_posts(query).await.map(Output::Posts),
        (Commands::Favorites(_), Some(query)) => {
            client.get_favorites(query).await.map(Output::Posts)
        }
        _ => client.get_profile().await.map(Output::Profile),
    };

    match result {
        Ok(output) => output.print(args.json)?,
        Err(err) if err.is_rate_limited() => {
            eprintln!(
                "{}",
                "The server is rate limiting requests. Wait a while before trying again."
                    .bold()
                    .red()
            );
            exit(2);
        }
        Err(err) => return Err(err).context("Request failed"),
    }

    Ok(())
}

enum Output {
    Posts(Vec<Post>),
    Profile(UserProfile),
}

impl Output {
    fn print(&self, json: bool) -> Result<()> {
        match (self, json) {
            (Self::Posts(posts), true) => println!("{}", serde_json::to_string_pretty(posts)?),
            (Self::Profile(profile), true) => {
                println!("{}", serde_json::to_string_pretty(profile)?)
            }
            (Self::Posts(posts), false) => print_posts(posts),
            (Self::Profile(profile), false) => print_profile(profile),
        }
        Ok(())
    }
}
