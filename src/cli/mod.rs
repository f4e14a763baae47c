use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::api::PostQuery;
use crate::config::ServerConfig;
use crate::error::ClientError;
use crate::models::{Post, Rating, UserProfile};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search posts with tags
    Search(FetchArgs),
    /// Fetch the favorites of the logged in user
    Favorites(FetchArgs),
    /// Print the profile of the logged in user
    Profile,
}

#[derive(Parser, Debug)]
#[clap(name = "Sankaku Fetcher", author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub mode: Commands,

    /// Account username
    #[clap(
        short,
        long,
        env = "SANKAKU_USERNAME",
        global = true,
        help_heading = "AUTH"
    )]
    pub username: Option<String>,

    /// Account password
    #[clap(
        short,
        long,
        env = "SANKAKU_PASSWORD",
        hide_env_values = true,
        global = true,
        help_heading = "AUTH"
    )]
    pub password: Option<String>,

    /// Read server settings from a TOML file
    #[clap(long, value_name = "PATH", global = true, help_heading = "GENERAL")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long, global = true, help_heading = "GENERAL")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Tags to search
    #[clap(value_parser)]
    pub tags: Vec<String>,

    /// Content threshold sent to the server
    #[clap(
        long,
        value_name = "NUMBER",
        value_parser(clap::value_parser!(u8).range(1..=5)),
        default_value_t = 2,
        help_heading = "FETCH"
    )]
    pub threshold: u8,

    /// Number of posts requested per page
    #[clap(
        long,
        value_name = "NUMBER",
        value_parser(clap::value_parser!(u16).range(1..)),
        default_value_t = 40,
        help_heading = "FETCH"
    )]
    pub page_size: u16,

    /// Max number of posts to fetch [default: one page]
    #[clap(short, long, value_name = "NUMBER", help_heading = "FETCH")]
    pub limit: Option<usize>,

    /// Keep fetching until the server runs out of posts
    #[clap(long, conflicts_with = "limit", help_heading = "FETCH")]
    pub no_limit: bool,

    /// Include posts that are part of a book
    #[clap(long, help_heading = "FETCH")]
    pub show_book_posts: bool,
}

impl FetchArgs {
    /// Builds the query, refusing page sizes above the server's `max_page_size`.
    pub fn query(&self, config: &ServerConfig) -> Result<PostQuery, ClientError> {
        let page_size = usize::from(self.page_size);
        if page_size > config.max_page_size {
            return Err(ClientError::InvalidQuery {
                reason: format!(
                    "page size {page_size} is above the maximum of {} for {}",
                    config.max_page_size, config.pretty_name
                ),
            });
        }

        let query = PostQuery::new()
            .tags(&self.tags)
            .default_threshold(self.threshold)
            .page_size(page_size)
            .hide_posts_in_books(!self.show_book_posts);

        Ok(match (self.no_limit, self.limit) {
            (true, _) => query.unlimited(),
            (false, Some(max)) => query.max_posts(max),
            (false, None) => query,
        })
    }
}

fn colored_rating(rating: Rating) -> String {
    let text = rating.to_string();
    match rating {
        Rating::Safe => text.green().to_string(),
        Rating::Questionable => text.yellow().to_string(),
        Rating::Explicit => text.red().to_string(),
    }
}

pub fn print_posts(posts: &[Post]) {
    for post in posts {
        println!(
            "{:>10} {:<14} {:>5}x{:<5} {:<12} {}",
            post.id.to_string().bold().blue(),
            colored_rating(post.rating),
            post.width,
            post.height,
            post.file_type,
            post.file_url.underline()
        );
    }

    println!(
        "{} {} {}",
        "Found".bold(),
        posts.len().to_string().bold().blue(),
        "posts".bold()
    );
}

pub fn print_profile(profile: &UserProfile) {
    println!(
        "{} {}\n - {} {}\n - {} {}\n - {} {}",
        "User:".bold().blue(),
        profile.name.bold().green(),
        "ID:".bold().blue(),
        profile.id,
        "Email:".bold().blue(),
        profile.email,
        "Favorites:".bold().blue(),
        profile.favorite_count.to_string().bold().yellow(),
    );
}
