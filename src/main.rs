// src/main.rs

//! Thrive CLI
//!
//! Operational entry points for exercising the wellness core against
//! live endpoints: browse the scraped services catalog and preview an
//! LMS course import.

use clap::{Parser, Subcommand};

use thrive::error::Result;
use thrive::models::Config;
use thrive::services::paginator::{self, parse_page_number, parse_page_size};
use thrive::services::{CatalogClient, ServiceDirectory, importer};

#[derive(Parser, Debug)]
#[command(name = "thrive", version, about = "Student wellness core")]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and page through the campus services catalog
    Programs {
        #[arg(long, default_value = "1")]
        page: String,
        #[arg(long, default_value = "20")]
        page_size: String,
    },
    /// Preview the subjects an LMS token would import
    Courses {
        /// Bearer token for the course-catalog API
        #[arg(long)]
        token: String,
    },
    /// Validate the configuration file
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Programs { page, page_size } => {
            let directory = ServiceDirectory::new(config.scraper)?;
            let items = directory.get_all_services().await?;
            let page = paginator::paginate(
                &items,
                parse_page_number(&page),
                parse_page_size(&page_size),
            );
            println!(
                "Page {}/{} ({} services total)",
                page.page_number, page.total_pages, page.total_items
            );
            for entry in &page.items {
                println!("  {} -> {}", entry.name, entry.url);
            }
        }
        Command::Courses { token } => {
            let catalog = CatalogClient::new(config.catalog)?;
            let courses = catalog.fetch_courses(&token).await?;
            let subjects = importer::extract_subject_names(&courses);
            if subjects.is_empty() {
                println!("No courses found for this token.");
            } else {
                println!("{} subjects would be imported:", subjects.len());
                for subject in &subjects {
                    println!("  {subject}");
                }
            }
        }
        Command::Validate => {
            config.validate()?;
            println!("Configuration OK.");
        }
    }

    Ok(())
}
