use clap::Parser;
use std::io::{self, BufRead, Write};

use follow_page::config::CrawlConfig;
use follow_page::crawlers::web::WebCrawler;
use follow_page::fetch::HttpFetcher;
use follow_page::utils::normalize_seed;

mod args;
use args::Args;

const BANNER: &str = r#"
   __      _ _
  / _|___ | | |_____ __ ___ _ __  __ _ __ _ ___
 |  _/ _ \| | / _ \ V  V /___| '_ \/ _` / _` / -_)
 |_| \___/|_|_\___/\_/\_/    | .__/\__,_|\__, \___|
                             |_|         |___/
"#;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    println!("{}", BANNER);
    println!("Simple Infinite Web Crawler");
    println!("Press Ctrl+C to stop.\n");

    let config = match build_config(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("No URL provided, exiting.");
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let mut crawler = WebCrawler::new(config, fetcher);

    // The crawl is unbounded by design; Ctrl+C is the expected way out.
    tokio::select! {
        _ = crawler.run() => {}
        _ = tokio::signal::ctrl_c() => {
            println!("\n[INFO] Stopped by user.");
        }
    }
}

/// Resolve the crawl configuration from a config file, CLI flags, or the
/// interactive prompts. Returns None when no start URL was provided.
fn build_config(args: &Args) -> follow_page::Result<Option<CrawlConfig>> {
    if let Some(path) = &args.config {
        let mut config = CrawlConfig::from_file(path)?;
        if let Some(url) = &args.url {
            config.start_url = url.clone();
        }
        config.start_url = normalize_seed(&config.start_url);
        return Ok(Some(config));
    }

    let (seed, check_manifest) = match &args.url {
        Some(url) => (url.clone(), args.check_manifest),
        None => {
            let seed = prompt("Enter a starting URL (e.g. http://localhost:8893/): ")?;
            if seed.is_empty() {
                return Ok(None);
            }
            let choice = prompt("Look for llms.txt under this URL? [y/N]: ")?;
            (seed, choice.eq_ignore_ascii_case("y"))
        }
    };

    let config = CrawlConfig::new(&normalize_seed(&seed))
        .with_check_manifest(check_manifest)
        .with_fetch_timeout(args.timeout)
        .with_request_delay(args.delay)
        .with_stream_delay(args.stream_delay);

    Ok(Some(config))
}

/// Read one trimmed line of interactive input
fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
