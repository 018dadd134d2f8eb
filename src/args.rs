use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "follow-page")]
#[command(about = "Breadth-first crawler that streams pages and follows every link")]
#[command(version)]
pub struct Args {
    /// Starting URL (prompted for interactively when omitted)
    pub url: Option<String>,

    /// Probe for llms.txt under the starting URL before crawling
    #[arg(short = 'm', long)]
    pub check_manifest: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay: u64,

    /// Delay per streamed line in milliseconds
    #[arg(long, default_value_t = 5)]
    pub stream_delay: u64,

    /// Load configuration from a JSON file (other options are ignored,
    /// except that a positional URL still overrides the start address)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["follow-page"]);
        assert!(args.url.is_none());
        assert!(!args.check_manifest);
        assert_eq!(args.timeout, 15);
        assert_eq!(args.delay, 500);
        assert_eq!(args.stream_delay, 5);
    }

    #[test]
    fn test_positional_url_and_flags() {
        let args = Args::parse_from([
            "follow-page",
            "http://localhost:8893/",
            "--check-manifest",
            "--delay",
            "0",
        ]);
        assert_eq!(args.url.as_deref(), Some("http://localhost:8893/"));
        assert!(args.check_manifest);
        assert_eq!(args.delay, 0);
    }
}
