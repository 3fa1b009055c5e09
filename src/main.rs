use anyhow::Result;
use clap::Parser;
use hcreleases::{
    LicenseClass, ReleaseOptions, ReleasesClient,
    commands::{self, OutputFormat},
    config::RELEASES_URL_ENV,
};

/// hcreleases - HashiCorp Releases API client
///
/// Query product and release metadata from the HashiCorp Releases API.
///
/// Examples:
///   hcreleases products
///   hcreleases releases vault --limit 5
///   hcreleases release terraform 1.5.7
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Releases API URL (defaults to https://api.releases.hashicorp.com/v1)
    #[arg(
        long = "api-url",
        env = RELEASES_URL_ENV,
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Print the raw decoded response as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List all products
    Products,

    /// List releases of a product, newest first
    Releases(ReleasesArgs),

    /// Show metadata for a single release
    Release(ReleaseArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReleasesArgs {
    /// Product name, e.g. "vault"
    pub product: String,

    /// Number of releases to return (the service allows at most 20)
    #[arg(long, short = 'n', value_name = "N")]
    pub limit: Option<u32>,

    /// Only releases created before this RFC3339 timestamp
    #[arg(long, value_name = "TIMESTAMP")]
    pub after: Option<String>,

    /// Only "oss" or "enterprise" releases
    #[arg(long = "license-class", value_name = "CLASS")]
    pub license_class: Option<LicenseClass>,
}

#[derive(clap::Args, Debug)]
pub struct ReleaseArgs {
    /// Product name, e.g. "terraform"
    pub product: String,

    /// Release version, e.g. "1.5.7"
    pub version: String,
}

impl From<&ReleasesArgs> for ReleaseOptions {
    fn from(args: &ReleasesArgs) -> Self {
        ReleaseOptions {
            limit: args.limit,
            after: args.after.clone(),
            license_class: args.license_class,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let client = ReleasesClient::new(cli.api_url)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Products => commands::products(&client, format, &mut stdout).await?,
        Commands::Releases(ref args) => {
            commands::releases(&client, &args.product, &args.into(), format, &mut stdout).await?
        }
        Commands::Release(ref args) => {
            commands::show(&client, &args.product, &args.version, format, &mut stdout).await?
        }
    }
    Ok(())
}
