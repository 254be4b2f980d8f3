use std::{num::NonZeroUsize, process::ExitCode, time::SystemTime};

use clap::Parser;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{error, info, span, Level};
use tracing_subscriber::EnvFilter;

mod adapters;
mod config;
mod lister;
mod model;
mod util;

/// List every object in an S3 or GCS bucket.
#[derive(Parser, Debug)]
#[command(name = "bucketls", version)]
struct Args {
    /// Bucket name, or a `s3://` / `gs://` URI
    #[arg(env = "BUCKETLS_BUCKET")]
    bucket: String,

    /// Only list keys starting with this prefix
    #[arg(long, env = "BUCKETLS_PREFIX")]
    prefix: Option<String>,

    /// Maximum number of keys per page
    #[arg(long, env = "BUCKETLS_PAGE_SIZE")]
    page_size: Option<i32>,

    /// Give up after this many pages
    #[arg(long, env = "BUCKETLS_MAX_PAGES")]
    max_pages: Option<NonZeroUsize>,

    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Custom S3 endpoint, forces path-style addressing
    #[arg(long, env = "BUCKETLS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Print size and modification time with each key
    #[arg(short, long)]
    long: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();

    let args = Args::parse();
    info!(bucket = %args.bucket, prefix = ?args.prefix, "args");

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "failed");
            eprintln!("Error: ListObjects: {}", err.message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), model::error::ListError> {
    let (provider, bucket) = util::object::parse_bucket_uri(&args.bucket)?;

    let mut client_config = config::ClientConfig::default();
    if let Some(region) = &args.region {
        client_config = client_config.with_region(region);
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        client_config = client_config.with_endpoint_url(endpoint_url);
    }
    if let Some(profile) = &args.profile {
        client_config = client_config.with_profile(profile);
    }

    let client: Box<dyn adapters::ObjectAdapter> = match provider {
        util::object::Provider::Aws => Box::new(client_config.s3_client().await),
        util::object::Provider::Gcs => Box::new(client_config.gcs_client().await?),
    };

    let options = lister::ListOptions {
        prefix: args.prefix.clone(),
        page_size: args.page_size,
        max_pages: args.max_pages,
    };

    let objects = lister::list_objects(client.as_ref(), bucket, &options).await?;

    println!("{} object(s) found:", objects.len());
    for object in &objects {
        if args.long {
            println!(
                "  {:>12}  {:<25}  {}",
                object.size.map(|s| s.to_string()).unwrap_or_default(),
                object.last_modified.map(format_time).unwrap_or_default(),
                object.key
            );
        } else {
            println!("  {}", object.key);
        }
    }

    Ok(())
}

fn format_time(t: SystemTime) -> String {
    OffsetDateTime::from(t).format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "bucketls",
            "s3://demo",
            "--prefix",
            "logs/",
            "--page-size",
            "100",
            "--max-pages",
            "5",
            "-l",
        ])
        .unwrap();

        assert_eq!(args.bucket, "s3://demo");
        assert_eq!(args.prefix.as_deref(), Some("logs/"));
        assert_eq!(args.page_size, Some(100));
        assert_eq!(args.max_pages, NonZeroUsize::new(5));
        assert!(args.long);
    }

    #[test]
    fn test_args_reject_zero_max_pages() {
        assert!(Args::try_parse_from(["bucketls", "demo", "--max-pages", "0"]).is_err());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(SystemTime::UNIX_EPOCH), "1970-01-01T00:00:00Z");
    }
}
