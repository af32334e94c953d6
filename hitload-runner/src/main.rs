use clap::Parser;
use hitload_client::{Client, ClientConfig, Method};
use hitload_runner::config::{RunConfig, DEFAULT_CONCURRENCY, DEFAULT_DURATION_SECS, DEFAULT_TIMEOUT_MS};
use hitload_runner::output::{render_report, verdict, write_json};
use hitload_runner::runner;
use hitload_runner::targets::TargetSet;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hitload", about = "HTTP load generator with latency percentiles")]
struct Args {
    /// Target URL; repeat to spread requests across several
    #[arg(long = "url", required = true)]
    urls: Vec<String>,

    /// HTTP method: GET | HEAD | POST | PUT | DELETE
    #[arg(long, default_value = "GET")]
    method: String,

    /// Request body sent with every request
    #[arg(long)]
    body: Option<String>,

    /// Number of concurrent workers
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// How long to run (seconds); defaults to 10 unless --requests is given
    #[arg(long)]
    duration: Option<u64>,

    /// Total number of requests to send
    #[arg(long)]
    requests: Option<u64>,

    /// Per-request timeout (milliseconds)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Fail if the 5xx/transport error rate exceeds this fraction
    #[arg(long)]
    max_error_rate: Option<f64>,

    /// Fail if p95 latency exceeds this many milliseconds
    #[arg(long)]
    max_p95_ms: Option<u64>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let method = Method::from_name(&args.method).unwrap_or_else(|| {
        eprintln!(
            "Unknown method {:?}. Valid values: GET, HEAD, POST, PUT, DELETE",
            args.method
        );
        process::exit(3);
    });

    let targets = TargetSet::new(args.urls.clone()).unwrap_or_else(|| {
        eprintln!("At least one --url is required");
        process::exit(3);
    });

    let duration = match (args.duration, args.requests) {
        (None, None) => Some(Duration::from_secs(DEFAULT_DURATION_SECS)),
        (secs, _) => secs.map(Duration::from_secs),
    };
    let config = RunConfig { concurrency: args.concurrency, duration, requests: args.requests };

    let client = Client::new(ClientConfig {
        method,
        timeout: Duration::from_millis(args.timeout_ms),
        body: args.body.as_ref().map(|b| b.as_bytes().to_vec()),
    })
    .unwrap_or_else(|e| {
        eprintln!("Failed to build HTTP client: {e}");
        process::exit(3);
    });

    let accumulator = runner::run(client, targets, config).await.unwrap_or_else(|e| {
        eprintln!("Invalid run configuration: {e}");
        process::exit(3);
    });

    let report = accumulator.finalize().unwrap_or_else(|e| {
        eprintln!("No usable results: {e}");
        process::exit(3);
    });

    print!("{}", render_report(&report));

    if let Some(path) = &args.output {
        if let Err(e) = write_json(&report, path) {
            eprintln!("{e}");
            process::exit(3);
        }
        tracing::info!(path = %path.display(), "report written");
    }

    let exit_code = verdict(
        &report,
        args.max_error_rate,
        args.max_p95_ms.map(Duration::from_millis),
    );

    println!();
    println!("Result: {}", if exit_code == 0 { "PASS" } else { "FAIL" });

    process::exit(exit_code);
}

/// Logs go to stderr so the report on stdout stays machine-friendly.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
