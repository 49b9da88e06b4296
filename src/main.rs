use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error};

use permission_gate::check::Outcome;
use permission_gate::output::Sink;
use permission_gate::{Loader, Result, action, github};

/// Check whether the workflow actor holds a required repository permission.
#[derive(Parser, Debug)]
#[command(name = "permission-gate", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PERMISSION_GATE_CONFIG")]
    config: Option<PathBuf>,

    /// Required permission level (none, read, write, admin)
    #[arg(long)]
    required_permission: Option<String>,

    /// Enable the test-only-superuser level
    #[arg(long)]
    allow_test_permission: bool,

    /// Output encoding (flag or boolean)
    #[arg(long)]
    encoding: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// GitHub API token
    #[arg(long)]
    token: Option<String>,
}

fn init_tracing(loader: &Loader) {
    // stdout carries workflow commands
    let level = if loader.var("RUNNER_DEBUG") == Some("1") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn invoke<W: Write>(cli: &Cli, loader: &Loader, sink: &mut Sink<W>) -> Result<Outcome> {
    let config = match loader.load(
        cli.config.as_deref(),
        cli.required_permission.as_deref(),
        cli.allow_test_permission.then_some(true),
        cli.encoding.as_deref(),
        cli.api_url.as_deref(),
        cli.token.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            action::abort(loader.encoding(cli.encoding.as_deref()), &e, sink);
            return Err(e);
        }
    };

    let prepared = loader
        .context()
        .and_then(|context| Ok((context, github::Client::new(&config.github)?)));
    let (context, client) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            action::abort(config.check.encoding, &e, sink);
            return Err(e);
        }
    };

    action::run(&config, &context, &client, sink)
        .await
        .inspect_err(|e| error!("{e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let loader = Loader::from_env();
    init_tracing(&loader);

    let mut sink = Sink::stdout(loader.var("GITHUB_OUTPUT").map(PathBuf::from));

    match invoke(&cli, &loader, &mut sink).await {
        Ok(outcome) if outcome.fatal().is_none() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
