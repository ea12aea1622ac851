use std::io::BufRead;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use eth_personal_rpc::application::config::cli_args::Args;
use eth_personal_rpc::application::config::cli_args::Command;
use eth_personal_rpc::application::config::cli_args::UnlockOptions;
use eth_personal_rpc::application::json_rpc::core::api::client::http::HttpTransport;
use eth_personal_rpc::application::json_rpc::core::api::client::transport::Transport;
use eth_personal_rpc::application::json_rpc::core::api::eth::EthCoinbase;
use eth_personal_rpc::application::json_rpc::core::api::personal::PersonalUnlockAccount;
use eth_personal_rpc::application::json_rpc::core::model::common::RpcQuantity;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(not(feature = "tokio-console"))]
    {
        if args.tokio_console {
            anyhow::bail!("tokio-console not included. Build with tokio-console feature-flag.");
        }
        set_up_logger();
    }

    #[cfg(feature = "tokio-console")]
    if args.tokio_console {
        console_subscriber::init();
    } else {
        set_up_logger();
    }

    run(args).await
}

/// Configure logger to use ISO-8601, of which rfc3339 is a subset. Install
/// global collector configured based on RUST_LOG env var. Accepted `RUST_LOG`
/// values are `trace`, `debug`, `info`, `warn`, and `error`.
fn set_up_logger() {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .finish(),
    )
    .map_err(|_err| eprintln!("Unable to set global default subscriber"))
    .expect("Failed to set trace subscriber");
}

async fn run(args: Args) -> Result<()> {
    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::with_timeout(args.rpc_url.clone(), args.timeout())
            .with_context(|| format!("Failed to set up client for {}", args.rpc_url))?,
    );
    let unlock = PersonalUnlockAccount::new(transport.clone()).with_encoding(args.quantity_encoding);

    match args.command {
        Command::Unlock { target, options } => {
            let pass_phrase = pass_phrase(&options)?;
            let duration = RpcQuantity::from(options.duration);

            let unlocked = if target.coinbase {
                info!("Unlocking coinbase account via {}", args.rpc_url);
                let coinbase = EthCoinbase::new(transport);
                unlock
                    .send_request_with_coinbase(Some(&coinbase), Some(&pass_phrase), Some(duration), None)
                    .await?
            } else {
                info!("Unlocking account via {}", args.rpc_url);
                unlock
                    .send_request(target.address.as_deref(), Some(&pass_phrase), Some(duration), None)
                    .await?
            };

            println!("{unlocked}");
        }
        Command::Build { address, options } => {
            let pass_phrase = pass_phrase(&options)?;
            let request = unlock.build_request(
                Some(&address),
                Some(&pass_phrase),
                Some(options.duration.into()),
                None,
            )?;

            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}

/// The passphrase from the command line, or else one line of standard input.
fn pass_phrase(options: &UnlockOptions) -> Result<String> {
    if let Some(pass_phrase) = &options.passphrase {
        return Ok(pass_phrase.clone());
    }

    eprintln!("Passphrase:");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read passphrase from standard input")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
