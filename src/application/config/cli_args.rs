use std::time::Duration;

use clap::Parser;
use clap::Subcommand;

use crate::application::json_rpc::core::model::common::QuantityEncoding;

/// The `personal-cli` command-line program unlocks accounts on an
/// Ethereum-compatible node through its JSON-RPC endpoint.
#[derive(Parser, Debug, Clone)]
#[clap(name = "personal-cli", author, version, about)]
pub struct Args {
    /// JSON-RPC endpoint of the node.
    #[clap(long, default_value = "http://127.0.0.1:8545", value_name = "URL")]
    pub rpc_url: String,

    /// Seconds to wait for the node to answer a request.
    #[clap(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// How the unlock duration is written on the wire.
    ///
    /// `decimal` sends a JSON number, as geth expects. `hex` sends a
    /// 0x-prefixed QUANTITY string.
    #[clap(long, default_value = "decimal", value_name = "ENCODING")]
    pub quantity_encoding: QuantityEncoding,

    /// Enable tokio tracing for consumption by the tokio-console application
    /// note: this will attempt to connect to localhost:6669
    #[clap(long, default_value = "false")]
    pub tokio_console: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Unlock an account and print whether it succeeded.
    Unlock {
        #[clap(flatten)]
        target: UnlockTarget,

        #[clap(flatten)]
        options: UnlockOptions,
    },

    /// Print the unlock request as JSON without sending it.
    Build {
        /// Address of the account to unlock.
        #[clap(long, value_name = "ADDRESS")]
        address: String,

        #[clap(flatten)]
        options: UnlockOptions,
    },
}

/// Which account to unlock.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct UnlockTarget {
    /// Address of the account to unlock. The 0x prefix is optional.
    #[clap(long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Unlock the node's coinbase account, as reported by eth_coinbase.
    #[clap(long)]
    pub coinbase: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UnlockOptions {
    /// Passphrase of the account. Read from standard input when omitted.
    #[clap(long, value_name = "PASSPHRASE")]
    pub passphrase: Option<String>,

    /// Seconds the account stays unlocked.
    #[clap(long, default_value = "300", value_name = "SECS")]
    pub duration: u64,
}
