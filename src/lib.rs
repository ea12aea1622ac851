// If code coverage tool `cargo-llvm-cov` is running with the nightly toolchain,
// enable the unstable “coverage” attribute. This allows using the annotation
// `#[coverage(off)]` to explicitly exclude certain parts of the code from
// being considered as “code under test.” Most prominently, the annotation
// should be added to every `#[cfg(test)]` module. Since the “coverage”
// feature is enable only conditionally, the annotation to use is:
// `#[cfg_attr(coverage_nightly, coverage(off))]`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Typed JSON-RPC client for the `personal_unlockAccount` method of
//! Ethereum-compatible nodes.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use eth_personal_rpc::application::json_rpc::core::api::client::http::HttpTransport;
//! use eth_personal_rpc::application::json_rpc::core::api::personal::PersonalUnlockAccount;
//!
//! # async fn unlock() -> anyhow::Result<()> {
//! let transport = Arc::new(HttpTransport::new("http://127.0.0.1:8545")?);
//! let unlock = PersonalUnlockAccount::new(transport);
//! let unlocked = unlock
//!     .send_request(Some("6fc2..."), Some("mypasswd"), Some(300u64.into()), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
