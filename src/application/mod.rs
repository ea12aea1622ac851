pub mod config;
pub mod json_rpc;
