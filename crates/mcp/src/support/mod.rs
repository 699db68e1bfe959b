#![forbid(unsafe_code)]

mod args;
mod jsonrpc;
mod reply;
mod session_log;
mod time;

pub(crate) use args::*;
pub(crate) use jsonrpc::*;
pub(crate) use reply::*;
pub(crate) use session_log::SessionLog;
pub(crate) use time::now_rfc3339;
