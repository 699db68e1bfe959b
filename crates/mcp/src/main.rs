#![forbid(unsafe_code)]

mod entry;
mod server;
mod support;
mod tools;

pub(crate) use support::*;

use std::fmt::Write as _;
use std::path::PathBuf;
use td_storage::SqliteStore;

// Protocol negotiation:
// Some MCP clients are strict about the server echoing a compatible protocol
// version. Keep this at the widely deployed baseline.
const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "todo-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const STORAGE_DIR_ENV: &str = "TODO_MCP_STORAGE_DIR";
const DEFAULT_STORAGE_DIR: &str = ".todo-mcp";

pub(crate) struct McpServer {
    initialized: bool,
    store: SqliteStore,
    session_log: SessionLog,
}

fn usage() -> &'static str {
    "td_mcp — todo-list MCP server (stdio, SQLite-backed)\n\n\
USAGE:\n\
  td_mcp [--storage-dir DIR]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
NOTES:\n\
  - Storage dir resolution: --storage-dir, else $TODO_MCP_STORAGE_DIR,\n\
    else ./.todo-mcp under the current directory\n"
}

fn version_line() -> String {
    format!("td_mcp {SERVER_VERSION}")
}

fn parse_storage_dir() -> PathBuf {
    let args = std::env::args().collect::<Vec<_>>();
    if let Some(pos) = args.iter().position(|arg| arg == "--storage-dir")
        && let Some(dir) = args.get(pos + 1)
    {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var(STORAGE_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DEFAULT_STORAGE_DIR)
}

fn write_last_crash(storage_dir: &std::path::Path, kind: &str, detail: &str) {
    // Best-effort crash report for debugging transport issues; never contains
    // request bodies and never goes to stdout.
    let _ = std::fs::create_dir_all(storage_dir);
    let path = storage_dir.join("todo_mcp_last_crash.txt");

    let mut out = String::new();
    let _ = writeln!(out, "ts={}", now_rfc3339());
    let _ = writeln!(out, "pid={}", std::process::id());
    let _ = writeln!(out, "version={SERVER_VERSION}");
    let _ = writeln!(out, "kind={kind}");
    let _ = writeln!(out, "detail={detail}");

    let _ = std::fs::write(path, out);
}

fn install_crash_reporter(storage_dir: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut detail = info.to_string();
        let backtrace = std::backtrace::Backtrace::force_capture();
        let _ = write!(&mut detail, "\nbacktrace:\n{backtrace}");
        write_last_crash(&storage_dir, "panic", &detail);
        default_hook(info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let storage_dir = parse_storage_dir();
    install_crash_reporter(storage_dir.clone());
    let storage_dir_for_errors = storage_dir.clone();

    let session_log = SessionLog::new(&storage_dir);
    let store = match SqliteStore::open(&storage_dir) {
        Ok(store) => store,
        Err(err) => {
            write_last_crash(&storage_dir_for_errors, "storage_open", &format!("{err}"));
            return Err(Box::new(err));
        }
    };

    let mut server = McpServer::new(store, session_log);
    let result = entry::run_stdio(&mut server);
    if let Err(err) = &result {
        write_last_crash(&storage_dir_for_errors, "error", &format!("{err:?}"));
    }
    result
}
