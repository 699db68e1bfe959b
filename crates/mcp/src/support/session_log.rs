#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

/// Small, bounded session record for debugging transport issues. Rewritten in
/// place on every note; written to the storage dir, never to stdout/stderr,
/// and never containing request bodies.
#[derive(Clone, Debug)]
pub(crate) struct SessionLog {
    path: PathBuf,
    start_rfc3339: String,
    pid: u32,
    version: &'static str,
    cwd: String,
    args: Vec<String>,
    mode: Option<String>,
    last_method: Option<String>,
    last_error: Option<String>,
    exit: Option<String>,
}

impl SessionLog {
    pub(crate) fn new(storage_dir: &Path) -> Self {
        let cwd = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .to_string_lossy()
            .to_string();
        let this = Self {
            path: storage_dir.join("todo_mcp_last_session.txt"),
            start_rfc3339: crate::now_rfc3339(),
            pid: std::process::id(),
            version: crate::SERVER_VERSION,
            cwd,
            args: std::env::args().collect(),
            mode: None,
            last_method: None,
            last_error: None,
            exit: None,
        };
        this.flush();
        this
    }

    pub(crate) fn note_mode(&mut self, mode: &str) {
        self.mode = Some(mode.to_string());
        self.flush();
    }

    pub(crate) fn note_method(&mut self, method: &str) {
        let method = method.trim();
        if method.is_empty() {
            return;
        }
        self.last_method = Some(truncate(method, 96));
        self.flush();
    }

    pub(crate) fn note_error(&mut self, error: &str) {
        let error = error.trim();
        if error.is_empty() {
            return;
        }
        self.last_error = Some(truncate(error, 300));
        self.flush();
    }

    pub(crate) fn note_exit(&mut self, reason: &str) {
        self.exit = Some(truncate(reason.trim(), 120));
        self.flush();
    }

    fn flush(&self) {
        let Some(dir) = self.path.parent() else {
            return;
        };
        let _ = std::fs::create_dir_all(dir);

        let mut out = String::new();
        push_kv(&mut out, "ts_start", &self.start_rfc3339);
        push_kv(&mut out, "pid", &self.pid.to_string());
        push_kv(&mut out, "version", self.version);
        push_kv(&mut out, "cwd", &self.cwd);
        push_kv(&mut out, "args", &format!("{:?}", self.args));
        if let Some(mode) = &self.mode {
            push_kv(&mut out, "mode", mode);
        }
        if let Some(method) = &self.last_method {
            push_kv(&mut out, "last_method", method);
        }
        if let Some(err) = &self.last_error {
            push_kv(&mut out, "last_error", err);
        }
        if let Some(exit) = &self.exit {
            push_kv(&mut out, "exit", exit);
        }

        let _ = std::fs::write(&self.path, out);
    }
}

fn push_kv(out: &mut String, key: &str, value: &str) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{key}={value}");
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
