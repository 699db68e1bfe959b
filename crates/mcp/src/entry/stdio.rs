#![forbid(unsafe_code)]

use crate::{JsonRpcRequest, McpServer, json_rpc_error};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StdioMode {
    NewlineJson,
    ContentLength,
}

impl StdioMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::NewlineJson => "newline-json",
            Self::ContentLength => "content-length",
        }
    }
}

fn detect_mode_from_first_line(line: &str) -> Option<StdioMode> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(StdioMode::NewlineJson);
    }

    // MCP spec framing: Content-Length headers, a blank line, a JSON body.
    // Some clients send Content-Type first; any plausible header line means
    // header mode.
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("content-length:") || lower.starts_with("content-type:") {
        return Some(StdioMode::ContentLength);
    }

    None
}

fn parse_content_length_header(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let (key, value) = trimmed.split_once(':')?;
    if !key.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<usize>().ok()
}

fn read_content_length_frame(
    reader: &mut BufReader<std::io::StdinLock<'_>>,
    mut header: String,
) -> std::io::Result<Option<Vec<u8>>> {
    const MAX_CONTENT_LENGTH_BYTES: usize = 4 * 1024 * 1024;

    let mut content_length: Option<usize> = parse_content_length_header(&header);

    loop {
        if header.trim_end().is_empty() {
            break;
        }

        header.clear();
        let read = reader.read_line(&mut header)?;
        if read == 0 {
            // EOF mid-header: treat as connection close.
            return Ok(None);
        }

        if content_length.is_none() {
            content_length = parse_content_length_header(&header);
        }
    }

    let Some(len) = content_length else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Missing Content-Length header",
        ));
    };
    if len > MAX_CONTENT_LENGTH_BYTES {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Content-Length exceeds max allowed size",
        ));
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

fn write_response(
    stdout: &mut std::io::StdoutLock<'_>,
    mode: StdioMode,
    resp: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        StdioMode::NewlineJson => {
            writeln!(stdout, "{}", serde_json::to_string(resp)?)?;
        }
        StdioMode::ContentLength => {
            let body = serde_json::to_vec(resp)?;
            write!(stdout, "Content-Length: {}\r\n\r\n", body.len())?;
            stdout.write_all(&body)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

pub(crate) fn run_stdio(server: &mut McpServer) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();

    // Framing is detected once from the first non-empty line and then kept for
    // the whole session; responses always mirror the request framing.
    let mut mode: Option<StdioMode> = None;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let effective_mode = match mode {
            Some(v) => v,
            None => {
                let Some(detected) = detect_mode_from_first_line(&line) else {
                    continue;
                };
                server.session_log.note_mode(detected.as_str());
                mode = Some(detected);
                detected
            }
        };

        match effective_mode {
            StdioMode::NewlineJson => {
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                handle_request(server, &mut stdout, effective_mode, raw.as_bytes())?;
            }
            StdioMode::ContentLength => {
                if line.trim().is_empty() {
                    continue;
                }
                let Some(body) = read_content_length_frame(&mut reader, line)? else {
                    break;
                };
                handle_request(server, &mut stdout, effective_mode, &body)?;
            }
        }
    }

    server.session_log.note_exit("stdin closed");
    Ok(())
}

fn handle_request(
    server: &mut McpServer,
    stdout: &mut std::io::StdoutLock<'_>,
    mode: StdioMode,
    body: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let data: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            server.session_log.note_error(&format!("parse: {e}"));
            let resp = json_rpc_error(None, -32700, &format!("Parse error: {e}"));
            return write_response(stdout, mode, &resp);
        }
    };

    let (id, has_method) = match data.as_object() {
        Some(obj) => (obj.get("id").cloned(), obj.contains_key("method")),
        None => {
            let resp = json_rpc_error(None, -32600, "Invalid Request");
            return write_response(stdout, mode, &resp);
        }
    };
    if !has_method {
        let resp = json_rpc_error(id, -32600, "Invalid Request");
        return write_response(stdout, mode, &resp);
    }

    let request: JsonRpcRequest = match serde_json::from_value(data) {
        Ok(v) => v,
        Err(e) => {
            let resp = json_rpc_error(id, -32600, &format!("Invalid Request: {e}"));
            return write_response(stdout, mode, &resp);
        }
    };

    if let Some(resp) = server.handle(request) {
        write_response(stdout, mode, &resp)?;
    }

    Ok(())
}
