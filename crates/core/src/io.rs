use crate::{ClipdeckError, Request, Response};
use std::io::{BufRead, Write};

/// Writes one response as a single JSON line.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<(), ClipdeckError> {
    let line = serde_json::to_string(response)?;
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads the next request. Blank lines are skipped; `Ok(None)` means the host closed stdin.
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<Option<Request>, ClipdeckError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            break;
        }
    }

    let request: Request = serde_json::from_str(line.trim())?;
    Ok(Some(request))
}
