//! Boundary detection for JSON values embedded in a literal.
//!
//! The scanner never interprets JSON. It only tracks bracket depth and string state so that a
//! property blob like `{"note":"a [weird} string, here"}` is captured in full.

use crate::error::ScanError;

const KEYWORDS: [&[u8]; 3] = [b"true", b"false", b"null"];

fn continues_number(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Return the offset immediately past the JSON value starting at `start`.
///
/// Bare numbers end at the first byte that cannot continue a number, and bare words must be one of
/// `true`, `false` or `null`. `max_depth` bounds the number of simultaneously open `{`/`[`
/// delimiters.
pub fn value_extent(buf: &[u8], start: usize, max_depth: usize) -> Result<usize, ScanError> {
    let first = *buf
        .get(start)
        .ok_or(ScanError::TruncatedValue { offset: start })?;

    match first {
        b'{' | b'[' | b'"' => {}
        b'-' | b'0'..=b'9' => {
            let len = buf[start..]
                .iter()
                .position(|b| !continues_number(*b))
                .unwrap_or(buf.len() - start);
            return Ok(start + len);
        }
        _ => {
            let rest = &buf[start..];
            return KEYWORDS
                .iter()
                .find(|keyword| rest.starts_with(keyword))
                .map(|keyword| start + keyword.len())
                .ok_or(ScanError::MalformedValue { offset: start });
        }
    }

    let mut depth = 0usize;
    let mut in_string = false;
    // Count of consecutive backslashes directly preceding the current byte.
    let mut backslashes = 0usize;

    for (idx, byte) in buf.iter().enumerate().skip(start) {
        if in_string {
            match byte {
                b'\\' => {
                    backslashes += 1;
                    continue;
                }
                b'"' if backslashes % 2 == 0 => {
                    in_string = false;
                    if depth == 0 {
                        // Top level string value
                        return Ok(idx + 1);
                    }
                }
                _ => {}
            }
            backslashes = 0;
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ScanError::DepthLimit { limit: max_depth });
                }
            }
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx + 1);
                }
            }
            _ => {}
        }
    }

    Err(ScanError::TruncatedValue { offset: start })
}
