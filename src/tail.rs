//! # Log Tail Reader
//!
//! Reads the last `n` lines of a file in a single forward pass while holding
//! at most `n` lines in memory. Lines are kept as raw bytes so the output is
//! byte-identical to the file, terminators included.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Return the last `n` lines of `path` in file order.
///
/// A missing file yields no lines. Any other open or read failure is
/// returned to the caller rather than producing a partial tail.
pub fn tail_lines(path: &Path, n: usize) -> io::Result<Vec<Vec<u8>>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    tail_from_reader(BufReader::with_capacity(READ_BUFFER_BYTES, file), n)
}

/// Last `n` lines of `path` concatenated back into a single buffer
pub fn tail_text(path: &Path, n: usize) -> io::Result<Vec<u8>> {
    Ok(tail_lines(path, n)?.concat())
}

/// Sliding-window tail over any buffered reader
pub fn tail_from_reader<R: BufRead>(mut reader: R, n: usize) -> io::Result<Vec<Vec<u8>>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut window: VecDeque<Vec<u8>> = VecDeque::with_capacity(n);
    let mut spare = Vec::new();
    loop {
        spare.clear();
        if reader.read_until(b'\n', &mut spare)? == 0 {
            break;
        }

        // Evict only once a new line is in hand; the evicted buffer becomes
        // the next read's spare.
        let recycled = if window.len() == n {
            window.pop_front().unwrap_or_default()
        } else {
            Vec::new()
        };
        window.push_back(std::mem::replace(&mut spare, recycled));
    }

    Ok(window.into())
}
