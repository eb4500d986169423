//! Grouping of hunk body lines into add-focused and delete-focused chunks.
//!
//! Upstream producers may separate logical change groups with a `~` line.
//! Each pass keeps the lines relevant to its side and starts a new chunk at a
//! separator, unless the chunk so far only touched the other side, in which
//! case it is merged into the next one.

/// Ordered groups of body lines.
pub type Chunks = Vec<Vec<String>>;

const SEPARATOR: char = '~';

/// Split `lines` into `(add_chunks, del_chunks)`.
///
/// Without any `~` separator each pass yields a single chunk.
pub fn sort_chunks<S: AsRef<str>>(lines: &[S]) -> (Chunks, Chunks) {
    (chunk_pass(lines, '+', '-'), chunk_pass(lines, '-', '+'))
}

/// One pass: `keep` is the focused side's prefix, `skip` the other side's.
fn chunk_pass<S: AsRef<str>>(lines: &[S], keep: char, skip: char) -> Chunks {
    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut has_skipped = false;
    let mut need_newline = false;

    for line in lines {
        let line = line.as_ref();
        if line.starts_with(SEPARATOR) {
            if need_newline || !has_skipped {
                chunks.push(std::mem::take(&mut current));
                has_skipped = false;
                need_newline = false;
            }
        } else if line.starts_with(skip) {
            has_skipped = true;
        } else {
            current.push(line.to_string());
            if line.starts_with(keep) {
                need_newline = true;
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
