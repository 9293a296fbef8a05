use std::io;

use crate::evidence::ByteSource;
use crate::scanner::UrlMatcher;

/// One block read from a source, with the overlap tail it was scanned with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: u64,
    /// File offset of the first scanned byte (start of the carried tail).
    pub start: u64,
    pub carried: usize,
    pub bytes_read: usize,
    pub last: bool,
}

/// Unvalidated match text, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub offset: u64,
    pub block: u64,
}

#[derive(Debug)]
pub struct BlockScan {
    pub block: Block,
    pub candidates: Vec<Candidate>,
}

/// Streams a source block by block and reports every URL candidate exactly
/// once, including ones that straddle a block boundary.
///
/// Each read is appended to the bytes carried over from the previous block.
/// Only matches that start before `len - overlap` are committed (all of them
/// on the final block); the uncommitted suffix becomes the next carry. A match
/// whose start is committed sees at least `overlap` bytes of lookahead, so any
/// URL no longer than the overlap is reported whole. Scanning of the next
/// buffer resumes after the end of the last reported match, which keeps the
/// result identical to a single pass over the whole file.
pub struct ChunkScanner<'a> {
    source: &'a dyn ByteSource,
    matcher: &'a dyn UrlMatcher,
    block_size: usize,
    overlap: usize,
    buf: Vec<u8>,
    buf_start: u64,
    read_pos: u64,
    resume: usize,
    next_index: u64,
    done: bool,
}

impl<'a> ChunkScanner<'a> {
    pub fn new(
        source: &'a dyn ByteSource,
        matcher: &'a dyn UrlMatcher,
        block_size: usize,
        overlap: usize,
    ) -> Self {
        Self {
            source,
            matcher,
            block_size: block_size.max(1),
            overlap,
            buf: Vec::new(),
            buf_start: 0,
            read_pos: 0,
            resume: 0,
            next_index: 0,
            done: false,
        }
    }

    fn fill(&mut self) -> io::Result<usize> {
        let carried = self.buf.len();
        self.buf.resize(carried + self.block_size, 0);
        let mut filled = 0usize;
        while filled < self.block_size {
            match self
                .source
                .read_at(self.read_pos + filled as u64, &mut self.buf[carried + filled..])
            {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.buf.truncate(carried);
                    return Err(err);
                }
            }
        }
        self.buf.truncate(carried + filled);
        self.read_pos += filled as u64;
        Ok(filled)
    }

    fn scan_buffer(&mut self, block_index: u64, commit: usize) -> (Vec<Candidate>, usize) {
        let mut candidates = Vec::new();
        let mut pos = self.resume;
        while let Some(m) = self.matcher.find_at(&self.buf, pos) {
            if m.start >= commit {
                break;
            }
            candidates.push(Candidate {
                text: String::from_utf8_lossy(&self.buf[m.start..m.end]).into_owned(),
                offset: self.buf_start + m.start as u64,
                block: block_index,
            });
            pos = if m.is_empty() { m.end + 1 } else { m.end };
        }
        (candidates, pos)
    }
}

impl Iterator for ChunkScanner<'_> {
    type Item = io::Result<BlockScan>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let carried = self.buf.len();
        let bytes_read = match self.fill() {
            Ok(n) => n,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        if bytes_read == 0 && carried == 0 {
            self.done = true;
            return None;
        }

        let last = bytes_read < self.block_size || self.read_pos >= self.source.len();
        let commit = if last {
            self.buf.len()
        } else {
            self.buf.len().saturating_sub(self.overlap)
        };

        let index = self.next_index;
        self.next_index += 1;
        let (candidates, scanned_to) = self.scan_buffer(index, commit);

        let block = Block {
            index,
            start: self.buf_start,
            carried,
            bytes_read,
            last,
        };

        if last {
            self.done = true;
            self.buf.clear();
        } else {
            self.buf.drain(..commit);
            self.buf_start += commit as u64;
            self.resume = scanned_to.saturating_sub(commit);
        }

        Some(Ok(BlockScan { block, candidates }))
    }
}
