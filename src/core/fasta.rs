use crate::core::io::MmapSource;
use crate::core::model::Sequence;
use anyhow::{Context, Result};
use memchr::memchr2;
use std::path::Path;

pub fn read_sequence(path: &Path) -> Result<Sequence> {
    let source = MmapSource::open(path)?;
    let text = std::str::from_utf8(source.bytes())
        .with_context(|| format!("{} is not valid UTF-8 text", path.display()))?;
    Ok(parse_sequence(text))
}

pub fn parse_sequence(text: &str) -> Sequence {
    let mut bases = String::with_capacity(text.len());
    let mut headers = 0u32;
    for line in Lines::new(text) {
        if line.starts_with('>') {
            headers += 1;
        } else {
            bases.push_str(line.trim());
        }
    }
    Sequence {
        bases: bases.to_uppercase(),
        headers,
        source_bytes: text.len(),
    }
}

// Splits on `\n`, `\r\n` and lone `\r`.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        match memchr2(b'\n', b'\r', bytes) {
            Some(i) => {
                let line = &self.rest[..i];
                let skip = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[i + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
