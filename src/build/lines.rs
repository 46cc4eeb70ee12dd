//! Line stream over a child's combined stdout and stderr.
//!
//! Both streams of the child share the write end of one pipe, so lines come
//! out of the read end in the order the child wrote them. The sequence ends
//! once every write end has closed, which is how the caller learns the child
//! has finished writing.

use std::io::{self, BufRead, BufReader, PipeReader, Read};
use std::process::Stdio;

/// Lazy, finite sequence of output lines from a child process.
///
/// Holds at most one undelivered line.
#[derive(Debug)]
pub struct OutputLines<R = PipeReader> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl OutputLines {
    /// Opens a pipe and returns the line stream over its read end together
    /// with two handles to its write end, for the child's stdout and stderr.
    ///
    /// The caller must drop every `Stdio` it does not hand to a child (the
    /// `Command` holding them included), otherwise the stream never ends.
    pub fn merged() -> io::Result<(Self, Stdio, Stdio)> {
        let (reader, writer) = io::pipe()?;
        let stdout = writer.try_clone()?;

        Ok((Self::new(reader), stdout.into(), writer.into()))
    }
}

impl<R: Read> OutputLines<R> {
    /// Line stream over any byte source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buf: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for OutputLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(decode_line(&self.buf)),
            Err(e) => {
                log::debug!("Output pipe read failed: {}", e);
                None
            }
        }
    }
}

/// Lossy UTF-8 decode without the trailing line terminator.
fn decode_line(bytes: &[u8]) -> String {
    let line = String::from_utf8_lossy(bytes);
    line.trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_strips_terminators() {
        assert_eq!(decode_line(b"building...\r\n"), "building...");
        assert_eq!(decode_line(b"last line"), "last line");
    }

    #[test]
    fn test_decode_tolerates_invalid_utf8() {
        let line = decode_line(b"warn: \xff\xfe path\n");
        assert!(line.starts_with("warn: "));
        assert!(line.ends_with(" path"));
    }

    #[test]
    fn test_unterminated_last_line_is_yielded() {
        let lines: Vec<String> = OutputLines::new(Cursor::new("a\r\n\nb")).collect();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_interleaved_writes_keep_their_order() {
        use std::process::Command;

        let (lines, stdout, stderr) = OutputLines::merged().unwrap();
        let mut child = {
            let mut command = Command::new("sh");
            command
                .args([
                    "-c",
                    "i=0; while [ $i -lt 300 ]; do echo o$i; echo e$i 1>&2; i=$((i+1)); done",
                ])
                .stdout(stdout)
                .stderr(stderr);
            command.spawn().unwrap()
        };

        let seen: Vec<String> = lines.collect();
        child.wait().unwrap();

        let expected: Vec<String> = (0..300)
            .flat_map(|i| [format!("o{i}"), format!("e{i}")])
            .collect();
        assert_eq!(seen, expected);
    }
}
