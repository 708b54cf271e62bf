// Confirmation prompt
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::Result;
use std::io::{
    Read,
    Write,
};
use tracing::warn;

/// Shown before reading the answer.
pub const PROMPT: &str =
    "Are you sure you want to delete these buckets and their content? (y/n)";

/// Asks the user to confirm deletion.
///
/// Exactly one byte is read from `reader`. Only `y` confirms, anything else,
/// including no input at all or a read error, declines.
pub fn confirm<R, W>(reader: &mut R, writer: &mut W) -> bool
where
    R: Read,
    W: Write,
{
    let prompted = write!(writer, "\n\n{}\n", PROMPT)
        .and_then(|_| writer.flush());

    if let Err(e) = prompted {
        warn!("Unable to show confirmation prompt: {}", e);
    }

    match read_answer(reader) {
        Ok(answer) => answer == Some(b'y'),
        Err(e)     => {
            warn!("{}", e);
            false
        },
    }
}

// Reads a single byte, None on EOF.
fn read_answer<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    match reader.bytes().next() {
        Some(byte) => Ok(Some(byte?)),
        None       => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_confirm() {
        let tests: Vec<(&[u8], bool)> = vec![
            (&b"y"[..],    true),
            (&b"y\n"[..],  true),
            (&b"yes"[..],  true),
            (&b"Y"[..],    false),
            (&b"n"[..],    false),
            (&b" y"[..],   false),
            (&b"\n"[..],   false),
            (&b""[..],     false),
        ];

        for test in tests {
            let mut input = test.0;
            let expected  = test.1;

            let mut output = Vec::new();
            let ret        = confirm(&mut input, &mut output);

            assert_eq!(ret, expected, "input {:?}", test.0);
        }
    }

    #[test]
    fn test_confirm_reads_one_byte() {
        let mut input: &[u8] = b"yn";
        let mut output       = Vec::new();

        assert!(confirm(&mut input, &mut output));
        assert_eq!(input, b"n");
    }

    #[test]
    fn test_confirm_shows_prompt() {
        let mut input: &[u8] = b"n";
        let mut output       = Vec::new();

        confirm(&mut input, &mut output);

        let output = String::from_utf8(output).unwrap();

        assert!(output.contains(PROMPT));
    }

    #[test]
    fn test_confirm_read_error() {
        let mut output = Vec::new();

        assert!(!confirm(&mut FailingReader, &mut output));
    }
}
