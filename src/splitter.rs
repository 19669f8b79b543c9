//! The line-oriented transformation from a list response to a multidoc stream.

use crate::error::SplitError;
use std::io::{BufRead, Write};

/// The YAML multi-document separator, as its own line.
const MULTIDOC_SEPARATOR: &[u8] = b"---\n";
/// The exact line that opens the top-level `items` sequence.
const ITEMS_LINE: &[u8] = b"items:\n";
/// The sequence-element marker at column zero.
const SEQUENCE_MARKER: &[u8] = b"- ";
/// One level of indentation.
const INDENT: &[u8] = b"  ";

/// Where the scanner is relative to the `items:` marker line. Starts at
/// `BeforeItems` and transitions forward exactly once, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    BeforeItems,
    InItems,
}

/// Reads a Kubernetes API response in YAML format (usually from
/// `kubectl get <resource> -o yaml`) and writes it as a YAML multidoc, with
/// each member of the `items` array as its own document.
///
/// This function does not understand YAML. It never loads the document into
/// memory and never checks that it is valid. It looks for the beginning of
/// the `items` array definition, then goes line by line, turning every array
/// start token (`- `) into a multidoc separator and unindenting the lines by
/// one level (two spaces).
///
/// It is therefore entirely dependent on the formatting of its input:
///
/// - two-space indentation, and
/// - non-indented array start tokens (the hyphen starting an `items` element
///   sits at the same column as its parent key, i.e. column zero).
///
/// The output is not guaranteed to be valid YAML.
///
/// Note that the first line after the sequence that starts with neither
/// recognized prefix ends the rewrite: everything from there to end-of-input,
/// including trailing top-level keys such as `kind: List`, is consumed but
/// never appears in the output.
///
/// # Errors
///
/// Returns [`SplitError::NotAListResponse`] if the input ends without an
/// `items:` line, and [`SplitError::Io`] for any read or write failure.
pub fn split_to_multidoc<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<(), SplitError> {
    // If this was any more complicated, we'd build a lexer.
    let mut mode = ScanMode::BeforeItems;
    // Rewriting and reading stop independently: a non-item line ends the
    // rewrite, but the input is still drained to detect errors and EOF.
    let mut rewriting = true;
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return match mode {
                ScanMode::BeforeItems => Err(SplitError::NotAListResponse),
                ScanMode::InItems => Ok(()),
            };
        }

        match mode {
            ScanMode::BeforeItems => {
                if line == ITEMS_LINE {
                    log::debug!("found `items:` marker, splitting sequence elements");
                    mode = ScanMode::InItems;
                }
            }
            ScanMode::InItems if rewriting && line.len() > 2 => match &line[..2] {
                SEQUENCE_MARKER => {
                    output.write_all(MULTIDOC_SEPARATOR)?;
                    output.write_all(&line[2..])?;
                }
                INDENT => {
                    output.write_all(&line[2..])?;
                }
                _ => {
                    // We have left the items array.
                    log::debug!("non-item line reached, dropping the rest of the input");
                    rewriting = false;
                }
            },
            ScanMode::InItems => {}
        }
    }
}
