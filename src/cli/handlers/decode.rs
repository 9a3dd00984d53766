use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_charset, write_output},
    global::GlobalArgs,
};
use ascbin::{Charset, CharsetRegistry, CodecError};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &CharsetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let charset = resolve_charset(registry, args.charset.as_deref())?;
    let input = read_input(args.file.as_ref(), global)?;
    let encoded = strip_line_ending(&input, &charset);

    let output = if args.units {
        let units = ascbin::decode(encoded, &charset);
        if !global.quiet && !is_canonical(ascbin::encode(&units, &charset), encoded) {
            eprintln!("{}", NON_CANONICAL_NOTICE);
        }
        let mut line = units
            .iter()
            .map(|unit| unit.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        line.push('\n');
        line.into_bytes()
    } else {
        let text = ascbin::decode_readable(encoded, &charset);
        if !global.quiet && !is_canonical(ascbin::encode_readable(&text, &charset), encoded) {
            eprintln!("{}", NON_CANONICAL_NOTICE);
        }
        text.into_bytes()
    };

    write_output(args.output.as_ref(), &output)
}

const NON_CANONICAL_NOTICE: &str =
    "notice: input is not in canonical form; decoded on a best-effort basis";

/// Whether re-encoding the decoded value reproduces the input.
///
/// A decoded value that no longer encodes (e.g. U+FFFD with a small charset)
/// is simply not canonical; the decode itself still succeeds.
fn is_canonical(reencoded: Result<Vec<u8>, CodecError>, encoded: &[u8]) -> bool {
    match reencoded {
        Ok(bytes) => bytes == encoded,
        Err(err) => {
            log::debug!("decoded value does not re-encode: {:?}", err);
            false
        }
    }
}

/// Drops one trailing newline unless the charset uses newline as a symbol.
fn strip_line_ending<'a>(input: &'a [u8], charset: &Charset) -> &'a [u8] {
    let mut end = input.len();
    if end > 0 && input[end - 1] == b'\n' && !charset.contains(b'\n') {
        end -= 1;
        if end > 0 && input[end - 1] == b'\r' && !charset.contains(b'\r') {
            end -= 1;
        }
    }
    &input[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        let charset = Charset::default();
        assert_eq!(strip_line_ending(b"``#~\n", &charset), b"``#~");
        assert_eq!(strip_line_ending(b"``#~\r\n", &charset), b"``#~");
        assert_eq!(strip_line_ending(b"ab  ", &charset), b"ab  ");
        assert_eq!(strip_line_ending(b"", &charset), b"");
    }

    #[test]
    fn test_is_canonical() {
        let charset = Charset::default();
        assert!(is_canonical(ascbin::encode(&[92, 1], &charset), b"``!!`!"));
        assert!(!is_canonical(ascbin::encode(&[0], &charset), b"``  "));
    }

    #[test]
    fn test_replacement_char_that_cannot_reencode() {
        // 3^10 = 59049, below U+FFFD + 3
        let charset = Charset::new("abc", b'#', 10).unwrap();
        let surrogate = 0xD800 + charset.radix() as u64;
        let encoded = ascbin::encode(&[surrogate], &charset).unwrap();

        let text = ascbin::decode_readable(&encoded, &charset);
        assert_eq!(text, "\u{FFFD}");

        let reencoded = ascbin::encode_readable(&text, &charset);
        assert!(matches!(reencoded, Err(CodecError::Overflow { .. })));
        assert!(!is_canonical(reencoded, &encoded));
    }

    #[test]
    fn test_newline_symbol_kept() {
        let charset = Charset::new("ab\n", b'#', 4).unwrap();
        assert_eq!(strip_line_ending(b"ab\n", &charset), b"ab\n");
    }
}
