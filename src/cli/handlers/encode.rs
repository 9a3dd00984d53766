use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_charset, write_output},
    global::GlobalArgs,
};
use ascbin::CharsetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &CharsetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let charset = resolve_charset(registry, args.charset.as_deref())?;
    let input = read_input(args.file.as_ref(), global)?;

    let mut encoded = if args.units {
        let text = String::from_utf8(input).map_err(|_| "Unit input must be valid UTF-8")?;
        let units = parse_units(&text)?;
        ascbin::encode(&units, &charset)?
    } else {
        let text = String::from_utf8(input)
            .map_err(|_| "Input must be valid UTF-8 text for readable encoding")?;
        ascbin::encode_readable(&text, &charset)?
    };

    log::debug!("encoded into {} bytes", encoded.len());

    if args.output.is_none() {
        encoded.push(b'\n');
    }
    write_output(args.output.as_ref(), &encoded)
}

/// Parses whitespace-separated decimal units.
fn parse_units(text: &str) -> Result<Vec<u64>, Box<dyn std::error::Error>> {
    let mut units = Vec::new();
    for token in text.split_whitespace() {
        let unit = token
            .parse::<u64>()
            .map_err(|e| format!("Invalid unit '{}': {}", token, e))?;
        units.push(unit);
    }
    Ok(units)
}
