use ascbin::Charset;

/// A stream produced by the readable encoder over the default charset.
pub const SAMPLE: &str = "``]# !G#i$^($$ !O# !W# !_#I5, M#%%>7d>`...g#000000gshake+4fsize-4jexsize+2+4";

/// Prints the sample stream, the readable encoding of unit 8192, and the
/// decoded sample, all with the built-in charset.
pub fn handle() -> Result<(), Box<dyn std::error::Error>> {
    let charset = Charset::default();

    let encoded = ascbin::encode_readable_units(&[8192], &charset)?;
    let decoded = ascbin::decode_readable(SAMPLE.as_bytes(), &charset);

    println!("sample:  {}", SAMPLE);
    println!("8192:    {}", String::from_utf8_lossy(&encoded));
    println!("decoded: {:?}", decoded);

    Ok(())
}
