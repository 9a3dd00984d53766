use crate::cli::{args::ConfigAction, global::GlobalArgs};
use ascbin::CharsetRegistry;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    registry: &CharsetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { charset } => handle_show(&charset, registry),
    }
}

fn handle_list(json: bool, registry: &CharsetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = registry.names();

    if json {
        let charsets: Vec<serde_json::Value> = names
            .iter()
            .filter_map(|name| registry.get_charset(name).map(|config| (name, config)))
            .map(|(name, config)| {
                serde_json::json!({
                    "name": name,
                    "radix": config.chars.chars().count(),
                    "marker": config.marker,
                    "max_code_length": config.max_code_length,
                    "default": name == registry.default_name(),
                })
            })
            .collect();
        let output = serde_json::json!({ "charsets": charsets });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available charsets:\n");
    for name in &names {
        let Some(config) = registry.get_charset(name) else {
            continue;
        };
        let count = config.chars.chars().count();
        let preview: String = config.chars.chars().take(20).collect();
        let suffix = if count > 20 { "..." } else { "" };
        let default = if name == registry.default_name() { "*" } else { " " };
        println!(
            "{} {:<12} base-{:<3} marker {:<3} {}{}",
            default, name, count, config.marker, preview, suffix
        );
    }

    Ok(())
}

fn handle_show(name: &str, registry: &CharsetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    // Build first so invalid entries and typos report the same way as encode/decode
    let charset = registry.build(name)?;
    let config = registry
        .get_charset(name)
        .ok_or_else(|| format!("Charset '{}' not found", name))?;

    println!("Charset: {}", name);
    if let Some(description) = &config.description {
        println!("  Description: {}", description);
    }
    println!("  Radix: {}", charset.radix());
    println!("  Symbols: {}", config.chars);
    println!("  Marker: {}", config.marker);
    println!("  Max code length: {}", charset.max_code_length());
    println!("  Max unit: {}", charset.max_code() - 1);
    println!(
        "  Default: {}",
        if name == registry.default_name() { "yes" } else { "no" }
    );

    Ok(())
}
