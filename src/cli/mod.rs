mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "ascbin")]
#[command(version)]
#[command(about = "Encode integers and text as compact runs of printable ASCII", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text (or decimal units with --units)
    Encode(EncodeArgs),

    /// Decode an encoded stream back to text (or units with --units)
    Decode(DecodeArgs),

    /// Inspect the available charsets
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run the built-in sample through the readable codec
    Demo,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    pretty_env_logger::init();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &registry),
        Commands::Demo => handlers::demo::handle(),
    }
}
