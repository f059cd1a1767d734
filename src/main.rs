use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{copy_to_clipboard, split_keys};
use zcalc::keypad::render_layout;
use zcalc::{Config, Input, Session};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "A four-function keypad calculator")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Press keys and print the display
    Press {
        /// Key labels or key tapes, e.g. `12+3=` or `DEL`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print the display after every press
        #[arg(long)]
        tape: bool,

        /// Print every press as JSON
        #[arg(long)]
        json: bool,

        /// Copy the final display to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print the keypad layout
    Layout,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zcalc={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_keys(args: &[String]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for arg in args {
        let keys = split_keys(arg).with_context(|| format!("Invalid keys: {}", arg))?;
        inputs.extend(keys);
    }
    Ok(inputs)
}

fn press(config: &Config, keys: &[String], tape: bool, json: bool, copy: bool) -> Result<()> {
    let inputs = parse_keys(keys)?;
    debug!(count = inputs.len(), "parsed keys");

    let mut session = Session::new(config);
    let steps = session.run(inputs);

    if json {
        let out = serde_json::to_string_pretty(&steps).context("Failed to serialize steps")?;
        println!("{}", out);
    } else if tape || config.tape.show_steps {
        for step in &steps {
            println!("{:>3}  {}", step.key, session.render_step(step));
        }
    } else {
        println!("{}", session.render());
    }

    if copy {
        copy_to_clipboard(session.calculator().current_display())?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Press {
            keys,
            tape,
            json,
            copy,
        } => press(&config, &keys, tape, json, copy),
        Command::Layout => {
            print!("{}", render_layout());
            Ok(())
        }
    }
}
