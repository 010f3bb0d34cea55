use std::env;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use lisk32::Address;

#[derive(Debug, Parser)]
#[command(name = "lisk32", about = "Encode, decode and check lisk32 addresses")]
struct Cli {
    /// Print one JSON object per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 20 byte hex address -> lisk32
    Encode { hex: String },
    /// lisk32 -> 20 byte hex address
    Decode { address: String },
    /// Check one or more lisk32 addresses
    Validate {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// 32 byte ed25519 public key (hex) -> lisk32
    FromPublicKey { hex: String },
    /// Generate random addresses
    Random {
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
}

fn print_address(address: &Address, as_json: bool) {
    if as_json {
        println!("{}", json!({ "address": address, "hex": address.to_hex() }));
    } else {
        println!("{address} {}", address.to_hex());
    }
}

fn init_tracing() {
    let filter = env::var("LISK32_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { hex } => {
            let address = Address::from_hex(hex.trim()).context("failed to read address bytes")?;
            print_address(&address, cli.json);
        }
        Command::Decode { address } => {
            let address: Address = address
                .trim()
                .parse()
                .with_context(|| format!("failed to decode {address}"))?;
            print_address(&address, cli.json);
        }
        Command::Validate { addresses } => {
            let mut invalid = 0;

            for address in &addresses {
                let result = lisk32::decode(address);
                if result.is_err() {
                    invalid += 1;
                }

                match (cli.json, result) {
                    (true, Ok(_)) => println!("{}", json!({ "address": address, "valid": true })),
                    (true, Err(e)) => println!(
                        "{}",
                        json!({ "address": address, "valid": false, "reason": e.to_string() })
                    ),
                    (false, Ok(_)) => println!("{address} OK"),
                    (false, Err(e)) => println!("{address} INVALID ({e})"),
                }
            }

            if invalid > 0 {
                bail!("{invalid} of {} addresses are invalid", addresses.len());
            }
        }
        Command::FromPublicKey { hex } => {
            let public_key = hex::decode(hex.trim()).context("public key is not hex")?;
            let address = Address::from_public_key(&public_key)?;
            print_address(&address, cli.json);
        }
        Command::Random { count } => {
            for _ in 0..count {
                print_address(&Address::random(), cli.json);
            }
        }
    }

    Ok(())
}
