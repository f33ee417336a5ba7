//! DuoKV CLI Client
//!
//! Command-line interface for interacting with DuoKV.

use clap::{Parser, Subcommand};
use duokv::network::Client;
use duokv::protocol::{Command, Reply};
use duokv::Input;

/// DuoKV CLI
#[derive(Parser, Debug)]
#[command(name = "duokv-cli")]
#[command(about = "CLI for the DuoKV key-value store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:6380")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

/// Values are read as JSON literals (`42`, `4.0`, `"7"`); anything else is a string.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Set a scalar
    Set { key: String, value: String },

    /// Get a scalar
    Get { key: String },

    /// Show the kind of a scalar
    Kind { key: String },

    /// Prepend elements to a list
    Lpush {
        key: String,
        #[arg(required = true)]
        elements: Vec<String>,
    },

    /// Append elements to a list
    Rpush {
        key: String,
        #[arg(required = true)]
        elements: Vec<String>,
    },

    /// Append elements not already in a list
    Raddtoset {
        key: String,
        #[arg(required = true)]
        elements: Vec<String>,
    },

    /// Pop from the head: no index, a count, or a start/end range
    Lpop {
        key: String,
        #[arg(allow_negative_numbers = true)]
        indices: Vec<i64>,
    },

    /// Pop from the tail: no index, a count, or a start/end range
    Rpop {
        key: String,
        #[arg(allow_negative_numbers = true)]
        indices: Vec<i64>,
    },

    /// Overwrite a list element
    Lset {
        key: String,
        #[arg(allow_negative_numbers = true)]
        index: i64,
        element: String,
    },

    /// Read a list element
    Lget {
        key: String,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Write a snapshot on the server
    Save {
        /// Path on the server; defaults to its configured snapshot file
        path: Option<String>,
    },

    /// Ping the server
    Ping,

    /// Stop the server (it saves its snapshot on the way out)
    Shutdown,
}

impl Commands {
    fn into_command(self) -> Command {
        match self {
            Commands::Set { key, value } => Command::Set {
                key,
                value: Input::parse_literal(&value),
            },
            Commands::Get { key } => Command::Get { key },
            Commands::Kind { key } => Command::Kind { key },
            Commands::Lpush { key, elements } => Command::LPush {
                key,
                elements: parse_all(&elements),
            },
            Commands::Rpush { key, elements } => Command::RPush {
                key,
                elements: parse_all(&elements),
            },
            Commands::Raddtoset { key, elements } => Command::RAddToSet {
                key,
                elements: parse_all(&elements),
            },
            Commands::Lpop { key, indices } => Command::LPop { key, indices },
            Commands::Rpop { key, indices } => Command::RPop { key, indices },
            Commands::Lset {
                key,
                index,
                element,
            } => Command::LSet {
                key,
                index,
                element: Input::parse_literal(&element),
            },
            Commands::Lget { key, index } => Command::LGet { key, index },
            Commands::Save { path } => Command::Save { path },
            Commands::Ping => Command::Ping,
            Commands::Shutdown => Command::Shutdown,
        }
    }
}

fn parse_all(raw: &[String]) -> Vec<Input> {
    raw.iter().map(|s| Input::parse_literal(s)).collect()
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Done => println!("(done)"),
        Reply::Ok => println!("OK"),
        Reply::Length(n) => println!("(integer) {}", n),
        Reply::Value(value) => println!("{}", value),
        Reply::Values(values) if values.is_empty() => println!("(empty list)"),
        Reply::Values(values) => {
            for (i, value) in values.iter().enumerate() {
                println!("{}) {}", i + 1, value);
            }
        }
        Reply::Kind(kind) => println!("{}", kind),
        Reply::Pong => println!("PONG"),
    }
}

fn main() {
    let args = Args::parse();
    let command = args.command.into_command();

    let mut client = match Client::connect(&args.server) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Could not connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    match client.execute(&command) {
        Ok(reply) => print_reply(&reply),
        Err(e) => {
            eprintln!("(error) {}", e);
            std::process::exit(1);
        }
    }
}
