//! Configuration for the `hamming128` command-line shell.
//!
//! The tool works with zero arguments: it reads the payload from stdin and
//! draws error positions from a time-seeded generator. The seed is reported
//! with `--print-config` so any run can be replayed.

use crate::cs::ecc::positions::FixedPositions;
use crate::error::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 128 '0'/'1' characters given on the command line
    Bits(String),
    /// 32 hex characters given on the command line
    Hex(String),
    /// Random data bytes encoded into valid code words
    Generate,
    /// One line read from standard input
    Stdin,
}

/// What the binary should do.
#[derive(Debug, Clone)]
pub enum Command {
    /// Process a payload
    Run(Config),
    /// Print usage and exit
    Help,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Payload source
    pub input: InputSource,

    /// Fixed error positions; `None` draws them at random
    pub positions: Option<FixedPositions>,

    /// Seed for random positions and generated payloads
    pub seed: u64,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            positions: None,
            seed: time_seed(),
            print_config: false,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|elapsed| u64::try_from(elapsed.as_millis()).ok())
        .unwrap_or_default()
}

fn required<'a>(args: &'a [String], i: usize, flag: &str, what: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(format!("{} requires {}", flag, what)))
}

impl Config {
    /// Parse command-line arguments (without the program name).
    pub fn from_args(args: &[String]) -> Result<Command> {
        let mut config = Config::default();
        let mut input: Option<InputSource> = None;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--code" => {
                    i += 1;
                    let bits = required(args, i, flag, "a 128-bit string")?;
                    input = Some(InputSource::Bits(bits.to_string()));
                }
                "--hex" => {
                    i += 1;
                    let hex = required(args, i, flag, "32 hex characters")?;
                    input = Some(InputSource::Hex(hex.to_string()));
                }
                "--generate" => {
                    input = Some(InputSource::Generate);
                }
                "--seed" => {
                    i += 1;
                    let seed = required(args, i, flag, "a number")?;
                    config.seed = seed
                        .parse()
                        .map_err(|_| Error::Config(format!("invalid seed: {}", seed)))?;
                }
                "--positions" => {
                    i += 1;
                    let list = required(args, i, flag, "a list like 1,2,8")?;
                    config.positions = Some(FixedPositions::parse(list)?);
                }
                "--print-config" => {
                    config.print_config = true;
                }
                "--help" | "-h" => return Ok(Command::Help),
                other => {
                    return Err(Error::Config(format!("unknown argument: {}", other)));
                }
            }
            i += 1;
        }

        if let Some(input) = input {
            config.input = input;
        }
        Ok(Command::Run(config))
    }

    /// Render the configuration in human-readable form.
    pub fn describe(&self) -> String {
        let input = match &self.input {
            InputSource::Bits(_) => "command line (binary)",
            InputSource::Hex(_) => "command line (hex)",
            InputSource::Generate => "generated code words",
            InputSource::Stdin => "standard input",
        };
        let positions = match &self.positions {
            Some(fixed) => fixed
                .positions()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(","),
            None => "random 1-8".to_string(),
        };
        format!(
            "=== Configuration ===\nInput: {}\nError positions: {}\nSeed: {}",
            input, positions, self.seed
        )
    }
}

/// Usage text for `--help`.
pub fn usage() -> &'static str {
    "hamming128: Hamming(7,4) error injection and correction over a 128-bit code

USAGE:
    hamming128 [OPTIONS]

OPTIONS:
    --code <BITS>         128 characters of 0 and 1 (default: read from stdin)
    --hex <HEX>           The payload as 32 hex characters
    --generate            Generate a payload of valid code words
    --seed <N>            Random seed for determinism
    --positions <LIST>    Fixed error positions, cycled per block (e.g. 1,2,8)
    --print-config        Print resolved configuration
    --help, -h            Print this help

Set RUST_LOG=debug to trace each block."
}
