use hamming128::config::{usage, Command, Config, InputSource};
use hamming128::cs::ecc::codec::{BlockCodec, PAYLOAD_DATA_BYTES};
use hamming128::cs::ecc::positions::{PositionSource, RandomPositions};
use hamming128::cs::ecc::run::{process_code, Report};
use hamming128::cs::ecc::Payload;
use hamming128::{Error, Result};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::BufRead;
use std::process::ExitCode;

fn read_payload(input: &InputSource, rng: &mut ChaCha20Rng) -> Result<Payload> {
    match input {
        InputSource::Bits(bits) => bits.trim().parse(),
        InputSource::Hex(hex) => Payload::from_hex(hex),
        InputSource::Generate => {
            let mut data = [0u8; PAYLOAD_DATA_BYTES];
            rng.fill(&mut data);
            info!("generated data bytes {}", hex::encode(data));
            Ok(BlockCodec::new().encode_payload(data))
        }
        InputSource::Stdin => {
            eprintln!("Enter 128 bits (0s and 1s):");
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|e| Error::InvalidInput(format!("failed to read stdin: {}", e)))?;
            line.trim().parse()
        }
    }
}

fn run(config: Config) -> Result<Report> {
    if config.print_config {
        println!("{}\n", config.describe());
    }

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let payload = read_payload(&config.input, &mut rng)?;

    let mut positions: Box<dyn PositionSource> = match config.positions {
        Some(fixed) => Box::new(fixed),
        None => Box::new(RandomPositions::from_rng(rng)),
    };
    Ok(process_code(&payload, positions.as_mut()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
