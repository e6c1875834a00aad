use std::process::ExitCode;

use clap::Parser;
use log::info;

use crt6502::{Bus, Cartridge, Cpu};

/// Load an iNES ROM and step its CPU a bounded number of times, dumping
/// register state at the end.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to an iNES (.nes) ROM image
    rom: std::path::PathBuf,

    /// Number of instructions to execute
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Raise log verbosity (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let cartridge = match Cartridge::open(&args.rom) {
        Ok(cartridge) => cartridge,
        Err(err) => {
            eprintln!("failed to load {}: {err}", args.rom.display());
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {}: mapper={} prg={}KiB chr={}KiB",
        args.rom.display(),
        cartridge.mapper_id(),
        cartridge.prg_rom_bytes().len() / 1024,
        cartridge.chr_rom_bytes().len() / 1024,
    );

    let bus = Bus::new(cartridge);
    let mut cpu = Cpu::new(bus);
    cpu.reset();

    for step in 0..args.steps {
        if let Err(err) = cpu.step() {
            eprintln!("stopped after {step} steps: {err}");
            println!("{cpu}");
            return ExitCode::FAILURE;
        }
    }

    println!("{cpu}");
    ExitCode::SUCCESS
}
