mod bus;
mod cpu;
mod instructions;
mod rom;

use std::process::ExitCode;

use bus::Bus;
use cpu::{Cpu, CpuState};
use rom::Rom;

/// Exit codes. Rust exit codes are truncated to a byte, so the negative
/// codes a C-style tool would use (-1/-2/-3) map to their 8-bit wraparound.
const EXIT_USAGE: u8 = 255;
const EXIT_ROM_ERROR: u8 = 254;
const EXIT_CPU_FAULT: u8 = 253;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: pyrotobox <rom-path>");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let rom = match Rom::load(&rom_path) {
        Ok(rom) => rom,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(EXIT_ROM_ERROR);
        }
    };

    let mut cpu = Cpu::new(Bus::new(rom));

    loop {
        if cpu.state != CpuState::Running {
            break;
        }
        cpu.step();
        if let Some(fault) = cpu.take_fault() {
            eprintln!("fatal: {}", fault);
            return ExitCode::from(EXIT_CPU_FAULT);
        }
    }

    ExitCode::SUCCESS
}
