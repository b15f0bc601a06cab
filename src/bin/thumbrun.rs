use std::env;
use std::fs;
use std::path::Path;

use thumbcore::cpu::Cpu;
use thumbcore::memory_bus::HostBus;
use thumbcore::Machine;

const FLAT_MEMORY_SIZE: usize = 1 << 20;
const MAX_INSTRUCTIONS: u32 = 1_000_000;

#[derive(thiserror::Error, Debug)]
enum ThumbRunError {
    #[error("failed to read binary image '{path}': {source}")]
    ReadImage {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("binary image is {size} bytes, larger than the {capacity}-byte flat memory")]
    ImageTooLarge { size: usize, capacity: usize },
}

/// A fixed-size byte array addressed from 0, with two trivial syscalls:
/// number 0 halts the machine, number 1 prints R0 as an exit code.
struct FlatMemory {
    bytes: Vec<u8>,
}

impl FlatMemory {
    fn load(path: &Path) -> Result<Self, ThumbRunError> {
        let image = fs::read(path).map_err(|source| ThumbRunError::ReadImage {
            path: path.display().to_string(),
            source,
        })?;
        if image.len() > FLAT_MEMORY_SIZE {
            return Err(ThumbRunError::ImageTooLarge {
                size: image.len(),
                capacity: FLAT_MEMORY_SIZE,
            });
        }
        let mut bytes = vec![0u8; FLAT_MEMORY_SIZE];
        bytes[..image.len()].copy_from_slice(&image);
        Ok(FlatMemory { bytes })
    }
}

impl HostBus for FlatMemory {
    fn read_byte(&mut self, addr: u32) -> u8 {
        self.bytes.get(addr as usize).copied().unwrap_or(0)
    }

    fn write_byte(&mut self, addr: u32, value: u8) {
        if let Some(slot) = self.bytes.get_mut(addr as usize) {
            *slot = value;
        }
    }

    fn software_interrupt(&mut self, cpu: &mut Cpu, number: u8) {
        match number {
            0 => cpu.set_finished(true),
            1 => {
                println!("exit code: {}", cpu.reg(0));
                cpu.set_finished(true);
            }
            other => log::warn!("unhandled software interrupt {}", other),
        }
    }
}

fn run() -> Result<(), ThumbRunError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <flat-binary-image>", args[0]);
        std::process::exit(1);
    }

    let memory = FlatMemory::load(Path::new(&args[1]))?;
    let initial_sp = FLAT_MEMORY_SIZE as u32;
    let mut machine = Machine::new(memory, initial_sp, 0);

    let executed = machine.run(MAX_INSTRUCTIONS);
    log::info!("executed {} instruction(s)", executed);
    print!("{}", machine.cpu().print());

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("thumbrun: {}", err);
        std::process::exit(1);
    }
}
