/*!
cpu/mod.rs - public façade over the CPU's register file, fetch/decode/execute
loop, and its submodules:

    state.rs       - registers, flags, stack helpers.
    addressing.rs  - the thirteen addressing modes.
    table.rs       - opcode -> (mnemonic, mode, size) decode table.
    dispatch/      - per-mnemonic-family execution.

`Cpu` owns its `Bus` outright rather than borrowing it per call, so the
external surface is just `Cpu::new`, `reset`, `step`, and register readers.
*/

pub mod addressing;
pub(crate) mod dispatch;
pub mod state;
pub mod table;

use log::{error, trace};
use thiserror::Error;

use crate::bus::Bus;
use state::CpuState;

/// Errors raised while stepping the CPU.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
}

/// A 6502-family CPU bound to its bus.
pub struct Cpu {
    state: CpuState,
    bus: Bus,
}

impl Cpu {
    pub fn new(bus: Bus) -> Self {
        Self {
            state: CpuState::default(),
            bus,
        }
    }

    /// Load PC from the reset vector and restore power-on register values.
    pub fn reset(&mut self) {
        self.state.reset(&self.bus);
    }

    /// Fetch, decode, and execute exactly one instruction.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let opcode_pc = self.state.pc;
        let opcode = self.bus.read8(opcode_pc);
        self.state.pc = opcode_pc.wrapping_add(1);

        let instr = table::lookup(opcode).ok_or_else(|| {
            error!("unknown opcode {opcode:#04x} at {opcode_pc:#06x}");
            CpuError::UnknownOpcode(opcode)
        })?;

        let mut operand: u16 = 0;
        for _ in 0..instr.size - 1 {
            let byte = self.bus.read8(self.state.pc) as u16;
            operand = (operand << 8) | byte;
            self.state.pc = self.state.pc.wrapping_add(1);
        }

        trace!(
            "step pc={opcode_pc:#06x} opcode={opcode:#04x} mnemonic={:?} mode={:?}",
            instr.mnemonic,
            instr.mode
        );

        let resolved = addressing::resolve(instr.mode, operand, &self.bus, self.state.x, self.state.y);
        dispatch::execute(instr.mnemonic, &mut self.state, &mut self.bus, resolved);
        Ok(())
    }

    /// Step the CPU up to `max_steps` times, stopping early on the first error.
    pub fn run(&mut self, max_steps: usize) -> Result<(), CpuError> {
        for _ in 0..max_steps {
            self.step()?;
        }
        Ok(())
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn a(&self) -> u8 {
        self.state.a
    }

    pub fn x(&self) -> u8 {
        self.state.x
    }

    pub fn y(&self) -> u8 {
        self.state.y
    }

    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn status(&self) -> crate::status::ProcessorStatus {
        self.state.p
    }
}

impl std::fmt::Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A={:02X} X={:02X} Y={:02X} SP={:02X} PC={:04X} P={}",
            self.state.a, self.state.x, self.state.y, self.state.sp, self.state.pc, self.state.p
        )
    }
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("a", &self.state.a)
            .field("x", &self.state.x)
            .field("y", &self.state.y)
            .field("sp", &self.state.sp)
            .field("pc", &self.state.pc)
            .field("p", &self.state.p)
            .finish()
    }
}
