/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs      - Architectural state (registers, flags, halt) + constructors.
regs.rs       - `CpuRegs` trait the generic helpers operate through.
addressing.rs - Addressing mode enum & operand resolution helpers.
context.rs    - Per-instruction scratch state threaded resolver -> handler.
cycles.rs     - Page-cross / branch / interrupt cycle adjustments.
table.rs      - Static 256-entry opcode table.
execute.rs    - Instruction semantic helpers (ALU, stack, RMW, interrupts).
dispatch/     - Single-step orchestration and per-family handlers.
core/         - The `Cpu` façade.
```

Downstream code should go through `Cpu`; `CpuState` and the table are
exposed for inspection, snapshots and diagnostics.

Usage:
```rust
use nescore::{Bus, Cpu};

let mut bus = Bus::new();
bus.write(0x0300, 0xE8); // INX
let mut cpu = Cpu::new();
cpu.set_pc(0x0300);
assert_eq!(cpu.step(&mut bus), Ok(2));
assert_eq!(cpu.x(), 1);
```

Feature flags:
    trace - `log::trace!` one line per executed instruction.
*/

pub mod addressing;
pub(crate) mod context;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::AddrMode;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Instruction, Op, lookup};
