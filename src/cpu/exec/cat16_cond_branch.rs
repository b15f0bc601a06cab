//! Category 16 — conditional branch over a signed 8-bit, halfword-scaled
//! offset. Condition code 0b1110 is reserved.

use super::sign_extend;
use crate::cpu::Cpu;

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let cond = (half_word >> 8) & 0xF;
    let soffset8 = (half_word & 0xFF) as u32;

    let taken = match cond {
        0x0 => cpu.z(),
        0x1 => !cpu.z(),
        0x2 => cpu.c(),
        0x3 => !cpu.c(),
        0x4 => cpu.n(),
        0x5 => !cpu.n(),
        0x6 => cpu.v(),
        0x7 => !cpu.v(),
        0x8 => cpu.c() && !cpu.z(),
        0x9 => !cpu.c() || cpu.z(),
        0xA => cpu.n() == cpu.v(),
        0xB => cpu.n() != cpu.v(),
        0xC => !cpu.z() && (cpu.n() == cpu.v()),
        0xD => cpu.z() || (cpu.n() != cpu.v()),
        _ => {
            // cond == 0b1110 is reserved; 0b1111 never reaches here, the
            // decoder already routes it to the software-interrupt category.
            cpu.set_finished(true);
            return;
        }
    };

    if taken {
        // cpu.pc() already reads as the instruction address plus two; that
        // is exactly the "PC + 2" the offset is defined against.
        let offset = sign_extend(soffset8, 8) << 1;
        cpu.set_pc(cpu.pc().wrapping_add(offset));
    }
}
