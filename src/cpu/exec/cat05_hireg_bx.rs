//! Category 5 — high-register operations and branch-exchange.
//!
//! `Rd`/`Rs` here can each independently name a register 0-15: the H1/H2
//! bits extend the encoded 3-bit field by 8 when set. ADD and MOV in this
//! category do not touch the condition flags; CMP does. BX only ever reads
//! Hs, so H1 set is an invalid encoding and terminates the machine.

use super::reg3;
use crate::cpu::Cpu;

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let op = (half_word >> 8) & 0b11;
    let h1 = (half_word >> 7) & 1 != 0;
    let h2 = (half_word >> 6) & 1 != 0;
    let rs = reg3(half_word, 3) + if h2 { 8 } else { 0 };
    let rd = reg3(half_word, 0) + if h1 { 8 } else { 0 };

    match op {
        0 => {
            let result = cpu.reg(rd).wrapping_add(cpu.reg(rs));
            cpu.set_reg(rd, result);
        }
        1 => {
            if !h1 && !h2 {
                // H1H2 == 00 is reserved for CMP.
                cpu.set_finished(true);
                return;
            }
            let a = cpu.reg(rd);
            let b = cpu.reg(rs);
            cpu.set_sub_flags(a, b);
            cpu.set_nz(a.wrapping_sub(b));
        }
        2 => {
            let value = cpu.reg(rs);
            cpu.set_reg(rd, value);
        }
        3 => {
            if h1 {
                // H1 set is an invalid BX encoding; terminate without
                // touching any state.
                cpu.set_finished(true);
                return;
            }
            // BX Hs: the operand is always Rs/Hs (extended by H2), never Rd.
            let target = cpu.reg(rs) & !1u32;
            cpu.set_pc(target);
        }
        _ => unreachable!("2-bit field"),
    }
}
