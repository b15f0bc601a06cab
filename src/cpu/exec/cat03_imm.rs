//! Category 3 — move/compare/add/subtract with an 8-bit immediate.

use super::Cpu;

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let op = (half_word >> 11) & 0b11;
    let rd = ((half_word >> 8) & 0b111) as usize;
    let imm8 = (half_word & 0xFF) as u32;
    let rd_val = cpu.reg(rd);

    match op {
        0 => {
            // MOV Rd, #imm8 — C/V untouched.
            cpu.set_reg(rd, imm8);
            cpu.set_nz(imm8);
        }
        1 => {
            // CMP Rd, #imm8 — discard the result.
            cpu.set_sub_flags(rd_val, imm8);
            cpu.set_nz(rd_val.wrapping_sub(imm8));
        }
        2 => {
            let result = rd_val.wrapping_add(imm8);
            cpu.set_add_flags(rd_val, imm8);
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        3 => {
            let result = rd_val.wrapping_sub(imm8);
            cpu.set_sub_flags(rd_val, imm8);
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        _ => unreachable!("2-bit field"),
    }
}
