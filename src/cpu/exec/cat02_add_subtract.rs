//! Category 2 — add/subtract (register or 3-bit immediate operand2).

use super::{reg3, Cpu};

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let immediate = (half_word >> 10) & 1 != 0;
    let subtract = (half_word >> 9) & 1 != 0;
    let operand2_field = ((half_word >> 6) & 0b111) as u32;
    let rs = reg3(half_word, 3);
    let rd = reg3(half_word, 0);

    let rs_val = cpu.reg(rs);
    let operand2 = if immediate {
        operand2_field
    } else {
        cpu.reg(operand2_field as usize)
    };

    let result = if subtract {
        cpu.set_sub_flags(rs_val, operand2);
        rs_val.wrapping_sub(operand2)
    } else {
        cpu.set_add_flags(rs_val, operand2);
        rs_val.wrapping_add(operand2)
    };

    cpu.set_reg(rd, result);
    cpu.set_nz(result);
}
