//! Category 4 — register ALU operations (AND/EOR/shifts/ADC/SBC/ROR/TST/
//! NEG/CMP/CMN/ORR/MUL/BIC/MVN).

use super::{reg3, Cpu};

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let op = (half_word >> 6) & 0b1111;
    let rs = reg3(half_word, 3);
    let rd = reg3(half_word, 0);
    let rd_val = cpu.reg(rd);
    let rs_val = cpu.reg(rs);

    match op {
        0 => {
            let result = rd_val & rs_val;
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        1 => {
            let result = rd_val ^ rs_val;
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        2 => shift(cpu, rd, rd_val, rs_val, shift_lsl),
        3 => shift(cpu, rd, rd_val, rs_val, shift_lsr),
        4 => shift(cpu, rd, rd_val, rs_val, shift_asr),
        5 => {
            let (result, carry, overflow) = adc(rd_val, rs_val, cpu.c());
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
            cpu.set_flag(crate::cpu::FLAG_C, carry);
            cpu.set_flag(crate::cpu::FLAG_V, overflow);
        }
        6 => {
            let (result, carry, overflow) = adc(rd_val, !rs_val, cpu.c());
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
            cpu.set_flag(crate::cpu::FLAG_C, carry);
            cpu.set_flag(crate::cpu::FLAG_V, overflow);
        }
        7 => shift(cpu, rd, rd_val, rs_val, shift_ror),
        8 => {
            let result = rd_val & rs_val;
            cpu.set_nz(result);
        }
        9 => {
            let result = 0u32.wrapping_sub(rs_val);
            cpu.set_sub_flags(0, rs_val);
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        10 => {
            cpu.set_sub_flags(rd_val, rs_val);
            cpu.set_nz(rd_val.wrapping_sub(rs_val));
        }
        11 => {
            cpu.set_add_flags(rd_val, rs_val);
            cpu.set_nz(rd_val.wrapping_add(rs_val));
        }
        12 => {
            let result = rd_val | rs_val;
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        13 => {
            // MUL's carry/overflow are architecturally unpredictable; left untouched.
            let result = rd_val.wrapping_mul(rs_val);
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        14 => {
            let result = rd_val & !rs_val;
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        15 => {
            let result = !rs_val;
            cpu.set_reg(rd, result);
            cpu.set_nz(result);
        }
        _ => unreachable!("4-bit field"),
    }
}

fn shift(
    cpu: &mut Cpu,
    rd: usize,
    rd_val: u32,
    rs_val: u32,
    f: impl Fn(u32, u32) -> (u32, Option<bool>),
) {
    let (result, carry) = f(rd_val, rs_val);
    cpu.set_reg(rd, result);
    cpu.set_nz(result);
    if let Some(carry) = carry {
        cpu.set_flag(crate::cpu::FLAG_C, carry);
    }
}

/// Register-specified shifts use only the lower 8 bits of Rs as the amount.
/// Unlike the category-1 immediate-shift encoding, an amount of 0 means no
/// shift at all (value and carry both unchanged).
fn shift_lsl(value: u32, rs_val: u32) -> (u32, Option<bool>) {
    let amount = rs_val & 0xFF;
    if amount == 0 {
        (value, None)
    } else if amount < 32 {
        let carry = (value >> (32 - amount)) & 1 != 0;
        (value << amount, Some(carry))
    } else if amount == 32 {
        (0, Some(value & 1 != 0))
    } else {
        (0, Some(false))
    }
}

fn shift_lsr(value: u32, rs_val: u32) -> (u32, Option<bool>) {
    let amount = rs_val & 0xFF;
    if amount == 0 {
        (value, None)
    } else if amount < 32 {
        let carry = (value >> (amount - 1)) & 1 != 0;
        (value >> amount, Some(carry))
    } else if amount == 32 {
        (0, Some((value >> 31) & 1 != 0))
    } else {
        (0, Some(false))
    }
}

fn shift_asr(value: u32, rs_val: u32) -> (u32, Option<bool>) {
    let amount = rs_val & 0xFF;
    if amount == 0 {
        (value, None)
    } else if amount < 32 {
        let carry = (value >> (amount - 1)) & 1 != 0;
        (((value as i32) >> amount) as u32, Some(carry))
    } else {
        let sign = value & 0x8000_0000 != 0;
        (if sign { 0xFFFF_FFFF } else { 0 }, Some(sign))
    }
}

/// ROR by an amount whose low byte is a non-zero multiple of 32 leaves the
/// value unchanged but still updates carry from bit 31 — the ARM ARM
/// behavior the source's literal `Rs.low == 0` check misses.
fn shift_ror(value: u32, rs_val: u32) -> (u32, Option<bool>) {
    let low = rs_val & 0xFF;
    if low == 0 {
        (value, None)
    } else {
        let rotation = low % 32;
        if rotation == 0 {
            (value, Some((value >> 31) & 1 != 0))
        } else {
            let carry = (value >> (rotation - 1)) & 1 != 0;
            (value.rotate_right(rotation), Some(carry))
        }
    }
}

/// Shared add-with-carry-in used by ADC and (via bitwise-NOT operand) SBC,
/// exactly as real ARM hardware derives SBC from the same adder as ADC.
fn adc(a: u32, b: u32, carry_in: bool) -> (u32, bool, bool) {
    let wide = a as u64 + b as u64 + carry_in as u64;
    let result = wide as u32;
    let carry = wide > u32::MAX as u64;
    let signed_wide = (a as i32 as i64) + (b as i32 as i64) + carry_in as i64;
    let overflow = signed_wide != result as i32 as i64;
    (result, carry, overflow)
}
