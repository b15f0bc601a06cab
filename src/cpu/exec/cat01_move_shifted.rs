//! Category 1 — move shifted register (LSL/LSR/ASR by a 5-bit immediate).

use super::{reg3, Cpu};
use crate::cpu::FLAG_C;

pub(crate) fn execute(cpu: &mut Cpu, half_word: u16) {
    let op = (half_word >> 11) & 0b11;
    let offset5 = ((half_word >> 6) & 0b1_1111) as u32;
    let rs = reg3(half_word, 3);
    let rd = reg3(half_word, 0);
    let value = cpu.reg(rs);

    let (result, carry) = match op {
        0 => lsl(value, offset5),
        1 => lsr(value, offset5),
        2 => asr(value, offset5),
        _ => {
            // op == 3 is reserved.
            cpu.set_finished(true);
            return;
        }
    };

    cpu.set_reg(rd, result);
    cpu.set_nz(result);
    if let Some(carry) = carry {
        cpu.set_flag(FLAG_C, carry);
    }
}

fn lsl(value: u32, offset5: u32) -> (u32, Option<bool>) {
    if offset5 == 0 {
        (value, None)
    } else {
        let carry = (value >> (32 - offset5)) & 1 != 0;
        (value << offset5, Some(carry))
    }
}

fn lsr(value: u32, offset5: u32) -> (u32, Option<bool>) {
    let shift = if offset5 == 0 { 32 } else { offset5 };
    let result = if shift >= 32 { 0 } else { value >> shift };
    let carry = (value >> (shift - 1)) & 1 != 0;
    (result, Some(carry))
}

fn asr(value: u32, offset5: u32) -> (u32, Option<bool>) {
    let shift = if offset5 == 0 { 32 } else { offset5 };
    let result = if shift >= 32 {
        if value & 0x8000_0000 != 0 {
            0xFFFF_FFFF
        } else {
            0
        }
    } else {
        ((value as i32) >> shift) as u32
    };
    let carry = (value >> (shift - 1)) & 1 != 0;
    (result, Some(carry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu_with(rs_value: u32) -> Cpu {
        let mut cpu = Cpu::new_for_test();
        cpu.set_reg(0, rs_value);
        cpu
    }

    #[test]
    fn lsl_by_zero_does_not_touch_carry() {
        let mut cpu = cpu_with(0x1);
        cpu.set_flag(FLAG_C, true);
        // op=0 (LSL), offset5=0, Rs=R0, Rd=R1
        execute(&mut cpu, 0b000_00_00000_000_001);
        assert!(cpu.c());
        assert_eq!(cpu.reg(1), 0x1);
    }

    #[test]
    fn scenario_2_lsl_carry() {
        let mut cpu = cpu_with(0x8000_0000);
        // op=0 (LSL), offset5=1, Rs=R0, Rd=R1
        execute(&mut cpu, 0b000_00_00001_000_001);
        assert_eq!(cpu.reg(1), 0);
        assert!(cpu.z());
        assert!(!cpu.n());
        assert!(cpu.c());
    }

    #[test]
    fn lsr_encoded_zero_shifts_by_32() {
        let mut cpu = cpu_with(0x8000_0001);
        // op=1 (LSR), offset5=0, Rs=R0, Rd=R1
        execute(&mut cpu, 0b000_01_00000_000_001);
        assert_eq!(cpu.reg(1), 0);
        assert!(cpu.c());
    }

    #[test]
    fn asr_sign_propagates_on_shift_of_32() {
        let mut cpu = cpu_with(0x8000_0000);
        // op=2 (ASR), offset5=0, Rs=R0, Rd=R1
        execute(&mut cpu, 0b000_10_00000_000_001);
        assert_eq!(cpu.reg(1), 0xFFFF_FFFF);
        assert!(cpu.c());
    }
}
