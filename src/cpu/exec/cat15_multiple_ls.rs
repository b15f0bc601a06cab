//! Category 15 — STMIA/LDMIA: transfer the registers named in Rlist through
//! Rb, incrementing after each, then write the final address back to Rb.
//!
//! For a store where Rb itself is in Rlist, the value committed to memory
//! for that slot depends on whether Rb is the lowest-numbered register in
//! the list: if so, its original (pre-transfer) value is stored; otherwise
//! the already-advanced (post-transfer) address is stored instead. This is
//! the one case where the two plausible readings genuinely diverge, so it's
//! resolved explicitly rather than left to fall out of loop order.

use crate::cpu::Cpu;
use crate::memory_bus::{read_word, write_word, HostBus};

pub(crate) fn execute(cpu: &mut Cpu, host: &mut dyn HostBus, half_word: u16) {
    let load = (half_word >> 11) & 1 != 0;
    let rb = ((half_word >> 8) & 0b111) as usize;
    let rlist = (half_word & 0xFF) as u8;
    let rb_val = cpu.reg(rb);

    if load {
        let mut addr = rb_val;
        for i in 0..8 {
            if rlist & (1 << i) != 0 {
                cpu.set_reg(i, read_word(host, addr));
                addr = addr.wrapping_add(4);
            }
        }
        if rlist & (1 << rb) == 0 {
            cpu.set_reg(rb, addr);
        }
    } else {
        let lowest = rlist.trailing_zeros();
        let final_addr = rb_val.wrapping_add(4 * rlist.count_ones());
        let mut addr = rb_val;
        for i in 0..8 {
            if rlist & (1 << i) != 0 {
                let value = if i == rb {
                    if i as u32 == lowest {
                        rb_val
                    } else {
                        final_addr
                    }
                } else {
                    cpu.reg(i)
                };
                write_word(host, addr, value);
                addr = addr.wrapping_add(4);
            }
        }
        cpu.set_reg(rb, addr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_bus::test_support::MockHost;

    #[test]
    fn stmia_writes_back_incremented_base() {
        let mut cpu = Cpu::new_for_test();
        let mut host = MockHost::new(0x100);
        cpu.set_reg(1, 0x10); // Rb
        cpu.set_reg(2, 0xAAAA_AAAA);
        cpu.set_reg(3, 0xBBBB_BBBB);
        // L=0, Rb=R1, Rlist = {R2,R3}
        execute(&mut cpu, &mut host, 0b1100_0_001_0000_1100);
        assert_eq!(read_word(&mut host, 0x10), 0xAAAA_AAAA);
        assert_eq!(read_word(&mut host, 0x14), 0xBBBB_BBBB);
        assert_eq!(cpu.reg(1), 0x18);
    }

    #[test]
    fn ldmia_loaded_value_for_base_register_overrides_writeback() {
        let mut cpu = Cpu::new_for_test();
        let mut host = MockHost::new(0x100);
        write_word(&mut host, 0x10, 0x1234);
        write_word(&mut host, 0x14, 0x5678);
        cpu.set_reg(0, 0x10); // Rb = R0, also in Rlist
        // L=1, Rb=R0, Rlist = {R0,R1}
        execute(&mut cpu, &mut host, 0b1100_1_000_0000_0011);
        assert_eq!(cpu.reg(0), 0x1234);
        assert_eq!(cpu.reg(1), 0x5678);
    }

    #[test]
    fn stmia_stores_original_value_when_base_is_lowest_register() {
        let mut cpu = Cpu::new_for_test();
        let mut host = MockHost::new(0x100);
        cpu.set_reg(1, 0x10); // Rb = R1, also lowest in Rlist
        cpu.set_reg(2, 0xCCCC_CCCC);
        // L=0, Rb=R1, Rlist = {R1,R2}
        execute(&mut cpu, &mut host, 0b1100_0_001_0000_0110);
        assert_eq!(read_word(&mut host, 0x10), 0x10);
        assert_eq!(read_word(&mut host, 0x14), 0xCCCC_CCCC);
    }
}
