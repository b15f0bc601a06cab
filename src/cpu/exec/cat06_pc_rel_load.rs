//! Category 6 — PC-relative load.

use crate::cpu::Cpu;
use crate::memory_bus::{read_word, HostBus};

pub(crate) fn execute(cpu: &mut Cpu, host: &mut dyn HostBus, half_word: u16) {
    let rd = ((half_word >> 8) & 0b111) as usize;
    let imm8 = (half_word & 0xFF) as u32;

    // cpu.pc() is already the instruction address plus 2 (the fetch loop's
    // own increment); the real machine's "PC reads as instruction+4" pipeline
    // convention falls out of that for free, so no further adjustment here.
    let base = cpu.pc() & !3u32;
    let addr = base.wrapping_add(imm8 << 2);
    let value = read_word(host, addr);
    cpu.set_reg(rd, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_bus::test_support::MockHost;

    #[test]
    fn loads_word_at_aligned_pc_relative_address() {
        let mut cpu = Cpu::new_for_test();
        cpu.set_pc(0x102); // instruction was at 0x100
        let mut host = MockHost::new(0x200);
        // base = (0x102 & !3) = 0x100; + (imm8=1 << 2) = 0x104
        host.mem[0x104..0x108].copy_from_slice(&0xCAFEBABEu32.to_le_bytes());
        // Rd=R2, imm8=1
        execute(&mut cpu, &mut host, 0b01001_010_0000_0001);
        assert_eq!(cpu.reg(2), 0xCAFEBABE);
    }
}
