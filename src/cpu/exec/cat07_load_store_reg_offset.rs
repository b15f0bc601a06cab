//! Category 7 — load/store with a register offset (word or byte).

use super::reg3;
use crate::cpu::Cpu;
use crate::memory_bus::{read_word, write_word, HostBus};

pub(crate) fn execute(cpu: &mut Cpu, host: &mut dyn HostBus, half_word: u16) {
    let load = (half_word >> 11) & 1 != 0;
    let byte = (half_word >> 10) & 1 != 0;
    let ro = reg3(half_word, 6);
    let rb = reg3(half_word, 3);
    let rd = reg3(half_word, 0);
    let addr = cpu.reg(rb).wrapping_add(cpu.reg(ro));

    if load {
        let value = if byte {
            host.read_byte(addr) as u32
        } else {
            read_word(host, addr)
        };
        cpu.set_reg(rd, value);
    } else if byte {
        host.write_byte(addr, cpu.reg(rd) as u8);
    } else {
        write_word(host, addr, cpu.reg(rd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_bus::test_support::MockHost;

    #[test]
    fn stores_and_loads_word_at_register_offset() {
        let mut cpu = Cpu::new_for_test();
        let mut host = MockHost::new(0x100);
        cpu.set_reg(1, 0x10); // Rb
        cpu.set_reg(2, 0x4); // Ro
        cpu.set_reg(3, 0xDEAD_BEEF); // Rd for store

        // L=0, B=0, Ro=R2, Rb=R1, Rd=R3
        execute(&mut cpu, &mut host, 0b0101_0_0_0_010_001_011);
        assert_eq!(read_word(&mut host, 0x14), 0xDEAD_BEEF);

        // L=1, B=0, Ro=R2, Rb=R1, Rd=R4
        execute(&mut cpu, &mut host, 0b0101_1_0_0_010_001_100);
        assert_eq!(cpu.reg(4), 0xDEAD_BEEF);
    }

    #[test]
    fn byte_store_only_touches_one_byte() {
        let mut cpu = Cpu::new_for_test();
        let mut host = MockHost::new(0x100);
        host.mem[0x10..0x14].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        cpu.set_reg(1, 0x10);
        cpu.set_reg(2, 0);
        cpu.set_reg(3, 0xAB);
        // L=0, B=1, Ro=R2, Rb=R1, Rd=R3
        execute(&mut cpu, &mut host, 0b0101_0_1_0_010_001_011);
        assert_eq!(host.mem[0x10], 0xAB);
        assert_eq!(host.mem[0x11], 0xFF);
    }
}
