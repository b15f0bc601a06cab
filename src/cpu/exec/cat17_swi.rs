//! Category 17 — software interrupt. Latches the return address into LR
//! and hands control to the host.

use crate::cpu::Cpu;
use crate::memory_bus::HostBus;

pub(crate) fn execute(cpu: &mut Cpu, host: &mut dyn HostBus, half_word: u16) {
    let number = (half_word & 0xFF) as u8;
    cpu.set_lr(cpu.pc());
    host.software_interrupt(cpu, number);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_bus::test_support::MockHost;

    #[test]
    fn latches_return_address_and_forwards_to_host() {
        let mut cpu = Cpu::new_for_test();
        cpu.set_pc(0x202);
        let mut host = MockHost::new(0x10);
        execute(&mut cpu, &mut host, 0b1101_1111_0000_0111);
        assert_eq!(cpu.lr(), 0x202);
        assert_eq!(host.last_swi, Some(7));
    }
}
