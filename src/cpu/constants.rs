// Flag Positions (bit index in the condition word)
pub const FLAG_N_POS: u32 = 31; // Negative flag
pub const FLAG_Z_POS: u32 = 30; // Zero flag
pub const FLAG_C_POS: u32 = 29; // Carry flag
pub const FLAG_V_POS: u32 = 28; // Overflow flag

// Flag Masks (bit masks for the condition word)
pub const FLAG_N: u32 = 1 << FLAG_N_POS;
pub const FLAG_Z: u32 = 1 << FLAG_Z_POS;
pub const FLAG_C: u32 = 1 << FLAG_C_POS;
pub const FLAG_V: u32 = 1 << FLAG_V_POS;

// Register aliases (indices into the 16-slot register bank)
pub const SP: usize = 13;
pub const LR: usize = 14;
pub const PC: usize = 15;
