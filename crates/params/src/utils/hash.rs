//! Constants for hash functions

/// Output size of SM3 in bytes
pub const SM3_OUTPUT_SIZE: usize = 32;

/// Internal block size of SM3 in bytes
pub const SM3_BLOCK_SIZE: usize = 64;

/// Number of expanded message words per SM3 block
pub const SM3_EXPANDED_WORDS: usize = 68;

/// SM3 initial chaining value
pub const SM3_IV: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D, 0xB0FB0E4E,
];

/// SM3 round constant for rounds 0..16
pub const SM3_T_EARLY: u32 = 0x79CC4519;

/// SM3 round constant for rounds 16..64
pub const SM3_T_LATE: u32 = 0x7A879D8A;
