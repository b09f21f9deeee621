mod powi;

pub use powi::{powi, powi_f32};

// ========= bit helpers =========

#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}
#[inline(always)]
fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}

#[inline(always)]
fn is_nan_bits(u: u64) -> bool {
    (u & 0x7ff0_0000_0000_0000u64) == 0x7ff0_0000_0000_0000u64
        && (u & 0x000f_ffff_ffff_ffffu64) != 0
}
#[inline(always)]
fn is_nan_bits_f32(u: u32) -> bool {
    (u & 0x7f80_0000u32) == 0x7f80_0000u32 && (u & 0x007f_ffffu32) != 0
}
