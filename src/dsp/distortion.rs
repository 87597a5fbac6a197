//! Output clipping
//!
//! The mixer sums up to fourteen voices into one channel, so the sum can
//! exceed the [-1, 1] range the output stage expects. Two transfer
//! functions keep it in range.
//!
//! Soft Clip:
//!   f(x) = x / (1 + |x|)
//!   - Odd, strictly monotonic, bounded to (-1, 1)
//!   - Nearly transparent for small signals: f(0.05) ≈ 0.0476
//!   - No attack/release, so no pumping
//!
//! Hard Clip:
//!   f(x) = clamp(x, -threshold, threshold)
//!   - Used only as the final guard before integer conversion

/// Soft clipping using x / (1 + |x|) transfer function.
#[inline]
pub fn soft_clip(sample: f32) -> f32 {
    sample / (1.0 + sample.abs())
}

/// Hard clipping - simply clamps the signal at a threshold.
#[inline]
pub fn hard_clip(sample: f32, threshold: f32) -> f32 {
    sample.clamp(-threshold, threshold)
}

/// Apply soft clipping to an entire buffer in place.
pub fn soft_clip_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = soft_clip(*sample);
    }
}
