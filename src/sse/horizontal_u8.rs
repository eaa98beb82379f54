/*
 * Copyright (c) the msf-resample contributors. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::filter_weights::FilterWeights;
use crate::image_store::CHANNELS;
use crate::sse::shuffle;
use crate::support::PRECISION;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// SSE2 horizontal convolution over one RGBA8 row.
///
/// Requires a weight table built with alignment 4: every window length must
/// be a non-zero multiple of 4 so the 4-pixel loads stay inside the row.
pub(crate) fn convolve_horizontal_rgba_sse(
    src: &[u8],
    dst: &mut [u8],
    filter_weights: &FilterWeights<u16>,
) {
    unsafe {
        convolve_horizontal_rgba_sse_impl(src, dst, filter_weights);
    }
}

#[target_feature(enable = "sse2")]
unsafe fn convolve_horizontal_rgba_sse_impl(
    src: &[u8],
    dst: &mut [u8],
    filter_weights: &FilterWeights<u16>,
) {
    unsafe {
        // Lane format: pixels are widened to `sample * 2^8` (red/blue via a
        // left shift, green/alpha via masking the high bytes) and weights to
        // `weight * 2^(16 - PRECISION)`, so `_mm_mulhi_epu16` leaves
        // `sample * weight >> 7` in each 16-bit lane and the final narrowing
        // shift is 8. Half of that narrowing LSB is `1 << 7`; it is seeded
        // only in pixel 0's lanes, the ones that survive both cross-lane
        // folds, so it contributes exactly once.
        const ROUNDING: i16 = 1 << 7;
        let vld = _mm_setr_epi16(ROUNDING, ROUNDING, 0, 0, 0, 0, 0, 0);
        let ga_mask = _mm_set1_epi32(0xFF00FF00u32 as i32);

        for ((chunk, &bounds), weights) in dst
            .chunks_exact_mut(CHANNELS)
            .zip(filter_weights.bounds.iter())
            .zip(
                filter_weights
                    .weights
                    .chunks_exact(filter_weights.aligned_size),
            )
        {
            debug_assert!(bounds.size >= 4 && bounds.size % 4 == 0);

            let mut rb_sum = vld;
            let mut ga_sum = vld;

            let mut jx = 0usize;
            while jx + 4 <= bounds.size {
                let px = (bounds.start + jx) * CHANNELS;
                let pixels =
                    _mm_loadu_si128(src.get_unchecked(px..).as_ptr() as *const __m128i);
                let ww = _mm_loadl_epi64(
                    weights.get_unchecked(jx..).as_ptr() as *const __m128i
                );
                let w = _mm_slli_epi16::<{ 16 - PRECISION }>(_mm_unpacklo_epi16(ww, ww));

                let rb = _mm_slli_epi16::<8>(pixels);
                let ga = _mm_and_si128(pixels, ga_mask);
                rb_sum = _mm_adds_epu16(rb_sum, _mm_mulhi_epu16(rb, w));
                ga_sum = _mm_adds_epu16(ga_sum, _mm_mulhi_epu16(ga, w));

                jx += 4;
            }

            // Fold the four per-pixel partial sums down to one rb and one ga
            // pair in element 0.
            let fold_lo = _mm_castps_si128(_mm_shuffle_ps::<{ shuffle(1, 0, 1, 0) }>(
                _mm_castsi128_ps(rb_sum),
                _mm_castsi128_ps(ga_sum),
            ));
            let fold_hi = _mm_castps_si128(_mm_shuffle_ps::<{ shuffle(3, 2, 3, 2) }>(
                _mm_castsi128_ps(rb_sum),
                _mm_castsi128_ps(ga_sum),
            ));
            let folded = _mm_adds_epu16(fold_lo, fold_hi);
            let rbga = _mm_adds_epu16(
                _mm_shuffle_epi32::<{ shuffle(0, 0, 2, 0) }>(folded),
                _mm_shuffle_epi32::<{ shuffle(0, 0, 3, 1) }>(folded),
            );

            let rb = _mm_srli_epi16::<8>(rbga);
            let ga = _mm_and_si128(_mm_srli_epi64::<32>(rbga), ga_mask);
            let pixel = _mm_cvtsi128_si32(_mm_or_si128(rb, ga));
            (chunk.as_mut_ptr() as *mut i32).write_unaligned(pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point_horizontal::convolve_row_handler_fixed_point;
    use crate::weights::generate_weights;

    fn row(width: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..width * CHANNELS)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state >> 24) as u8
            })
            .collect()
    }

    #[test]
    fn matches_scalar_reference_downscale() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        let table = generate_weights(16, 8, 4).numerical_approximation_u16::<PRECISION>();
        let src = row(16, 7);
        let mut simd = vec![0u8; 8 * CHANNELS];
        let mut scalar = vec![0u8; 8 * CHANNELS];
        convolve_horizontal_rgba_sse(&src, &mut simd, &table);
        convolve_row_handler_fixed_point(&src, &mut scalar, &table);
        for (s, v) in scalar.iter().zip(simd.iter()) {
            assert!(
                (*s as i32 - *v as i32).abs() <= 1,
                "scalar {s} vs simd {v} diverged"
            );
        }
    }

    #[test]
    fn matches_scalar_reference_upscale() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        let table = generate_weights(6, 17, 4).numerical_approximation_u16::<PRECISION>();
        let src = row(6, 42);
        let mut simd = vec![0u8; 17 * CHANNELS];
        let mut scalar = vec![0u8; 17 * CHANNELS];
        convolve_horizontal_rgba_sse(&src, &mut simd, &table);
        convolve_row_handler_fixed_point(&src, &mut scalar, &table);
        for (s, v) in scalar.iter().zip(simd.iter()) {
            assert!((*s as i32 - *v as i32).abs() <= 1);
        }
    }

    #[test]
    fn white_row_stays_white() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        let table = generate_weights(32, 8, 4).numerical_approximation_u16::<PRECISION>();
        let src = vec![255u8; 32 * CHANNELS];
        let mut dst = vec![0u8; 8 * CHANNELS];
        convolve_horizontal_rgba_sse(&src, &mut dst, &table);
        assert!(dst.iter().all(|&c| c == 255), "{dst:?}");
    }
}
