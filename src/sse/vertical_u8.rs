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
use crate::filter_weights::FilterBounds;
use crate::fixed_point_vertical::convolve_column_handler_fixed_point;
use crate::image_store::CHANNELS;
use crate::support::PRECISION;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// SSE2 vertical convolution producing one output row, four pixels per
/// iteration. Columns left over after the vector body fall back to the
/// scalar handler.
pub(crate) fn convolve_vertical_rgba_sse(
    dst_width: usize,
    bounds: &FilterBounds,
    src: &[u8],
    dst: &mut [u8],
    src_stride: usize,
    weights: &[u16],
) {
    unsafe {
        convolve_vertical_rgba_sse_impl(dst_width, bounds, src, dst, src_stride, weights);
    }
}

#[target_feature(enable = "sse2")]
unsafe fn convolve_vertical_rgba_sse_impl(
    dst_width: usize,
    bounds: &FilterBounds,
    src: &[u8],
    dst: &mut [u8],
    src_stride: usize,
    weights: &[u16],
) {
    unsafe {
        // Same lane format as the horizontal kernel, but there is no
        // cross-lane fold here, so the rounding seed goes into every lane.
        const ROUNDING: i16 = 1 << 7;
        let vld = _mm_set1_epi16(ROUNDING);
        let ga_mask = _mm_set1_epi32(0xFF00FF00u32 as i32);

        let mut cx = 0usize;
        while cx + 4 <= dst_width {
            let mut rb_sum = vld;
            let mut ga_sum = vld;

            for (i, &k_weight) in weights.iter().take(bounds.size).enumerate() {
                let offset = (bounds.start + i) * src_stride + cx * CHANNELS;
                let pixels =
                    _mm_loadu_si128(src.get_unchecked(offset..).as_ptr() as *const __m128i);
                let w = _mm_set1_epi16((((k_weight as u32) << (16 - PRECISION)) as u16) as i16);

                let rb = _mm_slli_epi16::<8>(pixels);
                let ga = _mm_and_si128(pixels, ga_mask);
                rb_sum = _mm_adds_epu16(rb_sum, _mm_mulhi_epu16(rb, w));
                ga_sum = _mm_adds_epu16(ga_sum, _mm_mulhi_epu16(ga, w));
            }

            let rb = _mm_srli_epi16::<8>(rb_sum);
            let ga = _mm_and_si128(ga_sum, ga_mask);
            _mm_storeu_si128(
                dst.get_unchecked_mut(cx * CHANNELS..).as_mut_ptr() as *mut __m128i,
                _mm_or_si128(rb, ga),
            );

            cx += 4;
        }

        if cx < dst_width {
            convolve_column_handler_fixed_point(
                cx, dst_width, bounds, src, dst, src_stride, weights,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_point_vertical::convolve_vertical_rgba_scalar;
    use crate::weights::generate_weights;

    fn plane(width: usize, height: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..width * height * CHANNELS)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state >> 24) as u8
            })
            .collect()
    }

    #[test]
    fn matches_scalar_reference() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        let width = 16usize;
        let table = generate_weights(16, 6, 1).numerical_approximation_u16::<PRECISION>();
        let src = plane(width, 16, 99);
        let stride = width * CHANNELS;
        for (y, bounds) in table.bounds.iter().enumerate() {
            let weights = &table.weights[y * table.aligned_size..][..table.aligned_size];
            let mut simd = vec![0u8; stride];
            let mut scalar = vec![0u8; stride];
            convolve_vertical_rgba_sse(width, bounds, &src, &mut simd, stride, weights);
            convolve_vertical_rgba_scalar(width, bounds, &src, &mut scalar, stride, weights);
            for (s, v) in scalar.iter().zip(simd.iter()) {
                assert!(
                    (*s as i32 - *v as i32).abs() <= 1,
                    "row {y}: scalar {s} vs simd {v} diverged"
                );
            }
        }
    }

    #[test]
    fn scalar_tail_covers_trailing_columns() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        // Width 6 leaves two columns for the scalar tail.
        let width = 6usize;
        let table = generate_weights(8, 3, 1).numerical_approximation_u16::<PRECISION>();
        let src = plane(width, 8, 3);
        let stride = width * CHANNELS;
        for (y, bounds) in table.bounds.iter().enumerate() {
            let weights = &table.weights[y * table.aligned_size..][..table.aligned_size];
            let mut simd = vec![0u8; stride];
            let mut scalar = vec![0u8; stride];
            convolve_vertical_rgba_sse(width, bounds, &src, &mut simd, stride, weights);
            convolve_vertical_rgba_scalar(width, bounds, &src, &mut scalar, stride, weights);
            for (s, v) in scalar.iter().zip(simd.iter()) {
                assert!((*s as i32 - *v as i32).abs() <= 1);
            }
        }
    }

    #[test]
    fn white_rows_stay_white() {
        if !std::arch::is_x86_feature_detected!("sse2") {
            return;
        }
        let width = 8usize;
        let table = generate_weights(16, 4, 1).numerical_approximation_u16::<PRECISION>();
        let src = vec![255u8; width * 16 * CHANNELS];
        let stride = width * CHANNELS;
        let mut dst = vec![0u8; stride];
        convolve_vertical_rgba_sse(
            width,
            &table.bounds[1],
            &src,
            &mut dst,
            stride,
            &table.weights[table.aligned_size..][..table.aligned_size],
        );
        assert!(dst.iter().all(|&c| c == 255), "{dst:?}");
    }
}
