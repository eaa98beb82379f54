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
#![forbid(unsafe_code)]
use crate::filter_weights::FilterBounds;
use crate::image_store::CHANNELS;
use crate::support::{MAX_ACCUMULATOR, PRECISION, ROUNDING_CONST};

/// Scalar vertical convolution for the columns `x_start..dst_width` of one
/// output row. The SSE kernel delegates its sub-4-column tail here.
pub(crate) fn convolve_column_handler_fixed_point(
    x_start: usize,
    dst_width: usize,
    bounds: &FilterBounds,
    src: &[u8],
    dst: &mut [u8],
    src_stride: usize,
    weights: &[u16],
) {
    for x in x_start..dst_width {
        let px = x * CHANNELS;

        let mut r = ROUNDING_CONST;
        let mut g = ROUNDING_CONST;
        let mut b = ROUNDING_CONST;
        let mut a = ROUNDING_CONST;

        for (i, &k_weight) in weights.iter().take(bounds.size).enumerate() {
            let offset = (bounds.start + i) * src_stride + px;
            let pixel = &src[offset..(offset + CHANNELS)];
            let weight = k_weight as i32;
            r += pixel[0] as i32 * weight;
            g += pixel[1] as i32 * weight;
            b += pixel[2] as i32 * weight;
            a += pixel[3] as i32 * weight;
        }

        let chunk = &mut dst[px..(px + CHANNELS)];
        chunk[0] = (r.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[1] = (g.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[2] = (b.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[3] = (a.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
    }
}

/// Full scalar vertical row handler, signature-compatible with the SSE one.
pub(crate) fn convolve_vertical_rgba_scalar(
    dst_width: usize,
    bounds: &FilterBounds,
    src: &[u8],
    dst: &mut [u8],
    src_stride: usize,
    weights: &[u16],
) {
    convolve_column_handler_fixed_point(0, dst_width, bounds, src, dst, src_stride, weights);
}
