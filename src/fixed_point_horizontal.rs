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
use crate::filter_weights::FilterWeights;
use crate::image_store::CHANNELS;
use crate::support::{MAX_ACCUMULATOR, PRECISION, ROUNDING_CONST};

/// Scalar horizontal convolution over one RGBA8 row. This is the reference
/// semantics the vector kernels must agree with to within one step per
/// channel.
pub(crate) fn convolve_row_handler_fixed_point(
    src: &[u8],
    dst: &mut [u8],
    filter_weights: &FilterWeights<u16>,
) {
    for ((chunk, &bounds), weights) in dst
        .chunks_exact_mut(CHANNELS)
        .zip(filter_weights.bounds.iter())
        .zip(
            filter_weights
                .weights
                .chunks_exact(filter_weights.aligned_size),
        )
    {
        let mut r = ROUNDING_CONST;
        let mut g = ROUNDING_CONST;
        let mut b = ROUNDING_CONST;
        let mut a = ROUNDING_CONST;

        let px = bounds.start * CHANNELS;
        let window = &src[px..(px + bounds.size * CHANNELS)];
        for (&k_weight, pixel) in weights
            .iter()
            .zip(window.chunks_exact(CHANNELS))
            .take(bounds.size)
        {
            let weight = k_weight as i32;
            r += pixel[0] as i32 * weight;
            g += pixel[1] as i32 * weight;
            b += pixel[2] as i32 * weight;
            a += pixel[3] as i32 * weight;
        }

        chunk[0] = (r.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[1] = (g.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[2] = (b.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
        chunk[3] = (a.min(MAX_ACCUMULATOR) >> PRECISION) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_weights::FilterBounds;

    #[test]
    fn delta_weight_copies_the_pixel() {
        let src = [10u8, 20, 30, 40, 50, 60, 70, 80];
        let mut dst = [0u8; 4];
        let table = FilterWeights::new(
            vec![0u16, (1 << PRECISION) - 1],
            2,
            1,
            vec![FilterBounds::new(0, 2)],
        );
        convolve_row_handler_fixed_point(&src, &mut dst, &table);
        assert_eq!(dst, [50, 60, 70, 80]);
    }

    #[test]
    fn equal_weights_average() {
        let src = [0u8, 0, 0, 0, 100, 200, 50, 255];
        let mut dst = [0u8; 4];
        let half = (1u16 << PRECISION) / 2;
        let table = FilterWeights::new(vec![half, half], 2, 1, vec![FilterBounds::new(0, 2)]);
        convolve_row_handler_fixed_point(&src, &mut dst, &table);
        assert_eq!(dst, [50, 100, 25, 128]);
    }

    #[test]
    fn oversized_weight_sum_saturates() {
        let src = [255u8; 8];
        let mut dst = [0u8; 4];
        let max = (1u16 << PRECISION) - 1;
        let table = FilterWeights::new(vec![max, max], 2, 1, vec![FilterBounds::new(0, 2)]);
        convolve_row_handler_fixed_point(&src, &mut dst, &table);
        assert_eq!(dst, [255; 4]);
    }
}
