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
use crate::filter_weights::{FilterBounds, FilterWeights};
use crate::math::{HAMMING_FILTER_RADIUS, hamming_filter};

// Pixels are treated as 1x1 unit squares with the color sample at their
// center, so source space spans [0, in_size] and the sample of pixel `i`
// sits at `i + 0.5`. The filter is evaluated at sample centers, not
// integrated over pixel area.

/// Builds the weight table for one axis.
///
/// `align` must be a power of two (1 for the scalar path, 4 for the SSE
/// path). Window lengths and the table row width are rounded up to it so
/// vector kernels can consume whole lanes; the padding slots carry the filter
/// tail, which is at or near zero, but they still participate in
/// normalization because the vector path accumulates them unconditionally.
///
/// Callers must keep `align <= in_size`, otherwise edge windows cannot be
/// pushed back inside the image.
pub(crate) fn generate_weights(in_size: usize, out_size: usize, align: usize) -> FilterWeights<f64> {
    let raw_scale = in_size as f64 / out_size as f64;
    // Widen the support only when downsampling, so the kernel doubles as an
    // anti-aliasing low-pass; upsampling keeps the unit radius.
    let filter_scale = raw_scale.max(1.);
    let in_radius = HAMMING_FILTER_RADIUS * filter_scale;
    let stride = ((in_radius * 2.).ceil() as usize).next_multiple_of(align);

    let mut weights = vec![0f64; out_size * stride];
    let mut bounds = vec![FilterBounds::new(0, 0); out_size];

    for (dst_x, (bound, row)) in bounds
        .iter_mut()
        .zip(weights.chunks_exact_mut(stride))
        .enumerate()
    {
        // Where the destination pixel's sample point lands in source space.
        let center = (dst_x as f64 + 0.5) * raw_scale;
        let first = (center - in_radius).max(0.).round() as usize;
        let last = (center + in_radius).min(in_size as f64).round() as usize;
        let len = (last - first).next_multiple_of(align);
        debug_assert!(len <= stride);
        // Push the window back so it does not run past the end of the image.
        let first = if first + len > in_size {
            in_size - len
        } else {
            first
        };

        let mut sum = 0f64;
        for (offset, weight) in row.iter_mut().enumerate() {
            let w = hamming_filter(((first + offset) as f64 - center + 0.5) / filter_scale);
            *weight = w;
            sum += w;
        }

        // The sum can be exactly zero at extreme scale ratios; leave the row
        // zeroed rather than divide, which floors the output sample to black.
        if sum != 0. {
            for weight in row.iter_mut() {
                *weight /= sum;
            }
        }

        *bound = FilterBounds::new(first, len);
    }

    FilterWeights::new(weights, stride, out_size, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::PRECISION;

    fn assert_table_invariants(in_size: usize, out_size: usize, align: usize) {
        let table = generate_weights(in_size, out_size, align);
        assert_eq!(table.aligned_size % align, 0);
        assert_eq!(table.bounds.len(), out_size);
        assert_eq!(table.weights.len(), out_size * table.aligned_size);

        let q = table.numerical_approximation_u16::<PRECISION>();
        let scale = (1i64 << PRECISION) as f64;
        for row in q.weights.chunks_exact(q.aligned_size) {
            let sum: i64 = row.iter().map(|&w| w as i64).sum();
            let normalized = sum as f64 / scale;
            let tolerance = q.aligned_size as f64 / scale;
            assert!(
                sum == 0 || (normalized - 1.).abs() <= tolerance,
                "row sum {normalized} out of tolerance {tolerance}"
            );
        }

        for bound in table.bounds.iter() {
            assert!(bound.size >= 1);
            assert!(bound.size <= table.aligned_size);
            assert!(
                bound.start + bound.size <= in_size,
                "window [{}, {}) escapes input of {}",
                bound.start,
                bound.start + bound.size,
                in_size
            );
        }
    }

    #[test]
    fn normalization_and_containment() {
        assert_table_invariants(100, 37, 4);
        assert_table_invariants(37, 100, 4);
        assert_table_invariants(13, 7, 1);
        assert_table_invariants(7, 13, 1);
        assert_table_invariants(640, 48, 4);
        assert_table_invariants(1, 1, 1);
        assert_table_invariants(2, 9, 1);
        assert_table_invariants(16, 1, 1);
    }

    #[test]
    fn downscale_covers_every_source_sample() {
        for (in_size, out_size, align) in [(100usize, 37usize, 4usize), (64, 9, 4), (11, 4, 1)] {
            let table = generate_weights(in_size, out_size, align);
            let mut covered = vec![false; in_size];
            for bound in table.bounds.iter() {
                for x in bound.start..bound.start + bound.size {
                    covered[x] = true;
                }
            }
            assert!(
                covered.iter().all(|&c| c),
                "{in_size}->{out_size}: some source samples never referenced"
            );
        }
    }

    #[test]
    fn identity_table_is_a_delta() {
        let table = generate_weights(16, 16, 4).numerical_approximation_u16::<PRECISION>();
        for (dst_x, (bound, row)) in table
            .bounds
            .iter()
            .zip(table.weights.chunks_exact(table.aligned_size))
            .enumerate()
        {
            // Exactly one near-unity tap per output sample, aimed at itself.
            let (peak_offset, &peak) = row
                .iter()
                .enumerate()
                .max_by_key(|&(_, &w)| w)
                .unwrap();
            assert_eq!(bound.start + peak_offset, dst_x);
            assert_eq!(peak, (1u16 << PRECISION) - 1);
            let rest: u32 = row.iter().map(|&w| w as u32).sum::<u32>() - peak as u32;
            assert_eq!(rest, 0);
        }
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        // Downscale by 1.3: raw support is ceil(2.6) = 3 samples.
        let scalar = generate_weights(13, 10, 1);
        assert_eq!(scalar.aligned_size, 3);
        let vector = generate_weights(13, 10, 4);
        assert_eq!(vector.aligned_size, 4);
    }
}
