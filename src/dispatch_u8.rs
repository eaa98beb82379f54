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
use crate::image_store::{Rgba8Surface, Rgba8SurfaceMut};

/// Convolves one RGBA8 row against a horizontal weight table.
pub(crate) type HorizontalHandler = fn(&[u8], &mut [u8], &FilterWeights<u16>);

/// Convolves one output row from a column of source rows:
/// `(dst_width, bounds, src, dst, src_stride, weights)`.
pub(crate) type VerticalHandler = fn(usize, &FilterBounds, &[u8], &mut [u8], usize, &[u16]);

/// Runs the horizontal pass row by row. Source and destination must have the
/// same height; only the width changes.
pub(crate) fn convolve_horizontal_dispatch_u8(
    src: &Rgba8Surface,
    dst: &mut Rgba8SurfaceMut,
    filter_weights: &FilterWeights<u16>,
    dispatcher_row: HorizontalHandler,
) {
    debug_assert_eq!(src.height, dst.height);
    debug_assert_eq!(filter_weights.distinct_elements, dst.width);
    for y in 0..dst.height {
        dispatcher_row(src.row(y), dst.row_mut(y), filter_weights);
    }
}

/// Runs the vertical pass: each output row is a weighted blend of source
/// rows, one weight window per output row.
pub(crate) fn convolve_vertical_dispatch_u8(
    src: &Rgba8Surface,
    dst: &mut Rgba8SurfaceMut,
    filter_weights: &FilterWeights<u16>,
    dispatcher: VerticalHandler,
) {
    debug_assert_eq!(src.width, dst.width);
    debug_assert_eq!(filter_weights.distinct_elements, dst.height);
    let dst_width = dst.width;
    for y in 0..dst.height {
        let bounds = filter_weights.bounds[y];
        let weights =
            &filter_weights.weights[y * filter_weights.aligned_size..][..filter_weights.aligned_size];
        dispatcher(
            dst_width,
            &bounds,
            src.buffer,
            dst.row_mut(y),
            src.stride,
            weights,
        );
    }
}
