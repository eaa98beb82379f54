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
use crate::dispatch_u8::{
    HorizontalHandler, VerticalHandler, convolve_horizontal_dispatch_u8,
    convolve_vertical_dispatch_u8,
};
use crate::fixed_point_horizontal::convolve_row_handler_fixed_point;
use crate::fixed_point_vertical::convolve_vertical_rgba_scalar;
use crate::image_store::{CHANNELS, Rgba8Surface, Rgba8SurfaceMut};
use crate::resample_error::{ResampleError, try_vec};
use crate::support::PRECISION;
use crate::weights::generate_weights;

fn select_row_handler(_align: usize) -> HorizontalHandler {
    let mut _dispatcher: HorizontalHandler = convolve_row_handler_fixed_point;
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        // The vector kernel needs every window length to be a multiple of 4,
        // which only tables built with alignment 4 guarantee.
        if _align == 4 && std::arch::is_x86_feature_detected!("sse2") {
            _dispatcher = crate::sse::convolve_horizontal_rgba_sse;
        }
    }
    _dispatcher
}

fn select_column_handler(_dst_width: usize) -> VerticalHandler {
    let mut _dispatcher: VerticalHandler = convolve_vertical_rgba_scalar;
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if _dst_width >= 4 && std::arch::is_x86_feature_detected!("sse2") {
            _dispatcher = crate::sse::convolve_vertical_rgba_sse;
        }
    }
    _dispatcher
}

fn resample_impl(src: &Rgba8Surface, dst: &mut Rgba8SurfaceMut) -> Result<(), ResampleError> {
    // 4-wide windows would reach past rows narrower than 4 pixels, so those
    // fall back to the unaligned table and the scalar row kernel.
    let horizontal_align = if src.width < 4 || dst.width < 4 { 1 } else { 4 };
    let horizontal_weights = generate_weights(src.width, dst.width, horizontal_align)
        .numerical_approximation_u16::<PRECISION>();

    let transient_stride = dst.width * CHANNELS;
    let mut transient = try_vec![0u8; transient_stride * src.height];
    let mut transient_store =
        Rgba8SurfaceMut::from_slice(&mut transient, dst.width, src.height, transient_stride)?;
    convolve_horizontal_dispatch_u8(
        src,
        &mut transient_store,
        &horizontal_weights,
        select_row_handler(horizontal_align),
    );

    let vertical_weights =
        generate_weights(src.height, dst.height, 1).numerical_approximation_u16::<PRECISION>();
    let transient_store =
        Rgba8Surface::from_slice(&transient, dst.width, src.height, transient_stride)?;
    convolve_vertical_dispatch_u8(
        &transient_store,
        dst,
        &vertical_weights,
        select_column_handler(dst.width),
    );
    Ok(())
}

/// Resizes a packed RGBA8 image into a packed RGBA8 destination.
///
/// Both buffers are tightly packed: each row is exactly `width * 4` bytes.
/// See [`resample_with_pitch`] for images embedded in larger buffers.
pub fn resample(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
) -> Result<(), ResampleError> {
    resample_with_pitch(
        src, src_width, src_height, src_width, dst, dst_width, dst_height, dst_width,
    )
}

/// Resizes an RGBA8 image whose rows are `pitch` pixels apart.
///
/// Pitches are measured in pixels, not bytes, and must be at least the
/// corresponding width. Pixels between `width` and `pitch` are neither read
/// nor written, which lets both images live inside sub-rectangles of larger
/// surfaces.
#[allow(clippy::too_many_arguments)]
pub fn resample_with_pitch(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    src_pitch: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
    dst_pitch: usize,
) -> Result<(), ResampleError> {
    let src_store = Rgba8Surface::from_slice(src, src_width, src_height, src_pitch * CHANNELS)?;
    let mut dst_store =
        Rgba8SurfaceMut::from_slice(dst, dst_width, dst_height, dst_pitch * CHANNELS)?;
    resample_impl(&src_store, &mut dst_store)
}
