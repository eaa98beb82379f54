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
use crate::resample_error::{BufferMismatch, ResampleError};

/// Bytes per packed RGBA8 pixel.
pub(crate) const CHANNELS: usize = 4;

fn check_layout(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), ResampleError> {
    if width == 0 || height == 0 {
        return Err(ResampleError::ZeroImageDimensions);
    }
    if stride < width * CHANNELS {
        return Err(ResampleError::InvalidStride(width * CHANNELS, stride));
    }
    // The last row only needs to reach the visible width, not the full stride.
    let expected = (height - 1) * stride + width * CHANNELS;
    if len < expected {
        return Err(ResampleError::BufferMismatch(BufferMismatch {
            expected,
            width,
            height,
            channels: CHANNELS,
            slice_len: len,
        }));
    }
    Ok(())
}

/// Borrowed, read-only RGBA8 surface. `stride` is the row pitch in u8
/// elements; rows beyond `width * CHANNELS` bytes are never read.
pub(crate) struct Rgba8Surface<'a> {
    pub(crate) buffer: &'a [u8],
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) stride: usize,
}

impl<'a> Rgba8Surface<'a> {
    pub(crate) fn from_slice(
        buffer: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Rgba8Surface<'a>, ResampleError> {
        check_layout(buffer.len(), width, height, stride)?;
        Ok(Rgba8Surface {
            buffer,
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        &self.buffer[y * self.stride..][..self.width * CHANNELS]
    }
}

/// Borrowed, writable RGBA8 surface.
pub(crate) struct Rgba8SurfaceMut<'a> {
    pub(crate) buffer: &'a mut [u8],
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) stride: usize,
}

impl<'a> Rgba8SurfaceMut<'a> {
    pub(crate) fn from_slice(
        buffer: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Rgba8SurfaceMut<'a>, ResampleError> {
        check_layout(buffer.len(), width, height, stride)?;
        Ok(Rgba8SurfaceMut {
            buffer,
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.buffer[y * self.stride..][..self.width * CHANNELS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let data = [0u8; 16];
        assert!(matches!(
            Rgba8Surface::from_slice(&data, 0, 2, 8),
            Err(ResampleError::ZeroImageDimensions)
        ));
    }

    #[test]
    fn rejects_stride_below_row_width() {
        let data = [0u8; 64];
        assert!(matches!(
            Rgba8Surface::from_slice(&data, 4, 2, 12),
            Err(ResampleError::InvalidStride(16, 12))
        ));
    }

    #[test]
    fn accepts_tight_last_row() {
        // 2 rows, stride 24, last row only spans the visible 16 bytes.
        let data = [0u8; 40];
        assert!(Rgba8Surface::from_slice(&data, 4, 2, 24).is_ok());
        let short = [0u8; 39];
        assert!(matches!(
            Rgba8Surface::from_slice(&short, 4, 2, 24),
            Err(ResampleError::BufferMismatch(_))
        ));
    }
}
