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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug)]
pub struct BufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug)]
pub enum ResampleError {
    ZeroImageDimensions,
    BufferMismatch(BufferMismatch),
    InvalidStride(usize, usize),
    OutOfMemory(usize),
}

impl ResampleError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            ResampleError::ZeroImageDimensions => 1,
            ResampleError::BufferMismatch(_) => 2,
            ResampleError::InvalidStride(_, _) => 3,
            ResampleError::OutOfMemory(_) => 4,
        }
    }
}

impl Display for ResampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            ResampleError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [w({})*h({})*channels({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.channels,
                buffer_mismatch.slice_len,
            )),
            ResampleError::InvalidStride(min_stride, real_stride) => f.write_fmt(format_args!(
                "Stride must be at least {min_stride}, but received {real_stride}",
            )),
            ResampleError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} bytes"
            )),
        }
    }
}

impl Error for ResampleError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::resample_error::ResampleError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
