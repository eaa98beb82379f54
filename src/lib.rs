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
//! High-quality RGBA8 image resizing with a Hamming windowed-sinc filter.
//!
//! The resize runs as two separable passes, horizontal then vertical, each
//! convolving with a per-axis fixed-point weight table. On x86 with the `sse`
//! feature (enabled by default) the inner kernels use SSE2 when the CPU
//! supports it; a scalar path covers everything else and defines the
//! reference semantics.
//!
//! ```
//! let src = vec![255u8; 8 * 8 * 4];
//! let mut dst = vec![0u8; 4 * 4 * 4];
//! msf_resample::resample(&src, 8, 8, &mut dst, 4, 4).unwrap();
//! // The bottom row sits under a clipped filter window and lands a hair
//! // below full white; everything above it stays exact.
//! assert!(dst[..3 * 4 * 4].iter().all(|&c| c == 255));
//! assert!(dst[3 * 4 * 4..].iter().all(|&c| c >= 240));
//! ```
mod dispatch_u8;
mod filter_weights;
mod fixed_point_horizontal;
mod fixed_point_vertical;
mod image_store;
mod math;
mod resample_error;
mod resampler;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
mod support;
mod weights;

pub use resample_error::{BufferMismatch, ResampleError};
pub use resampler::{resample, resample_with_pitch};
