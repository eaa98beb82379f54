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
use pxfm::{f_cospi, f_sincpi};

/// Support radius of the Hamming-windowed sinc, in filter-scale units.
/// The kernel is defined to be zero at and beyond this distance.
pub(crate) const HAMMING_FILTER_RADIUS: f64 = 1.0;

/// Hamming-windowed sinc: `sin(pi*x)/(pi*x) * (0.54 + 0.46*cos(pi*x))`.
///
/// The argument is a normalized distance: callers divide the physical
/// source-space distance by the filter scale first. Symmetric, `1.0` at zero,
/// zero outside the support radius.
#[inline]
pub(crate) fn hamming_filter(x: f64) -> f64 {
    let x = x.abs();
    if x == 0. {
        1.
    } else if x >= HAMMING_FILTER_RADIUS {
        0.
    } else {
        f_sincpi(x) * (0.54 + 0.46 * f_cospi(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_at_center() {
        assert_eq!(hamming_filter(0.), 1.);
    }

    #[test]
    fn zero_outside_support() {
        assert_eq!(hamming_filter(1.), 0.);
        assert_eq!(hamming_filter(-1.), 0.);
        assert_eq!(hamming_filter(2.5), 0.);
    }

    #[test]
    fn symmetric() {
        for i in 1..10 {
            let x = i as f64 / 10.;
            assert_eq!(hamming_filter(x), hamming_filter(-x));
        }
    }

    #[test]
    fn midpoint_value() {
        // sin(pi/2)/(pi/2) * (0.54 + 0.46*cos(pi/2)) = (2/pi) * 0.54
        let expected = 2. / std::f64::consts::PI * 0.54;
        assert!((hamming_filter(0.5) - expected).abs() < 1e-12);
    }
}
