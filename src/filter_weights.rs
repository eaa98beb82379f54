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
use num_traits::{AsPrimitive, Bounded};

/// One axis' filter table: `distinct_elements` rows of `aligned_size` weights,
/// one row per output sample, plus the source window each row applies to.
#[derive(Debug, Clone)]
pub(crate) struct FilterWeights<T> {
    pub weights: Vec<T>,
    pub bounds: Vec<FilterBounds>,
    /// Uniform row width: the maximum window length rounded up to the SIMD
    /// alignment the table was built for.
    pub aligned_size: usize,
    /// Number of output samples (table rows).
    pub distinct_elements: usize,
}

/// Contiguous span of source samples contributing to one output sample.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct FilterBounds {
    pub start: usize,
    pub size: usize,
}

impl FilterBounds {
    pub(crate) fn new(start: usize, size: usize) -> FilterBounds {
        FilterBounds { start, size }
    }
}

impl<T> FilterWeights<T> {
    pub(crate) fn new(
        weights: Vec<T>,
        aligned_size: usize,
        distinct_elements: usize,
        bounds: Vec<FilterBounds>,
    ) -> FilterWeights<T> {
        FilterWeights::<T> {
            weights,
            bounds,
            aligned_size,
            distinct_elements,
        }
    }
}

impl FilterWeights<f64> {
    pub(crate) fn numerical_approximation_u16<const PRECISION: i32>(&self) -> FilterWeights<u16> {
        self.numerical_approximation::<u16, PRECISION>()
    }

    /// Quantizes the table to fixed point at scale `1 << PRECISION`, clamping
    /// into `[0, (1 << PRECISION) - 1]` and the target type's own bounds.
    pub(crate) fn numerical_approximation<
        J: Clone + Default + Copy + 'static + Bounded + AsPrimitive<f64>,
        const PRECISION: i32,
    >(
        &self,
    ) -> FilterWeights<J>
    where
        f64: AsPrimitive<J>,
    {
        let precision_scale: f64 = (1i64 << PRECISION) as f64;

        let lower_bound = J::min_value().as_().max(0.);
        let upper_bound = J::max_value().as_().min(precision_scale - 1.);

        let output_kernel = self
            .weights
            .iter()
            .map(|&weight| {
                (weight * precision_scale)
                    .round()
                    .min(upper_bound)
                    .max(lower_bound)
                    .as_()
            })
            .collect();

        FilterWeights::new(
            output_kernel,
            self.aligned_size,
            self.distinct_elements,
            self.bounds.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_clamps_to_precision_range() {
        let table = FilterWeights::<f64>::new(
            vec![1.0, 0.5, -0.25, 2.0],
            4,
            1,
            vec![FilterBounds::new(0, 4)],
        );
        let q = table.numerical_approximation_u16::<15>();
        assert_eq!(q.weights, vec![32767, 16384, 0, 32767]);
    }

    #[test]
    fn quantization_rounds_to_nearest() {
        let table = FilterWeights::<f64>::new(
            vec![1.0 / 3.0, 2.0 / 3.0],
            2,
            1,
            vec![FilterBounds::new(0, 2)],
        );
        let q = table.numerical_approximation_u16::<15>();
        assert_eq!(q.weights, vec![10923, 21845]);
    }
}
