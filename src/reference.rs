//! Reference output builders for the stacked DFT convention.
//!
//! These mirror the transforms in [`crate::dft`] but share no code or trig
//! tables with them: the frequency bins here come from a per-bin complex
//! exponential sum. The test suite uses them as an independent oracle, and
//! also checks that the two complex input encodings (pre-combined complex
//! array vs. interleaved real array) transform identically.

use {
    crate::utils::{split_interleaved, stack_pair_last},
    core::f64::consts::PI,
    ndarray::{ArrayD, Axis, IxDyn},
    num_complex::Complex64,
};

/// DFT of `x` along its last axis at the requested length, returned in the
/// stacked convention (final axis of size 2 pairing real and imaginary parts).
///
/// Panics if the stacked result does not end in an axis of size 2. That is a
/// defect in the builder itself, not a condition a caller can recover from.
pub fn fft_stacked(x: &ArrayD<Complex64>, fft_length: usize) -> ArrayD<f64> {
    let ft = naive_fft(x, fft_length);

    let re = ft.mapv(|c| c.re);
    let im = ft.mapv(|c| c.im);
    let tr = stack_pair_last(re.view(), im.view());

    assert!(
        tr.shape()[tr.ndim() - 1] == 2,
        "unexpected shape {:?}, x.shape={:?} fft_length={}",
        tr.shape(),
        x.shape(),
        fft_length
    );

    tr
}

/// Transforms a real array whose last axis interleaves real and imaginary
/// samples (even indices real, odd imaginary). The even/odd slices are
/// combined into a complex array, the leftover singleton axis is dropped, and
/// the result is handed to [`fft_stacked`].
pub fn interleaved_fft_stacked(x: &ArrayD<f64>, fft_length: usize) -> ArrayD<f64> {
    let (re, im) = split_interleaved(x);

    let last = re.ndim() - 1;
    assert_eq!(
        1,
        re.shape()[last],
        "interleaved axis of shape {:?} does not split into sample pairs",
        x.shape()
    );

    let mut c = re.mapv(|v| Complex64::new(v, 0.0));
    c.zip_mut_with(&im, |a, &b| a.im = b);
    let c = c.index_axis_move(Axis(last), 0);

    fft_stacked(&c, fft_length)
}

/// Rewrites a complex array into the stacked real encoding the transform
/// operations consume. Fixture preparation only; no transform is applied.
pub fn complex_to_stacked(c: &ArrayD<Complex64>) -> ArrayD<f64> {
    let re = c.mapv(|v| v.re);
    let im = c.mapv(|v| v.im);

    stack_pair_last(re.view(), im.view())
}

// Direct DFT along the last axis, truncating or zero-padding the signal to
// the requested length.
fn naive_fft(x: &ArrayD<Complex64>, n: usize) -> ArrayD<Complex64> {
    let last = Axis(x.ndim() - 1);
    let sig = x.len_of(last);
    let take = sig.min(n);

    let mut shape = x.shape().to_vec();
    shape[x.ndim() - 1] = n;
    let mut out = ArrayD::from_elem(IxDyn(&shape), Complex64::new(0.0, 0.0));

    for (src, mut dst) in x.lanes(last).into_iter().zip(out.lanes_mut(last)) {
        for k in 0..n {
            let mut acc = Complex64::new(0.0, 0.0);
            for j in 0..take {
                let theta = -2.0 * PI * ((j * k) as f64) / (n as f64);
                acc += src[j] * Complex64::from_polar(1.0, theta);
            }
            dst[k] = acc;
        }
    }

    out
}
