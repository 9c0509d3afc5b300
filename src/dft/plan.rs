//! Transform kernel working on flat slices of packed vectors.

use core::f64::consts::PI;

/// Precomputed state for transforms of one fixed length.
///
/// The trig array holds cosine values in the first half and negated sine
/// values in the second half, both sampled at multiples of 2*pi/n. It must be
/// kept for as long as transforms of this length are performed; building a new
/// plan per call is only sensible for short lengths.
#[derive(Debug, PartialEq, Clone)]
pub struct DftPlan {
    n: usize,
    trig: Vec<f64>,
}

impl DftPlan {
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "transform length must be at least 1");

        let mut trig = vec![0.0; 2 * n];
        let dtheta = 2.0 * PI / (n as f64);
        for k in 0..n {
            let (s, c) = (dtheta * (k as f64)).sin_cos();
            trig[k] = c;
            trig[k + n] = -s;
        }

        Self { n, trig }
    }

    /// Forward transform of `m` packed vectors of length `n`.
    ///
    /// Input and output are split into real and imaginary slices of length
    /// `m * n`, vectors stored contiguously. For a purely real signal pass an
    /// all-zero imaginary slice.
    pub fn forward(
        &self,
        m: usize,
        re: &[f64],
        im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
    ) {
        self.transform(m, re, im, out_re, out_im, 1.0, 1.0);
    }

    /// Inverse transform of `m` packed vectors of length `n`, scaled by `1/n`
    /// so that `inverse` undoes `forward`.
    pub fn inverse(
        &self,
        m: usize,
        re: &[f64],
        im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
    ) {
        self.transform(m, re, im, out_re, out_im, -1.0, 1.0 / (self.n as f64));
    }

    // Direct summation against the trig table, indexed (j * k) mod n. The
    // lengths exercised by the stacked-output operation are single digits, so
    // no radix decomposition is attempted.
    fn transform(
        &self,
        m: usize,
        re: &[f64],
        im: &[f64],
        out_re: &mut [f64],
        out_im: &mut [f64],
        sign: f64,
        scale: f64,
    ) {
        let n = self.n;

        assert_eq!(m * n, re.len());
        assert_eq!(m * n, im.len());
        assert_eq!(m * n, out_re.len());
        assert_eq!(m * n, out_im.len());

        for r in 0..m {
            let base = r * n;
            for k in 0..n {
                let mut sum_re = 0.0;
                let mut sum_im = 0.0;
                for j in 0..n {
                    let idx = (j * k) % n;
                    let c = self.trig[idx];
                    let s = sign * self.trig[idx + n];
                    sum_re += re[base + j] * c - im[base + j] * s;
                    sum_im += im[base + j] * c + re[base + j] * s;
                }
                out_re[base + k] = scale * sum_re;
                out_im[base + k] = scale * sum_im;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use {super::*, approx::assert_abs_diff_eq};

    #[test]
    fn trig_values_length_4() {
        let plan = DftPlan::new(4);

        let expected = [1.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 1.0];
        for (i, e) in expected.iter().enumerate() {
            assert_abs_diff_eq!(*e, plan.trig[i], epsilon = 1.0E-15);
        }
    }

    #[test]
    fn impulse_is_flat() {
        let plan = DftPlan::new(8);

        let mut re = vec![0.0; 8];
        let im = vec![0.0; 8];
        re[0] = 1.0;

        let mut out_re = vec![0.0; 8];
        let mut out_im = vec![0.0; 8];
        plan.forward(1, &re, &im, &mut out_re, &mut out_im);

        for k in 0..8 {
            assert_abs_diff_eq!(1.0, out_re[k], epsilon = 1.0E-12);
            assert_abs_diff_eq!(0.0, out_im[k], epsilon = 1.0E-12);
        }
    }

    #[test]
    fn constant_concentrates_in_dc() {
        let plan = DftPlan::new(5);

        let re = vec![1.0; 5];
        let im = vec![0.0; 5];
        let mut out_re = vec![0.0; 5];
        let mut out_im = vec![0.0; 5];
        plan.forward(1, &re, &im, &mut out_re, &mut out_im);

        assert_abs_diff_eq!(5.0, out_re[0], epsilon = 1.0E-12);
        for k in 1..5 {
            assert_abs_diff_eq!(0.0, out_re[k], epsilon = 1.0E-12);
            assert_abs_diff_eq!(0.0, out_im[k], epsilon = 1.0E-12);
        }
    }

    #[test]
    fn complex_tone_hits_single_bin() {
        // x[j] = exp(2*pi*i*j/4) = (1, i, -1, -i) lands entirely in bin 1.
        let plan = DftPlan::new(4);

        let re = vec![1.0, 0.0, -1.0, 0.0];
        let im = vec![0.0, 1.0, 0.0, -1.0];
        let mut out_re = vec![0.0; 4];
        let mut out_im = vec![0.0; 4];
        plan.forward(1, &re, &im, &mut out_re, &mut out_im);

        let expected_re = [0.0, 4.0, 0.0, 0.0];
        for k in 0..4 {
            assert_abs_diff_eq!(expected_re[k], out_re[k], epsilon = 1.0E-12);
            assert_abs_diff_eq!(0.0, out_im[k], epsilon = 1.0E-12);
        }
    }

    #[test]
    fn inverse_undoes_forward() {
        let plan = DftPlan::new(6);

        let re = [0.3, -1.2, 2.5, 0.0, 4.75, -0.5, 1.0, 1.0, 1.0, 0.25, -2.0, 3.5];
        let im = [1.5, 0.0, -0.25, 2.0, -1.0, 0.5, 0.0, -3.0, 0.75, 1.25, 2.25, -0.125];

        let mut fwd_re = vec![0.0; 12];
        let mut fwd_im = vec![0.0; 12];
        plan.forward(2, &re, &im, &mut fwd_re, &mut fwd_im);

        let mut back_re = vec![0.0; 12];
        let mut back_im = vec![0.0; 12];
        plan.inverse(2, &fwd_re, &fwd_im, &mut back_re, &mut back_im);

        for i in 0..12 {
            assert_abs_diff_eq!(re[i], back_re[i], epsilon = 1.0E-12);
            assert_abs_diff_eq!(im[i], back_im[i], epsilon = 1.0E-12);
        }
    }

    #[test]
    fn dc_of_arange() {
        let plan = DftPlan::new(5);

        let re = [0.0, 1.0, 2.0, 3.0, 4.0];
        let im = [0.0; 5];
        let mut out_re = vec![0.0; 5];
        let mut out_im = vec![0.0; 5];
        plan.forward(1, &re, &im, &mut out_re, &mut out_im);

        assert_abs_diff_eq!(10.0, out_re[0], epsilon = 1.0E-12);
        assert_abs_diff_eq!(0.0, out_im[0], epsilon = 1.0E-12);
    }
}
