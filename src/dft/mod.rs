//! Discrete Fourier transform over dense multi-dimensional arrays.
//!
//! The transform axis is always the last axis of the input. Output follows the
//! stacked convention: a real array whose final axis has size exactly 2,
//! holding the real and imaginary components of each frequency bin, with all
//! other axes matching the (possibly truncated or zero-padded) input shape.
//!
//! Two input encodings are accepted:
//! 1) real: the last axis holds the signal samples, the imaginary part is
//!    implicitly zero;
//! 2) stacked complex: the last axis has size 2 and pairs each sample's real
//!    and imaginary components, with the axis before it holding the signal.
//!
//! The requested transform length is passed as a length-1 integer array, kept
//! as a tensor-shaped argument rather than a plain integer so the operation
//! contract matches the stacked-output convention it implements. A length
//! shorter than the signal axis truncates, a longer one zero-pads.

use {
    anyhow::{bail, Result},
    log::error,
    ndarray::{Array1, ArrayD, IxDyn},
};

mod plan;

pub use plan::DftPlan;

/// Computes the DFT of `x` along its last signal axis.
///
/// `real` selects the input encoding (see the module docs). `onesided` keeps
/// only the first `n/2 + 1` frequency bins; it is a real-input convention and
/// is rejected for stacked complex input.
pub fn dft(
    x: &ArrayD<f64>,
    fft_length: &Array1<i64>,
    real: bool,
    onesided: bool,
) -> Result<ArrayD<f64>> {
    let n = transform_length(fft_length)?;

    if !real && onesided {
        let msg = "one-sided output is only defined for real input";
        error!("{}", msg);
        bail!(msg);
    }

    let (lead, sig) = split_shape(x, real)?;
    let m: usize = lead.iter().product();

    let (re, im) = pack_rows(x, m, sig, n, real);

    let mut out_re = vec![0.0; m * n];
    let mut out_im = vec![0.0; m * n];
    DftPlan::new(n).forward(m, &re, &im, &mut out_re, &mut out_im);

    let bins = if onesided { n / 2 + 1 } else { n };
    assemble(lead, m, n, bins, &out_re, &out_im)
}

/// Inverse DFT of a stacked complex array, scaled by `1/n`. Output is stacked
/// complex as well; at matching length this undoes [`dft`].
pub fn idft(x: &ArrayD<f64>, fft_length: &Array1<i64>) -> Result<ArrayD<f64>> {
    let n = transform_length(fft_length)?;

    let (lead, sig) = split_shape(x, false)?;
    let m: usize = lead.iter().product();

    let (re, im) = pack_rows(x, m, sig, n, false);

    let mut out_re = vec![0.0; m * n];
    let mut out_im = vec![0.0; m * n];
    DftPlan::new(n).inverse(m, &re, &im, &mut out_re, &mut out_im);

    assemble(lead, m, n, n, &out_re, &out_im)
}

fn transform_length(fft_length: &Array1<i64>) -> Result<usize> {
    if fft_length.len() != 1 {
        let msg = format!(
            "fft_length must hold exactly one value, got {} values",
            fft_length.len()
        );
        error!("{}", msg);
        bail!(msg);
    }

    let n = fft_length[0];
    if n < 1 {
        let msg = format!("transform length must be positive, got {}", n);
        error!("{}", msg);
        bail!(msg);
    }

    Ok(n as usize)
}

// Splits the input shape into leading axes and the signal axis length,
// checking the encoding-specific shape requirements.
fn split_shape(x: &ArrayD<f64>, real: bool) -> Result<(&[usize], usize)> {
    let shape = x.shape();
    let d = x.ndim();

    let (lead, sig) = if real {
        if d < 1 {
            let msg = format!("real input must have a signal axis, got shape {:?}", shape);
            error!("{}", msg);
            bail!(msg);
        }
        (&shape[..d - 1], shape[d - 1])
    } else {
        if d < 2 || shape[d - 1] != 2 {
            let msg = format!(
                "stacked complex input must end in an axis of size 2, got shape {:?}",
                shape
            );
            error!("{}", msg);
            bail!(msg);
        }
        (&shape[..d - 2], shape[d - 2])
    };

    if sig == 0 {
        let msg = format!("empty signal axis, got shape {:?}", shape);
        error!("{}", msg);
        bail!(msg);
    }

    Ok((lead, sig))
}

// Packs the signal into m contiguous rows of length n, truncating or
// zero-padding each row as the requested length demands.
fn pack_rows(x: &ArrayD<f64>, m: usize, sig: usize, n: usize, real: bool) -> (Vec<f64>, Vec<f64>) {
    let xs = x.as_standard_layout();
    let flat = xs.as_slice().unwrap();

    let take = sig.min(n);
    let mut re = vec![0.0; m * n];
    let mut im = vec![0.0; m * n];

    if real {
        for r in 0..m {
            for j in 0..take {
                re[r * n + j] = flat[r * sig + j];
            }
        }
    } else {
        for r in 0..m {
            for j in 0..take {
                re[r * n + j] = flat[(r * sig + j) * 2];
                im[r * n + j] = flat[(r * sig + j) * 2 + 1];
            }
        }
    }

    (re, im)
}

// Assembles the stacked output: leading axes, then `bins` frequency bins,
// then the real/imaginary pair axis.
fn assemble(
    lead: &[usize],
    m: usize,
    n: usize,
    bins: usize,
    re: &[f64],
    im: &[f64],
) -> Result<ArrayD<f64>> {
    let mut shape = lead.to_vec();
    shape.push(bins);
    shape.push(2);

    let mut data = Vec::with_capacity(m * bins * 2);
    for r in 0..m {
        for k in 0..bins {
            data.push(re[r * n + k]);
            data.push(im[r * n + k]);
        }
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
}
