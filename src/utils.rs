use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, Slice};

/// Stacks two equally shaped arrays into one whose final axis has size 2,
/// pairing elements of `re` and `im`. Equivalent to stacking along a new
/// leading axis and then permuting that axis to the end.
pub fn stack_pair_last(re: ArrayViewD<f64>, im: ArrayViewD<f64>) -> ArrayD<f64> {
    assert_eq!(re.shape(), im.shape());

    let mut shape = re.shape().to_vec();
    shape.push(2);

    let mut data = Vec::with_capacity(re.len() * 2);
    for (r, i) in re.iter().zip(im.iter()) {
        data.push(*r);
        data.push(*i);
    }

    ArrayD::from_shape_vec(IxDyn(&shape), data).unwrap()
}

/// Splits the last axis of an interleaved array into its even positions
/// (real samples) and odd positions (imaginary samples).
pub fn split_interleaved(x: &ArrayD<f64>) -> (ArrayD<f64>, ArrayD<f64>) {
    let last = Axis(x.ndim() - 1);

    let re = x.slice_axis(last, Slice::new(0, None, 2)).to_owned();
    let im = x.slice_axis(last, Slice::new(1, None, 2)).to_owned();

    (re, im)
}

#[cfg(test)]
pub(crate) fn assert_allclose(expected: &ArrayD<f64>, actual: &ArrayD<f64>, rtol: f64, atol: f64) {
    assert_eq!(
        expected.shape(),
        actual.shape(),
        "shape mismatch: expected {:?}, got {:?}",
        expected.shape(),
        actual.shape()
    );

    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        let tol = atol + rtol * e.abs();
        assert!(
            (a - e).abs() <= tol,
            "element {}: expected {}, got {} (tolerance {})",
            i,
            e,
            a,
            tol
        );
    }
}
