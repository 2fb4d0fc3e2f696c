use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// Rust's `{:e}` drops the exponent sign and padding, which breaks the
    /// column alignment expected in the tabulated results.
    ///
    /// ```rust
    /// # use ftools_utils::ValueExt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((2.53e-8).sci(3, 2), "2.530e-08".to_string());
    /// assert_eq!((1.0e100).sci(2, 2), "1.00e+100".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", &self, precision = precision);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // non-finite values have no exponent to pad
            None => formatted,
        }
    }
}
