//! Set of useful parser combinators

// nom parser combinators
use nom::character::complete::{space0, space1};
use nom::combinator::eof;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::IResult;

/// List of consecutive doubles making up a full line
///
/// Values must be separated by whitespace. Anything left over after the last
/// number is a failure, so a stray word or a fused token such as `1.02.0` or
/// the Fortran exponent `2.50000-100` is never split into extra columns.
pub(crate) fn row_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    let (i, values) = separated_list1(space1, double)(i.trim_start())?;
    let (i, _) = space0(i)?;
    let (i, _) = eof(i)?;
    Ok((i, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_rows() {
        assert_eq!(row_of_f64("1.0 2.0 3.0"), Ok(("", vec![1.0, 2.0, 3.0])));
        assert_eq!(
            row_of_f64("  1.00000E-03\t5.2e+01   0.0120  "),
            Ok(("", vec![1.0e-3, 52.0, 0.012]))
        );
        assert_eq!(row_of_f64("-4"), Ok(("", vec![-4.0])));
    }

    #[test]
    fn bad_rows() {
        assert!(row_of_f64("").is_err());
        assert!(row_of_f64("energy value error").is_err());
        assert!(row_of_f64("1.0 2.0 total").is_err());
    }

    #[test]
    fn fused_tokens() {
        assert!(row_of_f64("1.02.0 5.0").is_err());
        assert!(row_of_f64("1.0 2.50000-100 0.1").is_err());
        assert!(row_of_f64("1.0-2.0").is_err());
    }
}
