//! Set of useful parser combinators

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{alpha1, char, space0};
use nom::combinator::{all_consuming, map, verify};
use nom::multi::separated_list1;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

/// A single term of an element selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Term<'a> {
    /// Every element
    All,
    /// Inclusive range of atomic numbers
    Range(u32, u32),
    /// A single atomic number
    Z(u32),
    /// A chemical symbol in any case
    Symbol(&'a str),
}

/// Full selection, e.g. `all`, `1-10`, `H, he, 26`
pub(crate) fn selection(i: &str) -> IResult<&str, Vec<Term>> {
    all_consuming(separated_list1(char(','), padded(term)))(i)
}

fn term(i: &str) -> IResult<&str, Term> {
    alt((all, range, z, symbol))(i)
}

fn all(i: &str) -> IResult<&str, Term> {
    map(tag_no_case("all"), |_| Term::All)(i)
}

fn range(i: &str) -> IResult<&str, Term> {
    map(
        separated_pair(number, delimited(space0, char('-'), space0), number),
        |(lower, upper)| Term::Range(lower, upper),
    )(i)
}

fn z(i: &str) -> IResult<&str, Term> {
    map(number, Term::Z)(i)
}

fn number(i: &str) -> IResult<&str, u32> {
    nom::character::complete::u32(i)
}

/// Symbols are one or two letters
fn symbol(i: &str) -> IResult<&str, Term> {
    map(verify(alpha1, |s: &str| s.len() <= 2), Term::Symbol)(i)
}

fn padded<'a, O, F>(parser: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(space0, parser, space0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_terms() {
        assert_eq!(selection("all"), Ok(("", vec![Term::All])));
        assert_eq!(selection(" ALL "), Ok(("", vec![Term::All])));
        assert_eq!(selection("26"), Ok(("", vec![Term::Z(26)])));
        assert_eq!(selection("1-10"), Ok(("", vec![Term::Range(1, 10)])));
        assert_eq!(selection("1 - 10"), Ok(("", vec![Term::Range(1, 10)])));
        assert_eq!(selection("fe"), Ok(("", vec![Term::Symbol("fe")])));
    }

    #[test]
    fn mixed_list() {
        assert_eq!(
            selection("H, he,26 ,3-4"),
            Ok((
                "",
                vec![
                    Term::Symbol("H"),
                    Term::Symbol("he"),
                    Term::Z(26),
                    Term::Range(3, 4)
                ]
            ))
        );
    }

    #[test]
    fn rejected() {
        assert!(selection("").is_err());
        assert!(selection("H,").is_err());
        assert!(selection("iron").is_err());
        assert!(selection("1-").is_err());
        assert!(selection("H;He").is_err());
    }
}
