//! Internal nom helpers shared by the sdp-text parsers.

use nom::bytes::complete::take_while1;

pub type IResult<I, O> = nom::IResult<I, O, nom::error::VerboseError<I>>;
pub use nom::Finish;

fn whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn not_whitespace(c: char) -> bool {
    !c.is_ascii_whitespace()
}

/// A run of at least one non-whitespace character
pub fn token(i: &str) -> IResult<&str, &str> {
    take_while1(not_whitespace)(i)
}

/// At least one whitespace character
pub fn space1(i: &str) -> IResult<&str, &str> {
    take_while1(whitespace)(i)
}

/// Consume the complete remaining input
pub fn rest(i: &str) -> IResult<&str, &str> {
    Ok(("", i))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens_separated_by_whitespace() {
        let (rem, word) = token("abc \t 123").unwrap();
        assert_eq!(word, "abc");

        let (rem, space) = space1(rem).unwrap();
        assert_eq!(space, " \t ");
        assert_eq!(rem, "123");
    }

    #[test]
    fn token_requires_input() {
        assert!(token("").is_err());
        assert!(token(" x").is_err());
    }

    #[test]
    fn rest_takes_everything() {
        let (rem, all) = rest("minptime=10; useinbandfec=1").unwrap();

        assert!(rem.is_empty());
        assert_eq!(all, "minptime=10; useinbandfec=1");
    }
}
