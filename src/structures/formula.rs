/*!
A formula, as an immutable sequence of [tokens](crate::structures::token).

A formula is parsed once from a string and never mutated.
Parsing rejects any character outside the token alphabet, and notes where the character was found.

Parsing makes no claim the formula is *well-formed* --- for that, see [validate](crate::procedures::validate).

```rust
# use ttable::structures::formula::Formula;
# use ttable::types::err;
let formula = Formula::parse("ab&c|", 1000).unwrap();
assert_eq!(formula.token_count(), 5);

assert_eq!(
    Formula::parse("a+b", 1000),
    Err(err::ParseError::InvalidCharacter { character: '+', position: 1 }),
);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::token::{Token, Variable},
    types::err::{self},
};

/// An immutable sequence of tokens, paired with the string it was read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Formula {
    tokens: Vec<Token>,
    source: String,
}

impl Formula {
    /// Parses a formula from a string, so long as the string is non-empty, within the length limit, and free of invalid characters.
    pub fn parse(source: &str, length_limit: usize) -> Result<Self, err::ParseError> {
        if source.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let length = source.chars().count();
        if length > length_limit {
            log::warn!(target: targets::PARSE, "Formula of length {length} over limit {length_limit}");
            return Err(err::ParseError::FormulaTooLong {
                length,
                limit: length_limit,
            });
        }

        let mut tokens = Vec::with_capacity(length);
        for (position, character) in source.chars().enumerate() {
            match Token::from_char(character) {
                Some(token) => tokens.push(token),

                None => {
                    log::warn!(target: targets::PARSE, "Invalid character '{character}' at {position}");
                    return Err(err::ParseError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        Ok(Formula {
            tokens,
            source: source.to_owned(),
        })
    }

    /// The tokens of the formula, in scan order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The string the formula was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// A count of the tokens of the formula.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The greatest variable mentioned by the formula, if any variable is mentioned.
    pub fn max_variable(&self) -> Option<Variable> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Variable(variable) => Some(*variable),
                _ => None,
            })
            .max()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
