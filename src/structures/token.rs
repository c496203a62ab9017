/*!
(The internal representation of) a token of a postfix formula.

Each token is written as a single character, and each character of a formula string is a token.
- `a`..`z` pick out a variable, by position in the alphabet.
- `0` and `1` are the truth constants.
- `-` is unary negation.
- `|`, `&`, `#`, `>`, and `=` are the binary connectives.

No other character is a token.

```rust
# use ttable::structures::token::{Connective, Token};
assert_eq!(Token::from_char('c'), Some(Token::Variable(2)));
assert_eq!(Token::from_char('>'), Some(Token::Connective(Connective::Implication)));
assert_eq!(Token::from_char('('), None);
```
*/

/// A variable, by 0-based position in the alphabet.
pub type Variable = u8;

/// A single token of a postfix formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    /// A propositional variable.
    Variable(Variable),

    /// A truth constant, `0` or `1`.
    Constant(bool),

    /// Unary negation, `-`.
    Negation,

    /// A binary connective.
    Connective(Connective),
}

/// A binary connective, applied to the two most recently pushed values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connective {
    /// `|`
    Or,

    /// `&`
    And,

    /// `#` --- true when the operands differ.
    Xor,

    /// `>` --- false only when the antecedent holds and the consequent fails.
    Implication,

    /// `=` --- true when the operands agree.
    Equivalence,
}

impl Token {
    /// The token written as the given character, if there is one.
    pub fn from_char(character: char) -> Option<Self> {
        match character {
            'a'..='z' => Some(Token::Variable(character as u8 - b'a')),
            '0' => Some(Token::Constant(false)),
            '1' => Some(Token::Constant(true)),
            '-' => Some(Token::Negation),
            '|' => Some(Token::Connective(Connective::Or)),
            '&' => Some(Token::Connective(Connective::And)),
            '#' => Some(Token::Connective(Connective::Xor)),
            '>' => Some(Token::Connective(Connective::Implication)),
            '=' => Some(Token::Connective(Connective::Equivalence)),
            _ => None,
        }
    }
}

impl Connective {
    /// The connective applied to its operands, with `operand1` the value pushed earlier.
    pub fn apply(&self, operand1: bool, operand2: bool) -> bool {
        match self {
            Self::Or => operand1 || operand2,
            Self::And => operand1 && operand2,
            Self::Xor => operand1 != operand2,
            Self::Implication => !operand1 || operand2,
            Self::Equivalence => operand1 == operand2,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(variable) => write!(f, "{}", (b'a' + variable) as char),
            Self::Constant(false) => write!(f, "0"),
            Self::Constant(true) => write!(f, "1"),
            Self::Negation => write!(f, "-"),
            Self::Connective(connective) => write!(f, "{connective}"),
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Or => write!(f, "|"),
            Self::And => write!(f, "&"),
            Self::Xor => write!(f, "#"),
            Self::Implication => write!(f, ">"),
            Self::Equivalence => write!(f, "="),
        }
    }
}
