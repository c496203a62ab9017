use ttable::{
    config::Config,
    context::Context,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

const LIMIT: usize = 1000;

mod well_formed {
    use super::*;

    #[test]
    fn single_operand() {
        assert!(Formula::parse("a", LIMIT).unwrap().validate().is_ok());
        assert!(Formula::parse("z", LIMIT).unwrap().validate().is_ok());
        assert!(Formula::parse("0", LIMIT).unwrap().validate().is_ok());
        assert!(Formula::parse("1", LIMIT).unwrap().validate().is_ok());
    }

    #[test]
    fn operands_without_operators() {
        // With no operators, anything other than a single token leaves the scan unbalanced.
        for source in ["ab", "abc", "01", "a1"] {
            assert_eq!(
                Formula::parse(source, LIMIT).unwrap().validate(),
                Err(err::ValidationError::Unbalanced { depth: source.len() }),
            );
        }
    }

    #[test]
    fn connectives_in_balance() {
        for source in ["ab&", "ab|", "ab>", "ab=", "ab#", "ab&cd|#", "ab>ba>&"] {
            assert!(Formula::parse(source, LIMIT).unwrap().validate().is_ok());
        }
    }

    #[test]
    fn negation_is_depth_neutral() {
        for source in ["a-", "a--", "ab-&", "ab&-"] {
            assert!(Formula::parse(source, LIMIT).unwrap().validate().is_ok());
        }
    }

    #[test]
    fn operator_before_operands() {
        assert_eq!(
            Formula::parse("|ab", LIMIT).unwrap().validate(),
            Err(err::ValidationError::OperandDeficit { position: 0 }),
        );

        assert_eq!(
            Formula::parse("a|", LIMIT).unwrap().validate(),
            Err(err::ValidationError::OperandDeficit { position: 1 }),
        );

        assert_eq!(
            Formula::parse("-a", LIMIT).unwrap().validate(),
            Err(err::ValidationError::OperandDeficit { position: 0 }),
        );

        assert_eq!(
            Formula::parse("ab&&", LIMIT).unwrap().validate(),
            Err(err::ValidationError::OperandDeficit { position: 3 }),
        );
    }
}

mod parse {
    use super::*;

    #[test]
    fn invalid_characters() {
        assert_eq!(
            Formula::parse("a+", LIMIT),
            Err(err::ParseError::InvalidCharacter {
                character: '+',
                position: 1,
            }),
        );

        assert_eq!(
            Formula::parse("(a)", LIMIT),
            Err(err::ParseError::InvalidCharacter {
                character: '(',
                position: 0,
            }),
        );

        assert_eq!(
            Formula::parse("ab &", LIMIT),
            Err(err::ParseError::InvalidCharacter {
                character: ' ',
                position: 2,
            }),
        );
    }

    #[test]
    fn empty() {
        assert_eq!(Formula::parse("", LIMIT), Err(err::ParseError::Empty));
    }

    #[test]
    fn over_length() {
        let source = "a".repeat(5);
        assert_eq!(
            Formula::parse(&source, 4),
            Err(err::ParseError::FormulaTooLong {
                length: 5,
                limit: 4,
            }),
        );
    }
}

mod installation {
    use super::*;

    #[test]
    fn variable_count_bounds() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.set_formula("a", 0),
            Err(ErrorKind::Context(
                err::ContextError::VariableCountOutOfRange { count: 0 }
            )),
        );

        assert_eq!(
            ctx.set_formula("a", 27),
            Err(ErrorKind::Context(
                err::ContextError::VariableCountOutOfRange { count: 27 }
            )),
        );

        assert!(ctx.set_formula("a", 1).is_ok());
        assert!(ctx.set_formula("a", 26).is_ok());
    }

    #[test]
    fn undeclared_variable() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.set_formula("ac|", 2),
            Err(ErrorKind::Context(err::ContextError::UndeclaredVariable {
                variable: 'c'
            })),
        );

        assert!(ctx.set_formula("ac|", 3).is_ok());
    }

    #[test]
    fn malformed_formulas_never_installed() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.set_formula("a|", 2).is_err());
        assert!(ctx.formula().is_none());

        // A failed installation leaves an installed formula in place.
        assert!(ctx.set_formula("ab&", 2).is_ok());
        assert!(ctx.set_formula("b-", 1).is_err());
        assert_eq!(ctx.formula().unwrap().source(), "ab&");
        assert_eq!(ctx.variable_count(), 2);
    }
}
