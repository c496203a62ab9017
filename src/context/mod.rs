/*!
The context --- within which a formula is installed, evaluated, and enumerated.

A context is built from a [configuration](crate::config), and holds at most one formula at a time.
[set_formula](Context::set_formula) is the single gate for input: it parses the string, checks the formula is well-formed, and checks every variable mentioned is among those declared.
A formula which fails any check never enters the context, and so the evaluation and enumeration procedures are free to treat their own checks as internal invariants.

# Example
```rust
# use ttable::config::Config;
# use ttable::context::Context;
# use ttable::structures::assignment::Assignment;
# use ttable::types::err::{self, ErrorKind};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.set_formula("ab|-", 2).is_ok());

let evaluation = the_context.evaluate(&Assignment::zeroed(2)).unwrap();
assert!(evaluation.value);

// An operator short of operands is rejected at installation.
assert_eq!(
    the_context.set_formula("a|", 2),
    Err(ErrorKind::Validation(err::ValidationError::OperandDeficit { position: 1 })),
);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// A context, holding a configuration, counters, and perhaps a formula.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counts for various things which happened in the context.
    pub counters: Counters,

    /// The installed formula, if any.
    formula: Option<Formula>,

    /// The count of variables the installed formula ranges over.
    variable_count: usize,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula: None,
            variable_count: 0,
        }
    }

    /// Parses, checks, and installs a formula over the given count of variables.
    ///
    /// Replaces any previously installed formula on success, and leaves the context untouched on failure.
    pub fn set_formula(
        &mut self,
        source: &str,
        variable_count: usize,
    ) -> Result<(), ErrorKind> {
        if !self.config.variable_count.permits(&variable_count) {
            return Err(err::ContextError::VariableCountOutOfRange {
                count: variable_count,
            }
            .into());
        }

        let formula = Formula::parse(source, self.config.formula_length.value)?;
        formula.validate()?;

        if let Some(variable) = formula.max_variable() {
            if variable as usize >= variable_count {
                return Err(err::ContextError::UndeclaredVariable {
                    variable: (b'a' + variable) as char,
                }
                .into());
            }
        }

        log::info!(target: targets::VALIDATION, "Installed formula '{formula}' over {variable_count} variables");

        self.formula = Some(formula);
        self.variable_count = variable_count;
        Ok(())
    }

    /// The installed formula, if any.
    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// The count of variables the installed formula ranges over.
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }
}
