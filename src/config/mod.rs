/*!
Configuration of a context.

A configuration bounds the input a context accepts: the length of a formula string and the count of variables a table ranges over.
Bounds are checked when a formula is installed, never during a scan.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The greatest formula length any configuration permits.
pub const FORMULA_LENGTH_MAX: usize = 1000;

/// The greatest variable count any configuration permits --- one variable per letter of the alphabet.
pub const VARIABLE_COUNT_MAX: usize = 26;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The greatest length of formula string a context will accept.
    pub formula_length: ConfigOption<usize>,

    /// The greatest count of variables a context will accept.
    pub variable_count: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            formula_length: ConfigOption {
                name: "formula_length",
                min: 1,
                max: FORMULA_LENGTH_MAX,
                value: FORMULA_LENGTH_MAX,
            },

            variable_count: ConfigOption {
                name: "variable_count",
                min: 1,
                max: VARIABLE_COUNT_MAX,
                value: VARIABLE_COUNT_MAX,
            },
        }
    }
}
