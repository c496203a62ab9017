/// A single configuration option, with the range of values the option admits.
#[derive(Clone)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Whether the given value falls between the option minimum and the current setting.
    pub fn permits(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.value
    }
}
