/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every row evaluated in the context.
    pub rows_evaluated: usize,

    /// A count of every token scanned during evaluation.
    pub tokens_scanned: usize,
}
