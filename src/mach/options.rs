/// Run time switches, set from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Width of a `:` tab stop. Zero disables tabbing.
    pub tab_columns: usize,
    /// Print `:` before reading each ASK variable.
    pub ask_colon: bool,
    /// Upper-case ASK input before decoding it.
    pub upper_case: bool,
    /// Emit `[g.ss]` each time execution enters a line.
    pub trace_lines: bool,
    /// Fixed seed for FRAN, otherwise seeded from entropy.
    pub random_seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            tab_columns: 10,
            ask_colon: false,
            upper_case: true,
            trace_lines: false,
            random_seed: None,
        }
    }
}
