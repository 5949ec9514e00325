#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_letters: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    /// Raw length argument; normalized later so bad values fall back to the default.
    pub length: Option<String>,
    pub number: Option<usize>,
    pub symbols: Option<String>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}
