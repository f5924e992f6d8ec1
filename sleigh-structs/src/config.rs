/// How the gifts table is split into rows and fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    pub delimiter: char,
    pub quote: char,
    pub has_headers: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            has_headers: true,
        }
    }
}
