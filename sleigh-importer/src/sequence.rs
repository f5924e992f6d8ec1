use sleigh_structs::layout::SEQUENCE_START;

/// Build-wide identifier source.
///
/// One instance is threaded through every builder by `&mut`; the order in
/// which builders call [`Sequence::next`] is the order identifiers appear in
/// the document.
#[derive(Debug)]
pub struct Sequence {
    current: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            current: SEQUENCE_START,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        self.current += 1;
        self.current.to_string()
    }

    /// Last identifier issued, or [`SEQUENCE_START`] if none yet.
    pub fn current(&self) -> u64 {
        self.current
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
