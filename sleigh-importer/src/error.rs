use sleigh_utils::xml::InvalidCharacter;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    DanglingReference {
        reference: String,
    },
    DuplicateIdentifier {
        identifier: u64,
    },
    InvalidGiftId {
        id: String,
    },
    LayoutMismatch {
        node: &'static str,
        expected: u64,
        actual: u64,
    },
    MalformedDocument {
        reason: String,
    },
    MismatchedReference {
        reference: String,
        expected: String,
        actual: String,
    },
    NoGifts,
    NonContiguousIdentifiers {
        expected: u64,
        actual: u64,
    },
    UnorderedGifts {
        last_id: i64,
        max_id: i64,
    },
    UnsupportedDelimiter {
        delimiter: char,
    },
    UnwritableCharacter(InvalidCharacter),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "I/O error: {}", e),
            ImportError::Csv(e) => write!(f, "Malformed gifts table: {}", e),
            ImportError::DanglingReference { reference } => {
                write!(f, "Reference '{}' does not point at any node", reference)
            }
            ImportError::DuplicateIdentifier { identifier } => {
                write!(f, "Identifier '{}' is used by more than one node", identifier)
            }
            ImportError::InvalidGiftId { id } => write!(
                f,
                "Gift id '{}' is not an integer with room for a following id, cannot derive the anchor location id",
                id
            ),
            ImportError::LayoutMismatch {
                node,
                expected,
                actual,
            } => write!(
                f,
                "{} was assigned identifier '{}', document layout expects '{}'",
                node, actual, expected
            ),
            ImportError::MalformedDocument { reason } => {
                write!(f, "Malformed document: {}", reason)
            }
            ImportError::MismatchedReference {
                reference,
                expected,
                actual,
            } => write!(
                f,
                "Reference '{}' is tagged '{}' but points at '{}'",
                reference, expected, actual
            ),
            ImportError::NoGifts => write!(f, "Gifts table has no data rows"),
            ImportError::NonContiguousIdentifiers { expected, actual } => write!(
                f,
                "Identifiers are not contiguous. Expected: '{}', Actual: '{}'",
                expected, actual
            ),
            ImportError::UnorderedGifts { last_id, max_id } => write!(
                f,
                "Last gift id '{}' is below the largest gift id '{}', the anchor location id would collide",
                last_id, max_id
            ),
            ImportError::UnsupportedDelimiter { delimiter } => write!(
                f,
                "Delimiter '{}' is not a single-byte character",
                delimiter.escape_default()
            ),
            ImportError::UnwritableCharacter(e) => write!(f, "Cannot write document: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Csv(e) => Some(e),
            ImportError::UnwritableCharacter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

impl From<InvalidCharacter> for ImportError {
    fn from(e: InvalidCharacter) -> Self {
        ImportError::UnwritableCharacter(e)
    }
}

pub type ImportResult<T> = std::result::Result<T, ImportError>;
