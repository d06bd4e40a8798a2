use thiserror::Error;

/// Problems with the naming conventions of a file or of the reads inside it. These are raised by
/// the pure parsing functions and only ever fail the file they came from.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error(
        "malformed file name `{name}`: found {found} `_`-separated fields, expected at least {expected}
    <sample>_<barcode>_<lane>_<read>_<index>.fastq[.gz]"
    )]
    MalformedName {
        name: String,
        found: usize,
        expected: usize,
    },

    #[error("empty barcode in `{source_str}`")]
    EmptyBarcode { source_str: String },

    #[error("malformed read identifier `{id}`: expected at least two `:`-separated fields")]
    MalformedIdentifier { id: String },

    #[error("`{name}` has no reads, so its barcode cannot be determined")]
    NoRecords { name: String },
}
