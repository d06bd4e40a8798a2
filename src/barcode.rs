use crate::errors::FormatError;

/// Position of the barcode field in a file name, counted from the end of the `_`-separated fields
pub const NAME_BARCODE_FROM_END: usize = 4;

/// `<sample>_<barcode>_<lane>_<read>_<index>.fastq[.gz]`
pub const MIN_NAME_FIELDS: usize = 5;

/// Where a barcode is read from. Each source has its own field separator and its own separator
/// between the first and second index of a dual-indexed barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeSource {
    /// the last `:` field of a read identifier, e.g. `1:N:0:ACAGTG+ATTGGC`
    ReadIdentifier,
    /// the 4th-from-last `_` field of a file name, e.g. `samp_ACAGTG-ATTGGC_L001_R1_001.fastq`
    FileName,
}

impl BarcodeSource {
    fn dual_separator(self) -> char {
        match self {
            BarcodeSource::ReadIdentifier => '+',
            BarcodeSource::FileName => '-',
        }
    }
}

/// The barcode of a file: whether it carried a second index, and the first (primary) index,
/// which is the only one kept in the canonical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    pub dual: bool,
    pub primary: String,
}

/// Splits a file name on `_` and checks there are enough fields for a barcode field to exist.
pub fn name_fields(name: &str) -> Result<Vec<&str>, FormatError> {
    let fields: Vec<&str> = name.split('_').collect();

    if fields.len() < MIN_NAME_FIELDS {
        return Err(FormatError::MalformedName {
            name: name.to_string(),
            found: fields.len(),
            expected: MIN_NAME_FIELDS,
        });
    }

    Ok(fields)
}

/// Returns the (possibly dual) barcode field of a file name.
pub fn name_barcode_field(name: &str) -> Result<&str, FormatError> {
    let fields = name_fields(name)?;
    Ok(fields[fields.len() - NAME_BARCODE_FROM_END])
}

/// Returns the text after the final `:` of a read identifier.
pub fn identifier_barcode_field(id: &str) -> Result<&str, FormatError> {
    match id.rsplit_once(':') {
        Some((_, last)) => Ok(last),
        None => Err(FormatError::MalformedIdentifier { id: id.to_string() }),
    }
}

/// Extracts the barcode from either a read identifier or a file name.
///
/// # Arguments
///
/// * `source` - the read identifier (without the leading `@`) or the bare file name
/// * `from` - which of the two `source` is
///
/// # Errors
///
/// Returns a `FormatError` if the barcode field cannot be located, or if the primary barcode
/// would be empty.
pub fn extract(source: &str, from: BarcodeSource) -> Result<Barcode, FormatError> {
    let field = match from {
        BarcodeSource::ReadIdentifier => identifier_barcode_field(source)?,
        BarcodeSource::FileName => name_barcode_field(source)?,
    };

    let (primary, dual) = match field.split_once(from.dual_separator()) {
        Some((first, _)) => (first, true),
        None => (field, false),
    };

    if primary.is_empty() {
        return Err(FormatError::EmptyBarcode {
            source_str: source.to_string(),
        });
    }

    Ok(Barcode {
        dual,
        primary: primary.to_string(),
    })
}
