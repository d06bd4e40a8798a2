use crate::barcode::{self, Barcode, BarcodeSource};
use crate::errors::FormatError;

/// Marks the sample-index field (`S1`, `S12`, ...) written by the newer pipeline in place of
/// a barcode.
const SAMPLE_INDEX_PREFIX: char = 'S';

/// The three naming conventions a FASTQ file can follow.
///
/// | dialect        | file name                             | read identifier barcode |
/// |----------------|---------------------------------------|-------------------------|
/// | `NewPipeline`  | `samp_S1_L001_R1_001.fastq`           | `ACAGTG` / `ACAGTG+ATTGGC` |
/// | `LegacyDual`   | `samp_ACAGTG-ATTGGC_L001_R1_001.fastq`| `ACAGTGATTGGC`          |
/// | `LegacySingle` | `samp_ACAGTG_L001_R1_001.fastq`       | `ACAGTG`                |
///
/// `LegacySingle` is the canonical format every other dialect is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    NewPipeline,
    LegacyDual,
    LegacySingle,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dialect::NewPipeline => "new-pipeline",
            Dialect::LegacyDual => "legacy dual-index",
            Dialect::LegacySingle => "legacy single-index",
        })
    }
}

/// The dialect of a file together with the barcode it carries. Computed once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub dialect: Dialect,
    pub barcode: Barcode,
}

/// Checks whether a file name was produced by the newer pipeline, i.e. whether its barcode
/// field holds a sample index rather than a barcode.
pub fn is_new_pipeline(name: &str) -> Result<bool, FormatError> {
    Ok(barcode::name_barcode_field(name)?.starts_with(SAMPLE_INDEX_PREFIX))
}

/// Classifies a file and extracts its barcode.
///
/// New-pipeline files do not carry their barcode in the file name, so `first_id` (the
/// identifier of the file's first read) is needed for them. Legacy files are fully described
/// by their name and `first_id` is ignored.
///
/// # Errors
///
/// Returns a `FormatError` if the name or identifier is malformed, or if the file is a
/// new-pipeline file and `first_id` is `None`.
pub fn classify(name: &str, first_id: Option<&str>) -> Result<Classification, FormatError> {
    if is_new_pipeline(name)? {
        let id = first_id.ok_or_else(|| FormatError::NoRecords {
            name: name.to_string(),
        })?;

        return Ok(Classification {
            dialect: Dialect::NewPipeline,
            barcode: barcode::extract(id, BarcodeSource::ReadIdentifier)?,
        });
    }

    let barcode = barcode::extract(name, BarcodeSource::FileName)?;
    let dialect = if barcode.dual {
        Dialect::LegacyDual
    } else {
        Dialect::LegacySingle
    };

    Ok(Classification { dialect, barcode })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "M00719:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTG+ATTGGC";

    #[test]
    fn new_pipeline() {
        let c = classify("samp_S1_L001_R1_001.fastq", Some(ID)).unwrap();
        assert_eq!(c.dialect, Dialect::NewPipeline);
        assert!(c.barcode.dual);
        assert_eq!(c.barcode.primary, "ACAGTG");
    }

    #[test]
    fn new_pipeline_single_index() {
        let id = "M00719:295:000000000-AN59N:1:1101:16589:2209 1:N:0:TTAGGC";
        let c = classify("samp_S12_L001_R2_001.fastq.gz", Some(id)).unwrap();
        assert_eq!(c.dialect, Dialect::NewPipeline);
        assert!(!c.barcode.dual);
        assert_eq!(c.barcode.primary, "TTAGGC");
    }

    #[test]
    fn new_pipeline_needs_a_read() {
        let err = classify("samp_S1_L001_R1_001.fastq", None).unwrap_err();
        assert!(matches!(err, FormatError::NoRecords { .. }));
    }

    #[test]
    fn legacy_dual() {
        let c = classify("samp_ACAGTG-ATTGGC_L001_R1_001.fastq.gz", None).unwrap();
        assert_eq!(c.dialect, Dialect::LegacyDual);
        assert_eq!(c.barcode.primary, "ACAGTG");
    }

    #[test]
    fn legacy_single_ignores_reads() {
        let c = classify("samp_ACAGTG_L001_R1_001.fastq", Some(ID)).unwrap();
        assert_eq!(c.dialect, Dialect::LegacySingle);
        assert!(!c.barcode.dual);
        assert_eq!(c.barcode.primary, "ACAGTG");
    }

    #[test]
    fn sample_prefix_only_checked_at_barcode_field() {
        // a sample name starting with S does not make a file new-pipeline
        assert!(!is_new_pipeline("Sample1_ACAGTG_L001_R1_001.fastq").unwrap());
        assert!(is_new_pipeline("Sample1_S3_L001_R1_001.fastq").unwrap());
    }

    #[test]
    fn malformed_name() {
        assert!(is_new_pipeline("reads.fastq").is_err());
        assert!(classify("S1_L001_R1_001.fastq", Some(ID)).is_err());
    }
}
