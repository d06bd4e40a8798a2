use itertools::Itertools;

use crate::barcode::{self, NAME_BARCODE_FROM_END};
use crate::errors::FormatError;

/// Run label written at the start of every canonical read identifier
pub const CANONICAL_RUN_LABEL: &str = "MISEQ";

/// Builds the canonical file name by replacing the barcode field of `name` with `primary`.
/// The lane, read and index fields, including the `.fastq[.gz]` suffix, are kept verbatim.
pub fn rewrite_name(name: &str, primary: &str) -> Result<String, FormatError> {
    let mut fields = barcode::name_fields(name)?;
    let idx = fields.len() - NAME_BARCODE_FROM_END;
    fields[idx] = primary;

    Ok(fields.iter().join("_"))
}

/// Builds the canonical read identifier: the run label is replaced by `CANONICAL_RUN_LABEL`
/// and the trailing barcode field by `primary`. Everything in between is left alone.
///
/// # Errors
///
/// Returns `FormatError::MalformedIdentifier` if `id` has fewer than two `:`-separated fields.
pub fn rewrite_identifier(id: &str, primary: &str) -> Result<String, FormatError> {
    let mut fields: Vec<&str> = id.split(':').collect();

    if fields.len() < 2 {
        return Err(FormatError::MalformedIdentifier { id: id.to_string() });
    }

    let last = fields.len() - 1;
    fields[0] = CANONICAL_RUN_LABEL;
    fields[last] = primary;

    Ok(fields.iter().join(":"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pipeline_name() {
        assert_eq!(
            rewrite_name("samp_S1_L001_R1_001.fastq", "ACAGTG").unwrap(),
            "samp_ACAGTG_L001_R1_001.fastq"
        );
    }

    #[test]
    fn keeps_gz_suffix() {
        assert_eq!(
            rewrite_name("samp_ACAGTG-ATTGGC_L001_R1_001.fastq.gz", "ACAGTG").unwrap(),
            "samp_ACAGTG_L001_R1_001.fastq.gz"
        );
    }

    #[test]
    fn keeps_underscores_in_sample() {
        assert_eq!(
            rewrite_name("a_b_c_S4_L001_R2_001.fastq", "GGCTAC").unwrap(),
            "a_b_c_GGCTAC_L001_R2_001.fastq"
        );
    }

    #[test]
    fn malformed_name() {
        assert!(rewrite_name("L001_R1_001.fastq", "ACAGTG").is_err());
    }

    #[test]
    fn new_pipeline_identifier() {
        let id = "M00719:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTG+ATTGGC";
        assert_eq!(
            rewrite_identifier(id, "ACAGTG").unwrap(),
            "MISEQ:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTG"
        );
    }

    #[test]
    fn casava_dual_identifier() {
        let id = "MISEQ:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTGATTGGC";
        assert_eq!(
            rewrite_identifier(id, "ACAGTG").unwrap(),
            "MISEQ:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTG"
        );
    }

    #[test]
    fn canonical_identifier_is_unchanged() {
        let id = "MISEQ:295:000000000-AN59N:1:1101:16589:2209 1:N:0:ACAGTG";
        let once = rewrite_identifier(id, "ACAGTG").unwrap();
        assert_eq!(once, id);
        assert_eq!(rewrite_identifier(&once, "ACAGTG").unwrap(), once);
    }

    #[test]
    fn two_fields_is_enough() {
        assert_eq!(rewrite_identifier("M1:GATTAC", "ACAGTG").unwrap(), "MISEQ:ACAGTG");
    }

    #[test]
    fn malformed_identifier() {
        let err = rewrite_identifier("read_without_colons", "ACAGTG").unwrap_err();
        assert_eq!(
            err,
            FormatError::MalformedIdentifier {
                id: "read_without_colons".to_string()
            }
        );
    }
}
