use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Only directories starting with this prefix are descended into
const SAMPLE_DIR_PREFIX: &str = "Sample";

const FASTQ_SUFFIXES: [&str; 2] = [".fastq", ".fastq.gz"];

/// Whether a file name looks like a (possibly gzipped) FASTQ file.
pub fn is_fastq_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|n| FASTQ_SUFFIXES.iter().any(|suffix| n.ends_with(suffix)))
}

fn is_sample_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|n| n.starts_with(SAMPLE_DIR_PREFIX))
}

/// Lazily finds the FASTQ files in `root` and in any `Sample*` directories below it, in
/// file name order.
///
/// Other directories are not entered and other files are skipped. A directory that cannot be
/// listed yields a single `Err` and none of its contents; the rest of the tree is still walked.
pub fn fastq_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || is_sample_dir(e))
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && is_fastq_name(e.file_name()) => {
                Some(Ok(e.into_path()))
            }
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn fastq_names() {
        assert!(is_fastq_name(OsStr::new("samp_S1_L001_R1_001.fastq")));
        assert!(is_fastq_name(OsStr::new("samp_S1_L001_R1_001.fastq.gz")));
        assert!(!is_fastq_name(OsStr::new("samp_S1_L001_R1_001.fq")));
        assert!(!is_fastq_name(OsStr::new("samp_S1_L001_R1_001.fastq.bak")));
        assert!(!is_fastq_name(OsStr::new("SampleSheet.csv")));
    }

    #[test]
    fn only_sample_dirs_are_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("Sample_01/Sample_nested")).unwrap();
        fs::create_dir(root.join("Reports")).unwrap();
        fs::write(root.join("b_S2_L001_R1_001.fastq.gz"), b"").unwrap();
        fs::write(root.join("a_S1_L001_R1_001.fastq"), b"").unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();
        fs::write(root.join("Sample_01/c_ACAGTG_L001_R1_001.fastq"), b"").unwrap();
        fs::write(root.join("Sample_01/Sample_nested/d_S4_L001_R1_001.fastq"), b"").unwrap();
        fs::write(root.join("Reports/e_S5_L001_R1_001.fastq"), b"").unwrap();

        let found: Vec<PathBuf> = fastq_files(root)
            .map(|p| p.unwrap().strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            found,
            vec![
                PathBuf::from("Sample_01/Sample_nested/d_S4_L001_R1_001.fastq"),
                PathBuf::from("Sample_01/c_ACAGTG_L001_R1_001.fastq"),
                PathBuf::from("a_S1_L001_R1_001.fastq"),
                PathBuf::from("b_S2_L001_R1_001.fastq.gz"),
            ]
        );
    }

    #[test]
    fn missing_root() {
        let results: Vec<_> = fastq_files(Path::new("no/such/directory")).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
