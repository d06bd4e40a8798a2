use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use needletail::{parser::FastqReader, FastxReader};
use std::fs::{File, Permissions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// A single FASTQ read. The identifier is stored without its leading `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: String,
    pub qual: String,
}

/// Whether a file should be transparently (de)compressed, judged by its `.gz` suffix.
pub fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Reads every record of a `.fastq` or `.fastq.gz` file into memory.
///
/// The whole file is decoded before anything is returned, so a caller can both look at the
/// first record and process the file from the start without opening it twice.
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be opened or decompressed.
/// * A record is malformed, including when its sequence and quality lengths differ.
/// * The identifier, sequence or quality scores are not valid UTF-8.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("Unable to open file {}", path.display()))?;

    let reader: Box<dyn Read + Send> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(file)
    };

    let mut fastq_reader = FastqReader::new(reader);
    let mut records = Vec::new();

    while let Some(rec) = fastq_reader.next() {
        let rec = rec.with_context(|| {
            format!("Invalid record #{} in {}", records.len() + 1, path.display())
        })?;

        records.push(Record {
            id: String::from_utf8(rec.id().to_vec())?,
            seq: String::from_utf8(rec.raw_seq().to_vec())?,
            qual: String::from_utf8(rec.qual().unwrap_or(&[]).to_vec())?,
        });
    }

    Ok(records)
}

/// Formats a record as a four-line FASTQ entry and writes it to the provided writer.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, "@{}\n{}\n+\n{}", record.id, record.seq, record.qual)
}

fn encode(writer: &mut impl Write, records: &[Record]) -> std::io::Result<()> {
    for record in records {
        write_record(writer, record)?;
    }
    writer.flush()
}

/// Writes records to `dest`, gzip-compressed if requested.
///
/// The records are first written to a temporary file in the same directory as `dest`, which is
/// then renamed onto `dest`. Any existing file at `dest` is replaced.
///
/// # Arguments
///
/// * `dest` - The final output path.
/// * `records` - The records to write, in order.
/// * `gzip` - Whether to gzip-compress the output.
/// * `permissions` - Permissions given to the output file, normally those of the input file.
pub fn write_records(
    dest: &Path,
    records: &[Record],
    gzip: bool,
    permissions: Permissions,
) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Unable to create a temporary file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        if gzip {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encode(&mut encoder, records)?;
            encoder.finish()?.flush()?;
        } else {
            encode(&mut writer, records)?;
        }
    }

    temp_file.as_file().set_permissions(permissions)?;
    temp_file
        .persist(dest)
        .with_context(|| format!("Unable to write {}", dest.display()))?;

    Ok(())
}
