
use anyhow::Context;
use std::io::{BufWriter, Write};
use std::fs::File;
use std::path::Path;

/// Opens a file for writing, wrapping it in a gzip encoder if the extension is ".gz".
/// # Arguments
/// * `out_filename` - user provided path to write to
/// # Errors
/// * if the file cannot be created
pub fn create_writer(out_filename: &Path) -> anyhow::Result<Box<dyn Write>> {
    let file = File::create(out_filename)
        .with_context(|| format!("Error while creating {out_filename:?}:"))?;
    let writer: Box<dyn Write> = if out_filename.extension().unwrap_or_default() == "gz" {
        Box::new(
            flate2::write::GzEncoder::new(
                file,
                flate2::Compression::best()
            )
        )
    } else {
        Box::new(file)
    };
    Ok(writer)
}

/// This will save a generic serializable struct to JSON.
/// # Arguments
/// * `data` - the data in memory
/// * `out_filename` - user provided path to write to
/// # Errors
/// * if opening or writing to the file throw errors
/// * if JSON serialization throws errors
pub fn save_json<T: serde::Serialize>(data: &T, out_filename: &Path) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(create_writer(out_filename)?);
    serde_json::to_writer_pretty(&mut writer, data)
        .with_context(|| format!("Error while serializing {out_filename:?}:"))?;
    writer.flush()
        .with_context(|| format!("Error while flushing output to {out_filename:?}:"))?;
    Ok(())
}
