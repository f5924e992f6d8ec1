use crate::{ImportError, ImportResult};
use sleigh_structs::{config::ReaderConfig, core::Gift};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// Reads every data row of the gifts table at `path`, in file order.
pub fn read_gifts(path: impl AsRef<Path>, config: &ReaderConfig) -> ImportResult<Vec<Gift>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let gifts = read_gifts_from(file, config)?;
    debug!("read {} gifts from {}", gifts.len(), path.display());
    Ok(gifts)
}

/// Rows are mapped onto [`Gift`] by column position; header names are ignored.
pub fn read_gifts_from<R: Read>(reader: R, config: &ReaderConfig) -> ImportResult<Vec<Gift>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(single_byte(config.delimiter)?)
        .quote(single_byte(config.quote)?)
        .has_headers(config.has_headers)
        .from_reader(reader);

    let mut gifts = Vec::new();
    for result in rdr.records() {
        let record = result?;
        gifts.push(record.deserialize::<Gift>(None)?);
    }
    Ok(gifts)
}

fn single_byte(c: char) -> ImportResult<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ImportError::UnsupportedDelimiter { delimiter: c })
    }
}
