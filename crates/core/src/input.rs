//! Reading markup sources with an optional size cap.

use crate::error::{Error, Result};
use std::io::Read;

/// Read all markup from `reader`.
///
/// Fails when the source is longer than `limit` bytes or is not UTF-8.
/// Line endings are left untouched; the parser handles `\r\n` itself.
pub fn load_markup<R: Read>(reader: R, limit: Option<usize>) -> Result<String> {
    let mut bytes = Vec::new();

    match limit {
        Some(limit) => {
            // One byte past the limit is enough to detect oversize input.
            let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
            reader.take(cap).read_to_end(&mut bytes)?;
            if bytes.len() > limit {
                return Err(Error::InputTooLarge {
                    size: bytes.len(),
                    limit,
                });
            }
        }
        None => {
            let mut reader = reader;
            reader.read_to_end(&mut bytes)?;
        }
    }

    String::from_utf8(bytes).map_err(|e| Error::InvalidEncoding(e.to_string()))
}
