use crate::error::{ProcessingError, Result};
use crate::models::temperature::parse_tenths;
use crate::utils::constants::{MAX_TEMP_FIELD_WIDTH, MIN_TEMP_FIELD_WIDTH};

/// Split one record line (without its terminator) into the station-name span
/// and the fixed-point temperature.
///
/// The separator is located by scanning backward from just before the
/// shortest possible temperature field, so a well-formed record needs at
/// most `MAX_TEMP_FIELD_WIDTH - MIN_TEMP_FIELD_WIDTH + 1` probes.
pub fn parse_record(line: &[u8]) -> Result<(&[u8], i32)> {
    // shortest record is a one-byte name plus ";0.0"
    if line.len() < MIN_TEMP_FIELD_WIDTH + 2 {
        return Err(ProcessingError::InvalidFormat(format!(
            "record too short: '{}'",
            String::from_utf8_lossy(line)
        )));
    }

    let mut separator = line.len() - MIN_TEMP_FIELD_WIDTH - 1;
    let scan_floor = line.len().saturating_sub(MAX_TEMP_FIELD_WIDTH + 1);
    while line[separator] != b';' {
        if separator == scan_floor {
            return Err(ProcessingError::InvalidFormat(format!(
                "missing ';' separator in record '{}'",
                String::from_utf8_lossy(line)
            )));
        }
        separator -= 1;
    }

    if separator == 0 {
        return Err(ProcessingError::InvalidFormat(format!(
            "empty station name in record '{}'",
            String::from_utf8_lossy(line)
        )));
    }

    let tenths = parse_tenths(&line[separator + 1..])?;
    Ok((&line[..separator], tenths))
}
