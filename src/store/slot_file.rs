//! Slot file codec
//!
//! Encodes the full slot map into a single checksummed image.

use std::collections::BTreeMap;

use crate::error::{Result, RosterError};

// =============================================================================
// Format Constants
// =============================================================================

/// Magic bytes identifying a rosterdesk slot file
pub(crate) const MAGIC: &[u8; 4] = b"RSDK";

/// Current slot file format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + PayloadLen (4) = 10 bytes
pub const HEADER_SIZE: usize = 10;

/// Footer size: PayloadCRC (4)
pub const FOOTER_SIZE: usize = 4;

// =============================================================================
// Encoding/Decoding
// =============================================================================

/// Encode a slot map to bytes
///
/// Format: magic (4) + version (2) + payload_len (4) + payload + crc (4)
pub fn encode_slots(slots: &BTreeMap<String, String>) -> Result<Vec<u8>> {
    let payload = bincode::serialize(slots)?;

    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        RosterError::Serialization(format!(
            "Slot payload too large: {} bytes",
            payload.len()
        ))
    })?;

    let mut image = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);
    image.extend_from_slice(MAGIC);
    image.extend_from_slice(&VERSION.to_le_bytes());
    image.extend_from_slice(&payload_len.to_le_bytes());
    image.extend_from_slice(&payload);
    image.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());

    Ok(image)
}

/// Decode a slot map from bytes
///
/// Rejects bad magic, unknown versions, length mismatches and CRC failures.
pub fn decode_slots(bytes: &[u8]) -> Result<BTreeMap<String, String>> {
    if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
        return Err(RosterError::SlotCorruption(format!(
            "File too short: {} bytes (min {})",
            bytes.len(),
            HEADER_SIZE + FOOTER_SIZE
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(RosterError::SlotCorruption(format!(
            "Invalid magic: expected RSDK, got {:?}",
            &bytes[0..4]
        )));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(RosterError::SlotCorruption(format!(
            "Unsupported version: {} (expected {})",
            version, VERSION
        )));
    }

    let payload_len = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) as usize;
    let expected_len = HEADER_SIZE + payload_len + FOOTER_SIZE;
    if bytes.len() != expected_len {
        return Err(RosterError::SlotCorruption(format!(
            "Length mismatch: header says {} bytes, file has {}",
            expected_len,
            bytes.len()
        )));
    }

    let payload = &bytes[HEADER_SIZE..HEADER_SIZE + payload_len];
    let footer = &bytes[HEADER_SIZE + payload_len..];
    let stored_crc = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);
    let computed_crc = crc32fast::hash(payload);
    if stored_crc != computed_crc {
        return Err(RosterError::SlotCorruption(format!(
            "CRC mismatch: stored {:#010x}, computed {:#010x}",
            stored_crc, computed_crc
        )));
    }

    Ok(bincode::deserialize(payload)?)
}
