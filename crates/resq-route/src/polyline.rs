//! Encoded-polyline decoding.
//!
//! The directions API compresses route geometry with the standard polyline
//! encoding: each coordinate is a pair of zigzag-encoded deltas in units
//! of 1e-5 degree, serialized as base-63-offset varints.  No pack crate
//! covers this format, so the decoder lives here.

use resq_core::Coordinate;

use crate::ProviderError;

const PRECISION: f64 = 1e5;

/// Decode an encoded polyline into an ordered coordinate sequence.
///
/// An empty string decodes to an empty sequence.  A string that ends
/// mid-value, or contains bytes outside the encoding alphabet, is
/// rejected.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, ProviderError> {
    let mut bytes = encoded.bytes();
    let mut coords = Vec::new();
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while let Some(d_lat) = next_delta(&mut bytes)? {
        let d_lon = next_delta(&mut bytes)?.ok_or_else(|| {
            ProviderError::BadGeometry("odd number of values in geometry".to_string())
        })?;
        lat += d_lat;
        lon += d_lon;
        coords.push(Coordinate::new(lat as f64 / PRECISION, lon as f64 / PRECISION));
    }

    Ok(coords)
}

/// Read one zigzag varint.  `Ok(None)` only at a clean end of input.
fn next_delta(bytes: &mut impl Iterator<Item = u8>) -> Result<Option<i64>, ProviderError> {
    let mut value: i64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(byte) = bytes.next() else {
            return if shift == 0 {
                Ok(None)
            } else {
                Err(ProviderError::BadGeometry("truncated geometry".to_string()))
            };
        };
        if !(63..=126).contains(&byte) {
            return Err(ProviderError::BadGeometry(format!(
                "byte 0x{byte:02x} outside polyline alphabet"
            )));
        }

        let chunk = (byte - 63) as i64;
        value |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk & 0x20 == 0 {
            break;
        }
    }

    // Undo zigzag: low bit is the sign.
    let delta = if value & 1 != 0 { !(value >> 1) } else { value >> 1 };
    Ok(Some(delta))
}
