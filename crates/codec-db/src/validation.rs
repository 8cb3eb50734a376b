//! Validation of externally supplied codec parameters

use crate::error::{CodecDbError, Result};
use crate::types::{CodecDescriptor, CodecSettings};

/// Highest valid RTP payload type
pub const MAX_PAYLOAD_TYPE: i32 = 127;

/// Adaptive rate request, accepted by iSAC only
pub const ADAPTIVE_RATE: i32 = -1;

/// Check if a payload type is within 0-127
pub fn is_valid_payload_type(payload_type: i32) -> bool {
    (0..=MAX_PAYLOAD_TYPE).contains(&payload_type)
}

/// Validate a payload type
pub fn validate_payload_type(payload_type: i32) -> Result<()> {
    if !is_valid_payload_type(payload_type) {
        return Err(CodecDbError::invalid_payload_type(payload_type));
    }

    Ok(())
}

/// iSAC takes an adaptive rate or 10-56 kbps
pub fn is_isac_rate_valid(rate: i32) -> bool {
    rate == ADAPTIVE_RATE || (10000..=56000).contains(&rate)
}

/// iLBC runs at 13.3 kbps in 30 ms modes and 15.2 kbps in 20 ms modes
pub fn is_ilbc_rate_valid(rate: i32, packet_size_samples: usize) -> bool {
    match packet_size_samples {
        240 | 480 => rate == 13300,
        160 | 320 => rate == 15200,
        _ => false,
    }
}

/// Opus takes 6-510 kbps
pub fn is_opus_rate_valid(rate: i32) -> bool {
    (6000..=510000).contains(&rate)
}

/// Validate the packet size of a descriptor against a codec's settings
pub fn validate_packet_size(descriptor: &CodecDescriptor, settings: &CodecSettings) -> Result<()> {
    let packet_size = descriptor.packet_size_samples;

    if packet_size == 0 || !settings.allows_packet_size(packet_size) {
        return Err(CodecDbError::InvalidPacketSize {
            codec: descriptor.name.to_string(),
            packet_size,
            allowed: settings.allowed_packet_sizes.to_vec(),
        });
    }

    Ok(())
}

/// Validate the bit rate of a descriptor
///
/// Codecs with a single rate must be asked for exactly `default_rate`.
pub fn validate_rate(descriptor: &CodecDescriptor, default_rate: i32) -> Result<()> {
    let rate = descriptor.bitrate;
    let name: &str = &descriptor.name;

    let valid = if name.eq_ignore_ascii_case("ISAC") {
        is_isac_rate_valid(rate)
    } else if name.eq_ignore_ascii_case("ILBC") {
        is_ilbc_rate_valid(rate, descriptor.packet_size_samples)
    } else if name.eq_ignore_ascii_case("opus") {
        is_opus_rate_valid(rate)
    } else {
        rate == default_rate
    };

    if !valid {
        return Err(CodecDbError::invalid_rate(name, rate));
    }

    Ok(())
}
