//! Error handling for the codec database
//!
//! Every lookup in this crate reports failure through these values. Nothing in the
//! query path aborts the process.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

use crate::types::Slot;

/// Result type alias for codec database operations
pub type Result<T> = std::result::Result<T, CodecDbError>;

/// Error type for codec database operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecDbError {
    /// Slot is `NONE` or not below the active codec count
    #[error("Codec slot out of range: {slot} (active codecs: {active})")]
    SlotOutOfRange { slot: Slot, active: usize },

    /// No active row has the requested signature
    #[error("No matching codec: {name}/{sample_rate_hz}/{channels}")]
    NoMatchingCodec {
        name: String,
        sample_rate_hz: u32,
        channels: u8,
    },

    /// Payload type outside 0-127
    #[error("Invalid payload type: {payload_type} (valid range: 0-127)")]
    InvalidPayloadType { payload_type: i32 },

    /// Packet size not allowed for the codec
    #[error("Invalid packet size for {codec}: {packet_size} samples (allowed: {allowed:?})")]
    InvalidPacketSize {
        codec: String,
        packet_size: usize,
        allowed: Vec<usize>,
    },

    /// Bit rate not accepted by the codec
    #[error("Invalid rate for {codec}: {rate}bps")]
    InvalidRate { codec: String, rate: i32 },

    /// The process-wide database was already built from a different selection
    #[error("Codec database already initialized with a different feature selection")]
    AlreadyInitialized,
}

impl CodecDbError {
    /// Create a new slot out of range error
    pub fn slot_out_of_range(slot: Slot, active: usize) -> Self {
        Self::SlotOutOfRange { slot, active }
    }

    /// Create a new no matching codec error
    pub fn no_matching_codec(name: impl Into<String>, sample_rate_hz: u32, channels: u8) -> Self {
        Self::NoMatchingCodec {
            name: name.into(),
            sample_rate_hz,
            channels,
        }
    }

    /// Create a new invalid payload type error
    pub fn invalid_payload_type(payload_type: i32) -> Self {
        Self::InvalidPayloadType { payload_type }
    }

    /// Create a new invalid rate error
    pub fn invalid_rate(codec: impl Into<String>, rate: i32) -> Self {
        Self::InvalidRate {
            codec: codec.into(),
            rate,
        }
    }

    /// True when the error means "codec unavailable" rather than "codec misconfigured".
    ///
    /// Callers treat an out-of-range slot and a failed match the same way: fall back
    /// to another codec or reject the negotiation.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::SlotOutOfRange { .. } | Self::NoMatchingCodec { .. }
        )
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SlotOutOfRange { .. } | Self::NoMatchingCodec { .. } => ErrorCategory::Lookup,

            Self::InvalidPayloadType { .. }
            | Self::InvalidPacketSize { .. }
            | Self::InvalidRate { .. } => ErrorCategory::Validation,

            Self::AlreadyInitialized => ErrorCategory::Initialization,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Slot or signature lookups that found nothing
    Lookup,
    /// Descriptor fields rejected by validation
    Validation,
    /// Process-wide registry setup
    Initialization,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "Lookup"),
            Self::Validation => write!(f, "Validation"),
            Self::Initialization => write!(f, "Initialization"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            CodecDbError::slot_out_of_range(Slot::NONE, 3).category(),
            ErrorCategory::Lookup
        );
        assert_eq!(
            CodecDbError::invalid_payload_type(128).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            CodecDbError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_unavailable() {
        assert!(CodecDbError::no_matching_codec("PCMU", 16000, 1).is_unavailable());
        assert!(CodecDbError::slot_out_of_range(Slot::from_index(40), 20).is_unavailable());
        assert!(!CodecDbError::invalid_rate("opus", 1).is_unavailable());
    }

    #[test]
    fn test_error_display() {
        let err = CodecDbError::slot_out_of_range(Slot::from_index(30), 24);
        let display = format!("{}", err);
        assert!(display.contains("30"));
        assert!(display.contains("24"));

        let err = CodecDbError::slot_out_of_range(Slot::NONE, 24);
        assert!(format!("{}", err).contains("NONE"));

        let err = CodecDbError::no_matching_codec("G722", 8000, 1);
        assert_eq!(format!("{}", err), "No matching codec: G722/8000/1");
    }
}
