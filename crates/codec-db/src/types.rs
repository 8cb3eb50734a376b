//! Core types for the codec database
//!
//! Slots, the three per-slot record shapes (descriptor, settings, decoder binding)
//! and the limits the static table is held to.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::variants::CodecVariant;

/// Maximum number of codecs that can be active in one database
pub const MAX_NUM_CODECS: usize = 50;

/// Maximum number of allowed packet sizes for one codec
pub const MAX_NUM_PACKET_SIZES: usize = 6;

/// Sample rate reported by [`CodecDatabase::sample_rate_or_invalid`] for a bad slot
///
/// [`CodecDatabase::sample_rate_or_invalid`]: crate::CodecDatabase::sample_rate_or_invalid
pub const INVALID_SAMPLE_RATE_HZ: i32 = -1;

/// Position of a codec variant in the database tables
///
/// `Slot::NONE` stands for "no codec": either the variant is not compiled into this
/// database or a match failed. Both mean the codec is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(Option<usize>);

impl Slot {
    /// The "no codec" sentinel
    pub const NONE: Slot = Slot(None);

    /// Create a slot for a table index
    pub const fn from_index(index: usize) -> Self {
        Self(Some(index))
    }

    /// Create a slot from a raw integer where any negative value means `NONE`
    pub fn from_raw(raw: i32) -> Self {
        usize::try_from(raw).map_or(Self::NONE, Self::from_index)
    }

    /// Raw integer view of the slot, `-1` for `NONE`
    pub fn to_raw(self) -> i32 {
        self.0
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Table index, if any
    pub const fn index(self) -> Option<usize> {
        self.0
    }

    /// Check if this is the `NONE` sentinel
    pub const fn is_none(self) -> bool {
        self.0.is_none()
    }

    /// Check if this slot refers to a table index
    pub const fn is_some(self) -> bool {
        self.0.is_some()
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<Option<usize>> for Slot {
    fn from(index: Option<usize>) -> Self {
        Self(index)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{}", index),
            None => write!(f, "NONE"),
        }
    }
}

/// Codec descriptor
///
/// The same shape is used for database rows and for codecs negotiated at session
/// setup. For database rows the payload type, packet size and bit rate are defaults
/// that the caller may override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodecDescriptor {
    /// RTP payload type
    pub payload_type: u8,
    /// Codec name, compared case-insensitively
    pub name: Cow<'static, str>,
    /// Sample rate in Hz
    pub sample_rate_hz: u32,
    /// Packet size in samples
    pub packet_size_samples: usize,
    /// Number of channels
    pub channels: u8,
    /// Bit rate in bits per second; `-1` asks for an adaptive rate where supported
    pub bitrate: i32,
}

impl CodecDescriptor {
    /// Create a descriptor with no packet size and rate set
    pub fn new(
        payload_type: u8,
        name: impl Into<Cow<'static, str>>,
        sample_rate_hz: u32,
        channels: u8,
    ) -> Self {
        Self {
            payload_type,
            name: name.into(),
            sample_rate_hz,
            packet_size_samples: 0,
            channels,
            bitrate: 0,
        }
    }

    pub(crate) const fn row(
        payload_type: u8,
        name: &'static str,
        sample_rate_hz: u32,
        packet_size_samples: usize,
        channels: u8,
        bitrate: i32,
    ) -> Self {
        Self {
            payload_type,
            name: Cow::Borrowed(name),
            sample_rate_hz,
            packet_size_samples,
            channels,
            bitrate,
        }
    }

    /// Set payload type
    pub fn with_payload_type(mut self, payload_type: u8) -> Self {
        self.payload_type = payload_type;
        self
    }

    /// Set packet size in samples
    pub fn with_packet_size(mut self, packet_size_samples: usize) -> Self {
        self.packet_size_samples = packet_size_samples;
        self
    }

    /// Set bit rate
    pub fn with_rate(mut self, bitrate: i32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// The `(name, sample rate, channels)` triple used for name-based matching
    pub fn signature(&self) -> (&str, u32, u8) {
        (&self.name, self.sample_rate_hz, self.channels)
    }

    /// Check the signature against a query; names compare case-insensitively
    pub fn matches_signature(&self, name: &str, sample_rate_hz: u32, channels: u8) -> bool {
        self.name.eq_ignore_ascii_case(name)
            && self.sample_rate_hz == sample_rate_hz
            && self.channels == channels
    }
}

impl fmt::Display for CodecDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} (PT:{})",
            self.name, self.sample_rate_hz, self.channels, self.payload_type
        )
    }
}

/// Per-codec encoder constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecSettings {
    /// Permissible packet sizes in samples, in ascending order
    pub allowed_packet_sizes: &'static [usize],
    /// Zero when any allowed packet size works, otherwise the frame size the
    /// implementation must be fed with
    pub basic_block_samples: usize,
    /// Maximum number of channels this variant can encode
    pub channel_support: u8,
}

impl CodecSettings {
    /// Check if a packet size is allowed
    pub fn allows_packet_size(&self, packet_size_samples: usize) -> bool {
        self.allowed_packet_sizes.contains(&packet_size_samples)
    }
}

/// Decoder implementation used by the playout subsystem for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoderBinding {
    /// No decoder; returned for `NONE` and out-of-range slots
    Unavailable,
    /// iSAC wideband
    Isac,
    /// iSAC super-wideband
    IsacSwb,
    /// iSAC fullband
    IsacFb,
    /// Linear PCM 8 kHz
    Pcm16b,
    /// Linear PCM 16 kHz
    Pcm16bWb,
    /// Linear PCM 32 kHz
    Pcm16bSwb32kHz,
    /// Linear PCM 8 kHz stereo
    Pcm16bStereo,
    /// Linear PCM 16 kHz stereo
    Pcm16bWbStereo,
    /// Linear PCM 32 kHz stereo
    Pcm16bSwb32kHzStereo,
    /// G.711 μ-law
    Pcmu,
    /// G.711 A-law
    Pcma,
    /// G.711 μ-law stereo
    PcmuStereo,
    /// G.711 A-law stereo
    PcmaStereo,
    /// iLBC
    Ilbc,
    /// G.722
    G722,
    /// G.722 stereo
    G722Stereo,
    /// Opus
    Opus,
    /// G.729
    G729,
    /// Comfort noise 8 kHz
    CngNb,
    /// Comfort noise 16 kHz
    CngWb,
    /// Comfort noise 32 kHz
    CngSwb32kHz,
    /// Comfort noise 48 kHz
    CngSwb48kHz,
    /// DTMF telephone events
    Avt,
    /// Redundant audio data
    Red,
}

impl DecoderBinding {
    /// Check if a decoder exists for this binding
    pub fn is_available(self) -> bool {
        self != Self::Unavailable
    }
}

impl fmt::Display for DecoderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything the database knows about one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecEntry<'a> {
    /// Slot of this entry
    pub slot: Slot,
    /// Known variant occupying the slot
    pub variant: CodecVariant,
    /// Default descriptor
    pub descriptor: &'a CodecDescriptor,
    /// Encoder constraints
    pub settings: &'a CodecSettings,
    /// Playout decoder
    pub decoder: DecoderBinding,
}
