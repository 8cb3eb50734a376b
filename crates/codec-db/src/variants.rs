//! Known codec variants and their table rows
//!
//! [`CODEC_ROWS`] is the priority-ordered list the database is built from. The order is
//! the historical negotiation priority and decides slot numbering: a database keeps
//! every enabled row in this order and skips disabled ones without leaving holes.

use std::fmt;

use crate::features::FeatureSelection;
use crate::types::{CodecDescriptor, CodecSettings, DecoderBinding};

/// Every codec variant the database knows about, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodecVariant {
    /// iSAC 16 kHz
    Isac,
    /// iSAC 32 kHz
    IsacSwb,
    /// iSAC 48 kHz
    IsacFb,
    /// L16 8 kHz mono
    Pcm16b,
    /// L16 16 kHz mono
    Pcm16bWb,
    /// L16 32 kHz mono
    Pcm16bSwb32kHz,
    /// L16 48 kHz mono; never supported, always `NONE`
    Pcm16bSwb48kHz,
    /// L16 8 kHz stereo
    Pcm16bStereo,
    /// L16 16 kHz stereo
    Pcm16bWbStereo,
    /// L16 32 kHz stereo
    Pcm16bSwb32kHzStereo,
    /// G.711 μ-law mono
    Pcmu,
    /// G.711 A-law mono
    Pcma,
    /// G.711 μ-law stereo
    PcmuStereo,
    /// G.711 A-law stereo
    PcmaStereo,
    /// iLBC
    Ilbc,
    /// G.722 mono
    G722,
    /// G.722 stereo
    G722Stereo,
    /// Opus, mono and stereo
    Opus,
    /// G.729
    G729,
    /// Comfort noise 8 kHz
    CnNb,
    /// Comfort noise 16 kHz
    CnWb,
    /// Comfort noise 32 kHz
    CnSwb,
    /// Comfort noise 48 kHz
    CnFb,
    /// Telephone events (DTMF)
    Avt,
    /// Redundant audio data
    Red,
}

impl CodecVariant {
    /// All known variants, including ones no build supports
    pub const ALL: [CodecVariant; 25] = [
        Self::Isac,
        Self::IsacSwb,
        Self::IsacFb,
        Self::Pcm16b,
        Self::Pcm16bWb,
        Self::Pcm16bSwb32kHz,
        Self::Pcm16bSwb48kHz,
        Self::Pcm16bStereo,
        Self::Pcm16bWbStereo,
        Self::Pcm16bSwb32kHzStereo,
        Self::Pcmu,
        Self::Pcma,
        Self::PcmuStereo,
        Self::PcmaStereo,
        Self::Ilbc,
        Self::G722,
        Self::G722Stereo,
        Self::Opus,
        Self::G729,
        Self::CnNb,
        Self::CnWb,
        Self::CnSwb,
        Self::CnFb,
        Self::Avt,
        Self::Red,
    ];

    /// Check if the variant is part of a database built from `selection`
    pub fn is_enabled(self, selection: &FeatureSelection) -> bool {
        match self {
            Self::Isac => selection.any_isac(),
            Self::IsacSwb | Self::IsacFb => selection.isac,
            Self::Pcm16bSwb48kHz => false,
            Self::Ilbc => selection.ilbc,
            Self::G722 | Self::G722Stereo => selection.g722,
            Self::Opus => selection.opus,
            Self::G729 => selection.g729,
            Self::CnFb => selection.cn_48khz,
            Self::Red => selection.red,
            _ => true,
        }
    }

    /// The table row for this variant, if it has one
    pub fn row(self) -> Option<&'static CodecRow> {
        CODEC_ROWS.iter().find(|row| row.variant == self)
    }

    /// The `(name, sample rate, channels)` this variant is known by, even when it has
    /// no row
    pub fn signature(self) -> (&'static str, u32, u8) {
        match self.row() {
            Some(row) => (row.name(), row.descriptor.sample_rate_hz, row.descriptor.channels),
            None => ("L16", 48000, 1),
        }
    }
}

impl fmt::Display for CodecVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, sample_rate_hz, channels) = self.signature();
        write!(f, "{}/{}/{}", name, sample_rate_hz, channels)
    }
}

/// One row of the static codec table
#[derive(Debug)]
pub struct CodecRow {
    /// Variant described by the row
    pub variant: CodecVariant,
    /// Default descriptor
    pub descriptor: CodecDescriptor,
    /// Encoder constraints
    pub settings: CodecSettings,
    /// Playout decoder
    pub decoder: DecoderBinding,
}

impl CodecRow {
    fn name(&'static self) -> &'static str {
        &self.descriptor.name
    }
}

const fn settings(
    allowed_packet_sizes: &'static [usize],
    basic_block_samples: usize,
    channel_support: u8,
) -> CodecSettings {
    CodecSettings {
        allowed_packet_sizes,
        basic_block_samples,
        channel_support,
    }
}

// Packet sizes in samples
const L16_NB_SIZES: &[usize] = &[80, 160, 240, 320];
const L16_WB_SIZES: &[usize] = &[160, 320, 480, 640];
const L16_SWB_SIZES: &[usize] = &[320, 640];
const G711_SIZES: &[usize] = &[80, 160, 240, 320, 400, 480];
const G722_SIZES: &[usize] = &[160, 320, 480, 640, 800, 960];

/// Default iSAC wideband rate
pub const ISAC_WB_DEFAULT_RATE: i32 = 32000;
/// Default iSAC super-wideband and fullband rate
pub const ISAC_SWB_DEFAULT_RATE: i32 = 56000;

/// The static codec table in priority order
pub static CODEC_ROWS: [CodecRow; 24] = [
    CodecRow {
        variant: CodecVariant::Isac,
        descriptor: CodecDescriptor::row(103, "ISAC", 16000, 480, 1, ISAC_WB_DEFAULT_RATE),
        settings: settings(&[480, 960], 0, 1),
        decoder: DecoderBinding::Isac,
    },
    CodecRow {
        variant: CodecVariant::IsacSwb,
        descriptor: CodecDescriptor::row(104, "ISAC", 32000, 960, 1, ISAC_SWB_DEFAULT_RATE),
        settings: settings(&[960], 0, 1),
        decoder: DecoderBinding::IsacSwb,
    },
    CodecRow {
        variant: CodecVariant::IsacFb,
        descriptor: CodecDescriptor::row(105, "ISAC", 48000, 1440, 1, ISAC_SWB_DEFAULT_RATE),
        settings: settings(&[1440], 0, 1),
        decoder: DecoderBinding::IsacFb,
    },
    // Mono
    CodecRow {
        variant: CodecVariant::Pcm16b,
        descriptor: CodecDescriptor::row(107, "L16", 8000, 80, 1, 128000),
        settings: settings(L16_NB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16b,
    },
    CodecRow {
        variant: CodecVariant::Pcm16bWb,
        descriptor: CodecDescriptor::row(108, "L16", 16000, 160, 1, 256000),
        settings: settings(L16_WB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16bWb,
    },
    CodecRow {
        variant: CodecVariant::Pcm16bSwb32kHz,
        descriptor: CodecDescriptor::row(109, "L16", 32000, 320, 1, 512000),
        settings: settings(L16_SWB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16bSwb32kHz,
    },
    // Stereo
    CodecRow {
        variant: CodecVariant::Pcm16bStereo,
        descriptor: CodecDescriptor::row(111, "L16", 8000, 80, 2, 128000),
        settings: settings(L16_NB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16bStereo,
    },
    CodecRow {
        variant: CodecVariant::Pcm16bWbStereo,
        descriptor: CodecDescriptor::row(112, "L16", 16000, 160, 2, 256000),
        settings: settings(L16_WB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16bWbStereo,
    },
    CodecRow {
        variant: CodecVariant::Pcm16bSwb32kHzStereo,
        descriptor: CodecDescriptor::row(113, "L16", 32000, 320, 2, 512000),
        settings: settings(L16_SWB_SIZES, 0, 2),
        decoder: DecoderBinding::Pcm16bSwb32kHzStereo,
    },
    // Mono
    CodecRow {
        variant: CodecVariant::Pcmu,
        descriptor: CodecDescriptor::row(0, "PCMU", 8000, 160, 1, 64000),
        settings: settings(G711_SIZES, 0, 2),
        decoder: DecoderBinding::Pcmu,
    },
    CodecRow {
        variant: CodecVariant::Pcma,
        descriptor: CodecDescriptor::row(8, "PCMA", 8000, 160, 1, 64000),
        settings: settings(G711_SIZES, 0, 2),
        decoder: DecoderBinding::Pcma,
    },
    // Stereo
    CodecRow {
        variant: CodecVariant::PcmuStereo,
        descriptor: CodecDescriptor::row(110, "PCMU", 8000, 160, 2, 64000),
        settings: settings(G711_SIZES, 0, 2),
        decoder: DecoderBinding::PcmuStereo,
    },
    CodecRow {
        variant: CodecVariant::PcmaStereo,
        descriptor: CodecDescriptor::row(118, "PCMA", 8000, 160, 2, 64000),
        settings: settings(G711_SIZES, 0, 2),
        decoder: DecoderBinding::PcmaStereo,
    },
    CodecRow {
        variant: CodecVariant::Ilbc,
        descriptor: CodecDescriptor::row(102, "ILBC", 8000, 240, 1, 13300),
        settings: settings(&[160, 240, 320, 480], 0, 1),
        decoder: DecoderBinding::Ilbc,
    },
    CodecRow {
        variant: CodecVariant::G722,
        descriptor: CodecDescriptor::row(9, "G722", 16000, 320, 1, 64000),
        settings: settings(G722_SIZES, 0, 2),
        decoder: DecoderBinding::G722,
    },
    CodecRow {
        variant: CodecVariant::G722Stereo,
        descriptor: CodecDescriptor::row(119, "G722", 16000, 320, 2, 64000),
        settings: settings(G722_SIZES, 0, 2),
        decoder: DecoderBinding::G722Stereo,
    },
    CodecRow {
        variant: CodecVariant::Opus,
        descriptor: CodecDescriptor::row(120, "opus", 48000, 960, 2, 64000),
        settings: settings(&[480, 960, 1920, 2880], 0, 2),
        decoder: DecoderBinding::Opus,
    },
    CodecRow {
        variant: CodecVariant::G729,
        descriptor: CodecDescriptor::row(18, "G729", 8000, 240, 1, 8000),
        settings: settings(G711_SIZES, 0, 1),
        decoder: DecoderBinding::G729,
    },
    CodecRow {
        variant: CodecVariant::CnNb,
        descriptor: CodecDescriptor::row(13, "CN", 8000, 240, 1, 0),
        settings: settings(&[240], 240, 1),
        decoder: DecoderBinding::CngNb,
    },
    CodecRow {
        variant: CodecVariant::CnWb,
        descriptor: CodecDescriptor::row(98, "CN", 16000, 480, 1, 0),
        settings: settings(&[480], 480, 1),
        decoder: DecoderBinding::CngWb,
    },
    CodecRow {
        variant: CodecVariant::CnSwb,
        descriptor: CodecDescriptor::row(99, "CN", 32000, 960, 1, 0),
        settings: settings(&[960], 960, 1),
        decoder: DecoderBinding::CngSwb32kHz,
    },
    CodecRow {
        variant: CodecVariant::CnFb,
        descriptor: CodecDescriptor::row(100, "CN", 48000, 1440, 1, 0),
        settings: settings(&[1440], 1440, 1),
        decoder: DecoderBinding::CngSwb48kHz,
    },
    CodecRow {
        variant: CodecVariant::Avt,
        descriptor: CodecDescriptor::row(106, "telephone-event", 8000, 240, 1, 0),
        settings: settings(&[240], 240, 1),
        decoder: DecoderBinding::Avt,
    },
    CodecRow {
        variant: CodecVariant::Red,
        descriptor: CodecDescriptor::row(127, "red", 8000, 0, 1, 0),
        settings: settings(&[0], 0, 1),
        decoder: DecoderBinding::Red,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_NUM_CODECS, MAX_NUM_PACKET_SIZES};
    use std::collections::HashSet;

    #[test]
    fn test_rows_follow_variant_order() {
        let row_order: Vec<CodecVariant> = CODEC_ROWS.iter().map(|row| row.variant).collect();
        let known_order: Vec<CodecVariant> = CodecVariant::ALL
            .iter()
            .copied()
            .filter(|variant| variant.row().is_some())
            .collect();
        assert_eq!(row_order, known_order);
        assert!(row_order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_every_variant_but_l16_48khz_has_a_row() {
        for variant in CodecVariant::ALL {
            assert_eq!(
                variant.row().is_none(),
                variant == CodecVariant::Pcm16bSwb48kHz,
                "{:?}",
                variant
            );
        }
    }

    #[test]
    fn test_table_limits() {
        assert!(CODEC_ROWS.len() <= MAX_NUM_CODECS);
        for row in &CODEC_ROWS {
            let sizes = row.settings.allowed_packet_sizes;
            assert!(!sizes.is_empty(), "{:?}", row.variant);
            assert!(sizes.len() <= MAX_NUM_PACKET_SIZES, "{:?}", row.variant);
            assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(row.settings.channel_support >= 1);
        }
    }

    #[test]
    fn test_signatures_unique() {
        let mut seen = HashSet::new();
        for row in &CODEC_ROWS {
            let (name, rate, channels) = row.descriptor.signature();
            assert!(
                seen.insert((name.to_ascii_lowercase(), rate, channels)),
                "duplicate signature for {:?}",
                row.variant
            );
        }
    }

    #[test]
    fn test_variant_enablement() {
        let none = FeatureSelection::none();
        assert!(CodecVariant::Pcmu.is_enabled(&none));
        assert!(CodecVariant::CnSwb.is_enabled(&none));
        assert!(!CodecVariant::CnFb.is_enabled(&none));
        assert!(!CodecVariant::Isac.is_enabled(&none));

        let fixed_point = none.with_isacfx(true);
        assert!(CodecVariant::Isac.is_enabled(&fixed_point));
        assert!(!CodecVariant::IsacSwb.is_enabled(&fixed_point));
        assert!(!CodecVariant::IsacFb.is_enabled(&fixed_point));

        assert!(!CodecVariant::Pcm16bSwb48kHz.is_enabled(&FeatureSelection::all()));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(CodecVariant::G722Stereo.to_string(), "G722/16000/2");
        assert_eq!(CodecVariant::Pcm16bSwb48kHz.to_string(), "L16/48000/1");
    }
}
