//! Codec database
//!
//! A [`CodecDatabase`] holds three parallel tables (descriptors, settings and decoder
//! bindings) built once from a [`FeatureSelection`]. All queries are read-only.

use tracing::{debug, warn};

use crate::error::{CodecDbError, Result};
use crate::features::FeatureSelection;
use crate::types::{
    CodecDescriptor, CodecEntry, CodecSettings, DecoderBinding, Slot, INVALID_SAMPLE_RATE_HZ,
};
use crate::validation;
use crate::variants::{CodecVariant, CODEC_ROWS};

/// Immutable table of the codecs available for one feature selection
#[derive(Debug, Clone)]
pub struct CodecDatabase {
    selection: FeatureSelection,
    variants: Vec<CodecVariant>,
    descriptors: Vec<CodecDescriptor>,
    settings: Vec<CodecSettings>,
    decoders: Vec<DecoderBinding>,
}

impl CodecDatabase {
    /// Build the tables for a feature selection
    ///
    /// Enabled rows are appended in priority order and numbered from zero; disabled
    /// rows are skipped.
    pub fn new(selection: FeatureSelection) -> Self {
        let mut database = Self {
            selection,
            variants: Vec::with_capacity(CODEC_ROWS.len()),
            descriptors: Vec::with_capacity(CODEC_ROWS.len()),
            settings: Vec::with_capacity(CODEC_ROWS.len()),
            decoders: Vec::with_capacity(CODEC_ROWS.len()),
        };

        for row in CODEC_ROWS.iter() {
            if !row.variant.is_enabled(&selection) {
                debug!("Skipping disabled codec {:?}", row.variant);
                continue;
            }

            debug!(
                "Slot {} -> {:?} {}",
                database.variants.len(),
                row.variant,
                row.descriptor
            );
            database.variants.push(row.variant);
            database.descriptors.push(row.descriptor.clone());
            database.settings.push(row.settings);
            database.decoders.push(row.decoder);
        }

        database
    }

    /// Feature selection the database was built from
    pub fn selection(&self) -> &FeatureSelection {
        &self.selection
    }

    /// Number of active codecs
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if no codec is active
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    fn index_of(&self, slot: Slot) -> Result<usize> {
        match slot.index() {
            Some(index) if index < self.len() => Ok(index),
            _ => Err(CodecDbError::slot_out_of_range(slot, self.len())),
        }
    }

    fn entry(&self, index: usize) -> CodecEntry<'_> {
        CodecEntry {
            slot: Slot::from_index(index),
            variant: self.variants[index],
            descriptor: &self.descriptors[index],
            settings: &self.settings[index],
            decoder: self.decoders[index],
        }
    }

    /// Describe the codec in a slot
    pub fn describe(&self, slot: Slot) -> Result<CodecEntry<'_>> {
        let index = self.index_of(slot)?;
        Ok(self.entry(index))
    }

    /// Default descriptor of the codec in a slot
    pub fn descriptor(&self, slot: Slot) -> Result<&CodecDescriptor> {
        let index = self.index_of(slot)?;
        Ok(&self.descriptors[index])
    }

    /// Encoder constraints of the codec in a slot
    pub fn settings(&self, slot: Slot) -> Result<&CodecSettings> {
        let index = self.index_of(slot)?;
        Ok(&self.settings[index])
    }

    /// Playout decoder for a slot; [`DecoderBinding::Unavailable`] for bad slots
    pub fn decoder_binding(&self, slot: Slot) -> DecoderBinding {
        self.index_of(slot)
            .map_or(DecoderBinding::Unavailable, |index| self.decoders[index])
    }

    /// Variant occupying a slot
    pub fn variant_at(&self, slot: Slot) -> Option<CodecVariant> {
        self.index_of(slot).ok().map(|index| self.variants[index])
    }

    /// Slot of a known variant, `Slot::NONE` when it is not part of this database
    pub fn slot_of(&self, variant: CodecVariant) -> Slot {
        self.variants
            .iter()
            .position(|active| *active == variant)
            .into()
    }

    /// Sample rate of the codec in a slot
    pub fn sample_rate_of(&self, slot: Slot) -> Result<u32> {
        self.descriptor(slot).map(|descriptor| descriptor.sample_rate_hz)
    }

    /// Sample rate of the codec in a slot, [`INVALID_SAMPLE_RATE_HZ`] for bad slots
    pub fn sample_rate_or_invalid(&self, slot: Slot) -> i32 {
        self.sample_rate_of(slot)
            .ok()
            .and_then(|rate| i32::try_from(rate).ok())
            .unwrap_or(INVALID_SAMPLE_RATE_HZ)
    }

    /// First slot whose name (case-insensitive), sample rate and channel count all
    /// equal the query
    pub fn find_by_signature(&self, name: &str, sample_rate_hz: u32, channels: u8) -> Slot {
        let slot: Slot = self
            .descriptors
            .iter()
            .position(|descriptor| descriptor.matches_signature(name, sample_rate_hz, channels))
            .into();

        if slot.is_none() {
            debug!(
                "No codec matches {}/{}/{}",
                name, sample_rate_hz, channels
            );
        }

        slot
    }

    /// Slot for a codec we intend to send
    ///
    /// Payload type must equal the row's as well as the signature.
    pub fn find_by_descriptor(&self, descriptor: &CodecDescriptor) -> Slot {
        self.descriptors
            .iter()
            .position(|row| {
                row.payload_type == descriptor.payload_type
                    && row.matches_signature(
                        &descriptor.name,
                        descriptor.sample_rate_hz,
                        descriptor.channels,
                    )
            })
            .into()
    }

    /// Slot for an incoming negotiated codec; the payload type is ignored
    pub fn find_receiver_slot(&self, descriptor: &CodecDescriptor) -> Slot {
        self.find_by_signature(
            &descriptor.name,
            descriptor.sample_rate_hz,
            descriptor.channels,
        )
    }

    /// Resolve and validate a codec before configuring an encoder with it
    ///
    /// Checks payload type, packet size and bit rate. Comfort noise and RED are
    /// resolved without packet size or rate checks.
    pub fn validate_send_codec(&self, descriptor: &CodecDescriptor) -> Result<Slot> {
        let slot = self.find_receiver_slot(descriptor);
        let index = match slot.index() {
            Some(index) => index,
            None => {
                return Err(CodecDbError::no_matching_codec(
                    descriptor.name.to_string(),
                    descriptor.sample_rate_hz,
                    descriptor.channels,
                ))
            }
        };

        let result = self.check_send_parameters(index, descriptor);
        if let Err(e) = &result {
            warn!("Rejected send codec {}: {}", descriptor, e);
        }
        result.map(|_| slot)
    }

    fn check_send_parameters(&self, index: usize, descriptor: &CodecDescriptor) -> Result<()> {
        validation::validate_payload_type(i32::from(descriptor.payload_type))?;

        if matches!(
            self.variants[index],
            CodecVariant::CnNb
                | CodecVariant::CnWb
                | CodecVariant::CnSwb
                | CodecVariant::CnFb
                | CodecVariant::Red
        ) {
            return Ok(());
        }

        validation::validate_packet_size(descriptor, &self.settings[index])?;
        validation::validate_rate(descriptor, self.descriptors[index].bitrate)
    }

    /// Iterate over the active codecs in slot order
    pub fn iter(&self) -> impl Iterator<Item = CodecEntry<'_>> + '_ {
        (0..self.len()).map(move |index| self.entry(index))
    }
}

impl Default for CodecDatabase {
    fn default() -> Self {
        Self::new(FeatureSelection::default())
    }
}
