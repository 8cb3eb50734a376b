//! # Codec-DB: Audio Codec Capability Database
//!
//! This library is the single source of truth for which audio codecs an audio-coding
//! pipeline can use. It resolves between the three ways codecs are identified across
//! RVOIP:
//!
//! - **Slot**: a compact index into the database tables
//! - **Signature**: name, sample rate and channel count
//! - **Descriptor**: the full codec record exchanged during session setup
//!
//! ## Usage
//!
//! ```rust
//! use codec_db::{CodecDescriptor, CodecVariant, Slot};
//!
//! codec_db::init()?;
//!
//! let pcmu = codec_db::find_by_signature("PCMU", 8000, 1);
//! assert_eq!(pcmu, codec_db::slot(CodecVariant::Pcmu));
//!
//! let entry = codec_db::describe(pcmu)?;
//! assert_eq!(entry.descriptor.payload_type, 0);
//!
//! // Incoming codec whose payload type was renegotiated
//! let offered = CodecDescriptor::new(97, "pcmu", 8000, 1);
//! assert_eq!(codec_db::find_receiver_slot(&offered), pcmu);
//! assert_eq!(codec_db::find_by_descriptor(&offered), Slot::NONE);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `isac`: iSAC wideband, super-wideband and fullband (enabled by default)
//! - `isacfx`: fixed point iSAC, wideband only
//! - `ilbc`: iLBC (enabled by default)
//! - `g722`: G.722 mono and stereo (enabled by default)
//! - `opus`: Opus (enabled by default)
//! - `g729`: G.729
//! - `red`: redundant audio data (enabled by default)
//! - `cn-48khz`: 48 kHz comfort noise
//!
//! Linear PCM, G.711, comfort noise up to 32 kHz and telephone events are always
//! present. A codec left out of the build resolves to [`Slot::NONE`] everywhere.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod database;
pub mod error;
pub mod features;
pub mod types;
pub mod validation;
pub mod variants;

use std::sync::OnceLock;
use tracing::{info, warn};

// Re-export commonly used types and functions
pub use database::CodecDatabase;
pub use error::{CodecDbError, ErrorCategory, Result};
pub use features::FeatureSelection;
pub use types::{
    CodecDescriptor, CodecEntry, CodecSettings, DecoderBinding, Slot, INVALID_SAMPLE_RATE_HZ,
    MAX_NUM_CODECS, MAX_NUM_PACKET_SIZES,
};
pub use validation::is_valid_payload_type;
pub use variants::CodecVariant;

/// Version information for the codec database
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide codec database
static DATABASE: OnceLock<CodecDatabase> = OnceLock::new();

/// Initialize the codec database
///
/// Installs a tracing subscriber if none is set and builds the process-wide database
/// from the Cargo features. Safe to call multiple times.
///
/// # Errors
///
/// Returns [`CodecDbError::AlreadyInitialized`] if [`init_with`] already installed a
/// different feature selection.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    let db = init_with(FeatureSelection::from_build())?;
    info!(
        "Codec-DB v{} initialized with {} codecs",
        VERSION,
        db.len()
    );

    Ok(())
}

/// Build the process-wide database from a custom feature selection
///
/// The first call wins. Later calls succeed only if they ask for the same selection.
///
/// # Errors
///
/// Returns [`CodecDbError::AlreadyInitialized`] if the database was already built
/// from a different selection.
pub fn init_with(selection: FeatureSelection) -> Result<&'static CodecDatabase> {
    let mut built = false;
    let db = DATABASE.get_or_init(|| {
        built = true;
        CodecDatabase::new(selection)
    });

    if built {
        info!("Built codec database: {} active codecs", db.len());
    }

    if db.selection() != &selection {
        warn!(
            "Codec database already built from {:?}, ignoring {:?}",
            db.selection(),
            selection
        );
        return Err(CodecDbError::AlreadyInitialized);
    }

    Ok(db)
}

/// The process-wide codec database, built from the Cargo features on first use
pub fn database() -> &'static CodecDatabase {
    DATABASE.get_or_init(|| CodecDatabase::new(FeatureSelection::from_build()))
}

/// Slot of a known variant in the process-wide database
pub fn slot(variant: CodecVariant) -> Slot {
    database().slot_of(variant)
}

/// Describe the codec in a slot
pub fn describe(slot: Slot) -> Result<CodecEntry<'static>> {
    database().describe(slot)
}

/// Sample rate of the codec in a slot
pub fn sample_rate_of(slot: Slot) -> Result<u32> {
    database().sample_rate_of(slot)
}

/// Slot matching a name, sample rate and channel count
pub fn find_by_signature(name: &str, sample_rate_hz: u32, channels: u8) -> Slot {
    database().find_by_signature(name, sample_rate_hz, channels)
}

/// Slot matching a descriptor including its payload type
pub fn find_by_descriptor(descriptor: &CodecDescriptor) -> Slot {
    database().find_by_descriptor(descriptor)
}

/// Slot matching a negotiated descriptor regardless of its payload type
pub fn find_receiver_slot(descriptor: &CodecDescriptor) -> Slot {
    database().find_receiver_slot(descriptor)
}

/// Get library information
pub fn info() -> LibraryInfo {
    let db = database();
    LibraryInfo {
        version: VERSION,
        selection: *db.selection(),
        active_codecs: db.iter().map(|entry| entry.variant).collect(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Feature selection of the process-wide database
    pub selection: FeatureSelection,
    /// Active codec variants in slot order
    pub active_codecs: Vec<CodecVariant>,
}
