//! Feature selection
//!
//! Which optional codec variants a database contains. The process-wide database uses
//! [`FeatureSelection::from_build`], which mirrors the crate's Cargo features; tests and
//! hosts that load their own configuration can build a database from any selection.

use serde::{Deserialize, Serialize};

/// Optional codec capability flags
///
/// Variants with no flag (linear PCM, G.711, narrowband to super-wideband comfort
/// noise and telephone events) are present in every database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSelection {
    /// iSAC floating point: wideband, super-wideband and fullband
    pub isac: bool,
    /// iSAC fixed point: wideband only
    pub isacfx: bool,
    /// iLBC
    pub ilbc: bool,
    /// G.722 mono and stereo
    pub g722: bool,
    /// Opus
    pub opus: bool,
    /// G.729
    pub g729: bool,
    /// Redundant audio data
    pub red: bool,
    /// 48 kHz comfort noise
    pub cn_48khz: bool,
}

impl FeatureSelection {
    /// Selection with every optional codec disabled
    pub const fn none() -> Self {
        Self {
            isac: false,
            isacfx: false,
            ilbc: false,
            g722: false,
            opus: false,
            g729: false,
            red: false,
            cn_48khz: false,
        }
    }

    /// Selection with every optional codec enabled
    pub const fn all() -> Self {
        Self {
            isac: true,
            isacfx: true,
            ilbc: true,
            g722: true,
            opus: true,
            g729: true,
            red: true,
            cn_48khz: true,
        }
    }

    /// Selection matching the Cargo features this crate was compiled with
    pub const fn from_build() -> Self {
        Self {
            isac: cfg!(feature = "isac"),
            isacfx: cfg!(feature = "isacfx"),
            ilbc: cfg!(feature = "ilbc"),
            g722: cfg!(feature = "g722"),
            opus: cfg!(feature = "opus"),
            g729: cfg!(feature = "g729"),
            red: cfg!(feature = "red"),
            cn_48khz: cfg!(feature = "cn-48khz"),
        }
    }

    /// Enable or disable floating point iSAC
    pub fn with_isac(mut self, enabled: bool) -> Self {
        self.isac = enabled;
        self
    }

    /// Enable or disable fixed point iSAC
    pub fn with_isacfx(mut self, enabled: bool) -> Self {
        self.isacfx = enabled;
        self
    }

    /// Enable or disable iLBC
    pub fn with_ilbc(mut self, enabled: bool) -> Self {
        self.ilbc = enabled;
        self
    }

    /// Enable or disable G.722
    pub fn with_g722(mut self, enabled: bool) -> Self {
        self.g722 = enabled;
        self
    }

    /// Enable or disable Opus
    pub fn with_opus(mut self, enabled: bool) -> Self {
        self.opus = enabled;
        self
    }

    /// Enable or disable G.729
    pub fn with_g729(mut self, enabled: bool) -> Self {
        self.g729 = enabled;
        self
    }

    /// Enable or disable RED
    pub fn with_red(mut self, enabled: bool) -> Self {
        self.red = enabled;
        self
    }

    /// Enable or disable 48 kHz comfort noise
    pub fn with_cn_48khz(mut self, enabled: bool) -> Self {
        self.cn_48khz = enabled;
        self
    }

    /// True if either iSAC implementation is enabled
    pub fn any_isac(&self) -> bool {
        self.isac || self.isacfx
    }
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self::from_build()
    }
}
