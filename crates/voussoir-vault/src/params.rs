//! Barrel-vault input parameters.

use serde::{Deserialize, Serialize};

use crate::course::block_count;
use crate::error::{Result, VaultError};

/// Largest number of blocks a single vault may be split into.
pub const MAX_BLOCKS: usize = 1_000_000;

/// Dimensions and subdivision of a barrel vault.
///
/// Lengths share whatever unit the caller works in (metres and millimetres
/// are both common). Every field has a default, so a configuration file may
/// set only the values it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultParameters {
    /// Horizontal distance between the two springing lines.
    pub span: f64,
    /// Extent of the vault perpendicular to the span.
    pub length: f64,
    /// Thickness of the vault shell.
    pub thickness: f64,
    /// Height of the arch centerline above the springing line.
    pub rise: f64,
    /// Number of voussoirs around the arch.
    pub voussoirs_span: usize,
    /// Number of voussoir courses along the vault length.
    pub voussoirs_length: usize,
    /// Keep the arch centerline at z = 0 instead of resting the lowest
    /// block vertex on z = 0.
    pub zero_is_centerline_or_lowestpoint: bool,
}

impl Default for VaultParameters {
    fn default() -> Self {
        Self {
            span: 6.0,
            length: 6.0,
            thickness: 0.25,
            rise: 0.6,
            voussoirs_span: 9,
            voussoirs_length: 6,
            zero_is_centerline_or_lowestpoint: false,
        }
    }
}

impl VaultParameters {
    /// Parameters for a vault of the given dimensions with default counts.
    pub fn new(span: f64, length: f64, thickness: f64, rise: f64) -> Self {
        Self {
            span,
            length,
            thickness,
            rise,
            ..Self::default()
        }
    }

    /// Set the number of voussoirs around the arch and along the length.
    pub fn with_voussoirs(mut self, span: usize, length: usize) -> Self {
        self.voussoirs_span = span;
        self.voussoirs_length = length;
        self
    }

    /// Keep the arch centerline at z = 0.
    pub fn with_centerline_origin(mut self, keep: bool) -> Self {
        self.zero_is_centerline_or_lowestpoint = keep;
        self
    }

    /// Radius of the circular arc through both springing points and the crown.
    pub fn radius(&self) -> f64 {
        self.rise / 2.0 + self.span * self.span / (8.0 * self.rise)
    }

    /// Check every geometric precondition.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("span", self.span),
            ("length", self.length),
            ("thickness", self.thickness),
            ("rise", self.rise),
        ] {
            if !value.is_finite() {
                return Err(VaultError::Configuration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value <= 0.0 {
                return Err(VaultError::Configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.voussoirs_span == 0 {
            return Err(VaultError::Configuration(
                "voussoirs_span must be at least 1".into(),
            ));
        }
        if self.voussoirs_length == 0 {
            return Err(VaultError::Configuration(
                "voussoirs_length must be at least 1".into(),
            ));
        }
        match block_count(self.voussoirs_span, self.voussoirs_length) {
            Some(n) if n <= MAX_BLOCKS => {}
            _ => {
                return Err(VaultError::Configuration(format!(
                    "{} x {} voussoirs exceeds the limit of {MAX_BLOCKS} blocks",
                    self.voussoirs_span, self.voussoirs_length
                )));
            }
        }
        if self.rise >= self.span / 2.0 {
            return Err(VaultError::Configuration(format!(
                "rise ({}) must be less than half the span ({})",
                self.rise,
                self.span / 2.0
            )));
        }
        let radius = self.radius();
        if !radius.is_finite() {
            return Err(VaultError::Configuration(format!(
                "arch radius is not finite for span {} and rise {}",
                self.span, self.rise
            )));
        }
        if self.thickness >= 2.0 * radius {
            return Err(VaultError::Configuration(format!(
                "thickness ({}) must be less than the arch diameter ({})",
                self.thickness,
                2.0 * radius
            )));
        }
        Ok(())
    }
}
