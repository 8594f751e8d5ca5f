//! Vault parameters from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use voussoir_vault::VaultParameters;

/// Command-line overrides for individual vault parameters.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    /// Span between the springing lines
    #[arg(long)]
    pub span: Option<f64>,
    /// Length of the vault perpendicular to the span
    #[arg(long)]
    pub length: Option<f64>,
    /// Shell thickness
    #[arg(long)]
    pub thickness: Option<f64>,
    /// Rise of the arch centerline
    #[arg(long)]
    pub rise: Option<f64>,
    /// Number of voussoirs around the arch
    #[arg(long)]
    pub voussoirs_span: Option<usize>,
    /// Number of courses along the length
    #[arg(long)]
    pub voussoirs_length: Option<usize>,
    /// Keep the arch centerline at z = 0 instead of resting the vault on it
    #[arg(long)]
    pub keep_centerline: bool,
}

impl ParamArgs {
    /// Apply the overrides that were given on top of `base`.
    pub fn apply(&self, mut base: VaultParameters) -> VaultParameters {
        if let Some(v) = self.span {
            base.span = v;
        }
        if let Some(v) = self.length {
            base.length = v;
        }
        if let Some(v) = self.thickness {
            base.thickness = v;
        }
        if let Some(v) = self.rise {
            base.rise = v;
        }
        if let Some(v) = self.voussoirs_span {
            base.voussoirs_span = v;
        }
        if let Some(v) = self.voussoirs_length {
            base.voussoirs_length = v;
        }
        if self.keep_centerline {
            base.zero_is_centerline_or_lowestpoint = true;
        }
        base
    }
}

/// Parse parameters from TOML text; missing keys take their defaults.
pub fn parse_parameters(text: &str) -> Result<VaultParameters> {
    toml::from_str(text).context("invalid vault configuration")
}

/// Resolve the parameters for a run: file (if any), then overrides.
pub fn load_parameters(config: Option<&Path>, overrides: &ParamArgs) -> Result<VaultParameters> {
    let base = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_parameters(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => VaultParameters::default(),
    };
    Ok(overrides.apply(base))
}
