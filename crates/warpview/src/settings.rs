use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use warpcore::{EngineTuning, SpringTuning, WaveTuning};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read tuning file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// On-disk tuning overrides. Every field falls back to the built-in
/// constants, so a file may override a single value and nothing else.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TuningFile {
    spring: SpringSection,
    wave: WaveSection,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct SpringSection {
    engaged_stiffness: f32,
    engaged_damping: f32,
    engaged_target: f32,
    released_stiffness: f32,
    released_damping: f32,
    timestep: f32,
    reset_threshold: f32,
}

impl Default for SpringSection {
    fn default() -> Self {
        let tuning = SpringTuning::default();
        Self {
            engaged_stiffness: tuning.engaged_stiffness,
            engaged_damping: tuning.engaged_damping,
            engaged_target: tuning.engaged_target,
            released_stiffness: tuning.released_stiffness,
            released_damping: tuning.released_damping,
            timestep: tuning.timestep,
            reset_threshold: tuning.reset_threshold,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct WaveSection {
    base_amplitude: f32,
    amplitude_sway: f32,
    amplitude_sway_rate: f32,
    base_frequency: f32,
    frequency_sway: f32,
    frequency_sway_rate: f32,
    phase_rate: f32,
}

impl Default for WaveSection {
    fn default() -> Self {
        let tuning = WaveTuning::default();
        Self {
            base_amplitude: tuning.base_amplitude,
            amplitude_sway: tuning.amplitude_sway,
            amplitude_sway_rate: tuning.amplitude_sway_rate,
            base_frequency: tuning.base_frequency,
            frequency_sway: tuning.frequency_sway,
            frequency_sway_rate: tuning.frequency_sway_rate,
            phase_rate: tuning.phase_rate,
        }
    }
}

impl TuningFile {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn into_tuning(self) -> Result<EngineTuning, SettingsError> {
        validate_positive_finite(self.spring.timestep, "spring.timestep")?;
        validate_positive_finite(self.spring.reset_threshold, "spring.reset_threshold")?;
        validate_positive_finite(self.spring.engaged_stiffness, "spring.engaged_stiffness")?;
        validate_positive_finite(self.spring.released_stiffness, "spring.released_stiffness")?;
        validate_non_negative(self.spring.engaged_damping, "spring.engaged_damping")?;
        validate_non_negative(self.spring.released_damping, "spring.released_damping")?;

        Ok(EngineTuning {
            spring: SpringTuning {
                engaged_stiffness: self.spring.engaged_stiffness,
                engaged_damping: self.spring.engaged_damping,
                engaged_target: self.spring.engaged_target,
                released_stiffness: self.spring.released_stiffness,
                released_damping: self.spring.released_damping,
                timestep: self.spring.timestep,
                reset_threshold: self.spring.reset_threshold,
            },
            wave: WaveTuning {
                base_amplitude: self.wave.base_amplitude,
                amplitude_sway: self.wave.amplitude_sway,
                amplitude_sway_rate: self.wave.amplitude_sway_rate,
                base_frequency: self.wave.base_frequency,
                frequency_sway: self.wave.frequency_sway,
                frequency_sway_rate: self.wave.frequency_sway_rate,
                phase_rate: self.wave.phase_rate,
            },
        })
    }
}

/// Loads and validates a tuning file; absent sections and fields keep the
/// built-in constants.
pub fn load_tuning(path: &Path) -> Result<EngineTuning, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file = TuningFile::parse(&text).map_err(|source| SettingsError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    file.into_tuning()
}

fn validate_positive_finite(value: f32, field: &'static str) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn validate_non_negative(value: f32, field: &'static str) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be non-negative",
        });
    }
    Ok(())
}
