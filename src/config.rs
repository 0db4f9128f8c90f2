//! Configuration for [`crate::HebrewDateConverter`].

use crate::error::{ConvertError, Result};
use crate::format::FormatFlags;
use serde::{Deserialize, Serialize};

/// What to do when a Hebrew date string cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Report the failure as an error.
    #[default]
    Strict,
    /// Hand the all-zero date to the calendar anyway. The calendar has no day
    /// number for it, so the result is the all-zero Gregorian date.
    PassThrough,
}

/// Settings shared by every conversion a converter performs.
///
/// # Example
///
/// ```
/// use hebrew_date::{ConverterConfig, FormatFlags, Validation};
///
/// let config = ConverterConfig::new()
///     .with_remove_year_prefix(false)
///     .with_format_flags(FormatFlags::ADD_GERESHAYIM)
///     .with_validation(Validation::PassThrough);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Strip a leading ה (thousands mark) from the year token.
    remove_year_prefix: bool,
    /// Failure handling for unparseable input.
    validation: Validation,
    /// Options for rendering Hebrew dates.
    format_flags: FormatFlags,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterConfig {
    /// Defaults: strip the year prefix, strict validation, no format flags.
    pub const fn new() -> Self {
        Self {
            remove_year_prefix: true,
            validation: Validation::Strict,
            format_flags: FormatFlags::empty(),
        }
    }

    pub const fn with_remove_year_prefix(mut self, remove: bool) -> Self {
        self.remove_year_prefix = remove;
        self
    }

    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub const fn with_format_flags(mut self, flags: FormatFlags) -> Self {
        self.format_flags = flags;
        self
    }

    pub const fn remove_year_prefix(&self) -> bool {
        self.remove_year_prefix
    }

    pub const fn validation(&self) -> Validation {
        self.validation
    }

    pub const fn format_flags(&self) -> FormatFlags {
        self.format_flags
    }

    /// Validates this configuration.
    ///
    /// # Errors
    /// Returns `ConvertError::UnknownFormatFlags` if the flags carry bits the
    /// renderer does not know (possible after deserializing raw bits).
    pub fn validate(&self) -> Result<()> {
        let unknown = self.format_flags.bits() & !FormatFlags::all().bits();
        if unknown != 0 {
            return Err(ConvertError::UnknownFormatFlags(unknown));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert!(config.remove_year_prefix());
        assert_eq!(config.validation(), Validation::Strict);
        assert_eq!(config.format_flags(), FormatFlags::empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ConverterConfig::new()
            .with_remove_year_prefix(false)
            .with_validation(Validation::PassThrough)
            .with_format_flags(FormatFlags::ADD_ALAFIM_GERESH);
        assert!(!config.remove_year_prefix());
        assert_eq!(config.validation(), Validation::PassThrough);
        assert_eq!(config.format_flags(), FormatFlags::ADD_ALAFIM_GERESH);
    }

    #[test]
    fn test_unknown_bits_rejected() {
        let config =
            ConverterConfig::new().with_format_flags(FormatFlags::from_bits_retain(0x41));
        assert_eq!(config.validate(), Err(ConvertError::UnknownFormatFlags(0x41)));
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"validation":"pass_through"}"#).unwrap();
        assert!(config.remove_year_prefix());
        assert_eq!(config.validation(), Validation::PassThrough);
    }
}
