//! Game variants and session configuration

use super::GameError;
use crate::core::Offset;
use std::fmt;

/// Default number of board rows
pub const DEFAULT_LINES: usize = 8;

/// Named game variant selecting the scoring tolerance
///
/// The offset is `4 - id`: the harder the variant, the narrower the Close band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Variant {
    /// Warmle (offset 3)
    #[default]
    Warmle,
    /// Warmle SUPER (offset 2)
    Super,
    /// Warmle SUPER + (offset 1)
    SuperPlus,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Warmle, Self::Super, Self::SuperPlus];

    /// Look up a variant by its id (1, 2 or 3)
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Warmle),
            2 => Some(Self::Super),
            3 => Some(Self::SuperPlus),
            _ => None,
        }
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Warmle => 1,
            Self::Super => 2,
            Self::SuperPlus => 3,
        }
    }

    #[must_use]
    pub const fn offset(self) -> Offset {
        Offset::new(4 - self.id())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warmle => "Warmle",
            Self::Super => "Warmle SUPER",
            Self::SuperPlus => "Warmle SUPER +",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    lines: usize,
    variant: Variant,
    offset: Offset,
}

impl GameConfig {
    /// Configuration for a variant with the default board height
    #[must_use]
    pub const fn for_variant(variant: Variant) -> Self {
        Self {
            lines: DEFAULT_LINES,
            variant,
            offset: variant.offset(),
        }
    }

    /// Switch variant, resetting the offset to the variant's own
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self.offset = variant.offset();
        self
    }

    /// Set the number of board rows
    ///
    /// # Errors
    /// Returns `GameError::InvalidLines` if `lines` is zero.
    pub fn with_lines(mut self, lines: usize) -> Result<Self, GameError> {
        if lines == 0 {
            return Err(GameError::InvalidLines(lines));
        }
        self.lines = lines;
        Ok(self)
    }

    /// Override the variant's offset with a custom, unvalidated value
    ///
    /// # Errors
    /// Returns `GameError::InvalidOffset` if `offset` is negative.
    pub fn with_offset(mut self, offset: i64) -> Result<Self, GameError> {
        self.offset = Offset::try_from(offset)?;
        Ok(self)
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_four_minus_id() {
        assert_eq!(Variant::Warmle.offset(), Offset::new(3));
        assert_eq!(Variant::Super.offset(), Offset::new(2));
        assert_eq!(Variant::SuperPlus.offset(), Offset::new(1));
        for variant in Variant::ALL {
            assert_eq!(variant.offset().value(), 4 - usize::from(variant.id()));
        }
    }

    #[test]
    fn from_id_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_id(variant.id()), Some(variant));
        }
        assert_eq!(Variant::from_id(0), None);
        assert_eq!(Variant::from_id(4), None);
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.lines(), DEFAULT_LINES);
        assert_eq!(config.variant(), Variant::Warmle);
        assert_eq!(config.offset(), Offset::new(3));
    }

    #[test]
    fn custom_offset_overrides_variant() {
        let config = GameConfig::for_variant(Variant::SuperPlus).with_offset(0).unwrap();
        assert_eq!(config.offset(), Offset::new(0));
        assert_eq!(config.variant(), Variant::SuperPlus);
    }

    #[test]
    fn negative_offset_is_rejected() {
        let result = GameConfig::default().with_offset(-2);
        assert!(matches!(result, Err(GameError::InvalidOffset(_))));
    }

    #[test]
    fn zero_lines_is_rejected() {
        assert_eq!(
            GameConfig::default().with_lines(0),
            Err(GameError::InvalidLines(0))
        );
        assert_eq!(GameConfig::default().with_lines(3).unwrap().lines(), 3);
    }
}
