use crate::error::{BmivizError, BmivizResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorLabel {
    Yellow,
    Green,
    Orange,
    Red,
}

impl ColorLabel {
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Self::Yellow => [255, 255, 0, 255],
            Self::Green => [0, 128, 0, 255],
            Self::Orange => [255, 165, 0, 255],
            Self::Red => [255, 0, 0, 255],
        }
    }
}

/// One contiguous BMI sub-range mapped to a category and display color.
/// `upper` is exclusive from the next band's perspective.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub color: ColorLabel,
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BandTable {
    pub bands: [Band; 4],
}

impl BandTable {
    pub fn standard() -> Self {
        Self {
            bands: [
                Band {
                    lower: 0.0,
                    upper: 18.5,
                    color: ColorLabel::Yellow,
                    category: Category::Underweight,
                },
                Band {
                    lower: 18.5,
                    upper: 25.0,
                    color: ColorLabel::Green,
                    category: Category::Normal,
                },
                Band {
                    lower: 25.0,
                    upper: 30.0,
                    color: ColorLabel::Orange,
                    category: Category::Overweight,
                },
                Band {
                    lower: 30.0,
                    upper: 70.0,
                    color: ColorLabel::Red,
                    category: Category::Obese,
                },
            ],
        }
    }

    /// Upper bound of the top band. Doubles as the chart ceiling and the
    /// implausibility threshold; the two are intentionally the same value.
    pub fn scale_max(&self) -> f64 {
        self.bands[3].upper
    }

    /// First band whose upper bound exceeds `value`, so a value exactly on a
    /// boundary falls into the next band. Values at or above the top band's
    /// upper bound resolve to the top band.
    pub fn band_for(&self, value: f64) -> &Band {
        self.bands
            .iter()
            .find(|b| value < b.upper)
            .unwrap_or(&self.bands[3])
    }

    pub fn validate(&self) -> BmivizResult<()> {
        for band in &self.bands {
            if !(band.lower < band.upper) {
                return Err(BmivizError::validation(
                    "band bounds must be strictly increasing",
                ));
            }
        }
        if !self.bands.windows(2).all(|w| w[0].upper == w[1].lower) {
            return Err(BmivizError::validation("band bounds must be contiguous"));
        }
        if self.bands[0].lower != 0.0 {
            return Err(BmivizError::validation("band scale must start at 0"));
        }
        Ok(())
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self::standard()
    }
}
