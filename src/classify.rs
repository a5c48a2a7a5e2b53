use crate::{
    core::Bmi,
    error::{BmivizError, BmivizResult},
    frames::FrameSeq,
    model::{BandTable, Category, ColorLabel},
};

/// The matched band plus the value that matched it, immutable once computed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub bmi: f64,
    pub category: Category,
    pub color: ColorLabel,
    pub lower: f64,
    pub upper: f64,
}

impl Classification {
    pub fn frames(&self) -> FrameSeq {
        FrameSeq::for_classification(self)
    }
}

pub struct Classifier;

impl Classifier {
    #[tracing::instrument(skip(table))]
    pub fn classify(table: &BandTable, bmi: Bmi) -> BmivizResult<Classification> {
        table.validate()?;

        let ceiling = table.scale_max();
        if bmi.0 > ceiling {
            return Err(BmivizError::implausible(bmi.0, ceiling));
        }

        let band = table.band_for(bmi.0);
        tracing::debug!(bmi = bmi.0, category = %band.category, "classified");

        Ok(Classification {
            bmi: bmi.0,
            category: band.category,
            color: band.color,
            lower: band.lower,
            upper: band.upper,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(bmi: f64) -> BmivizResult<Classification> {
        Classifier::classify(&BandTable::standard(), Bmi(bmi))
    }

    #[test]
    fn mid_band_values_classify() {
        assert_eq!(classify(10.0).unwrap().category, Category::Underweight);
        assert_eq!(classify(22.0).unwrap().category, Category::Normal);
        assert_eq!(classify(27.0).unwrap().category, Category::Overweight);
        assert_eq!(classify(46.875).unwrap().category, Category::Obese);
    }

    #[test]
    fn boundary_values_fall_into_the_next_band() {
        assert_eq!(classify(18.5).unwrap().category, Category::Normal);
        assert_eq!(classify(25.0).unwrap().category, Category::Overweight);
        assert_eq!(classify(30.0).unwrap().category, Category::Obese);
    }

    #[test]
    fn ceiling_value_is_still_obese() {
        let c = classify(70.0).unwrap();
        assert_eq!(c.category, Category::Obese);
        assert_eq!(c.lower, 30.0);
        assert_eq!(c.upper, 70.0);
    }

    #[test]
    fn values_beyond_the_ceiling_are_implausible() {
        assert!(matches!(
            classify(70.01),
            Err(BmivizError::ImplausibleValue { .. })
        ));
        assert!(matches!(
            classify(2000.0),
            Err(BmivizError::ImplausibleValue {
                bmi,
                ceiling
            }) if bmi == 2000.0 && ceiling == 70.0
        ));
    }

    #[test]
    fn result_carries_the_matched_bounds_and_color() {
        let c = classify(22.0).unwrap();
        assert_eq!(c.lower, 18.5);
        assert_eq!(c.upper, 25.0);
        assert_eq!(c.color, ColorLabel::Green);
        assert_eq!(c.bmi, 22.0);
    }

    #[test]
    fn frames_span_lower_bound_to_value() {
        let c = classify(22.0).unwrap();
        let seq = c.frames();
        assert_eq!(seq.start(), 18.5);
        assert_eq!(seq.end(), 22.0);
    }
}
