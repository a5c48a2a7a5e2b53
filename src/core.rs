use crate::error::{BmivizError, BmivizResult};

/// One weight/height reading, taken fresh on every run.
///
/// Height must be strictly positive; weight > 0 is a precondition on the
/// caller and is not checked here.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_cm: f64) -> BmivizResult<Self> {
        if height_cm.is_nan() || height_cm <= 0.0 {
            return Err(BmivizError::invalid_input("height must be greater than 0"));
        }
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }

    pub fn bmi(self) -> Bmi {
        let height_m = self.height_cm / 100.0;
        Bmi(self.weight_kg / (height_m * height_m))
    }
}

/// weight(kg) / height(m)^2, immutable once computed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Bmi(pub f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_matches_worked_examples() {
        let m = Measurement::new(70.0, 175.0).unwrap();
        assert!((m.bmi().0 - 22.857_142_857_142_858).abs() < 1e-9);

        let m = Measurement::new(120.0, 160.0).unwrap();
        assert_eq!(m.bmi().0, 46.875);

        let m = Measurement::new(500.0, 50.0).unwrap();
        assert_eq!(m.bmi().0, 2000.0);
    }

    #[test]
    fn non_positive_height_is_rejected() {
        assert!(Measurement::new(70.0, 0.0).is_err());
        assert!(Measurement::new(70.0, -175.0).is_err());
        assert!(Measurement::new(70.0, f64::NAN).is_err());
    }

    #[test]
    fn weight_is_not_validated() {
        // Precondition, not a check: the constructor accepts any weight.
        assert!(Measurement::new(0.0, 175.0).is_ok());
        assert!(Measurement::new(-1.0, 175.0).is_ok());
    }
}
