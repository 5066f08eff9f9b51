/// A single house with the features the model is fitted on.
///
/// Half baths count as `0.5` in `baths`. None of the fields is ever NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseRecord {
    beds: f64,
    baths: f64,
    squarefeet: f64,
}

impl HouseRecord {
    /// Creates a new `HouseRecord`.
    ///
    /// # Arguments
    /// * `beds` - Bedrooms above grade.
    /// * `baths` - Full baths plus half of the half baths.
    /// * `squarefeet` - Above grade living area.
    ///
    /// # Returns
    /// `None` if any of the values is NaN.
    pub fn new(beds: f64, baths: f64, squarefeet: f64) -> Option<Self> {
        if beds.is_nan() || baths.is_nan() || squarefeet.is_nan() {
            return None;
        }

        Some(Self {
            beds,
            baths,
            squarefeet,
        })
    }

    #[inline]
    pub fn beds(&self) -> f64 {
        self.beds
    }

    #[inline]
    pub fn baths(&self) -> f64 {
        self.baths
    }

    #[inline]
    pub fn squarefeet(&self) -> f64 {
        self.squarefeet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_fields_are_rejected() {
        assert!(HouseRecord::new(f64::NAN, 1.0, 1000.0).is_none());
        assert!(HouseRecord::new(2.0, f64::NAN, 1000.0).is_none());
        assert!(HouseRecord::new(2.0, 1.0, f64::NAN).is_none());
    }

    #[test]
    fn valid_record_exposes_its_fields() {
        let r = HouseRecord::new(3.0, 2.5, 1710.0).unwrap();
        assert_eq!(r.beds(), 3.0);
        assert_eq!(r.baths(), 2.5);
        assert_eq!(r.squarefeet(), 1710.0);
    }
}
