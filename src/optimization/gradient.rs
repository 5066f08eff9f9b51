/// Derivative of `(a * (bed + bath) - actual_sf)^2` with respect to `a`,
/// evaluated at the given `a`.
///
/// # Arguments
/// * `bed` - Bedroom count of the sample.
/// * `bath` - Bath count of the sample.
/// * `a` - Current coefficient.
/// * `actual_sf` - The sample's real living area.
pub fn partial_derivative(bed: f64, bath: f64, a: f64, actual_sf: f64) -> f64 {
    (2.0 * a * bed.powi(2)) + (4.0 * a * bed * bath) + (2.0 * a * bath.powi(2))
        - (2.0 * bed * actual_sf)
        - (2.0 * bath * actual_sf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::predict;

    #[test]
    fn known_value() {
        let d = partial_derivative(2.0, 1.0, 0.1, 1000.0);
        assert!((d - -3998.2).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn matches_the_factored_form() {
        let cases = [
            (3.0, 2.0, 0.1, 1500.0),
            (4.0, 3.5, 250.0, 2100.0),
            (1.0, 0.5, -3.0, 600.0),
            (0.0, 0.0, 12.0, 999.0),
        ];

        for (bed, bath, a, sf) in cases {
            let expected = 2.0 * (bed + bath) * (predict(bed, bath, a) - sf);
            let got = partial_derivative(bed, bath, a, sf);
            assert!((got - expected).abs() < 1e-6 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn is_zero_on_an_exact_fit() {
        assert_eq!(partial_derivative(2.0, 2.0, 0.5, 2.0), 0.0);
    }
}
