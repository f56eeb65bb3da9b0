use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{data, Coefficients, GRID_15};
use crate::utils::{band_weight, lerp_unclamped};

/// Thickness and camber limits of the reference family (%).
const THICKNESS_RANGE: (f64, f64) = (1.0, 20.0);
const CAMBER_RANGE: (f64, f64) = (-20.0, 20.0);

/// NACA 4-digit family blended from 20 reference polars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericFoil {
    pub name: String,
    pub reference_reynolds: f64,
}

impl GenericFoil {
    pub fn new(name: impl Into<String>, reference_reynolds: f64) -> Self {
        Self {
            name: name.into(),
            reference_reynolds,
        }
    }

    pub fn coefficients(&self, aoa: f64, thickness: f64, camber: f64) -> Coefficients {
        let clamped_t = thickness.clamp(THICKNESS_RANGE.0, THICKNESS_RANGE.1);
        let clamped_c = camber.clamp(CAMBER_RANGE.0, CAMBER_RANGE.1);
        if clamped_t != thickness || clamped_c != camber {
            warn!(
                foil = %self.name,
                thickness,
                camber,
                "generic foil outside the reference family, clamping"
            );
        }

        if clamped_c < 0.0 {
            let mirrored = blend(-aoa, clamped_t, -clamped_c);
            Coefficients {
                cl: -mirrored.cl,
                cd: mirrored.cd,
                cm: -mirrored.cm,
            }
        } else {
            blend(aoa, clamped_t, clamped_c)
        }
    }
}

/// Bilinear blend of the four bracketing reference polars.
///
/// Thickness below the first band holds the 5 % polars.
fn blend(aoa: f64, thickness: f64, camber: f64) -> Coefficients {
    let thickness = thickness.max(data::THICKNESS_BANDS[0]);
    let (ti, wt) = band_weight(thickness, data::THICKNESS_BANDS[0], 5.0, 4);
    let (ci, wc) = band_weight(camber, data::CAMBER_BANDS[0], 5.0, 5);

    let sample = |table: &[[[f64; 15]; 5]; 4]| {
        let at = |t: usize, c: usize| GRID_15.interpolate(&table[t][c], aoa);
        let thin = lerp_unclamped(at(ti, ci), at(ti, ci + 1), wc);
        let thick = lerp_unclamped(at(ti + 1, ci), at(ti + 1, ci + 1), wc);
        lerp_unclamped(thin, thick, wt)
    };

    Coefficients {
        cl: sample(&data::GENERIC_CL),
        cd: sample(&data::GENERIC_CD),
        cm: sample(&data::GENERIC_CM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn foil() -> GenericFoil {
        GenericFoil::new("NACA 4-digit", 1e6)
    }

    #[test]
    fn test_band_corners_return_reference_polar() {
        let c = foil().coefficients(8.0, 10.0, 5.0);
        // Index 9 of the 15-point grid is +8°.
        assert_eq!(c.cl, data::GENERIC_CL[1][1][9]);
        assert_eq!(c.cd, data::GENERIC_CD[1][1][9]);
    }

    #[test]
    fn test_negative_camber_mirrors() {
        let foil = foil();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let aoa: f64 = rng.gen_range(-18.0..18.0);
            let t: f64 = rng.gen_range(5.0..20.0);
            let c: f64 = rng.gen_range(0.5..20.0);
            let pos = foil.coefficients(-aoa, t, c);
            let neg = foil.coefficients(aoa, t, -c);
            assert_relative_eq!(neg.cl, -pos.cl, epsilon = 1e-12);
            assert_relative_eq!(neg.cd, pos.cd, epsilon = 1e-12);
            assert_relative_eq!(neg.cm, -pos.cm, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_thin_sections_hold_first_band() {
        let foil = foil();
        assert_eq!(
            foil.coefficients(4.0, 2.0, 3.0),
            foil.coefficients(4.0, 5.0, 3.0)
        );
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let foil = foil();
        assert_eq!(
            foil.coefficients(4.0, 35.0, 40.0),
            foil.coefficients(4.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_blend_is_continuous_across_bands() {
        let foil = foil();
        let below = foil.coefficients(6.0, 9.999_999, 4.0);
        let above = foil.coefficients(6.0, 10.000_001, 4.0);
        assert_relative_eq!(below.cl, above.cl, epsilon = 1e-5);
        let below = foil.coefficients(6.0, 12.0, 9.999_999);
        let above = foil.coefficients(6.0, 12.0, 10.000_001);
        assert_relative_eq!(below.cd, above.cd, epsilon = 1e-6);
    }

    #[test]
    fn test_camber_adds_lift() {
        let foil = foil();
        assert!(foil.coefficients(0.0, 12.0, 4.0).cl > 0.3);
        assert_relative_eq!(foil.coefficients(0.0, 12.0, 0.0).cl, 0.0, epsilon = 1e-12);
    }
}
