use serde::{Deserialize, Serialize};

use super::Coefficients;
use crate::utils::catmull_rom;

/// Equally spaced angle-of-attack sampling of a polar table.
///
/// The first and last samples are guard points used only as outer neighbours
/// for the cubic interpolation; queries are held one step inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AoaGrid {
    /// Angle of the first sample (deg).
    pub start: f64,
    /// Spacing between samples (deg).
    pub step: f64,
    /// Number of samples, guards included.
    pub len: usize,
}

/// 15 samples at 4° from −28° to +28°.
pub const GRID_15: AoaGrid = AoaGrid {
    start: -28.0,
    step: 4.0,
    len: 15,
};

/// 25 samples at 2° from −24° to +24°.
pub const GRID_25: AoaGrid = AoaGrid {
    start: -24.0,
    step: 2.0,
    len: 25,
};

impl AoaGrid {
    /// Smallest angle that can be queried without touching the guard sample.
    pub fn min_query(&self) -> f64 {
        self.start + self.step
    }

    /// Largest angle that can be queried without touching the guard sample.
    pub fn max_query(&self) -> f64 {
        self.start + self.step * (self.len as f64 - 2.0)
    }

    /// Angle of sample `index`.
    pub fn angle(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Iterator over all sample angles.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.angle(i))
    }

    /// Cubic interpolation of `values` (sampled on this grid) at `aoa`.
    ///
    /// Exact grid hits return the raw sample.
    pub fn interpolate(&self, values: &[f64], aoa: f64) -> f64 {
        debug_assert_eq!(values.len(), self.len);
        let aoa = aoa.clamp(self.min_query(), self.max_query());
        let pos = (aoa - self.start) / self.step;
        let index = pos.floor() as usize;
        let t = pos - index as f64;

        if t < 1e-9 {
            return values[index];
        }
        if t > 1.0 - 1e-9 {
            return values[index + 1];
        }

        catmull_rom(
            values[index - 1],
            values[index],
            values[index + 1],
            values[index + 2],
            t,
        )
    }
}

/// Compile-time polar data for a built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PolarData<const N: usize> {
    pub cl: [f64; N],
    pub cd: [f64; N],
    pub cm: [f64; N],
}

/// Lift, drag and moment samples on a fixed AoA grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarTable {
    pub grid: AoaGrid,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    pub cm: Vec<f64>,
}

impl PolarTable {
    pub(crate) fn from_data<const N: usize>(grid: AoaGrid, data: &PolarData<N>) -> Self {
        debug_assert_eq!(grid.len, N);
        Self {
            grid,
            cl: data.cl.to_vec(),
            cd: data.cd.to_vec(),
            cm: data.cm.to_vec(),
        }
    }

    pub fn sample(&self, aoa: f64) -> Coefficients {
        Coefficients {
            cl: self.grid.interpolate(&self.cl, aoa),
            cd: self.grid.interpolate(&self.cd, aoa),
            cm: self.grid.interpolate(&self.cm, aoa),
        }
    }
}

/// A named foil backed by a single 15- or 25-point polar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulatedFoil {
    pub name: String,
    pub table: PolarTable,
    pub reference_reynolds: f64,
}

impl TabulatedFoil {
    pub fn new(name: impl Into<String>, table: PolarTable, reference_reynolds: f64) -> Self {
        Self {
            name: name.into(),
            table,
            reference_reynolds,
        }
    }

    pub fn coefficients(&self, aoa: f64) -> Coefficients {
        self.table.sample(aoa)
    }

    /// Number of samples in the underlying table (15 or 25).
    pub fn points(&self) -> usize {
        self.table.grid.len
    }
}
