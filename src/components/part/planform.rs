use serde::{Deserialize, Serialize};

use crate::utils::MIN_AREA;

/// Leading and trailing edge positions at one spanwise station (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Spanwise position from the root.
    pub y: f64,
    /// Leading edge, positive aft.
    pub le: f64,
    /// Trailing edge, positive aft.
    pub te: f64,
}

impl Station {
    pub fn chord(&self) -> f64 {
        self.te - self.le
    }
}

/// Spanwise outline of a lifting surface.
///
/// Symmetric surfaces store the half span and are mirrored; a mast stores
/// its full length from the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planform {
    pub stations: Vec<Station>,
    pub symmetric: bool,
}

/// Integrated planform quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanformProperties {
    /// Total area (m²).
    pub area: f64,
    /// Tip to tip, or root to tip for a mast (m).
    pub span: f64,
    /// Mean aerodynamic chord (m).
    pub mac: f64,
    /// Leading edge of the MAC relative to the root leading edge (m).
    pub x_mac: f64,
    /// Tip chord over root chord.
    pub taper: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
}

impl Planform {
    pub fn rectangular(chord: f64, span: f64, symmetric: bool) -> Self {
        Self::segmented(&[chord, chord], &[0.0, 0.0], span, symmetric)
    }

    /// Equally spaced stations from root to tip.
    ///
    /// Missing leading-edge offsets are taken as zero.
    pub fn segmented(chords: &[f64], le_offsets: &[f64], span: f64, symmetric: bool) -> Self {
        let length = if symmetric { span / 2.0 } else { span };
        let stations = match chords {
            [] => vec![
                Station { y: 0.0, le: 0.0, te: 0.0 },
                Station { y: length, le: 0.0, te: 0.0 },
            ],
            [only] => vec![
                Station { y: 0.0, le: 0.0, te: *only },
                Station { y: length, le: 0.0, te: *only },
            ],
            _ => {
                let last = (chords.len() - 1) as f64;
                chords
                    .iter()
                    .enumerate()
                    .map(|(i, &chord)| {
                        let le = le_offsets.get(i).copied().unwrap_or(0.0);
                        Station {
                            y: length * i as f64 / last,
                            le,
                            te: le + chord,
                        }
                    })
                    .collect()
            }
        };
        Self {
            stations,
            symmetric,
        }
    }

    pub fn span(&self) -> f64 {
        let length = self.stations.last().map_or(0.0, |s| s.y);
        if self.symmetric {
            2.0 * length
        } else {
            length
        }
    }

    pub fn root_chord(&self) -> f64 {
        self.stations.first().map_or(0.0, Station::chord)
    }

    /// Stretches the stations to a new span, keeping the chords.
    pub fn with_span(&self, span: f64) -> Self {
        let current = self.span();
        let ratio = if current > 0.0 { span / current } else { 0.0 };
        Self {
            stations: self
                .stations
                .iter()
                .map(|s| Station { y: s.y * ratio, ..*s })
                .collect(),
            symmetric: self.symmetric,
        }
    }

    /// Scales every chord and leading-edge offset so the root chord becomes `chord`.
    pub fn with_root_chord(&self, chord: f64) -> Self {
        let root = self.root_chord();
        let ratio = if root > 0.0 { chord / root } else { 0.0 };
        Self {
            stations: self
                .stations
                .iter()
                .map(|s| Station {
                    y: s.y,
                    le: s.le * ratio,
                    te: s.te * ratio,
                })
                .collect(),
            symmetric: self.symmetric,
        }
    }

    /// Trapezoidal integration of area, MAC and MAC position segment by segment.
    pub fn properties(&self) -> PlanformProperties {
        let mut sum_c = 0.0;
        let mut sum_c2 = 0.0;
        let mut sum_cx = 0.0;

        for pair in self.stations.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let h = b.y - a.y;
            let (c0, c1) = (a.chord(), b.chord());
            let (x0, x1) = (a.le, b.le);
            sum_c += h * (c0 + c1) / 2.0;
            sum_c2 += h * (c0 * c0 + c0 * c1 + c1 * c1) / 3.0;
            sum_cx += h * (2.0 * c0 * x0 + c0 * x1 + c1 * x0 + 2.0 * c1 * x1) / 6.0;
        }

        let root_chord = self.root_chord();
        let tip_chord = self.stations.last().map_or(0.0, Station::chord);
        let (mac, x_mac) = if sum_c > MIN_AREA {
            (sum_c2 / sum_c, sum_cx / sum_c)
        } else {
            (root_chord, 0.0)
        };

        PlanformProperties {
            area: if self.symmetric { 2.0 * sum_c } else { sum_c },
            span: self.span(),
            mac,
            x_mac,
            taper: if root_chord > 0.0 {
                tip_chord / root_chord
            } else {
                1.0
            },
            root_chord,
            tip_chord,
        }
    }
}
