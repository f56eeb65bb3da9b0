mod planform;

pub use planform::{Planform, PlanformProperties, Station};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::components::{FlowState, FoilProfile};
use crate::resources::{FoilBounds, ModelConfig};
use crate::utils::clamp_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Wing,
    Stabilizer,
    Mast,
    Fuselage,
}

impl PartKind {
    /// The mast keeps its own angle when the craft pitches.
    pub fn follows_pitch(&self) -> bool {
        !matches!(self, PartKind::Mast)
    }

    /// Mast lift is a side force and stays out of the vertical balance.
    pub fn carries_load(&self) -> bool {
        !matches!(self, PartKind::Mast)
    }
}

/// Everything an evaluation depends on besides the part geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalKey {
    pub foil: String,
    pub thickness: f64,
    pub camber: f64,
    pub aoa: f64,
    pub flow: FlowState,
    pub submersion: f64,
    pub model: ModelConfig,
}

/// Cached coefficients and forces of one part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartOutputs {
    /// Effective angle of attack after pitch, downwash and clamping (deg)
    pub aoa: f64,
    pub cl: f64,
    /// Sum of profile, skin friction and induced drag
    pub cd: f64,
    pub cd_profile: f64,
    pub cd_friction: f64,
    pub cd_induced: f64,
    pub cd_junction: f64,
    pub cd_spray: f64,
    pub cm: f64,
    /// N
    pub lift: f64,
    /// N
    pub drag: f64,
    /// N
    pub junction_drag: f64,
    /// N
    pub spray_drag: f64,
    /// N·m, nose-up positive
    pub moment: f64,
    pub reynolds: f64,
    pub aspect_ratio: f64,
    /// Wetted planform area (m²)
    pub area: f64,
    /// Wetted span (m)
    pub span: f64,
    pub ci_eff: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct PartCache {
    key: EvalKey,
    outputs: PartOutputs,
}

/// A lifting surface with its section, placement and cached aerodynamics.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub kind: PartKind,
    foil: Arc<FoilProfile>,
    planform: Planform,
    properties: PlanformProperties,
    xpos: f64,
    zpos: f64,
    thickness: f64,
    camber: f64,
    aoa: f64,
    junctions: u32,
    include_moment: bool,
    bounds: FoilBounds,
    cache: Option<PartCache>,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        kind: PartKind,
        foil: Arc<FoilProfile>,
        planform: Planform,
    ) -> Self {
        let properties = planform.properties();
        Self {
            name: name.into(),
            kind,
            foil,
            planform,
            properties,
            xpos: 0.0,
            zpos: 0.0,
            thickness: 12.0,
            camber: 0.0,
            aoa: 0.0,
            junctions: 0,
            include_moment: true,
            bounds: FoilBounds::default(),
            cache: None,
        }
    }

    pub fn with_bounds(mut self, bounds: FoilBounds) -> Self {
        self.bounds = bounds;
        self.set_thickness(self.thickness);
        self.set_camber(self.camber);
        self.set_aoa(self.aoa);
        self
    }

    pub fn with_section(mut self, thickness: f64, camber: f64, aoa: f64) -> Self {
        self.set_thickness(thickness);
        self.set_camber(camber);
        self.set_aoa(aoa);
        self
    }

    pub fn with_position(mut self, xpos: f64, zpos: f64) -> Self {
        self.set_position(xpos, zpos);
        self
    }

    pub fn with_junctions(mut self, junctions: u32) -> Self {
        self.junctions = junctions;
        self.invalidate();
        self
    }

    pub fn with_moment(mut self, include: bool) -> Self {
        self.include_moment = include;
        self.invalidate();
        self
    }

    /// Drops the cached outputs; the next evaluation recomputes them.
    pub(crate) fn invalidate(&mut self) {
        self.cache = None;
    }

    fn clamp_input(&self, label: &str, value: f64, range: (f64, f64)) -> f64 {
        let (clamped, moved) = clamp_report(value, range);
        if moved {
            warn!(
                part = %self.name,
                value,
                clamped,
                "{label} outside [{}, {}], clamping",
                range.0,
                range.1
            );
        }
        clamped
    }

    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = self.clamp_input("thickness", thickness, self.bounds.thickness_range);
        self.invalidate();
    }

    pub fn set_camber(&mut self, camber: f64) {
        self.camber = self.clamp_input("camber", camber, self.bounds.camber_range);
        self.invalidate();
    }

    pub fn set_aoa(&mut self, aoa: f64) {
        self.aoa = self.clamp_input("aoa", aoa, self.bounds.aoa_range);
        self.invalidate();
    }

    pub fn set_position(&mut self, xpos: f64, zpos: f64) {
        self.xpos = xpos;
        self.zpos = zpos;
        self.invalidate();
    }

    pub fn set_foil(&mut self, foil: Arc<FoilProfile>) {
        self.foil = foil;
        self.invalidate();
    }

    pub fn set_planform(&mut self, planform: Planform) {
        self.properties = planform.properties();
        self.planform = planform;
        self.invalidate();
    }

    pub fn set_span(&mut self, span: f64) {
        let planform = self.planform.with_span(span.max(0.0));
        self.set_planform(planform);
    }

    pub fn set_chord(&mut self, chord: f64) {
        let planform = self.planform.with_root_chord(chord.max(0.0));
        self.set_planform(planform);
    }

    pub fn foil(&self) -> &Arc<FoilProfile> {
        &self.foil
    }

    pub fn planform(&self) -> &Planform {
        &self.planform
    }

    pub fn properties(&self) -> &PlanformProperties {
        &self.properties
    }

    pub fn xpos(&self) -> f64 {
        self.xpos
    }

    pub fn zpos(&self) -> f64 {
        self.zpos
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn camber(&self) -> f64 {
        self.camber
    }

    pub fn aoa(&self) -> f64 {
        self.aoa
    }

    pub fn junctions(&self) -> u32 {
        self.junctions
    }

    pub fn include_moment(&self) -> bool {
        self.include_moment
    }

    pub fn bounds(&self) -> &FoilBounds {
        &self.bounds
    }

    pub fn chord(&self) -> f64 {
        self.properties.root_chord
    }

    pub fn span(&self) -> f64 {
        self.properties.span
    }

    pub fn area(&self) -> f64 {
        self.properties.area
    }

    /// Geometric aspect ratio of the whole surface.
    pub fn aspect_ratio(&self) -> f64 {
        if self.properties.area > 0.0 {
            self.properties.span * self.properties.span / self.properties.area
        } else {
            0.0
        }
    }

    /// True when the cached outputs were computed for `key`.
    pub fn is_current(&self, key: &EvalKey) -> bool {
        self.cache.as_ref().is_some_and(|c| &c.key == key)
    }

    /// Outputs of the last evaluation, if no input has changed since.
    ///
    /// Part setters and the craft's flow, pitch, submersion and model setters
    /// all clear the cache, so a `Some` here always matches the current state.
    pub fn outputs(&self) -> Option<&PartOutputs> {
        self.cache.as_ref().map(|c| &c.outputs)
    }

    pub(crate) fn store(&mut self, key: EvalKey, outputs: PartOutputs) {
        self.cache = Some(PartCache { key, outputs });
    }
}
