//! Flow solver: ambient flow plus part geometry to coefficients and forces.
//!
//! Everything here is a pure function of its inputs; the only side effect is
//! the evaluated part's cache.

pub mod drag;
pub mod lift;

use tracing::{debug, trace};

use crate::components::{EvalKey, FlowState, FoilQuery, Part, PartKind, PartOutputs};
use crate::resources::ModelConfig;
use crate::utils::{clamp_report, MIN_AREA, MIN_ASPECT_RATIO};

/// Explicit inputs shared by every part evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    /// Flow around the foils.
    pub flow: FlowState,
    /// Air around the rider and board.
    pub air: FlowState,
    pub model: ModelConfig,
}

impl EvalContext {
    pub fn new(flow: FlowState, air: FlowState, model: ModelConfig) -> Self {
        Self { flow, air, model }
    }

    pub fn with_velocity(&self, velocity: f64) -> Self {
        Self {
            flow: self.flow.with_velocity(velocity),
            air: self.air.with_velocity(velocity),
            model: self.model,
        }
    }
}

/// Lift state of the main wing seen by the stabilizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingWake {
    pub cl: f64,
    pub aspect_ratio: f64,
}

/// Effective angle of attack of `part` (deg).
pub fn effective_aoa(part: &Part, model: &ModelConfig, pitch: f64, wake: Option<WingWake>) -> f64 {
    let mut aoa = part.aoa();
    if part.kind.follows_pitch() {
        aoa += pitch;
    }
    if part.kind == PartKind::Stabilizer && model.downwash {
        if let Some(wake) = wake {
            aoa -= lift::downwash(wake.cl, wake.aspect_ratio.max(MIN_ASPECT_RATIO));
        }
    }

    let (clamped, moved) = clamp_report(aoa, model.bounds.aoa_range);
    if moved {
        debug!(part = %part.name, aoa, clamped, "effective aoa clamped");
    }
    clamped
}

/// Evaluates `part` in the given context, reusing the cache when nothing changed.
pub fn evaluate_part(
    part: &mut Part,
    ctx: &EvalContext,
    pitch: f64,
    submersion: f64,
    wake: Option<WingWake>,
) -> PartOutputs {
    let model = &ctx.model;
    let aoa = effective_aoa(part, model, pitch, wake);
    let fraction = if part.kind == PartKind::Mast {
        submersion.clamp(0.0, 1.0)
    } else {
        1.0
    };

    let key = EvalKey {
        foil: part.foil().name().to_string(),
        thickness: part.thickness(),
        camber: part.camber(),
        aoa,
        flow: ctx.flow,
        submersion: fraction,
        model: *model,
    };
    if let Some(outputs) = part.outputs().filter(|_| part.is_current(&key)) {
        return *outputs;
    }

    let outputs = compute_outputs(part, ctx, aoa, fraction);
    trace!(
        part = %part.name,
        aoa,
        cl = outputs.cl,
        cd = outputs.cd,
        lift = outputs.lift,
        drag = outputs.drag,
        "part evaluated"
    );
    part.store(key, outputs);
    outputs
}

fn compute_outputs(part: &Part, ctx: &EvalContext, aoa: f64, fraction: f64) -> PartOutputs {
    let model = &ctx.model;
    let flow = &ctx.flow;
    let props = part.properties();
    let foil = part.foil();

    let area = (props.area * fraction).max(MIN_AREA);
    let span = props.span * fraction;
    let aspect_ratio = (span * span / area).max(MIN_ASPECT_RATIO);

    let reynolds = drag::reynolds_number(flow.velocity(), props.mac, flow.kinematic_viscosity());
    let query = FoilQuery::new(aoa, part.thickness(), part.camber()).with_reynolds(reynolds);
    let section = foil.coefficients(&query);

    let mut cl = section.cl;
    if let Some(shape) = foil.stall_shape() {
        cl *= lift::stall_factor(model.stall_model, shape, aoa);
    }
    let cl = lift::aspect_ratio_correction(model.aspect_ratio_model, cl, aspect_ratio);

    let cd_profile = match foil.reference_reynolds() {
        Some(reference) if model.reynolds_correction => {
            drag::reynolds_scaled_drag(section.cd, reference, reynolds)
        }
        _ => section.cd,
    };
    let cd_friction = if model.skin_friction {
        drag::skin_friction(reynolds)
    } else {
        0.0
    };

    let mirrored = part.kind == PartKind::Mast && fraction > 0.0 && fraction < 1.0;
    let ci_eff = drag::induced_efficiency(props.taper, aspect_ratio, mirrored);
    let cd_induced = if model.induced_drag {
        drag::induced_drag(cl, aspect_ratio, ci_eff)
    } else {
        0.0
    };

    let thickness_ratio = part.thickness() / 100.0;
    let thickness = thickness_ratio * props.mac;
    let cd_junction = if model.junction_drag {
        drag::junction_drag_coefficient(part.junctions(), thickness_ratio, thickness, area)
    } else {
        0.0
    };
    let cd_spray = if model.spray_drag && part.kind == PartKind::Mast && fraction > 0.0 {
        drag::spray_drag_coefficient(thickness, area)
    } else {
        0.0
    };

    let cd = cd_profile + cd_friction + cd_induced;
    let cm = if part.include_moment() {
        section.cm * aspect_ratio / (aspect_ratio + 4.0)
    } else {
        0.0
    };

    let q = flow.dynamic_pressure();
    PartOutputs {
        aoa,
        cl,
        cd,
        cd_profile,
        cd_friction,
        cd_induced,
        cd_junction,
        cd_spray,
        cm,
        lift: cl * q * area,
        drag: cd * q * area,
        junction_drag: cd_junction * q * area,
        spray_drag: cd_spray * q * area,
        moment: cm * q * area * props.mac,
        reynolds,
        aspect_ratio,
        area,
        span,
        ci_eff,
    }
}
