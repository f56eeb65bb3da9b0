mod config;

pub use config::{
    BoardConfig, ConfigError, CraftConfig, DriveConfig, PartConfig, RigConfig, RiderConfig,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::{FlowState, FoilRegistry, Part, PartKind, Planform};
use crate::resources::ModelConfig;
use crate::systems::{
    balance::{balance, BalanceResult},
    flow::{evaluate_part, EvalContext, WingWake},
    forces::{craft_forces, CraftForces, DragBreakdown, PartForces},
};
use crate::utils::MIN_VELOCITY;

/// Operating point of the craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftState {
    /// Weight the foils must carry (N)
    pub load: f64,
    /// Nose-up pitch applied to every part but the mast (deg)
    pub pitch: f64,
    /// Wetted fraction of the mast
    pub submersion: f64,
    /// Rider position from the last balance
    pub cg: Option<BalanceResult>,
}

impl Default for CraftState {
    fn default() -> Self {
        Self {
            load: 735.0,
            pitch: 0.0,
            submersion: 0.6,
            cg: None,
        }
    }
}

/// A board, its rider and the four foil parts under it.
#[derive(Debug, Clone)]
pub struct Craft {
    pub name: String,
    pub wing: Part,
    pub stabilizer: Part,
    pub mast: Part,
    pub fuselage: Part,
    pub rider: RiderConfig,
    pub board: BoardConfig,
    pub rig: RigConfig,
    pub drive: DriveConfig,
    state: CraftState,
    ctx: EvalContext,
}

fn build_part(
    name: &str,
    kind: PartKind,
    config: &PartConfig,
    registry: &FoilRegistry,
    model: &ModelConfig,
) -> Part {
    let symmetric = kind != PartKind::Mast;
    let planform = Planform::segmented(
        &config.chords(),
        &config.le_offsets,
        config.span,
        symmetric,
    );
    Part::new(name, kind, registry.get(&config.foil), planform)
        .with_bounds(model.bounds)
        .with_section(config.thickness, config.camber, config.aoa)
        .with_position(config.xpos, config.zpos)
        .with_junctions(config.junctions)
        .with_moment(config.include_moment)
}

impl Craft {
    pub fn from_config(config: &CraftConfig, registry: &FoilRegistry) -> Self {
        let model = config.model;
        let flow = FlowState::new(config.medium, config.vpp.speed_range.0);
        let air = FlowState::air(flow.velocity());
        Self {
            name: config.name.clone(),
            wing: build_part("wing", PartKind::Wing, &config.wing, registry, &model),
            stabilizer: build_part(
                "stabilizer",
                PartKind::Stabilizer,
                &config.stabilizer,
                registry,
                &model,
            ),
            mast: build_part("mast", PartKind::Mast, &config.mast, registry, &model),
            fuselage: build_part(
                "fuselage",
                PartKind::Fuselage,
                &config.fuselage,
                registry,
                &model,
            ),
            rider: config.rider,
            board: config.board,
            rig: config.rig,
            drive: config.drive,
            state: CraftState {
                load: config.load,
                pitch: 0.0,
                submersion: config.mast_submersion,
                cg: None,
            },
            ctx: EvalContext::new(flow, air, model),
        }
    }

    pub fn default_kite_foil() -> Self {
        Self::from_config(&CraftConfig::default_kite_foil(), &FoilRegistry::with_builtins())
    }

    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    pub fn set_context(&mut self, ctx: EvalContext) {
        if ctx != self.ctx {
            self.ctx = ctx;
            self.invalidate_parts();
        }
    }

    pub fn model(&self) -> &ModelConfig {
        &self.ctx.model
    }

    pub fn set_model(&mut self, model: ModelConfig) {
        self.set_context(EvalContext { model, ..self.ctx });
    }

    pub fn state(&self) -> &CraftState {
        &self.state
    }

    /// Craft speed through the water (m/s).
    pub fn speed(&self) -> f64 {
        self.ctx.flow.velocity()
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.set_context(self.ctx.with_velocity(speed.max(MIN_VELOCITY)));
    }

    pub fn set_pitch(&mut self, pitch: f64) {
        if pitch != self.state.pitch {
            self.state.pitch = pitch;
            self.invalidate_parts();
        }
    }

    pub fn set_load(&mut self, load: f64) {
        if load != self.state.load {
            self.state.load = load;
            self.state.cg = None;
        }
    }

    pub fn set_submersion(&mut self, submersion: f64) {
        let submersion = submersion.clamp(0.0, 1.0);
        if submersion != self.state.submersion {
            self.state.submersion = submersion;
            self.invalidate_parts();
        }
    }

    fn invalidate_parts(&mut self) {
        self.wing.invalidate();
        self.stabilizer.invalidate();
        self.mast.invalidate();
        self.fuselage.invalidate();
        self.state.cg = None;
    }

    pub fn parts(&self) -> [&Part; 4] {
        [&self.wing, &self.stabilizer, &self.mast, &self.fuselage]
    }

    /// Evaluates every part in dependency order and sums the forces.
    ///
    /// The stabilizer sees the wing's downwash, so the wing goes first. Parts
    /// whose inputs did not change keep their cached outputs.
    pub fn evaluate(&mut self) -> CraftForces {
        let ctx = self.ctx;
        let pitch = self.state.pitch;
        let submersion = self.state.submersion;

        let wing = evaluate_part(&mut self.wing, &ctx, pitch, submersion, None);
        let wake = WingWake {
            cl: wing.cl,
            aspect_ratio: wing.aspect_ratio,
        };
        let parts = PartForces {
            wing,
            stabilizer: evaluate_part(&mut self.stabilizer, &ctx, pitch, submersion, Some(wake)),
            mast: evaluate_part(&mut self.mast, &ctx, pitch, submersion, None),
            fuselage: evaluate_part(&mut self.fuselage, &ctx, pitch, submersion, None),
        };

        let forces = craft_forces(self, parts);
        debug!(
            speed = self.speed(),
            pitch,
            lift = forces.lift,
            drag = forces.total_drag(),
            "craft evaluated"
        );
        forces
    }

    pub fn total_lift(&mut self) -> f64 {
        self.evaluate().lift
    }

    pub fn total_drag(&mut self) -> f64 {
        self.evaluate().total_drag()
    }

    pub fn drag_breakdown(&mut self) -> DragBreakdown {
        self.evaluate().drag
    }

    /// Solves the rider position for the current state and records it.
    pub fn balance(&mut self) -> BalanceResult {
        let forces = self.evaluate();
        let result = balance(self, &forces);
        self.state.cg = Some(result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_geometry() {
        let craft = Craft::default_kite_foil();
        assert_relative_eq!(craft.wing.area(), 0.086, epsilon = 1e-12);
        assert_relative_eq!(craft.stabilizer.area(), 0.0288, epsilon = 1e-12);
        assert_relative_eq!(craft.mast.span(), 0.85, epsilon = 1e-12);
        assert_eq!(craft.wing.foil().name(), "NACA 4-digit");
        assert_eq!(craft.stabilizer.foil().name(), "NACA 0012");
    }

    #[test]
    fn test_lift_excludes_mast_side_force() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        craft.mast.set_aoa(2.0);
        let forces = craft.evaluate();
        let wing = craft.wing.outputs().map_or(0.0, |o| o.lift);
        let stab = craft.stabilizer.outputs().map_or(0.0, |o| o.lift);
        let fuse = craft.fuselage.outputs().map_or(0.0, |o| o.lift);
        assert_relative_eq!(forces.lift, wing + stab + fuse, epsilon = 1e-9);
        assert!(forces.side_force > 0.0);
    }

    #[test]
    fn test_speed_change_refreshes_parts() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(4.0);
        let slow = craft.total_lift();
        craft.set_speed(6.0);
        let fast = craft.total_lift();
        assert_relative_eq!(fast / slow, 36.0 / 16.0, epsilon = 0.05);
    }

    #[test]
    fn test_model_switch_refreshes_stabilizer() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        craft.evaluate();
        let with_downwash = craft.stabilizer.outputs().map_or(0.0, |o| o.aoa);

        craft.set_model(ModelConfig {
            downwash: false,
            ..*craft.model()
        });
        craft.evaluate();
        let without = craft.stabilizer.outputs().map_or(0.0, |o| o.aoa);
        assert_relative_eq!(without, -0.5, epsilon = 1e-12);
        assert!(with_downwash < without);
    }

    #[test]
    fn test_state_change_clears_part_caches() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        let slow = craft.evaluate();
        assert_eq!(craft.wing.outputs(), Some(&slow.parts.wing));

        craft.set_speed(8.0);
        assert!(craft.parts().iter().all(|part| part.outputs().is_none()));
        let fast = craft.evaluate();
        assert_eq!(craft.wing.outputs(), Some(&fast.parts.wing));
        assert!(fast.lift > slow.lift);
        assert!(fast.total_drag() > slow.total_drag());

        // Same speed again keeps the cache.
        craft.set_speed(8.0);
        assert!(craft.wing.outputs().is_some());

        craft.set_pitch(1.0);
        assert!(craft.wing.outputs().is_none());
        craft.evaluate();
        craft.set_submersion(0.9);
        assert!(craft.mast.outputs().is_none());
    }

    #[test]
    fn test_state_change_clears_balance() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        craft.balance();
        assert!(craft.state().cg.is_some());
        craft.set_speed(6.0);
        assert!(craft.state().cg.is_none());

        craft.balance();
        craft.set_load(800.0);
        assert!(craft.state().cg.is_none());
    }

    #[test]
    fn test_balance_is_recorded() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        let result = craft.balance();
        assert_eq!(craft.state().cg, Some(result));
        // Level craft: deck and fuselage offsets coincide.
        assert_relative_eq!(result.deck_offset, result.fuselage_offset, epsilon = 1e-12);
        assert!(result.drag_posture < 0.0);
        assert!(result.drive_posture > 0.0);
    }

    #[test]
    fn test_wing_further_aft_moves_rider_aft() {
        let mut craft = Craft::default_kite_foil();
        craft.set_speed(5.0);
        let before = craft.balance().fuselage_offset;
        craft.wing.set_position(-0.20, -0.03);
        let after = craft.balance().fuselage_offset;
        assert!(after < before);
    }
}
