use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::OrreryError;
use crate::options::SimulationOptions;

/// Handle to a registered body. Indexes are stable for the catalog's
/// lifetime — bodies are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

/// Static orbital parameters supplied at registration time.
///
/// Orbits are circular gameplay approximations: `orbit_period` maps to an
/// orbital angle through the configured
/// [`angular_scale`](SimulationOptions::angular_scale), not through real
/// orbital mechanics.
#[derive(Debug, Clone)]
pub struct BodyDef {
    /// Display name, also used in the focus readout.
    pub name: String,
    /// Body radius in world units. Must be positive.
    pub radius: f32,
    /// Orbit radius around the parent (world units). Zero pins the body
    /// to its parent position (or the origin for a root body).
    pub orbit_radius: f32,
    /// Orbital period. Must be positive for any body with a nonzero
    /// orbit radius.
    pub orbit_period: f32,
    /// Rotation period. Zero means no spin; a negative value spins the
    /// body retrograde.
    pub rotation_period: f32,
    /// Axial tilt in degrees, forwarded to the presentation layer.
    pub axial_tilt_deg: f32,
    /// Parent body for satellites. Parents must be registered first.
    pub parent: Option<BodyId>,
}

/// A registered body plus its simulated state.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    def: BodyDef,
    /// Current world position, recomputed every tick.
    position: Vec3,
    /// Accumulated spin angle in radians, wrapped to [0, 2π).
    spin_angle: f32,
}

impl CelestialBody {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Body radius in world units.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.def.radius
    }

    /// Orbit radius around the parent.
    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.def.orbit_radius
    }

    /// Parent body, if this is a satellite.
    #[must_use]
    pub fn parent(&self) -> Option<BodyId> {
        self.def.parent
    }

    /// Axial tilt in degrees.
    #[must_use]
    pub fn axial_tilt_deg(&self) -> f32 {
        self.def.axial_tilt_deg
    }

    /// Current world position (as of the last catalog update).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current spin angle in radians.
    #[must_use]
    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }
}

/// All simulated bodies, stored in registration order.
///
/// Registration order doubles as update order: a satellite's parent must
/// be registered before it, so a single forward walk always sees fresh
/// parent coordinates when placing satellites.
#[derive(Debug, Default)]
pub struct BodyCatalog {
    bodies: Vec<CelestialBody>,
}

impl BodyCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body, validating its orbital parameters.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::BodyConfig`] for a non-positive radius or
    /// for an orbiting body (`orbit_radius > 0`) with
    /// `orbit_period <= 0` — the angle formula would divide by it.
    /// `rotation_period == 0` is valid and means "no spin".
    /// Returns [`OrreryError::UnknownParent`] if the parent handle does
    /// not refer to an already-registered body.
    pub fn register(&mut self, def: BodyDef) -> Result<BodyId, OrreryError> {
        if def.radius <= 0.0 {
            return Err(OrreryError::BodyConfig(format!(
                "{}: radius must be positive (got {})",
                def.name, def.radius
            )));
        }
        if def.orbit_radius < 0.0 {
            return Err(OrreryError::BodyConfig(format!(
                "{}: orbit radius must be non-negative (got {})",
                def.name, def.orbit_radius
            )));
        }
        if def.orbit_radius > 0.0 && def.orbit_period <= 0.0 {
            return Err(OrreryError::BodyConfig(format!(
                "{}: orbiting body needs a positive orbit period (got {})",
                def.name, def.orbit_period
            )));
        }
        if let Some(BodyId(parent)) = def.parent {
            if parent >= self.bodies.len() {
                return Err(OrreryError::UnknownParent(def.name));
            }
        }

        let id = BodyId(self.bodies.len());
        self.bodies.push(CelestialBody {
            def,
            position: Vec3::ZERO,
            spin_angle: 0.0,
        });
        Ok(id)
    }

    /// Recompute every body's position for simulation time `t` and
    /// advance spin angles by `dt`.
    ///
    /// Positions are pure functions of `t`; only spin integrates the
    /// frame delta. Parents are updated before their satellites (see the
    /// registration-order invariant on the type).
    pub fn update(&mut self, t: f32, dt: f32, sim: &SimulationOptions) {
        for i in 0..self.bodies.len() {
            let parent_pos = self.bodies[i]
                .def
                .parent
                .map_or(Vec3::ZERO, |BodyId(p)| self.bodies[p].position);

            let body = &mut self.bodies[i];
            body.position = parent_pos + orbit_position(&body.def, t, sim);

            if body.def.rotation_period != 0.0 {
                let rate = sim.spin_scale / body.def.rotation_period;
                body.spin_angle = (body.spin_angle + rate * dt).rem_euclid(TAU);
            }
        }
    }

    /// Look up a body by handle.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    /// Current world position of a body, or the origin for a stale
    /// handle from another catalog.
    #[must_use]
    pub fn position(&self, id: BodyId) -> Vec3 {
        self.get(id).map_or(Vec3::ZERO, CelestialBody::position)
    }

    /// Iterate bodies in registration (update) order with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Number of registered bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalog has no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Parent-relative orbit offset at simulation time `t`.
///
/// `angle = t / orbit_period * angular_scale mod 2π`. The angular scale
/// is a tunable gameplay constant, deliberately not 2π — it slows orbital
/// motion down to rates that read well interactively.
fn orbit_position(def: &BodyDef, t: f32, sim: &SimulationOptions) -> Vec3 {
    if def.orbit_radius == 0.0 {
        return Vec3::ZERO;
    }
    let angle = (t / def.orbit_period * sim.angular_scale).rem_euclid(TAU);
    Vec3::new(
        def.orbit_radius * angle.cos(),
        0.0,
        def.orbit_radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::{BodyCatalog, BodyDef, BodyId};
    use crate::options::SimulationOptions;

    fn def(name: &str) -> BodyDef {
        BodyDef {
            name: name.to_owned(),
            radius: 1.0,
            orbit_radius: 50.0,
            orbit_period: 100.0,
            rotation_period: 10.0,
            axial_tilt_deg: 0.0,
            parent: None,
        }
    }

    #[test]
    fn rejects_non_positive_orbit_period() {
        let mut catalog = BodyCatalog::new();
        let bad = BodyDef {
            orbit_period: 0.0,
            ..def("broken")
        };
        assert!(catalog.register(bad).is_err());

        let negative = BodyDef {
            orbit_period: -3.0,
            ..def("backwards")
        };
        assert!(catalog.register(negative).is_err());
    }

    #[test]
    fn zero_rotation_period_is_valid_and_means_no_spin() {
        let mut catalog = BodyCatalog::new();
        let id = catalog
            .register(BodyDef {
                rotation_period: 0.0,
                ..def("tidal")
            })
            .unwrap();

        let sim = SimulationOptions::default();
        catalog.update(5.0, 5.0, &sim);
        assert_eq!(catalog.get(id).unwrap().spin_angle(), 0.0);
    }

    #[test]
    fn rejects_unregistered_parent() {
        let mut catalog = BodyCatalog::new();
        let orphan = BodyDef {
            parent: Some(BodyId(7)),
            ..def("orphan")
        };
        assert!(catalog.register(orphan).is_err());
    }

    #[test]
    fn position_at_t_zero_is_on_positive_x() {
        let mut catalog = BodyCatalog::new();
        let id = catalog.register(def("planet")).unwrap();

        let sim = SimulationOptions::default();
        catalog.update(0.0, 0.0, &sim);
        let pos = catalog.position(id);
        assert!((pos.x - 50.0).abs() < 1e-5);
        assert!(pos.y.abs() < 1e-5);
        assert!(pos.z.abs() < 1e-5);
    }

    #[test]
    fn quarter_revolution_lands_on_positive_z() {
        // Assert via the angle formula, not a hardcoded time: the quarter
        // point is wherever t/period*scale reaches π/2.
        let mut catalog = BodyCatalog::new();
        let body = def("planet");
        let period = body.orbit_period;
        let id = catalog.register(body).unwrap();

        let sim = SimulationOptions::default();
        let t = FRAC_PI_2 * period / sim.angular_scale;
        catalog.update(t, t, &sim);
        let pos = catalog.position(id);
        assert!(pos.x.abs() < 1e-4, "x = {}", pos.x);
        assert!((pos.z - 50.0).abs() < 1e-4, "z = {}", pos.z);
    }

    #[test]
    fn positions_are_pure_functions_of_time() {
        // One step of size t and N sub-steps summing to t must agree.
        let sim = SimulationOptions::default();

        let mut one_shot = BodyCatalog::new();
        let a = one_shot.register(def("planet")).unwrap();
        let moon = BodyDef {
            orbit_radius: 8.0,
            orbit_period: 7.0,
            parent: Some(a),
            ..def("moon")
        };
        let b = one_shot.register(moon.clone()).unwrap();

        let mut stepped = BodyCatalog::new();
        let _ = stepped.register(def("planet")).unwrap();
        let _ = stepped.register(moon).unwrap();

        let t = 123.456;
        one_shot.update(t, t, &sim);
        let steps = 17;
        for i in 1..=steps {
            let now = t * i as f32 / steps as f32;
            stepped.update(now, t / steps as f32, &sim);
        }

        assert!(
            one_shot
                .position(a)
                .distance(stepped.position(a))
                < 1e-3
        );
        assert!(
            one_shot
                .position(b)
                .distance(stepped.position(b))
                < 1e-3
        );
    }

    #[test]
    fn satellites_use_fresh_parent_coordinates() {
        let mut catalog = BodyCatalog::new();
        let planet = catalog.register(def("planet")).unwrap();
        let moon = catalog
            .register(BodyDef {
                orbit_radius: 8.0,
                orbit_period: 7.0,
                parent: Some(planet),
                ..def("moon")
            })
            .unwrap();

        let sim = SimulationOptions::default();
        catalog.update(42.0, 42.0, &sim);

        let planet_pos = catalog.position(planet);
        let moon_pos = catalog.position(moon);
        let dist = planet_pos.distance(moon_pos);
        assert!((dist - 8.0).abs() < 1e-4, "moon-planet distance = {dist}");
    }

    #[test]
    fn retrograde_spin_runs_backwards() {
        let mut catalog = BodyCatalog::new();
        let prograde = catalog.register(def("prograde")).unwrap();
        let retro = catalog
            .register(BodyDef {
                rotation_period: -10.0,
                ..def("retro")
            })
            .unwrap();

        let sim = SimulationOptions::default();
        catalog.update(0.1, 0.1, &sim);

        let fwd = catalog.get(prograde).unwrap().spin_angle();
        let back = catalog.get(retro).unwrap().spin_angle();
        assert!(fwd > 0.0 && fwd < PI);
        // Retrograde wraps to just below 2π.
        assert!(back > PI);
    }
}
