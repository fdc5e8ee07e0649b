//! Built-in solar system catalog.
//!
//! Radii and orbit distances are gameplay-scaled for readability (real
//! proportions would leave planets sub-pixel); periods are in Earth days
//! and only reach the screen through the configured angular scale. Venus
//! carries a negative rotation period — it really does spin retrograde.

use crate::body::{BodyCatalog, BodyDef, BodyId};
use crate::error::OrreryError;

/// One row of the preset table.
struct Row {
    name: &'static str,
    radius: f32,
    orbit_radius: f32,
    orbit_period: f32,
    rotation_period: f32,
    axial_tilt_deg: f32,
    /// Index into the planet rows; moons only.
    parent: Option<usize>,
}

const PLANETS: [Row; 9] = [
    Row { name: "Sol",     radius: 16.0, orbit_radius: 0.0,   orbit_period: 0.0,      rotation_period: 25.38,  axial_tilt_deg: 7.25,  parent: None },
    Row { name: "Mercury", radius: 1.2,  orbit_radius: 28.0,  orbit_period: 87.97,    rotation_period: 58.65,  axial_tilt_deg: 0.03,  parent: None },
    Row { name: "Venus",   radius: 2.8,  orbit_radius: 44.0,  orbit_period: 224.70,   rotation_period: -243.02, axial_tilt_deg: 177.4, parent: None },
    Row { name: "Earth",   radius: 3.0,  orbit_radius: 62.0,  orbit_period: 365.26,   rotation_period: 1.0,    axial_tilt_deg: 23.44, parent: None },
    Row { name: "Mars",    radius: 1.8,  orbit_radius: 82.0,  orbit_period: 686.98,   rotation_period: 1.03,   axial_tilt_deg: 25.19, parent: None },
    Row { name: "Jupiter", radius: 9.0,  orbit_radius: 130.0, orbit_period: 4332.59,  rotation_period: 0.41,   axial_tilt_deg: 3.13,  parent: None },
    Row { name: "Saturn",  radius: 7.5,  orbit_radius: 180.0, orbit_period: 10759.22, rotation_period: 0.44,   axial_tilt_deg: 26.73, parent: None },
    Row { name: "Uranus",  radius: 4.5,  orbit_radius: 230.0, orbit_period: 30688.5,  rotation_period: -0.72,  axial_tilt_deg: 97.77, parent: None },
    Row { name: "Neptune", radius: 4.3,  orbit_radius: 275.0, orbit_period: 60182.0,  rotation_period: 0.67,   axial_tilt_deg: 28.32, parent: None },
];

const MOONS: [Row; 5] = [
    Row { name: "Luna",   radius: 0.8, orbit_radius: 6.0,  orbit_period: 27.32, rotation_period: 27.32, axial_tilt_deg: 6.68, parent: Some(3) },
    Row { name: "Io",     radius: 0.7, orbit_radius: 13.0, orbit_period: 1.77,  rotation_period: 1.77,  axial_tilt_deg: 0.0,  parent: Some(5) },
    Row { name: "Europa", radius: 0.6, orbit_radius: 16.0, orbit_period: 3.55,  rotation_period: 3.55,  axial_tilt_deg: 0.1,  parent: Some(5) },
    Row { name: "Titan",  radius: 1.0, orbit_radius: 14.0, orbit_period: 15.95, rotation_period: 15.95, axial_tilt_deg: 0.3,  parent: Some(6) },
    Row { name: "Triton", radius: 0.5, orbit_radius: 9.0,  orbit_period: 5.88,  rotation_period: -5.88, axial_tilt_deg: 0.0,  parent: Some(8) },
];

impl Row {
    fn def(&self, parents: &[BodyId]) -> BodyDef {
        BodyDef {
            name: self.name.to_owned(),
            radius: self.radius,
            orbit_radius: self.orbit_radius,
            orbit_period: self.orbit_period,
            rotation_period: self.rotation_period,
            axial_tilt_deg: self.axial_tilt_deg,
            parent: self.parent.map(|i| parents[i]),
        }
    }
}

/// Build the standard sun + planets + moons catalog.
///
/// # Errors
///
/// Propagates registration validation; the preset tables are valid, so
/// this only fails if the tables are edited inconsistently.
pub fn solar_system() -> Result<BodyCatalog, OrreryError> {
    let mut catalog = BodyCatalog::new();

    let mut planet_ids = Vec::with_capacity(PLANETS.len());
    for row in &PLANETS {
        planet_ids.push(catalog.register(row.def(&planet_ids))?);
    }
    for row in &MOONS {
        let _ = catalog.register(row.def(&planet_ids))?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::solar_system;
    use crate::options::SimulationOptions;

    #[test]
    fn preset_catalog_registers_cleanly() {
        let catalog = solar_system().unwrap();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn moons_resolve_to_their_planets() {
        let mut catalog = solar_system().unwrap();
        catalog.update(10.0, 10.0, &SimulationOptions::default());

        let luna = catalog
            .iter()
            .find(|(_, b)| b.name() == "Luna")
            .map(|(id, b)| (id, b.parent().unwrap()))
            .unwrap();
        let earth_pos = catalog.position(luna.1);
        let luna_pos = catalog.position(luna.0);
        assert!((earth_pos.distance(luna_pos) - 6.0).abs() < 1e-4);
    }

    #[test]
    fn sun_stays_at_origin() {
        let mut catalog = solar_system().unwrap();
        catalog.update(999.0, 999.0, &SimulationOptions::default());
        let (sun, _) =
            catalog.iter().find(|(_, b)| b.name() == "Sol").unwrap();
        assert_eq!(catalog.position(sun).length(), 0.0);
    }
}
