use serde::Deserialize;

/// * `name` - Unique vehicle name used as the catalog key, e.g. Roadster S
/// * `m` - (kg) Vehicle mass
/// * `f0` - (N) Propulsive force constant of the motor
/// * `c` - (N·s/m) Linear drag/resistance coefficient
/// * `kd` - (N·s²/m²) Downforce coefficient
/// * `kz` - (N/m) Suspension stiffness (descriptive attribute, not consumed by the motion model)
/// * `cz` - (N·s/m) Suspension damping (descriptive attribute, not consumed by the motion model)
/// * `image` - Optional reference to a display asset (opaque to the simulation)
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VehiclePars {
    pub name: String,
    pub m: f64,
    #[serde(rename = "F0")]
    pub f0: f64,
    pub c: f64,
    pub kd: f64,
    pub kz: f64,
    pub cz: f64,
    pub image: Option<String>,
}

/// Catalog is the read-only list of vehicles that are available for a comparison. The entry order
/// is preserved since the first entry is pre-selected and the selection order drives the slot
/// colors.
#[derive(Debug, Deserialize, Clone)]
pub struct Catalog {
    pub vehicles: Vec<VehiclePars>,
}

impl Catalog {
    /// get_vehicle_pars returns the catalog entry with the inserted name, if there is one.
    pub fn get_vehicle_pars(&self, name: &str) -> Option<&VehiclePars> {
        self.vehicles.iter().find(|pars| pars.name == name)
    }
}
