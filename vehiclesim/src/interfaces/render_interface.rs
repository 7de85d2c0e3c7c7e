#[derive(Debug, Clone, Default, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// * `t` - (s) Elapsed time since standstill
/// * `v_disp` - Speed in the display unit
/// * `d` - (N) Aerodynamic downforce
/// * `p` - (%) Downforce as percent of the vehicle weight
#[derive(Debug, Clone, Default)]
pub struct DisplaySample {
    pub t: f64,
    pub v_disp: f64,
    pub d: f64,
    pub p: f64,
}

/// DisplaySeries is the contract towards an external renderer: one series per vehicle, keyed by
/// name, with the speed already converted to the display unit and the color of the selection
/// slot. Axis scaling, legends, and tooltips are the renderer's responsibility.
#[derive(Debug, Clone, Default)]
pub struct DisplaySeries {
    pub name: String,
    pub color: RgbColor,
    pub samples: Vec<DisplaySample>,
    pub truncated: bool,
}
