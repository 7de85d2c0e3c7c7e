use crate::core::comparison::Comparison;
use crate::interfaces::render_interface::{DisplaySample, DisplaySeries, RgbColor};
use anyhow::Context;
use css_color_parser;
use helpers::general::InputValueError;

/// Conversion factor from the base speed unit (m/s) to km/h.
pub const MPS_TO_KMH: f64 = 3.6;

/// Fixed color palette for the vehicle slots (hex codes, used for plotting). Colors are assigned
/// by selection position, not by vehicle identity, so reselecting a vehicle in another slot may
/// change its color.
pub const COLOR_PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// Display unit for speed values. The base unit of the simulation is m/s; the conversion is
/// applied by the display adapter only and never touches the underlying series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedUnit {
    Mps,
    Kmh,
}

impl SpeedUnit {
    /// factor returns the scalar multiplier from m/s to the display unit.
    pub fn factor(&self) -> f64 {
        match self {
            SpeedUnit::Mps => 1.0,
            SpeedUnit::Kmh => MPS_TO_KMH,
        }
    }

    /// label returns the unit string for axis labels and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            SpeedUnit::Mps => "m/s",
            SpeedUnit::Kmh => "km/h",
        }
    }

    /// from_name parses the command line representation of the unit (mps or kmh).
    pub fn from_name(name: &str) -> anyhow::Result<SpeedUnit> {
        match name {
            "mps" => Ok(SpeedUnit::Mps),
            "kmh" => Ok(SpeedUnit::Kmh),
            _ => Err(InputValueError).context(format!(
                "Unknown speed unit {} (expected mps or kmh)!",
                name
            )),
        }
    }
}

/// color_for_slot returns the palette color of a selection slot as an RGB triple
/// (index modulo palette size).
pub fn color_for_slot(slot: usize) -> anyhow::Result<RgbColor> {
    // convert hex color to a rgb color
    let tmp_color = COLOR_PALETTE[slot % COLOR_PALETTE.len()]
        .parse::<css_color_parser::Color>()
        .context("Could not parse hex color!")?;

    Ok(RgbColor {
        r: tmp_color.r,
        g: tmp_color.g,
        b: tmp_color.b,
    })
}

/// to_display converts the aligned series into the renderer contract: the speed field is scaled
/// to the display unit (t, d, and p stay untouched) and every series gets the color of its slot.
/// The inserted comparison is not modified; the display series are new objects.
pub fn to_display(comparison: &Comparison, unit: SpeedUnit) -> anyhow::Result<Vec<DisplaySeries>> {
    let factor = unit.factor();
    let mut series_all_disp = Vec::with_capacity(comparison.series_all.len());

    for comp_series in comparison.series_all.iter() {
        let samples = comp_series
            .series
            .samples
            .iter()
            .map(|sample| DisplaySample {
                t: sample.t,
                v_disp: sample.v * factor,
                d: sample.d,
                p: sample.p,
            })
            .collect();

        series_all_disp.push(DisplaySeries {
            name: comp_series.series.name.to_owned(),
            color: color_for_slot(comp_series.slot)?,
            samples,
            truncated: comp_series.series.truncated,
        });
    }

    Ok(series_all_disp)
}
