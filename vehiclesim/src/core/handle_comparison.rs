use crate::core::comparison::align;
use crate::core::display::{to_display, SpeedUnit};
use crate::core::kinematics::{conv_time, terminal_speed, time_constant};
use crate::core::selection::Selection;
use crate::core::vehicle::Catalog;
use crate::post::comparison_result::{ComparisonResult, VehicleSummary};
use anyhow::Context;

/// handle_comparison aligns the selected vehicles on a shared horizon, converts the series to the
/// display unit, and returns everything the console output or an external renderer needs.
pub fn handle_comparison(
    catalog: &Catalog,
    selection: &Selection,
    timestep_size: f64,
    unit: SpeedUnit,
    print_debug: bool,
) -> anyhow::Result<ComparisonResult> {
    // align the selected vehicles on the shared horizon
    let comparison = align(selection, catalog, timestep_size)?;

    // build the per-vehicle summaries (an aligned series always has a catalog entry since align
    // skips unresolvable names)
    let mut summaries = Vec::with_capacity(comparison.series_all.len());

    for comp_series in comparison.series_all.iter() {
        let pars = catalog
            .get_vehicle_pars(&comp_series.series.name)
            .context("Aligned series without catalog entry!")?;

        summaries.push(VehicleSummary {
            name: pars.name.to_owned(),
            m: pars.m,
            kz: pars.kz,
            cz: pars.cz,
            v_inf: terminal_speed(pars)?,
            tau: time_constant(pars)?,
            t_conv: conv_time(pars)?,
            no_samples: comp_series.series.samples.len(),
        });
    }

    // print debug information if indicated
    if print_debug {
        for summary in summaries.iter() {
            println!(
                "DEBUG: Vehicle {} converges after {:.2}s (terminal speed {:.2} m/s, time \
                constant {:.2}s)",
                summary.name, summary.t_conv, summary.v_inf, summary.tau
            );
        }
    }

    // convert to the display unit and assign the slot colors
    let series_all_disp = to_display(&comparison, unit)?;

    Ok(ComparisonResult {
        unit,
        shared_horizon: comparison.shared_horizon,
        v_max_global: comparison.v_max_global,
        summaries,
        series_all: series_all_disp,
    })
}
