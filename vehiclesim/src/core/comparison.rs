use crate::core::kinematics::{conv_time, terminal_speed};
use crate::core::selection::Selection;
use crate::core::series::{generate, Series, StopRule};
use crate::core::vehicle::Catalog;
use helpers::general::max_f64;

/// One aligned series together with the selection slot of its vehicle. The slot is the position
/// within the selection at align time and drives the color assignment, so a vehicle keeps its
/// color even if an earlier selection entry got skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries {
    pub slot: usize,
    pub series: Series,
}

/// * `series_all` - Aligned series in selection order
/// * `shared_horizon` - (s) Common simulation time span covered by all series
/// * `v_max_global` - (m/s) Maximum terminal speed across the compared vehicles (exposed for axis
/// scaling by the renderer)
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub series_all: Vec<ComparisonSeries>,
    pub shared_horizon: f64,
    pub v_max_global: f64,
}

/// align resolves the selected vehicles from the catalog, computes the shared time horizon, and
/// generates one time-bounded series per vehicle. The shared horizon is the maximum convergence
/// time across the selection, so slower-converging vehicles do not truncate faster ones and vice
/// versa.
///
/// A selected name without catalog match or with parameters outside the model domain is skipped
/// with a warning; the remaining vehicles are still compared. Re-running align with identical
/// inputs produces identical series (no hidden randomness, no time-of-call dependency).
pub fn align(
    selection: &Selection,
    catalog: &Catalog,
    timestep_size: f64,
) -> anyhow::Result<Comparison> {
    // resolve the vehicle parameters and their convergence characteristics
    let mut resolved = Vec::with_capacity(selection.no_selected());

    for (slot, name) in selection.names().iter().enumerate() {
        let pars = match catalog.get_vehicle_pars(name) {
            Some(pars) => pars,
            None => {
                println!(
                    "WARNING: Vehicle {} is not part of the catalog and is skipped!",
                    name
                );
                continue;
            }
        };

        match (terminal_speed(pars), conv_time(pars)) {
            (Ok(v_inf), Ok(t_conv)) if v_inf.is_finite() && t_conv.is_finite() => {
                resolved.push((slot, pars, v_inf, t_conv))
            }
            // non-finite characteristics (extreme m/c) would poison the shared horizon
            (Ok(_), Ok(_)) => println!(
                "WARNING: Vehicle {} has non-finite convergence characteristics and is skipped!",
                name
            ),
            (Err(e), _) | (_, Err(e)) => println!(
                "WARNING: Vehicle {} cannot be simulated and is skipped ({:#})!",
                name, e
            ),
        }
    }

    // shared horizon and global maximum speed across the resolved selection
    let t_convs: Vec<f64> = resolved.iter().map(|x| x.3).collect();
    let v_infs: Vec<f64> = resolved.iter().map(|x| x.2).collect();

    let shared_horizon = if resolved.is_empty() {
        0.0
    } else {
        max_f64(&t_convs)
    };
    let v_max_global = if resolved.is_empty() {
        0.0
    } else {
        max_f64(&v_infs)
    };

    // generate one series per vehicle over the shared horizon (parameters are validated above, so
    // a generation error at this point concerns the step size and is raised to the caller)
    let mut series_all = Vec::with_capacity(resolved.len());

    for (slot, pars, _, _) in resolved.iter() {
        let series = generate(pars, timestep_size, &StopRule::TimeBound(shared_horizon))?;
        series_all.push(ComparisonSeries {
            slot: *slot,
            series,
        });
    }

    Ok(Comparison {
        series_all,
        shared_horizon,
        v_max_global,
    })
}
