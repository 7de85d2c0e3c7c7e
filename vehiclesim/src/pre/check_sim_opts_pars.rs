use crate::core::display::SpeedUnit;
use crate::core::selection::MAX_NO_SELECTED;
use crate::core::vehicle::Catalog;
use crate::pre::sim_opts::SimOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_sim_opts_pars assures that the inserted options and catalog parameters are within
/// reasonable limits and raises an error if not. Selected names without catalog match are
/// deliberately not checked here; the aligner skips them with a warning such that the remaining
/// vehicles are still compared.
pub fn check_sim_opts_pars(sim_opts: &SimOpts, catalog: &Catalog) -> anyhow::Result<()> {
    // PART 1: SIMULATION OPTIONS
    if !(0.001 <= sim_opts.timestep_size && sim_opts.timestep_size <= 1.0) {
        return Err(InputValueError).context(format!(
            "timestep_size is {:.3}s, which is not within the reasonable range of [0.001, 1.0]s!",
            sim_opts.timestep_size
        ));
    }

    if sim_opts.select.len() > MAX_NO_SELECTED {
        return Err(InputValueError).context(format!(
            "{} vehicles were selected, but at most {} can be compared!",
            sim_opts.select.len(),
            MAX_NO_SELECTED
        ));
    }

    for (i, name) in sim_opts.select.iter().enumerate() {
        if sim_opts.select[..i].contains(name) {
            return Err(InputValueError)
                .context(format!("Vehicle {} was selected more than once!", name));
        }
    }

    SpeedUnit::from_name(&sim_opts.unit)?;

    // PART 2: CATALOG PARAMETERS
    if catalog.vehicles.is_empty() {
        return Err(InputValueError).context("The catalog must contain at least one vehicle!");
    }

    for (i, pars) in catalog.vehicles.iter().enumerate() {
        if catalog.vehicles[..i].iter().any(|x| x.name == pars.name) {
            return Err(InputValueError).context(format!(
                "Vehicle name {} appears more than once in the catalog!",
                pars.name
            ));
        }

        if !(pars.m > 0.0 && pars.m.is_finite()) {
            return Err(InputValueError).context(format!(
                "Mass of vehicle {} must be positive and finite!",
                pars.name
            ));
        }

        if !(pars.f0 > 0.0 && pars.f0.is_finite()) {
            return Err(InputValueError).context(format!(
                "Propulsive force constant of vehicle {} must be positive and finite!",
                pars.name
            ));
        }

        if !(pars.c > 0.0 && pars.c.is_finite()) {
            return Err(InputValueError).context(format!(
                "Drag coefficient of vehicle {} must be positive and finite!",
                pars.name
            ));
        }

        if !(pars.kd >= 0.0 && pars.kd.is_finite()) {
            return Err(InputValueError).context(format!(
                "Downforce coefficient of vehicle {} must be non-negative and finite!",
                pars.name
            ));
        }

        if !pars.kz.is_finite() || !pars.cz.is_finite() {
            return Err(InputValueError).context(format!(
                "Suspension parameters of vehicle {} must be finite!",
                pars.name
            ));
        }
    }

    Ok(())
}
