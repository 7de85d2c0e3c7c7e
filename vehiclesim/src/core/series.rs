use crate::core::kinematics::{
    check_vehicle_pars, conv_time, downforce_at, downforce_percent, velocity_at,
};
use crate::core::vehicle::VehiclePars;
use anyhow::Context;
use helpers::general::InvalidParameterError;

/// Absolute upper bound on the number of samples within one series, guarding against degenerate
/// step/bound combinations.
pub const MAX_NO_SAMPLES: usize = 1_000_000;

/// One instant of a vehicle trajectory.
/// * `t` - (s) Elapsed time since standstill
/// * `v` - (m/s) Speed
/// * `d` - (N) Aerodynamic downforce
/// * `p` - (%) Downforce as percent of the vehicle weight
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub v: f64,
    pub d: f64,
    pub p: f64,
}

/// Series is the time-ordered, finite sample sequence of one vehicle over one simulation run.
/// truncated indicates that the iteration cap cut the series before its stop rule was met.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
    pub truncated: bool,
}

/// Stop rule for the series generation.
/// * `SpeedBound` - (m/s) Stop before appending the first sample that reaches or exceeds the bound
/// * `TimeBound` - (s) Stop after the last sample with t <= bound (inclusive if a step lands
/// exactly on the bound)
#[derive(Debug, Clone)]
pub enum StopRule {
    SpeedBound(f64),
    TimeBound(f64),
}

/// generate produces the sample series of one vehicle accelerating from standstill. Time is
/// discretized as t_i = i * timestep_size; for each instant the speed, downforce, and
/// downforce-to-weight percentage are evaluated through the kinematic model, and the active stop
/// rule is checked before appending.
///
/// Termination is guaranteed by capping the iteration count up front: a time bound caps at the
/// bound itself, a speed bound at the convergence time of the vehicle (the analytical model never
/// reaches a bound at or above the terminal speed), and both additionally at MAX_NO_SAMPLES. A
/// series that was cut by one of the latter two caps is flagged as truncated.
pub fn generate(
    pars: &VehiclePars,
    timestep_size: f64,
    stop_rule: &StopRule,
) -> anyhow::Result<Series> {
    check_vehicle_pars(pars)?;

    if !(timestep_size > 0.0 && timestep_size.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "timestep_size is {}s, but must be positive and finite!",
            timestep_size
        ));
    }

    // determine the number of samples implied by the stop rule (kept as f64 since an extreme
    // bound/step combination would overflow an integer count, the cap is applied before casting)
    let no_samples_rule = match stop_rule {
        StopRule::SpeedBound(v_bound) => {
            if !v_bound.is_finite() {
                return Err(InvalidParameterError).context(format!(
                    "Speed bound is {}m/s, but must be finite!",
                    v_bound
                ));
            }

            (conv_time(pars)? / timestep_size).ceil() + 1.0
        }
        StopRule::TimeBound(t_bound) => {
            if !(*t_bound >= 0.0 && t_bound.is_finite()) {
                return Err(InvalidParameterError).context(format!(
                    "Time bound is {}s, but must be non-negative and finite!",
                    t_bound
                ));
            }

            (t_bound / timestep_size).floor() + 1.0
        }
    };

    let max_no_samples = no_samples_rule.min(MAX_NO_SAMPLES as f64) as usize;
    let mut samples: Vec<Sample> = Vec::with_capacity(max_no_samples);

    for i in 0..max_no_samples {
        let t = i as f64 * timestep_size;
        let v = velocity_at(t, pars)?;

        // check the active stop condition before appending such that the sample crossing a speed
        // bound is excluded while a step landing exactly on a time bound is included
        let stop = match stop_rule {
            StopRule::SpeedBound(v_bound) => v >= *v_bound,
            StopRule::TimeBound(t_bound) => t > *t_bound,
        };

        if stop {
            return Ok(Series {
                name: pars.name.to_owned(),
                samples,
                truncated: false,
            });
        }

        let d = downforce_at(v, pars)?;
        let p = downforce_percent(d, pars)?;
        samples.push(Sample { t, v, d, p });
    }

    // the iteration cap was exhausted: natural completion for a time bound whose sample count fits
    // the absolute cap, a guarded truncation otherwise (e.g., a speed bound at or above the
    // terminal speed)
    let truncated = match stop_rule {
        StopRule::SpeedBound(_) => true,
        StopRule::TimeBound(_) => no_samples_rule > MAX_NO_SAMPLES as f64,
    };

    Ok(Series {
        name: pars.name.to_owned(),
        samples,
        truncated,
    })
}
