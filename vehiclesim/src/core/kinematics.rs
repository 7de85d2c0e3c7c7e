use crate::core::vehicle::VehiclePars;
use anyhow::Context;
use helpers::general::InvalidParameterError;

/// (m/s²) Gravitational acceleration used to relate downforce to vehicle weight.
pub const G_ACCEL: f64 = 9.81;

/// Remaining relative distance to the terminal speed at which a vehicle is considered converged.
/// Used for the shared comparison horizon and as the termination guard of speed-bounded series.
pub const CONV_THRESHOLD: f64 = 0.001;

/// check_vehicle_pars assures that the vehicle parameters are within the domain of the kinematic
/// model (the model divides by c and m) and raises an error if not.
pub fn check_vehicle_pars(pars: &VehiclePars) -> anyhow::Result<()> {
    if !(pars.m > 0.0 && pars.m.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Mass of vehicle {} is {}kg, but must be positive and finite!",
            pars.name, pars.m
        ));
    }

    if !(pars.f0 > 0.0 && pars.f0.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Propulsive force constant of vehicle {} is {}N, but must be positive and finite!",
            pars.name, pars.f0
        ));
    }

    if !(pars.c > 0.0 && pars.c.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Drag coefficient of vehicle {} is {}N·s/m, but must be positive and finite!",
            pars.name, pars.c
        ));
    }

    if !(pars.kd >= 0.0 && pars.kd.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Downforce coefficient of vehicle {} is {}N·s²/m², but must be non-negative and \
            finite!",
            pars.name, pars.kd
        ));
    }

    Ok(())
}

/// terminal_speed returns the asymptotic speed v_inf = F0 / c that the vehicle approaches as the
/// propulsive force balances the drag.
pub fn terminal_speed(pars: &VehiclePars) -> anyhow::Result<f64> {
    check_vehicle_pars(pars)?;
    Ok(pars.f0 / pars.c)
}

/// time_constant returns tau = m / c, which characterizes how quickly the speed approaches the
/// terminal speed.
pub fn time_constant(pars: &VehiclePars) -> anyhow::Result<f64> {
    check_vehicle_pars(pars)?;
    Ok(pars.m / pars.c)
}

/// conv_time returns the time after which the vehicle speed is within CONV_THRESHOLD of its
/// terminal speed: t* = -tau * ln(CONV_THRESHOLD). The analytical model never reaches the
/// terminal speed exactly, so this is the practical end of the acceleration phase.
pub fn conv_time(pars: &VehiclePars) -> anyhow::Result<f64> {
    Ok(-time_constant(pars)? * CONV_THRESHOLD.ln())
}

/// velocity_at returns the instantaneous speed of the vehicle after an acceleration from
/// standstill over the elapsed time t:
///
/// v(t) = v_inf * (1 - exp(-t / tau))
///
/// This is the closed-form solution of the motion equation m * dv/dt = F0 - c * v; it must not be
/// replaced by numerical integration.
pub fn velocity_at(t: f64, pars: &VehiclePars) -> anyhow::Result<f64> {
    check_vehicle_pars(pars)?;

    if !(t >= 0.0 && t.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Elapsed time is {}s, but must be non-negative and finite!",
            t
        ));
    }

    let v_inf = pars.f0 / pars.c;
    let tau = pars.m / pars.c;
    Ok(v_inf * (1.0 - (-t / tau).exp()))
}

/// downforce_at returns the aerodynamic downforce D = kd * v² at the inserted speed. A negative
/// speed is a programming error, not a physical case.
pub fn downforce_at(v: f64, pars: &VehiclePars) -> anyhow::Result<f64> {
    check_vehicle_pars(pars)?;

    if !(v >= 0.0 && v.is_finite()) {
        return Err(InvalidParameterError).context(format!(
            "Speed is {}m/s, but must be non-negative and finite!",
            v
        ));
    }

    Ok(pars.kd * v * v)
}

/// downforce_percent returns the downforce as percent of the vehicle weight, i.e.
/// p = D / (m * g) * 100.
pub fn downforce_percent(d: f64, pars: &VehiclePars) -> anyhow::Result<f64> {
    check_vehicle_pars(pars)?;

    if !d.is_finite() {
        return Err(InvalidParameterError)
            .context(format!("Downforce is {}N, but must be finite!", d));
    }

    Ok(d / (pars.m * G_ACCEL) * 100.0)
}
