use crate::core::display::SpeedUnit;
use crate::interfaces::render_interface::DisplaySeries;
use anyhow::Context;
use std::fmt::Write;
use std::path::Path;

/// Maximum number of table rows printed per vehicle; longer series are strided accordingly.
const MAX_NO_PRINT_ROWS: usize = 25;

/// * `name` - Vehicle name
/// * `m` - (kg) Vehicle mass
/// * `kz` - (N/m) Suspension stiffness (descriptive attribute)
/// * `cz` - (N·s/m) Suspension damping (descriptive attribute)
/// * `v_inf` - (m/s) Terminal speed
/// * `tau` - (s) Time constant of the first-order speed response
/// * `t_conv` - (s) Convergence time (time to get within the convergence threshold of v_inf)
/// * `no_samples` - Number of samples in the aligned series
#[derive(Debug, Clone)]
pub struct VehicleSummary {
    pub name: String,
    pub m: f64,
    pub kz: f64,
    pub cz: f64,
    pub v_inf: f64,
    pub tau: f64,
    pub t_conv: f64,
    pub no_samples: usize,
}

/// ComparisonResult contains all comparison information that is required for post-processing and
/// rendering.
#[derive(Debug)]
pub struct ComparisonResult {
    pub unit: SpeedUnit,
    pub shared_horizon: f64,
    pub v_max_global: f64,
    pub summaries: Vec<VehicleSummary>,
    pub series_all: Vec<DisplaySeries>,
}

impl ComparisonResult {
    /// v_max_display returns the global maximum speed converted to the display unit.
    pub fn v_max_display(&self) -> f64 {
        self.v_max_global * self.unit.factor()
    }

    /// print_summary prints the derived scalars of every compared vehicle to the console output.
    pub fn print_summary(&self) {
        println!("RESULT: Comparison summary");
        println!(
            "Shared horizon: {:.2}s, global max. speed: {:.2} {}",
            self.shared_horizon,
            self.v_max_display(),
            self.unit.label()
        );

        for summary in self.summaries.iter() {
            println!(
                "{}: v_inf {:.2} {}, tau {:.2}s, t_conv {:.2}s, m {:.0}kg, kz {:.0}N/m, \
                cz {:.0}N·s/m, {} samples",
                summary.name,
                summary.v_inf * self.unit.factor(),
                self.unit.label(),
                summary.tau,
                summary.t_conv,
                summary.m,
                summary.kz,
                summary.cz,
                summary.no_samples
            );
        }
    }

    /// print_series_tables prints the sample tables of all compared vehicles to the console
    /// output (strided such that at most MAX_NO_PRINT_ROWS rows are shown per vehicle).
    pub fn print_series_tables(&self) {
        let tmp_v_header = format!("v ({})", self.unit.label());

        for series in self.series_all.iter() {
            let stride = ((series.samples.len() + MAX_NO_PRINT_ROWS - 1) / MAX_NO_PRINT_ROWS).max(1);

            // create string for the sample table
            let mut tmp_string = String::new();
            writeln!(
                &mut tmp_string,
                "{:>8}, {:>10}, {:>10}, {:>8}",
                "t (s)", tmp_v_header, "D (N)", "p (%)"
            )
            .unwrap();

            for sample in series.samples.iter().step_by(stride) {
                writeln!(
                    &mut tmp_string,
                    "{:8.2}, {:10.2}, {:10.2}, {:8.3}",
                    sample.t, sample.v_disp, sample.d, sample.p
                )
                .unwrap();
            }

            // print everything to the console
            println!(
                "RESULT: Series of {} ({} samples{})",
                series.name,
                series.samples.len(),
                if series.truncated { ", truncated" } else { "" }
            );
            print!("{}", tmp_string);
        }
    }

    /// write_csv exports all samples in long format (one row per vehicle and instant) for
    /// external plotting tools.
    pub fn write_csv(&self, filepath: &Path) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_path(filepath).context(format!(
            "Failed to create export file {}!",
            filepath.to_str().unwrap()
        ))?;

        writer
            .write_record(&["name", "t", "v", "d", "p"])
            .context("Failed to write the CSV header!")?;

        for series in self.series_all.iter() {
            for sample in series.samples.iter() {
                let record = [
                    series.name.to_owned(),
                    format!("{:.6}", sample.t),
                    format!("{:.6}", sample.v_disp),
                    format!("{:.6}", sample.d),
                    format!("{:.6}", sample.p),
                ];

                writer
                    .write_record(&record)
                    .context("Failed to write a CSV record!")?;
            }
        }

        writer.flush().context("Failed to flush the CSV writer!")?;
        Ok(())
    }
}
