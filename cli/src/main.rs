use clap::Clap;
use gui::core::gui::ComparisonPlot;
use std::time::Instant;
use vehiclesim::core::display::SpeedUnit;
use vehiclesim::core::handle_comparison::handle_comparison;
use vehiclesim::core::selection::Selection;
use vehiclesim::pre::check_sim_opts_pars::check_sim_opts_pars;
use vehiclesim::pre::read_catalog::read_catalog;
use vehiclesim::pre::sim_opts::SimOpts;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments and read the vehicle catalog
    let sim_opts: SimOpts = SimOpts::parse();
    let catalog = read_catalog(sim_opts.catalogfile_path.as_path())?;

    // check simulation options and catalog parameters
    check_sim_opts_pars(&sim_opts, &catalog)?;
    let unit = SpeedUnit::from_name(&sim_opts.unit)?;

    // build the selection (the first catalog entry if nothing was selected explicitly)
    let selection = if sim_opts.select.is_empty() {
        Selection::new(&catalog)
    } else {
        let mut selection = Selection::default();

        for name in sim_opts.select.iter() {
            selection.add(name);
        }

        selection
    };

    println!(
        "INFO: Comparing {} vehicle(s) with a sampling step size of {:.3}s",
        selection.no_selected(),
        sim_opts.timestep_size
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if !sim_opts.gui {
        // CONSOLE CASE ----------------------------------------------------------------------------
        let t_start = Instant::now();

        let comp_result = handle_comparison(
            &catalog,
            &selection,
            sim_opts.timestep_size,
            unit,
            sim_opts.debug,
        )?;

        println!(
            "INFO: Execution time (total): {}ms",
            t_start.elapsed().as_millis()
        );

        // POST-PROCESSING -------------------------------------------------------------------------
        comp_result.print_summary();
        comp_result.print_series_tables();

        if let Some(export_path) = &sim_opts.export_path {
            comp_result.write_csv(export_path.as_path())?;
            println!(
                "INFO: Exported the comparison series to {}",
                export_path.to_str().unwrap()
            );
        }
    } else {
        // GUI CASE --------------------------------------------------------------------------------
        // the comparison is recomputed synchronously inside the GUI whenever the selection or the
        // unit changes
        let gui = ComparisonPlot::new(catalog, selection, sim_opts.timestep_size, unit)?;
        let native_options = eframe::NativeOptions::default();
        eframe::run_native(Box::new(gui), native_options);
    }

    Ok(())
}
