pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;

#[cfg(test)]
fn test_vehicle_pars() -> crate::core::vehicle::VehiclePars {
    // v_inf = 100 m/s, tau = 20 s
    crate::core::vehicle::VehiclePars {
        name: String::from("Roadster S"),
        m: 1000.0,
        f0: 5000.0,
        c: 50.0,
        kd: 2.0,
        kz: 80000.0,
        cz: 4500.0,
        image: None,
    }
}



#[cfg(test)]
mod selection_tests {
    use crate::core::selection::{Selection, MAX_NO_SELECTED};
    use crate::core::vehicle::Catalog;
    use crate::test_vehicle_pars;

    fn test_catalog() -> Catalog {
        let mut veh_b = test_vehicle_pars();
        veh_b.name = String::from("GT Apex");

        Catalog {
            vehicles: vec![test_vehicle_pars(), veh_b],
        }
    }

    #[test]
    fn test_first_catalog_entry_preselected() {
        let selection = Selection::new(&test_catalog());

        assert_eq!(selection.no_selected(), 1);
        assert!(selection.contains("Roadster S"));
    }

    #[test]
    fn test_empty_catalog_empty_selection() {
        let selection = Selection::new(&Catalog { vehicles: vec![] });
        assert!(selection.is_empty());
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut selection = Selection::default();
        selection.add("A");
        selection.add("A");

        assert_eq!(selection.no_selected(), 1);
    }

    #[test]
    fn test_add_beyond_capacity_is_noop() {
        let mut selection = Selection::default();

        for name in ["A", "B", "C", "D", "E"].iter() {
            selection.add(name);
        }

        assert_eq!(selection.no_selected(), MAX_NO_SELECTED);
        assert!(!selection.contains("E"));
        assert_eq!(selection.names(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut selection = Selection::default();

        for name in ["A", "B", "C", "D"].iter() {
            selection.add(name);
        }

        selection.remove("B");
        assert_eq!(selection.names(), ["A", "C", "D"]);

        // no-op for an absent name
        selection.remove("B");
        assert_eq!(selection.names(), ["A", "C", "D"]);
    }
}

#[cfg(test)]
mod comparison_tests {
    use crate::core::comparison::align;
    use crate::core::selection::Selection;
    use crate::core::vehicle::{Catalog, VehiclePars};
    use approx::{assert_relative_eq, assert_ulps_eq};

    /// Two vehicles with tau = 10 s / 30 s and v_inf = 100 m/s / 120 m/s.
    fn test_catalog() -> Catalog {
        Catalog {
            vehicles: vec![
                VehiclePars {
                    name: String::from("Sprinter"),
                    m: 500.0,
                    f0: 5000.0,
                    c: 50.0,
                    kd: 3.0,
                    kz: 90000.0,
                    cz: 5000.0,
                    image: None,
                },
                VehiclePars {
                    name: String::from("Cruiser"),
                    m: 1500.0,
                    f0: 6000.0,
                    c: 50.0,
                    kd: 1.5,
                    kz: 70000.0,
                    cz: 4000.0,
                    image: None,
                },
            ],
        }
    }

    fn test_selection() -> Selection {
        let mut selection = Selection::default();
        selection.add("Sprinter");
        selection.add("Cruiser");
        selection
    }

    #[test]
    fn test_align_shared_horizon() {
        let comparison = align(&test_selection(), &test_catalog(), 0.2).unwrap();

        // the slowest-converging vehicle determines the horizon: 30 * ln(1000), approx. 207.2 s
        assert_relative_eq!(
            comparison.shared_horizon,
            30.0 * 1000.0_f64.ln(),
            max_relative = 1e-12
        );

        // both series span the full horizon with the same sample count
        assert_eq!(comparison.series_all.len(), 2);
        assert_eq!(
            comparison.series_all[0].series.samples.len(),
            comparison.series_all[1].series.samples.len()
        );

        for comp_series in comparison.series_all.iter() {
            let t_last = comp_series.series.samples.last().unwrap().t;
            assert!(t_last <= comparison.shared_horizon);
            assert!(t_last > comparison.shared_horizon - 0.2);
        }
    }

    #[test]
    fn test_align_global_max_speed() {
        let comparison = align(&test_selection(), &test_catalog(), 0.2).unwrap();
        assert_ulps_eq!(comparison.v_max_global, 120.0);
    }

    #[test]
    fn test_align_skips_unknown_vehicle() {
        let mut selection = Selection::default();
        selection.add("Ghost");
        selection.add("Sprinter");

        let comparison = align(&selection, &test_catalog(), 0.2).unwrap();

        assert_eq!(comparison.series_all.len(), 1);
        assert_eq!(comparison.series_all[0].series.name, "Sprinter");
        // the vehicle keeps its selection slot although the entry before it was skipped
        assert_eq!(comparison.series_all[0].slot, 1);
    }

    #[test]
    fn test_align_skips_invalid_vehicle() {
        let mut catalog = test_catalog();
        catalog.vehicles[0].c = 0.0;

        let comparison = align(&test_selection(), &catalog, 0.2).unwrap();

        assert_eq!(comparison.series_all.len(), 1);
        assert_eq!(comparison.series_all[0].series.name, "Cruiser");
    }

    #[test]
    fn test_align_skips_non_finite_convergence() {
        // tau = m / c overflows to infinity although every single parameter is finite and valid
        let mut catalog = test_catalog();
        catalog.vehicles[0].m = f64::MAX;
        catalog.vehicles[0].c = 1.0e-10;

        let comparison = align(&test_selection(), &catalog, 0.2).unwrap();

        assert_eq!(comparison.series_all.len(), 1);
        assert_eq!(comparison.series_all[0].series.name, "Cruiser");
        assert!(comparison.shared_horizon.is_finite());
        assert!(comparison.v_max_global.is_finite());
    }

    #[test]
    fn test_align_idempotent() {
        let comparison_1 = align(&test_selection(), &test_catalog(), 0.2).unwrap();
        let comparison_2 = align(&test_selection(), &test_catalog(), 0.2).unwrap();

        assert_eq!(comparison_1, comparison_2);
    }

    #[test]
    fn test_align_empty_selection() {
        let comparison = align(&Selection::default(), &test_catalog(), 0.2).unwrap();

        assert!(comparison.series_all.is_empty());
        assert_ulps_eq!(comparison.shared_horizon, 0.0);
        assert_ulps_eq!(comparison.v_max_global, 0.0);
    }
}




#[cfg(test)]
mod pre_tests {
    use crate::core::vehicle::Catalog;
    use crate::pre::check_sim_opts_pars::check_sim_opts_pars;
    use crate::pre::sim_opts::SimOpts;
    use crate::test_vehicle_pars;
    use approx::assert_ulps_eq;
    use std::path::PathBuf;

    fn test_sim_opts() -> SimOpts {
        SimOpts {
            debug: false,
            gui: false,
            catalogfile_path: PathBuf::from("input/vehicles.json"),
            select: vec![],
            timestep_size: 0.2,
            unit: String::from("mps"),
            export_path: None,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog {
            vehicles: vec![test_vehicle_pars()],
        }
    }

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"{"vehicles": [{"name": "A", "m": 1000.0, "F0": 5000.0, "c": 50.0,
            "kd": 2.0, "kz": 80000.0, "cz": 4500.0}]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_ulps_eq!(catalog.vehicles[0].f0, 5000.0);
        assert!(catalog.vehicles[0].image.is_none());
        assert!(catalog.get_vehicle_pars("A").is_some());
        assert!(catalog.get_vehicle_pars("B").is_none());
    }

    #[test]
    fn test_check_accepts_valid_inputs() {
        assert!(check_sim_opts_pars(&test_sim_opts(), &test_catalog()).is_ok());
    }

    #[test]
    fn test_check_rejects_bad_timestep_size() {
        let mut sim_opts = test_sim_opts();
        sim_opts.timestep_size = 0.0;
        assert!(check_sim_opts_pars(&sim_opts, &test_catalog()).is_err());
    }

    #[test]
    fn test_check_rejects_too_many_selected() {
        let mut sim_opts = test_sim_opts();
        sim_opts.select = vec!["A", "B", "C", "D", "E"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(check_sim_opts_pars(&sim_opts, &test_catalog()).is_err());
    }

    #[test]
    fn test_check_rejects_duplicate_selection() {
        let mut sim_opts = test_sim_opts();
        sim_opts.select = vec![String::from("A"), String::from("A")];
        assert!(check_sim_opts_pars(&sim_opts, &test_catalog()).is_err());
    }

    #[test]
    fn test_check_rejects_unknown_unit() {
        let mut sim_opts = test_sim_opts();
        sim_opts.unit = String::from("mph");
        assert!(check_sim_opts_pars(&sim_opts, &test_catalog()).is_err());
    }

    #[test]
    fn test_check_rejects_empty_catalog() {
        let catalog = Catalog { vehicles: vec![] };
        assert!(check_sim_opts_pars(&test_sim_opts(), &catalog).is_err());
    }

    #[test]
    fn test_check_rejects_invalid_vehicle_pars() {
        let mut catalog = test_catalog();
        catalog.vehicles[0].m = 0.0;
        assert!(check_sim_opts_pars(&test_sim_opts(), &catalog).is_err());

        let mut catalog = test_catalog();
        catalog.vehicles[0].kd = -1.0;
        assert!(check_sim_opts_pars(&test_sim_opts(), &catalog).is_err());
    }

    #[test]
    fn test_check_rejects_duplicate_catalog_names() {
        let mut catalog = test_catalog();
        catalog.vehicles.push(test_vehicle_pars());
        assert!(check_sim_opts_pars(&test_sim_opts(), &catalog).is_err());
    }
}
