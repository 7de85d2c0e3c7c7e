pub mod check_sim_opts_pars;
pub mod read_catalog;
pub mod sim_opts;
