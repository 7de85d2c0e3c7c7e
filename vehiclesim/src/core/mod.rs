pub mod comparison;
pub mod display;
pub mod handle_comparison;
pub mod kinematics;
pub mod selection;
pub mod series;
pub mod vehicle;
