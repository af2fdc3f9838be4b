//! Charts module - EDA view rendering

mod plotter;

pub use plotter::ChartPlotter;
