mod epa_convergence;
mod properties;
mod squares;
