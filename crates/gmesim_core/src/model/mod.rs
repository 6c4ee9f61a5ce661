mod adjustments;
mod assumptions;
mod outcome;
mod params;

pub use adjustments::ScenarioAdjustments;
pub use assumptions::BaselineAssumptions;
pub use outcome::FinancialOutcome;
pub use params::ScenarioParameters;
