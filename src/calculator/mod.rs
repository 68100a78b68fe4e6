//! Calculator page: session state, display formatting and batch sweeps

mod session;
mod report;
pub mod format;
pub mod sweep;

pub use session::{CalculatorSession, SliderView};
pub use report::{ComparisonRow, MetricCard, SavingsReport};
pub use format::{format_percent, format_usd};
pub use sweep::{run_sweep, write_csv, SweepGrid, SweepRow};
