mod report_aggregator;
mod requires_projector;

pub use report_aggregator::ReportAggregator;
pub use requires_projector::{RequiresProjector, Versioned};
