/// Terminal batch harness for silhouette edge classification
pub mod report;

pub use report::ClassificationReport;
