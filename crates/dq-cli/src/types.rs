use dq_model::PipelineReport;
use dq_report::OutputPaths;

#[derive(Debug)]
pub struct CleanResult {
    pub report: PipelineReport,
    /// `None` on --dry-run.
    pub outputs: Option<OutputPaths>,
}
