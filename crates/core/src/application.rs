use crate::analysis::WinsAnalysis;
use crate::domain::MatchRecord;
use crate::ports::{Analyzer, ReportWriter, Result};

/// Application service binding one analysis to one output target.
///
/// The service holds both collaborators behind their ports and knows
/// nothing about the concrete variants it was wired with.
pub struct ReportService {
    analyzer: Box<dyn Analyzer>,
    writer: Box<dyn ReportWriter>,
}

impl ReportService {
    /// Creates a new ReportService with the given dependencies.
    pub fn new(analyzer: Box<dyn Analyzer>, writer: Box<dyn ReportWriter>) -> Self {
        Self { analyzer, writer }
    }

    /// Convenience constructor bundling a wins analysis with any writer.
    pub fn wins(team: impl Into<String>, writer: Box<dyn ReportWriter>) -> Self {
        Self::new(Box::new(WinsAnalysis::new(team)), writer)
    }

    /// Executes one report run: analyzes the records, then prints the summary.
    pub fn build_and_print(&self, records: &[MatchRecord]) -> Result<()> {
        let summary = self.analyzer.run(records);
        self.writer.print(&summary)?;
        Ok(())
    }
}
