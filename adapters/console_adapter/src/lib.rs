use matchday_core::ports::{ReportWriter, Result};

/// Console writer adapter implementation.
///
/// Writes the summary to standard output followed by a line break.
pub struct ConsoleReport;

impl ReportWriter for ConsoleReport {
    fn print(&self, summary: &str) -> Result<()> {
        println!("{}", summary);
        Ok(())
    }
}
