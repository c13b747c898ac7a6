use matchday_core::ports::{ReportWriter, Result};
use std::fs;

/// HTML file writer adapter implementation.
pub struct HtmlFileReport {
    output_path: String,
}

impl HtmlFileReport {
    /// Creates a new HtmlFileReport writing to the given path.
    pub fn new(output_path: String) -> Self {
        Self { output_path }
    }

    /// Wraps a summary in the fixed report template: one heading plus one
    /// content block.
    fn render(&self, summary: &str) -> String {
        let mut output = String::new();
        output.push_str("<html>\n");
        output.push_str("<head><title>Match Report</title></head>\n");
        output.push_str("<body>\n");
        output.push_str("<h1>Match Report</h1>\n");
        output.push_str(&format!("<p>{}</p>\n", summary));
        output.push_str("</body>\n");
        output.push_str("</html>\n");
        output
    }
}

impl ReportWriter for HtmlFileReport {
    fn print(&self, summary: &str) -> Result<()> {
        // Whatever was previously at the destination is replaced whole
        fs::write(&self.output_path, self.render(summary))?;
        Ok(())
    }
}
