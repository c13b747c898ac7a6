use clap::Parser;
use console_adapter::ConsoleReport;
use csv_adapter::{CsvTableReader, MatchRowDecoder};
use html_adapter::HtmlFileReport;
use matchday_core::application::ReportService;
use matchday_core::ports::{Error, ReportWriter, Result, RowDecoder};

/// CLI tool to read match results from a CSV listing and report a team's win count
#[derive(Parser, Debug)]
#[command(name = "matchday")]
#[command(about = "Reads match results from a CSV file and reports how many games a team won")]
struct Cli {
    /// Path to the source CSV file of match results
    #[arg(short = 'i', long = "input", required = true)]
    input: String,

    /// Team whose wins are counted (exact, case-sensitive name)
    #[arg(short = 't', long = "team", required = true)]
    team: String,

    /// Path where the HTML report will be written
    #[arg(short = 'o', long = "output", default_value = "report.html")]
    output: String,

    /// Treat the first line of the input as a header and skip it
    #[arg(long = "has-header")]
    has_header: bool,
}

fn run(cli: &Cli) -> Result<()> {
    if cli.team.trim().is_empty() {
        return Err(Error::Config("team name must not be empty".to_string()));
    }

    // Instantiate the tabular reader with the concrete row decoder
    let decoder: Box<dyn RowDecoder> = Box::new(MatchRowDecoder);
    let mut reader = CsvTableReader::new(decoder);
    if cli.has_header {
        reader = reader.with_header_row();
    }

    // One load feeds every report run
    let records = reader.load(&cli.input)?;

    // Console report first, then the HTML file report, over the same records
    let console: Box<dyn ReportWriter> = Box::new(ConsoleReport);
    ReportService::wins(cli.team.clone(), console).build_and_print(&records)?;

    let file: Box<dyn ReportWriter> = Box::new(HtmlFileReport::new(cli.output.clone()));
    ReportService::wins(cli.team.clone(), file).build_and_print(&records)?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            println!("Report written to {}", cli.output);
        }
        Err(e) => {
            eprintln!("Error building report: {}", e);
            std::process::exit(1);
        }
    }
}
