use crate::domain::MatchRecord;
use crate::ports::Analyzer;

/// Analysis counting the matches a fixed team has won.
///
/// A record counts when the team is the home side of a home win or the
/// away side of an away win; draws and losses fall outside the predicate.
pub struct WinsAnalysis {
    team: String,
}

impl WinsAnalysis {
    /// Creates a new WinsAnalysis for the given team name.
    pub fn new(team: impl Into<String>) -> Self {
        Self { team: team.into() }
    }
}

impl Analyzer for WinsAnalysis {
    fn run(&self, records: &[MatchRecord]) -> String {
        let wins = records
            .iter()
            .filter(|record| record.is_won_by(&self.team))
            .count();
        format!("{} won {} games", self.team, wins)
    }
}
