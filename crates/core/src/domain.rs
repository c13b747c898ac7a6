use chrono::NaiveDate;

/// Final outcome of a match, as encoded in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchResult {
    /// Maps a raw result code to its enumeration value.
    ///
    /// Recognized codes: "H" (home win), "A" (away win), "D" (draw).
    /// Any other code is a decode failure at the caller.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "H" => Some(MatchResult::HomeWin),
            "A" => Some(MatchResult::AwayWin),
            "D" => Some(MatchResult::Draw),
            _ => None,
        }
    }

    /// The canonical one-letter code for this result.
    pub fn token(&self) -> &'static str {
        match self {
            MatchResult::HomeWin => "H",
            MatchResult::AwayWin => "A",
            MatchResult::Draw => "D",
        }
    }
}

/// One decoded match result. The `result` field is taken verbatim from the
/// source; consistency with the goal counts is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub result: MatchResult,
    pub competition: String,
}

impl MatchRecord {
    /// Whether the given team won this match.
    ///
    /// Team names are compared by exact string equality. A team that
    /// appears only as the loser, or in a draw, does not match.
    pub fn is_won_by(&self, team: &str) -> bool {
        (self.home_team == team && self.result == MatchResult::HomeWin)
            || (self.away_team == team && self.result == MatchResult::AwayWin)
    }
}
