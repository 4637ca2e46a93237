use std::fmt;
use std::str::FromStr;

/// Which statsguru listing to scrape. Each variant carries its own table
/// name, column layout, caption keyword and URL template, so nothing else
/// in the crate needs to know which listing is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    MatchResults,
    BattingInnings,
}

const MATCH_RESULTS_URL: &str = "http://stats.espncricinfo.com/ci/engine/stats/index.html?class=1;page={page};template=results;type=team;view=results";
const BATTING_INNINGS_URL: &str = "http://stats.espncricinfo.com/ci/engine/player/219889.html?class=1;page={page};spanval1=span;template=results;type=batting;view=innings";

const MATCH_RESULTS_COLUMNS: &[&str] = &[
    "team",
    "result",
    "margin",
    "toss",
    "bat",
    "blank",
    "opposition",
    "ground",
    "start_date",
    "blank2",
];

const BATTING_INNINGS_COLUMNS: &[&str] = &[
    "runs",
    "mins",
    "bf",
    "four",
    "six",
    "sr",
    "pos",
    "dismissal",
    "inns",
    "blank",
    "opposition",
    "ground",
    "start_date",
    "blank2",
];

impl Listing {
    pub fn table_name(&self) -> &'static str {
        match self {
            Listing::MatchResults => "results",
            Listing::BattingInnings => "batting",
        }
    }

    /// Column names in the order the site's table emits its cells. The
    /// `blank`/`blank2` columns are padding cells the site really produces.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Listing::MatchResults => MATCH_RESULTS_COLUMNS,
            Listing::BattingInnings => BATTING_INNINGS_COLUMNS,
        }
    }

    /// Caption text identifying the one data table among the several
    /// `table.engineTable` elements on a page.
    pub fn caption(&self) -> &'static str {
        match self {
            Listing::MatchResults => "Match results",
            Listing::BattingInnings => "Innings by innings list",
        }
    }

    pub fn url_template(&self) -> &'static str {
        match self {
            Listing::MatchResults => MATCH_RESULTS_URL,
            Listing::BattingInnings => BATTING_INNINGS_URL,
        }
    }

    /// Builds the URL for a 1-based page index.
    pub fn page_url(&self, page: u32) -> String {
        self.url_template().replace("{page}", &page.to_string())
    }
}

impl FromStr for Listing {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "results" => Ok(Listing::MatchResults),
            "batting" => Ok(Listing::BattingInnings),
            other => Err(anyhow::anyhow!(
                "unknown listing '{other}', expected 'results' or 'batting'"
            )),
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
