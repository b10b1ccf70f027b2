//! Numbered menu entries.

/// Menu entries keyed by the number the climber types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewReport = 1,
    Recommend = 2,
    LogSession = 3,
    RateDifficulty = 4,
    MonthlyGrades = 5,
    Exit = 6,
    AddToWeeklyLog = 7,
    ViewWeeklyLog = 8,
}

impl MenuChoice {
    /// Menu order as displayed.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ViewReport,
        MenuChoice::Recommend,
        MenuChoice::LogSession,
        MenuChoice::RateDifficulty,
        MenuChoice::MonthlyGrades,
        MenuChoice::Exit,
        MenuChoice::AddToWeeklyLog,
        MenuChoice::ViewWeeklyLog,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| i64::from(c.number()) == n)
    }

    /// Parse a line typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().and_then(Self::from_number)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewReport => "View climbing report",
            MenuChoice::Recommend => "Get a recommendation",
            MenuChoice::LogSession => "Log a single session",
            MenuChoice::RateDifficulty => "Rate a climb's difficulty",
            MenuChoice::MonthlyGrades => "Enter monthly difficulty grades",
            MenuChoice::Exit => "Exit",
            MenuChoice::AddToWeeklyLog => "Add session to weekly log",
            MenuChoice::ViewWeeklyLog => "View weekly log",
        }
    }
}
