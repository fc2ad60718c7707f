use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Session-scoped ranking of finished runs, highest score first.
///
/// Equal scores keep the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, score: u32) {
        let name = name.into();
        info!("leaderboard: {name} scored {score}");
        self.entries.push(LeaderboardEntry { name, score });
        // sort_by is stable, so ties stay in insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Entries in ranked order
    pub fn view(&self) -> impl ExactSizeIterator<Item = &LeaderboardEntry> + Clone + '_ {
        self.entries.iter()
    }

    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
