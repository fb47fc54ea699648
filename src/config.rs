use std::path::PathBuf;

/// Where a session gets its data from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizConfig {
    /// JSON list of players
    pub players_file: Option<PathBuf>,
    /// JSON list of songs
    pub songs_file: Option<PathBuf>,
    /// Where to write the end-of-game report (None = don't write one)
    pub results_file: Option<PathBuf>,
    /// Seed for the song draw (None = seeded from entropy)
    pub seed: Option<u64>,
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl QuizConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let seed = non_empty_var("QUIZ_SEED").and_then(|s| match s.parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("Ignoring invalid QUIZ_SEED {:?}: {}", s, e);
                None
            }
        });

        Self {
            players_file: non_empty_var("QUIZ_PLAYERS_FILE").map(PathBuf::from),
            songs_file: non_empty_var("QUIZ_SONGS_FILE").map(PathBuf::from),
            results_file: non_empty_var("QUIZ_RESULTS_FILE").map(PathBuf::from),
            seed,
        }
    }

    /// Command-line values win over the environment
    pub fn merge(self, overrides: QuizConfig) -> Self {
        Self {
            players_file: overrides.players_file.or(self.players_file),
            songs_file: overrides.songs_file.or(self.songs_file),
            results_file: overrides.results_file.or(self.results_file),
            seed: overrides.seed.or(self.seed),
        }
    }
}
