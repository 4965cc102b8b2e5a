use zentris_engine::{GameSeed, GameSession};

use crate::tui::Tui;

use self::app::PlayApp;

mod app;
mod music;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for a deterministic session (32 hex characters)
    #[clap(long)]
    seed: Option<GameSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let session = match arg.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    let mut app = PlayApp::new(session);
    Tui::new().run(&mut app)
}
