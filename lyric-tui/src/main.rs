mod config;
mod player;
mod ui;

use crate::config::{Path, RunArgs};
use crate::player::Player;
use crate::ui::App;
use anyhow::Result;
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::{event, execute};
use lazy_static::lazy_static;
use log::error;
use lyric_client::LyricClient;
use lyric_core::Lyrics;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const POLL_DURATION: Duration = Duration::from_millis(100);

lazy_static! {
    static ref PATH_CONFIG: Path = Path::new();
    static ref PLAYER: Arc<Mutex<Player>> = Arc::new(Mutex::new(Player::new()));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = RunArgs::parse(std::env::args().skip(1))?;

    // 先装载歌词再进入终端界面；获取失败只表现为"无歌词"
    let (title, lyrics) = load_lyrics(&args).await;
    PLAYER.lock().await.load(title, lyrics);

    let mut app = App::new(create_terminal()?);

    loop {
        // 先执行 update_model()，再执行 handle_event()
        app.update_model().await?;

        if event::poll(POLL_DURATION)? {
            if !app.handle_event().await? {
                return app.restore_terminal();
            }
        }

        // 渲染
        app.draw()?;
    }
}

async fn load_lyrics(args: &RunArgs) -> (String, Lyrics) {
    match args {
        RunArgs::File {
            primary,
            translation,
        } => {
            let raw_primary = fs::read_to_string(primary).unwrap_or_else(|err| {
                error!("failed to read {:?}: {}", primary, err);
                String::new()
            });
            let raw_translation = translation
                .as_ref()
                .and_then(|path| fs::read_to_string(path).ok());

            let title = primary
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            (title, lyric_core::parse(&raw_primary, raw_translation.as_deref()))
        }
        RunArgs::Remote {
            provider,
            id,
            api_url,
        } => {
            let client = LyricClient::new(api_url.clone(), PATH_CONFIG.lyrics.clone());
            let lyrics = client
                .get_song_lyrics(*provider, id)
                .await
                .unwrap_or_else(|err| {
                    error!("failed to fetch lyrics for {}:{}: {}", provider.as_str(), id, err);
                    Lyrics::default()
                });

            (format!("{}:{}", provider.as_str(), id), lyrics)
        }
    }
}

fn create_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}
