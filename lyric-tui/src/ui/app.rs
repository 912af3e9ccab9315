use crate::config::Command;
use crate::ui::panel::LyricPanel;
use crate::ui::widget::build_playback_bar;
use crate::ui::Controller;
use crate::PLAYER;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::style::palette::tailwind;
use ratatui::widgets::{Block, Borders, Gauge};
use std::io::Stdout;

/// 单次快进/快退的步长（s）
const SEEK_STEP: f64 = 5.0;

pub struct App<'a> {
    // model
    need_re_update_view: bool,

    // view
    lyric_panel: LyricPanel<'a>,
    playback_bar: Gauge<'a>,

    // const
    terminal: Terminal<CrosstermBackend<Stdout>>,
    normal_style: Style,
}

/// public
impl<'a> App<'a> {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>) -> Self {
        Self {
            need_re_update_view: true,
            lyric_panel: LyricPanel::new(),
            playback_bar: Gauge::default(),
            terminal,
            normal_style: Style::default(),
        }
    }

    pub fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;

        Ok(())
    }
}

/// app routine
impl<'a> App<'a> {
    pub async fn update_model(&mut self) -> Result<()> {
        PLAYER.lock().await.tick();

        // lyric_panel
        self.need_re_update_view =
            self.lyric_panel.update_model().await? || self.need_re_update_view;

        // playback_bar 一直保持更新
        let player_guard = PLAYER.lock().await;
        self.playback_bar = build_playback_bar(
            Gauge::default()
                .block(Block::default().borders(Borders::ALL))
                .gauge_style(tailwind::RED.c500),
            &player_guard,
        );

        Ok(())
    }

    pub async fn handle_event(&mut self) -> Result<bool> {
        let cmd = match event::read()? {
            Event::Key(key_event)
                if key_event.kind == KeyEventKind::Press
                    || key_event.kind == KeyEventKind::Repeat =>
            {
                match key_event.code {
                    KeyCode::Char('c')
                        if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        Command::Quit
                    }
                    KeyCode::Char('q') => Command::Quit,
                    KeyCode::Char(' ') => Command::TogglePlay,
                    KeyCode::Down | KeyCode::Char('j') => Command::Down,
                    KeyCode::Up | KeyCode::Char('k') => Command::Up,
                    KeyCode::Char('g') => Command::GoToTop,
                    KeyCode::Char('G') => Command::GoToBottom,
                    KeyCode::Enter => Command::EnterOrPlay,
                    KeyCode::Char('f') | KeyCode::Esc => Command::ResumeFollow,
                    KeyCode::Right | KeyCode::Char('l') => Command::SeekForward,
                    KeyCode::Left | KeyCode::Char('h') => Command::SeekBackward,
                    _ => Command::Nop,
                }
            }
            _ => Command::Nop,
        };

        // app 响应的命令
        match cmd {
            Command::Quit => {
                return Ok(false);
            }
            Command::TogglePlay => {
                PLAYER.lock().await.toggle_play();
            }
            Command::SeekForward => {
                PLAYER.lock().await.seek_by(SEEK_STEP);
            }
            Command::SeekBackward => {
                PLAYER.lock().await.seek_by(-SEEK_STEP);
            }
            _ => {}
        }

        // 需要向下传递给面板的命令
        match cmd {
            Command::Down
            | Command::Up
            | Command::GoToTop
            | Command::GoToBottom
            | Command::EnterOrPlay
            | Command::ResumeFollow => {
                self.need_re_update_view =
                    self.lyric_panel.handle_event(cmd).await? || self.need_re_update_view;
            }
            _ => {}
        }

        Ok(true)
    }

    pub fn draw(&mut self) -> Result<()> {
        // lyric_panel 只在 need_re_update_view 为 true 时更新 view
        if self.need_re_update_view {
            self.lyric_panel.update_view(&self.normal_style);
            self.need_re_update_view = false;
        }

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
                .split(frame.area());

            // render lyric_panel
            self.lyric_panel.draw(frame, chunks[0]);

            // render playback_bar
            frame.render_widget(&self.playback_bar, chunks[1]);
        })?;

        Ok(())
    }
}
