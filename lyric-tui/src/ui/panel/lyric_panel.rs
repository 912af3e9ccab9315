use crate::config::Command;
use crate::ui::panel::{ACTIVE_LINE_STYLE, ITEM_SELECTED_STYLE};
use crate::ui::Controller;
use crate::PLAYER;
use anyhow::Result;
use lyric_core::{FollowMode, Lyrics, ScrollFollow};
use ratatui::layout::Rect;
use ratatui::prelude::{Line, Style, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState};
use ratatui::Frame;

pub struct LyricPanel<'a> {
    // model
    title: String,
    lyrics: Option<Lyrics>,
    follow: ScrollFollow, // 滚动跟随状态机；视口几何只在本层计算
    lyric_list_items: Vec<ListItem<'a>>,
    lyric_list_state: ListState,

    // view
    lyric_list: List<'a>,
}

impl<'a> LyricPanel<'a> {
    pub fn new() -> Self {
        let lyric_list_items = vec![ListItem::new(Text::from(
            Line::from("无歌词，请欣赏").centered(),
        ))];

        Self {
            title: String::new(),
            lyrics: None,
            follow: ScrollFollow::new(),
            lyric_list_items,
            lyric_list_state: ListState::default(),
            lyric_list: List::default(),
        }
    }
}

impl<'a> Controller for LyricPanel<'a> {
    async fn update_model(&mut self) -> Result<bool> {
        let mut result = Ok(false);
        let player_guard = PLAYER.lock().await;

        if self.lyrics.as_ref() != Some(player_guard.lyrics()) {
            // 换歌：整体替换歌词列表
            self.title = player_guard.title().to_string();
            let lyrics = player_guard.lyrics().clone();

            if lyrics.is_empty() {
                // 无歌词（纯音乐或获取失败）
                self.lyric_list_items = vec![ListItem::new(Text::from(
                    Line::from("无歌词，请欣赏").centered(),
                ))];
            } else {
                self.lyric_list_items = lyrics
                    .lines
                    .iter()
                    .map(|lyric_line| {
                        let mut lines: Vec<Line> = Vec::new();
                        lines.push(Line::from(lyric_line.text.to_owned()).centered());
                        if let Some(translation) = lyric_line.translation.as_ref() {
                            lines.push(Line::from(translation.to_owned()).centered());
                        }
                        ListItem::new(Text::from(lines))
                    })
                    .collect();
            }

            self.lyrics = Some(lyrics);

            // 更新 selected，防止悬空
            self.lyric_list_state.select(None);
            self.follow.resume_follow();

            result = Ok(true);
        }

        // 跟随模式下选中行自动跟随当前行；自由浏览模式不动视口
        if self.follow.is_auto() {
            let active = player_guard.current_lyric_line_index();
            if active.is_some() && self.lyric_list_state.selected() != active {
                self.lyric_list_state.select(active);
                result = Ok(true);
            }
        }

        if self.lyric_list_state.selected().is_none() && !self.lyric_list_items.is_empty() {
            self.lyric_list_state.select(Some(0));
            result = Ok(true);
        }

        result
    }

    async fn handle_event(&mut self, cmd: Command) -> Result<bool> {
        match cmd {
            // 手动滚动：无条件进入自由浏览模式
            Command::Down => {
                self.follow.on_user_scroll();
                // 直接使用 select_next() 存在越界问题
                if let (Some(selected), list_len) = (
                    self.lyric_list_state.selected(),
                    self.lyric_list_items.len(),
                ) {
                    if selected < list_len - 1 {
                        self.lyric_list_state.select_next();
                    }
                }
            }
            Command::Up => {
                self.follow.on_user_scroll();
                self.lyric_list_state.select_previous();
            }
            Command::GoToTop => {
                self.follow.on_user_scroll();
                self.lyric_list_state.select_first();
            }
            Command::GoToBottom => {
                self.follow.on_user_scroll();
                // 使用 select_last() 会越界
                self.lyric_list_state
                    .select(Some(self.lyric_list_items.len() - 1));
            }
            Command::EnterOrPlay => {
                // 跳转到选中行的时间戳处播放；只转发跳转，不改变跟随模式
                let index = self.lyric_list_state.selected().unwrap_or(0);
                PLAYER.lock().await.seek_to_line(index);
            }
            Command::ResumeFollow => {
                // 恢复跟随并立即回到当前行（居中在 draw() 内完成）
                self.follow.resume_follow();
                let active = PLAYER.lock().await.current_lyric_line_index();
                if active.is_some() {
                    self.lyric_list_state.select(active);
                }
            }
            _ => {}
        }

        Ok(true)
    }

    fn update_view(&mut self, style: &Style) {
        let mut lyric_list = List::new(self.lyric_list_items.clone()).style(*style);

        // block
        let mut block = Block::default()
            .title(Line::from(format!("\u{1F3B5}{}", self.title)).left_aligned())
            .title(
                Line::from(match self.follow.mode() {
                    FollowMode::Auto => "跟随中",
                    FollowMode::Manual => "自由浏览 (f 恢复跟随)",
                })
                .right_aligned(),
            )
            .borders(Borders::ALL);
        if let Some(caption) = self
            .lyrics
            .as_ref()
            .and_then(|lyrics| lyrics.captions.first())
        {
            // 无时间戳的说明行（作词/作曲等）不进入同步列表，取第一条展示在底栏
            block = block.title_bottom(Line::from(format!("\u{1F4DA}{}", caption)).centered());
        }
        lyric_list = lyric_list.block(block);

        // highlight
        lyric_list = match self.follow.mode() {
            FollowMode::Auto => lyric_list
                .highlight_style(ACTIVE_LINE_STYLE)
                .highlight_spacing(HighlightSpacing::WhenSelected),
            FollowMode::Manual => lyric_list.highlight_style(ITEM_SELECTED_STYLE),
        };

        self.lyric_list = lyric_list;
    }

    fn draw(&self, frame: &mut Frame, chunk: Rect) {
        let mut lyric_list_state = self.lyric_list_state.clone();

        // 跟随模式下把当前行居中；自由浏览时视口停在用户离开的位置
        if self.follow.is_auto() {
            self.correct_offset_to_make_lyric_centered(
                &mut lyric_list_state,
                chunk.height as usize,
            );
        }

        frame.render_stateful_widget(&self.lyric_list, chunk, &mut lyric_list_state);
    }
}

impl<'a> LyricPanel<'a> {
    #[inline]
    /// 修正 offset 以使歌词居中
    fn correct_offset_to_make_lyric_centered(
        &self,
        lyric_list_state: &mut ListState,
        available_line_count: usize,
    ) {
        if self.lyric_list_items.len() > 1 {
            let current_index = lyric_list_state.selected().unwrap_or(0);
            // 一句歌词所占行数（带翻译的歌词会占多行）
            let lyric_line_count = self
                .lyric_list_items
                .get(current_index)
                .map_or(1, |item| item.height())
                .max(1);
            let half_line_count = available_line_count / lyric_line_count / 2;
            let near_top_line = half_line_count;
            let near_bottom_line = if self.lyric_list_items.len() - 1 >= 2 * half_line_count {
                self.lyric_list_items.len() - 1 - half_line_count
            } else {
                half_line_count
            };
            // 修正 offset
            if current_index >= near_top_line {
                if current_index >= near_bottom_line {
                    // 接近底部时取消滚动，不居中
                    *lyric_list_state.offset_mut() = near_bottom_line - half_line_count;
                } else {
                    // 动态居中
                    *lyric_list_state.offset_mut() = current_index - half_line_count;
                }
            }
        }
    }
}
