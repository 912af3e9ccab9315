mod lyric_panel;

pub use lyric_panel::*;

use ratatui::prelude::{Modifier, Style};
use ratatui::style::palette::tailwind;

/// 跟随模式下当前行的高亮
const ACTIVE_LINE_STYLE: Style = Style::new()
    .fg(tailwind::RED.c600)
    .add_modifier(Modifier::BOLD);

/// 自由浏览模式下用户选中行的高亮
const ITEM_SELECTED_STYLE: Style = Style::new()
    .bg(tailwind::RED.c400)
    .add_modifier(Modifier::BOLD);
