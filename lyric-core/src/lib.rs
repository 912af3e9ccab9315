//! 歌词同步核心
//!
//! 解析双轨 LRC 歌词（主歌词 + 可选翻译），按最近时间戳对齐翻译轨，
//! 根据播放进度解析当前行，并提供滚动跟随状态机。
//!
//! 所有函数均为同步纯函数，调用之间不共享可变状态，可任意重入；
//! `Lyrics` 构建后不可变，换歌时整体替换而非原地修改。

pub mod align;
pub mod follow;
pub mod model;
pub mod parse;
pub mod resolve;
pub mod timetag;

pub use align::TRANSLATION_TOLERANCE;
pub use follow::{FollowMode, ScrollFollow};
pub use model::{LyricLine, Lyrics};
pub use parse::parse;
pub use resolve::{active_index, LOOKAHEAD};
