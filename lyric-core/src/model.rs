use serde::{Deserialize, Serialize};

/// 一行同步歌词
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LyricLine {
    /// 时间戳（s）；无时间戳的行不参与播放同步，永远不会成为当前行
    pub time: Option<f64>,

    /// 歌词正文（已去除全部时间标签）
    pub text: String,

    /// 对齐到本行的翻译歌词
    pub translation: Option<String>,
}

/// 一首歌解析后的全部歌词
///
/// 解析成功后不可变；换歌时丢弃旧值、重新解析，不做原地修改
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Lyrics {
    /// 同步歌词行，time 均为 Some 且按时间戳升序
    pub lines: Vec<LyricLine>,

    /// 无时间戳的说明行（作词/作曲等元信息），单独存放，不与同步行混排
    pub captions: Vec<String>,
}

impl Lyrics {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
