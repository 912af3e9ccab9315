use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[mm:ss.fff]` 形式的时间标签；分隔符兼容 `:`，小数部分 1~3 位、可省略
    static ref TIME_TAG_RE: Regex =
        Regex::new(r"\[(\d{1,2}):(\d{1,2})(?:[:.](\d{1,3}))?\]").unwrap();
}

/// 一个时间标签，如 `[01:23.456]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTag {
    pub minutes: u32,
    pub seconds: u32,
    /// 小数部分按毫秒数解析，省略时为 0
    pub millis: u32,
}

impl TimeTag {
    /// 换算为秒
    pub fn as_secs_f64(&self) -> f64 {
        self.minutes as f64 * 60.0 + self.seconds as f64 + self.millis as f64 / 1000.0
    }
}

/// 提取一行内的全部时间标签
///
/// 一行可能携带 0 个、1 个或多个标签（副歌/和声常见一句文本挂多个时间戳）；
/// 括号不配对等畸形标签不会被匹配，按普通文本保留，不报错。
///
/// 每次调用都做一次全新的正则扫描，行与行之间不携带任何匹配位置状态
pub fn time_tags(line: &str) -> impl Iterator<Item = TimeTag> + '_ {
    TIME_TAG_RE.captures_iter(line).map(|caps| TimeTag {
        minutes: caps[1].parse().unwrap_or(0),
        seconds: caps[2].parse().unwrap_or(0),
        millis: caps.get(3).map_or(0, |m| m.as_str().parse().unwrap_or(0)),
    })
}

/// 去除一行内的全部时间标签并修剪首尾空白
pub fn strip_time_tags(line: &str) -> String {
    TIME_TAG_RE.replace_all(line, "").trim().to_string()
}
