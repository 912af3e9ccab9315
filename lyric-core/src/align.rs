use crate::timetag::{strip_time_tags, time_tags};
use std::cmp::Ordering;

/// 翻译轨与主轨时间戳允许的最大偏差（s）
///
/// 不同来源的翻译轨很少与主轨逐毫秒一致，1s 的窗口足以容忍漂移，
/// 又不至于把翻译误挂到相邻的无关行上
pub const TRANSLATION_TOLERANCE: f64 = 1.0;

/// 翻译轨索引：时间戳 -> 翻译文本
///
/// 每次解析构建一次、用完即弃，不对外暴露
#[derive(Debug, Default)]
pub(crate) struct TranslationIndex {
    /// 按时间戳升序；等距候选取时间戳较小者，保证结果确定
    entries: Vec<(f64, String)>,
}

impl TranslationIndex {
    /// 逐行提取翻译轨的时间标签并建立索引
    ///
    /// 去标签后正文为空的行丢弃；相同时间戳上后出现的行覆盖先出现的
    pub(crate) fn build(raw_translation: &str) -> Self {
        let mut entries: Vec<(f64, String)> = Vec::new();

        for line in raw_translation.lines() {
            let text = strip_time_tags(line);
            if text.is_empty() {
                continue;
            }

            for tag in time_tags(line) {
                let time = tag.as_secs_f64();
                match entries
                    .binary_search_by(|(t, _)| t.partial_cmp(&time).unwrap_or(Ordering::Less))
                {
                    Ok(pos) => entries[pos].1 = text.clone(),
                    Err(pos) => entries.insert(pos, (time, text.clone())),
                }
            }
        }

        Self { entries }
    }

    /// 为主轨时间戳挑选最接近的翻译
    ///
    /// 时间戳完全相等直接命中；否则取偏差最小的候选，
    /// 偏差达到 [`TRANSLATION_TOLERANCE`] 时判为无翻译
    pub(crate) fn align(&self, primary_time: f64) -> Option<&str> {
        let mut best: Option<(f64, &str)> = None;

        for (time, text) in &self.entries {
            if *time == primary_time {
                return Some(text);
            }

            let diff = (time - primary_time).abs();
            // 严格小于：等距时保留先遇到的（即时间戳较小的）候选
            match best {
                Some((best_diff, _)) if diff >= best_diff => {}
                _ => best = Some((diff, text)),
            }
        }

        match best {
            Some((diff, text)) if diff < TRANSLATION_TOLERANCE => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let index = TranslationIndex::build("[00:01.00]你好\n[00:03.00]再见");
        assert_eq!(index.align(1.0), Some("你好"));
        assert_eq!(index.align(3.0), Some("再见"));
    }

    #[test]
    fn test_nearest_within_tolerance() {
        let index = TranslationIndex::build("[00:01.10]你好");
        // 偏差 0.1 < 1.0，命中
        assert_eq!(index.align(1.0), Some("你好"));
    }

    #[test]
    fn test_rejected_outside_tolerance() {
        let index = TranslationIndex::build("[00:03.50]你好");
        // 偏差 2.5 >= 1.0，判为无翻译
        assert_eq!(index.align(1.0), None);
        // 恰好 1.0 也不命中（严格小于）
        let index = TranslationIndex::build("[00:02.00]你好");
        assert_eq!(index.align(1.0), None);
    }

    #[test]
    fn test_equidistant_takes_smaller_timestamp() {
        let index = TranslationIndex::build("[00:01.00]前\n[00:02.00]后");
        // 1.5s 到两个候选等距，取时间戳较小的
        assert_eq!(index.align(1.5), Some("前"));
    }

    #[test]
    fn test_same_timestamp_later_line_overwrites() {
        let index = TranslationIndex::build("[00:01.00]旧\n[00:01.00]新");
        assert_eq!(index.align(1.0), Some("新"));
    }

    #[test]
    fn test_empty_text_lines_are_skipped() {
        let index = TranslationIndex::build("[00:01.00]\n[00:01.20]好");
        // 1.0s 处的空行未入索引，命中 1.2s 的近邻
        assert_eq!(index.align(1.0), Some("好"));
    }

    #[test]
    fn test_empty_track() {
        let index = TranslationIndex::build("");
        assert_eq!(index.align(1.0), None);
    }
}
