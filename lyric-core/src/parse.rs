use crate::align::TranslationIndex;
use crate::model::{LyricLine, Lyrics};
use crate::timetag::{strip_time_tags, time_tags};
use log::debug;
use std::cmp::Ordering;

/// 解析 LRC 主歌词与可选的翻译歌词
///
/// 一个物理行携带多个时间标签时（和声、重复段落常见），每个标签各生成一行，
/// 正文重复；无时间标签的行作为说明行收入 `captions`，不进入同步序列。
///
/// 任何畸形输入都只会退化为更少的歌词行，不会报错；
/// 空输入返回空的 [`Lyrics`]，调用方应视为"无歌词"而非失败
pub fn parse(raw_primary: &str, raw_translation: Option<&str>) -> Lyrics {
    let index = raw_translation
        .map(TranslationIndex::build)
        .unwrap_or_default();

    let mut lines: Vec<LyricLine> = Vec::new();
    let mut captions: Vec<String> = Vec::new();

    for raw_line in raw_primary.lines() {
        let text = strip_time_tags(raw_line);
        let mut tags = time_tags(raw_line).peekable();

        if tags.peek().is_none() {
            // 说明行（作词/作曲等元信息）
            if !text.is_empty() {
                captions.push(text);
            }
            continue;
        }

        for tag in tags {
            let time = tag.as_secs_f64();
            let translation = index.align(time).map(str::to_string);

            lines.push(LyricLine {
                time: Some(time),
                text: text.clone(),
                translation,
            });
        }
    }

    // 稳定排序：同一物理行上取整到同一时刻的标签保持原有相对顺序
    lines.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));

    debug!(
        "parsed {} synced lines, {} captions",
        lines.len(),
        captions.len()
    );

    Lyrics { lines, captions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_conversion() {
        let lyrics = parse("[00:01.00]Hello", None);
        assert_eq!(lyrics.lines.len(), 1);
        assert_eq!(lyrics.lines[0].time, Some(1.0));
        assert_eq!(lyrics.lines[0].text, "Hello");
        assert_eq!(lyrics.lines[0].translation, None);
    }

    #[test]
    fn test_multi_tag_duplication() {
        let lyrics = parse("[00:05.00][00:10.00]La la", None);
        assert_eq!(lyrics.lines.len(), 2);
        assert_eq!(lyrics.lines[0].time, Some(5.0));
        assert_eq!(lyrics.lines[1].time, Some(10.0));
        assert!(lyrics.lines.iter().all(|line| line.text == "La la"));
    }

    #[test]
    fn test_translation_within_tolerance() {
        let lyrics = parse("[00:01.00]Hello", Some("[00:01.10]你好"));
        assert_eq!(lyrics.lines[0].translation.as_deref(), Some("你好"));
    }

    #[test]
    fn test_translation_rejected_outside_tolerance() {
        let lyrics = parse("[00:01.00]Hello", Some("[00:03.50]你好"));
        assert_eq!(lyrics.lines[0].translation, None);
    }

    #[test]
    fn test_sort_order_invariant() {
        let lyrics = parse("[00:10.00]third\n[00:01.00]first\n[00:05.00]second", None);
        let times: Vec<f64> = lyrics.lines.iter().filter_map(|line| line.time).collect();
        assert_eq!(times, vec![1.0, 5.0, 10.0]);
        assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_empty_input() {
        let lyrics = parse("", Some(""));
        assert!(lyrics.lines.is_empty());
        assert!(lyrics.captions.is_empty());
        assert!(lyrics.is_empty());
    }

    // 同步序列里只保留带时间戳的行（两种历史行为中取过滤版本为准），
    // 说明行单独收入 captions，需要展示时由调用方自取
    #[test]
    fn test_untimed_lines_are_filtered_from_synced_output() {
        let lyrics = parse("just a comment", None);
        assert!(lyrics.lines.is_empty());
        assert_eq!(lyrics.captions, vec!["just a comment".to_string()]);
    }

    #[test]
    fn test_untimed_lines_interleaved() {
        let lyrics = parse("作词 : 某人\n[00:01.00]Hello\n(间奏)\n[00:05.00]World", None);
        assert_eq!(lyrics.lines.len(), 2);
        assert_eq!(lyrics.captions, vec!["作词 : 某人", "(间奏)"]);
    }

    #[test]
    fn test_malformed_tag_stays_in_text() {
        let lyrics = parse("[00:01.00][bad tag Hello", None);
        assert_eq!(lyrics.lines.len(), 1);
        assert_eq!(lyrics.lines[0].text, "[bad tag Hello");
    }

    #[test]
    fn test_multi_tag_line_gets_translation_per_timestamp() {
        let lyrics = parse(
            "[00:05.00][00:10.00]La la",
            Some("[00:05.20]啦啦\n[00:10.00]啦啦啦"),
        );
        assert_eq!(lyrics.lines[0].translation.as_deref(), Some("啦啦"));
        assert_eq!(lyrics.lines[1].translation.as_deref(), Some("啦啦啦"));
    }

    #[test]
    fn test_reparse_is_stable() {
        let primary = "[00:01.00]Hello\n[00:02.00]World";
        let first = parse(primary, Some("[00:01.00]你好"));
        let second = parse(primary, Some("[00:01.00]你好"));
        assert_eq!(first, second);
    }
}
