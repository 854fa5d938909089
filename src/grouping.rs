use std::collections::BTreeMap;

use crate::types::interlinear::{ChapterGroup, VerseRecord};

/// Partitions verses by chapter, chapters ascending.
///
/// Within a chapter verses are sorted by number with a stable sort, so
/// repeated verse numbers are all kept in the order they were read.
pub fn group_by_chapter(verses: impl IntoIterator<Item = VerseRecord>) -> Vec<ChapterGroup> {
    let mut chapters: BTreeMap<u32, Vec<VerseRecord>> = BTreeMap::new();
    for verse in verses {
        chapters.entry(verse.chapter).or_default().push(verse);
    }

    chapters
        .into_iter()
        .map(|(number, mut verses)| {
            verses.sort_by_key(|v| v.verse);
            ChapterGroup { number, verses }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::interlinear::WordPair;
    use proptest::prelude::*;

    fn verse(chapter: u32, verse: u32, tag: &str) -> VerseRecord {
        VerseRecord { chapter, verse, words: vec![WordPair::new(tag, tag)] }
    }

    #[test]
    fn chapters_and_verses_are_sorted_numerically() {
        let grouped = group_by_chapter(vec![
            verse(10, 2, "a"),
            verse(2, 11, "b"),
            verse(10, 1, "c"),
            verse(2, 3, "d"),
        ]);
        let layout: Vec<(u32, Vec<u32>)> = grouped
            .iter()
            .map(|c| (c.number, c.verses.iter().map(|v| v.verse).collect()))
            .collect();
        assert_eq!(layout, vec![(2, vec![3, 11]), (10, vec![1, 2])]);
    }

    #[test]
    fn duplicate_verse_numbers_keep_read_order() {
        let grouped = group_by_chapter(vec![verse(1, 2, "first"), verse(1, 1, "x"), verse(1, 2, "second")]);
        let tags: Vec<&str> = grouped[0].verses.iter().map(|v| v.words[0].source.as_str()).collect();
        assert_eq!(tags, vec!["x", "first", "second"]);
    }

    #[test]
    fn empty_input_has_no_chapters() {
        assert!(group_by_chapter(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn output_is_ordered_and_complete(refs in prop::collection::vec((1u32..20, 1u32..40), 0..200)) {
            let input: Vec<VerseRecord> = refs
                .iter()
                .enumerate()
                .map(|(i, &(c, v))| verse(c, v, &i.to_string()))
                .collect();
            let grouped = group_by_chapter(input);

            let total: usize = grouped.iter().map(|c| c.verses.len()).sum();
            prop_assert_eq!(total, refs.len());

            for pair in grouped.windows(2) {
                prop_assert!(pair[0].number < pair[1].number);
            }
            for chapter in &grouped {
                for pair in chapter.verses.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.verse <= b.verse);
                    if a.verse == b.verse {
                        let ia: usize = a.words[0].source.parse().unwrap();
                        let ib: usize = b.words[0].source.parse().unwrap();
                        prop_assert!(ia < ib);
                    }
                }
                prop_assert!(chapter.verses.iter().all(|v| v.chapter == chapter.number));
            }
        }
    }
}
