use serde::Serialize;

use super::Track;

/// Inclusive range of logical sample positions where a pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl Track {
    /// Finds disjoint occurrences of `pattern` by sliding a
    /// pattern-length window across the track one position at a time. A
    /// window matches when its cross-correlation with the pattern reaches
    /// 95% of the pattern's own energy (sum of squared samples); matches
    /// are consumed greedily, leftmost first, advancing a full pattern
    /// length. An empty or oversized pattern yields no matches.
    pub fn matches(&self, pattern: &Track) -> Vec<MatchRange> {
        let target_len = self.len();
        let pattern_len = pattern.len();
        if pattern_len == 0 || target_len < pattern_len {
            return Vec::new();
        }

        let mut reference_buf = vec![0i16; pattern_len];
        pattern.read(&mut reference_buf, 0);
        let reference: f64 = reference_buf
            .iter()
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();

        let mut window = vec![0i16; pattern_len];
        let mut found = Vec::new();
        let mut pos = 0;
        while pos + pattern_len <= target_len {
            self.read(&mut window, pos);
            let corr: f64 = window
                .iter()
                .zip(&reference_buf)
                .map(|(&w, &p)| f64::from(w) * f64::from(p))
                .sum();
            if corr >= 0.95 * reference {
                found.push(MatchRange { start: pos, end: pos + pattern_len - 1 });
                pos += pattern_len;
            } else {
                pos += 1;
            }
        }
        found
    }

    /// Textual form of [`Track::matches`]: one `"<start>,<end>\n"` line
    /// per occurrence, empty string when there are none.
    pub fn identify(&self, pattern: &Track) -> String {
        let mut out = String::new();
        for m in self.matches(pattern) {
            out.push_str(&format!("{},{}\n", m.start, m.end));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Track, track_from};
    use super::MatchRange;

    #[test]
    fn pattern_equal_to_target_matches_once() {
        let track = track_from(&[&[3, -1, 4, 1, -5]]);
        assert_eq!(
            track.matches(&track),
            vec![MatchRange { start: 0, end: 4 }]
        );
        assert_eq!(track.identify(&track), "0,4\n");
    }

    #[test]
    fn empty_and_oversized_patterns_match_nothing() {
        let track = track_from(&[&[1, 2, 3]]);
        let empty = Track::new();
        assert_eq!(track.identify(&empty), "");
        let longer = track_from(&[&[1, 2, 3, 4]]);
        assert_eq!(track.identify(&longer), "");
        assert_eq!(empty.identify(&track), "");
    }

    #[test]
    fn finds_embedded_pattern_at_offset() {
        let pattern = track_from(&[&[100, -200, 300]]);
        let mut target = Track::new();
        target.write(&[5, 5, 5, 100, -200, 300, 5, 5], 0);
        assert_eq!(
            target.matches(&pattern),
            vec![MatchRange { start: 3, end: 5 }]
        );
        assert_eq!(target.identify(&pattern), "3,5\n");
    }

    #[test]
    fn matches_are_greedy_and_non_overlapping() {
        let pattern = track_from(&[&[100, 100]]);
        // four pattern copies back to back
        let target = track_from(&[&[100, 100, 100, 100, 100, 100, 100, 100]]);
        assert_eq!(
            target.matches(&pattern),
            vec![
                MatchRange { start: 0, end: 1 },
                MatchRange { start: 2, end: 3 },
                MatchRange { start: 4, end: 5 },
                MatchRange { start: 6, end: 7 },
            ]
        );
        assert_eq!(target.identify(&pattern), "0,1\n2,3\n4,5\n6,7\n");
    }

    #[test]
    fn search_walks_segment_boundaries() {
        let pattern = track_from(&[&[7, 8], &[9]]);
        let target = track_from(&[&[1, 7], &[8, 9, 1], &[7, 8, 9]]);
        assert_eq!(
            target.matches(&pattern),
            vec![
                MatchRange { start: 1, end: 3 },
                MatchRange { start: 5, end: 7 },
            ]
        );
    }

    #[test]
    fn low_correlation_windows_do_not_match() {
        let pattern = track_from(&[&[1000, 1000, 1000]]);
        let target = track_from(&[&[10, 10, 10, 10, 10]]);
        assert!(target.matches(&pattern).is_empty());
    }
}
