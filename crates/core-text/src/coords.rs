//! Logical (byte) column <-> rendered (visual) column translation.
//!
//! Both directions walk the raw bytes from the start of the row every time;
//! rows are short and the results are never cached, so an edit can never leave
//! a stale mapping behind.

/// Width a tab contributes when it starts at rendered column `at`.
#[inline]
pub fn tab_width_at(at: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    (tab_stop - 1 - (at % tab_stop)) + 1
}

/// Rendered column of logical column `cx` (clamped to the row length).
pub fn logical_to_rendered(raw: &[u8], cx: usize, tab_stop: usize) -> usize {
    raw.iter().take(cx).fold(0, |rx, &b| {
        if b == b'\t' {
            rx + tab_width_at(rx, tab_stop)
        } else {
            rx + 1
        }
    })
}

/// Logical column containing rendered column `rx`; the row length when `rx` is past the end.
pub fn rendered_to_logical(raw: &[u8], rx: usize, tab_stop: usize) -> usize {
    let mut cur_rx = 0;
    for (cx, &b) in raw.iter().enumerate() {
        if b == b'\t' {
            cur_rx += tab_width_at(cur_rx, tab_stop);
        } else {
            cur_rx += 1;
        }
        if cur_rx > rx {
            return cx;
        }
    }
    raw.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_bytes_map_one_to_one() {
        assert_eq!(logical_to_rendered(b"abc", 2, 8), 2);
        assert_eq!(rendered_to_logical(b"abc", 2, 8), 2);
    }

    #[test]
    fn tab_advances_to_next_stop() {
        assert_eq!(logical_to_rendered(b"\tx", 1, 8), 8);
        assert_eq!(logical_to_rendered(b"ab\tc", 3, 8), 8);
        assert_eq!(logical_to_rendered(b"ab\tc", 4, 8), 9);
        assert_eq!(logical_to_rendered(b"ab\tc", 3, 4), 4);
    }

    #[test]
    fn rendered_inside_tab_maps_to_the_tab() {
        for rx in 2..8 {
            assert_eq!(rendered_to_logical(b"ab\tc", rx, 8), 2, "rx={rx}");
        }
        assert_eq!(rendered_to_logical(b"ab\tc", 8, 8), 3);
    }

    #[test]
    fn past_end_clamps_to_len() {
        assert_eq!(rendered_to_logical(b"ab", 40, 8), 2);
        assert_eq!(logical_to_rendered(b"ab", 40, 8), 2);
    }

    proptest! {
        #[test]
        fn round_trip_every_logical_column(
            raw in proptest::collection::vec(prop_oneof![Just(b'\t'), 0x20u8..0x7f], 0..64),
            tab_stop in 1usize..=16,
        ) {
            for cx in 0..=raw.len() {
                let rx = logical_to_rendered(&raw, cx, tab_stop);
                prop_assert_eq!(rendered_to_logical(&raw, rx, tab_stop), cx);
            }
        }
    }
}
