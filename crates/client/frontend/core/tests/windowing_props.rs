use client_frontend_core::services::windowing::{ScrollTrack, VISIBLE_ROWS, compute_window};
use proptest::prelude::*;

fn list_and_selection() -> impl Strategy<Value = (usize, usize)> {
    (1usize..64).prop_flat_map(|len| (Just(len), 0..len))
}

proptest! {
    #[test]
    fn short_lists_show_every_row(len in 1usize..=VISIBLE_ROWS, seed in any::<usize>()) {
        let selected = seed % len;
        let view = compute_window(len, selected);
        prop_assert_eq!(view.start, 0);
        prop_assert_eq!(view.end, len - 1);
        prop_assert!(view.scrollbar.is_none());
    }

    #[test]
    fn window_contains_selection((len, selected) in list_and_selection()) {
        let view = compute_window(len, selected);
        prop_assert!(view.rows().contains(&selected));
        prop_assert!(view.end - view.start < VISIBLE_ROWS);
        prop_assert!(view.end < len);
        prop_assert!(view.is_highlighted(selected - view.start));
        let highlighted = (0..view.row_count())
            .filter(|row| view.is_highlighted(*row))
            .count();
        prop_assert_eq!(highlighted, 1);
    }

    #[test]
    fn scrollbar_only_for_long_lists((len, selected) in list_and_selection()) {
        let view = compute_window(len, selected);
        prop_assert_eq!(view.scrollbar.is_some(), len > VISIBLE_ROWS);
    }

    #[test]
    fn thumb_stays_inside_track((len, selected) in list_and_selection()) {
        let track = ScrollTrack::default();
        if let Some(bar) = compute_window(len, selected).scrollbar {
            prop_assert!(bar.thumb.height >= track.min_thumb);
            prop_assert!(bar.thumb.offset >= track.top);
            prop_assert!(bar.thumb.offset + bar.thumb.height <= track.top + track.height);
        }
    }

    #[test]
    fn windowing_is_idempotent((len, selected) in list_and_selection()) {
        prop_assert_eq!(compute_window(len, selected), compute_window(len, selected));
    }
}
