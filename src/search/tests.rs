//! Search Module Tests
//!
//! Validates term normalization and the matcher outcomes: primary matches,
//! the related-by-artist fallback with its deduplication and truncation, and
//! totality over degenerate inputs.

#[cfg(test)]
mod tests {
    use crate::catalog::types::{Song, SongStatus};
    use crate::search::matcher::{search_songs, RELATED_LIMIT};
    use crate::search::normalize::normalize_for_search;
    use crate::search::types::SearchStatus;

    fn song(title: &str, artist: &str) -> Song {
        Song {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: String::new(),
            is_new: false,
            status: SongStatus::Playable,
        }
    }

    fn sample_catalog() -> Vec<Song> {
        vec![
            song("夜に駆ける", "YOASOBI"),
            song("Lemon", "米津玄師"),
            song("KICK BACK", "米津玄師"),
            song("紅蓮華", "LiSA"),
            song("アイドル", "YOASOBI"),
        ]
    }

    // ============================================================
    // NORMALIZATION
    // ============================================================

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_for_search("YOASOBI"), "yoasobi");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_for_search("  Lemon  "), "lemon");
    }

    #[test]
    fn test_normalize_folds_fullwidth_ascii() {
        assert_eq!(normalize_for_search("ＹＯＡＳＯＢＩ"), "yoasobi");
        assert_eq!(normalize_for_search("ＡＢＣ１２３"), "abc123");
    }

    #[test]
    fn test_normalize_folds_ideographic_space() {
        assert_eq!(normalize_for_search("米津\u{3000}玄師"), "米津 玄師");
    }

    #[test]
    fn test_normalize_keeps_japanese_text() {
        assert_eq!(normalize_for_search("夜に駆ける"), "夜に駆ける");
    }

    // ============================================================
    // MATCHER - PRIMARY MATCH
    // ============================================================

    #[test]
    fn test_search_matches_title_substring() {
        let outcome = search_songs("駆ける", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.songs, vec![song("夜に駆ける", "YOASOBI")]);
    }

    #[test]
    fn test_search_matches_artist_case_insensitively() {
        let outcome = search_songs("yoasobi", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.songs.len(), 2);
        assert_eq!(outcome.songs[0].title, "夜に駆ける");
        assert_eq!(outcome.songs[1].title, "アイドル");
    }

    #[test]
    fn test_search_matches_fullwidth_query() {
        let outcome = search_songs("ｌｅｍｏｎ", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::Found);
        assert_eq!(outcome.songs, vec![song("Lemon", "米津玄師")]);
    }

    #[test]
    fn test_search_keeps_original_case_search_term() {
        let outcome = search_songs("  Lemon ", &sample_catalog());

        assert_eq!(outcome.search_term, "Lemon");
    }

    #[test]
    fn test_search_preserves_collection_order() {
        let catalog = vec![song("b song", "X"), song("a song", "X")];
        let outcome = search_songs("song", &catalog);

        assert_eq!(outcome.songs[0].title, "b song");
        assert_eq!(outcome.songs[1].title, "a song");
    }

    // ============================================================
    // MATCHER - RELATED FALLBACK
    // ============================================================

    #[test]
    fn test_related_fallback_when_artist_named_in_query() {
        // No title matches, but the query contains the artist name.
        let outcome = search_songs("米津玄師の新曲", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::Related);
        let titles: Vec<&str> = outcome.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Lemon", "KICK BACK"]);
    }

    #[test]
    fn test_related_fallback_truncates_to_limit() {
        let catalog: Vec<Song> = (0..10).map(|i| song(&format!("track {}", i), "藤井風")).collect();
        let outcome = search_songs("藤井風のあの曲なんだっけ", &catalog);

        assert_eq!(outcome.status, SearchStatus::Related);
        assert_eq!(outcome.songs.len(), RELATED_LIMIT);
    }

    #[test]
    fn test_related_fallback_deduplicates_by_title_and_artist() {
        let catalog = vec![
            song("Lemon", "米津玄師"),
            song("Lemon", "米津玄師"),
            song("KICK BACK", "米津玄師"),
        ];
        let outcome = search_songs("米津玄師を聞きたい", &catalog);

        assert_eq!(outcome.status, SearchStatus::Related);
        assert_eq!(outcome.songs.len(), 2);
    }

    // ============================================================
    // MATCHER - NOT FOUND / TOTALITY
    // ============================================================

    #[test]
    fn test_search_not_found() {
        let outcome = search_songs("存在しない曲", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert!(outcome.songs.is_empty());
        assert_eq!(outcome.search_term, "存在しない曲");
    }

    #[test]
    fn test_empty_term_is_no_search() {
        let outcome = search_songs("   ", &sample_catalog());

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert!(outcome.songs.is_empty());
        assert_eq!(outcome.search_term, "");
    }

    #[test]
    fn test_search_over_empty_catalog() {
        let outcome = search_songs("Lemon", &[]);

        assert_eq!(outcome.status, SearchStatus::NotFound);
        assert!(outcome.songs.is_empty());
    }

    #[test]
    fn test_outcome_serializes_with_frontend_field_names() {
        let outcome = search_songs("Lemon", &sample_catalog());
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "found");
        assert_eq!(json["searchTerm"], "Lemon");
        assert_eq!(json["songs"][0]["isNew"], false);
        assert_eq!(json["songs"][0]["status"], "playable");
    }
}
