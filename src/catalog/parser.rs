//! Song List Parsing and Encoding
//!
//! Converts the flat delimited blob into `Song` records and back. Parsing is
//! permissive: blank lines and lines without both a title and an artist are
//! dropped silently (the count of dropped lines is surfaced as a debug log,
//! never as an error). Encoding is the exact inverse for well-formed records,
//! so `parse(encode(parse(blob)))` equals `parse(blob)`.

use super::types::{Song, SongStatus};

/// Sentinel in field 4 marking a song as newly added (case-insensitive).
const NEW_MARKER: &str = "new";
/// Sentinel in field 5 marking a song as still being practiced.
const PRACTICING_MARKER: &str = "練習中";

/// Parses the persisted blob into an ordered song collection.
///
/// Line endings are normalized (CRLF to LF) before splitting. Within a line
/// the delimiter is a horizontal tab when one is present, otherwise the ASCII
/// comma, otherwise a full-width comma. Field positions: title, artist, genre,
/// new marker, status marker; the first two are required, the rest default.
pub fn parse_song_list(blob: &str) -> Vec<Song> {
    let normalized = blob.replace("\r\n", "\n");
    let mut songs = Vec::new();
    let mut skipped = 0usize;

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(song) => songs.push(song),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed song list lines", skipped);
    }

    songs
}

fn parse_line(line: &str) -> Option<Song> {
    let delimiter = if line.contains('\t') {
        '\t'
    } else if line.contains(',') {
        ','
    } else if line.contains('，') {
        '，'
    } else {
        '、'
    };
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

    let title = *fields.first()?;
    let artist = *fields.get(1)?;
    if title.is_empty() || artist.is_empty() {
        return None;
    }

    let genre = fields.get(2).copied().unwrap_or("");
    let is_new = fields
        .get(3)
        .map(|f| f.eq_ignore_ascii_case(NEW_MARKER))
        .unwrap_or(false);
    let status = match fields.get(4) {
        Some(&f) if f == PRACTICING_MARKER => SongStatus::Practicing,
        _ => SongStatus::Playable,
    };

    Some(Song {
        title: title.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        is_new,
        status,
    })
}

/// Encodes a song collection back into the persisted blob form.
///
/// Records with an empty title or artist are dropped (admin-side editing can
/// produce incomplete rows). Each record becomes one comma-delimited line with
/// all five fields present; trailing empty fields are emitted as empty rather
/// than omitted, preserving positional parsing on the next read.
pub fn encode_song_list(songs: &[Song]) -> String {
    songs
        .iter()
        .filter(|s| !s.title.trim().is_empty() && !s.artist.trim().is_empty())
        .map(|s| {
            let new_marker = if s.is_new { NEW_MARKER } else { "" };
            let status_marker = match s.status {
                SongStatus::Practicing => PRACTICING_MARKER,
                SongStatus::Playable => "",
            };
            format!(
                "{},{},{},{},{}",
                s.title.trim(),
                s.artist.trim(),
                s.genre.trim(),
                new_marker,
                status_marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
