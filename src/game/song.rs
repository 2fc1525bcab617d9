use lazy_static::lazy_static;
use rand::{Rng, seq::IndexedRandom};
use regex::Regex;

const TITLE_COLUMN: usize = 0;
const ALBUM_ART_COLUMN: usize = 2;
const TRACK_REF_COLUMN: usize = 4;

lazy_static! {
    static ref TRACK_ID: Regex = Regex::new(r"track/([a-zA-Z0-9]+)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub title: String,
    pub album_art_url: String,
    pub track_ref: String,
}

impl SongEntry {
    /// Builds an entry from one sheet row. Missing or blank title falls back
    /// to `fallback_title`; other missing columns become empty strings.
    pub fn from_row(row: &[String], fallback_title: &str) -> Self {
        let title = column(row, TITLE_COLUMN);

        Self {
            title: if title.is_empty() {
                fallback_title.to_string()
            } else {
                title
            },
            album_art_url: column(row, ALBUM_ART_COLUMN),
            track_ref: column(row, TRACK_REF_COLUMN),
        }
    }

    /// Picks one row uniformly at random. An empty table behaves like a
    /// single empty row.
    pub fn pick<R: Rng + ?Sized>(rows: &[Vec<String>], fallback_title: &str, rng: &mut R) -> Self {
        match rows.choose(rng) {
            Some(row) => Self::from_row(row, fallback_title),
            None => Self::from_row(&[], fallback_title),
        }
    }

    pub fn track_id(&self) -> Option<&str> {
        TRACK_ID
            .captures(&self.track_ref)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

fn column(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|field| field.replace('"', "").trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn reads_title_art_and_track_columns() {
        let entry = SongEntry::from_row(
            &row(&[
                "\"Supersonic\"",
                "Definitely Maybe",
                " https://i.scdn.co/image/abc ",
                "1994",
                "\"https://open.spotify.com/track/3Qm86XLflmIXVm1wcwkgDK?si=1\"",
            ]),
            "Wonderwall",
        );

        assert_eq!(entry.title, "Supersonic");
        assert_eq!(entry.album_art_url, "https://i.scdn.co/image/abc");
        assert_eq!(entry.track_id(), Some("3Qm86XLflmIXVm1wcwkgDK"));
    }

    #[test]
    fn short_row_falls_back() {
        let entry = SongEntry::from_row(&row(&["  \"\" "]), "Wonderwall");
        assert_eq!(entry.title, "Wonderwall");
        assert_eq!(entry.album_art_url, "");
        assert_eq!(entry.track_id(), None);
    }

    #[test]
    fn track_id_requires_track_segment() {
        let mut entry = SongEntry::from_row(&row(&["Whatever"]), "Wonderwall");
        entry.track_ref = "https://open.spotify.com/album/1VW1Yl1kWoAnhxCdX0T8rk".into();
        assert_eq!(entry.track_id(), None);

        entry.track_ref = "spotify.com/track/".into();
        assert_eq!(entry.track_id(), None);
    }

    #[test]
    fn empty_table_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(7);
        let entry = SongEntry::pick(&[], "Wonderwall", &mut rng);
        assert_eq!(entry.title, "Wonderwall");
    }

    #[test]
    fn pick_only_returns_existing_rows() {
        let rows = vec![row(&["Roll With It"]), row(&["Little By Little"])];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..32 {
            let entry = SongEntry::pick(&rows, "Wonderwall", &mut rng);
            assert!(entry.title == "Roll With It" || entry.title == "Little By Little");
        }
    }
}
