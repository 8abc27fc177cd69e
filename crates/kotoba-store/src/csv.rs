use kotoba_core::VocabularyRow;

/// Column count of the bundled vocabulary CSV
pub const CSV_COLUMNS: usize = 9;

/// Rows parsed from a vocabulary CSV
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    pub rows: Vec<VocabularyRow>,
    /// Data lines dropped for having fewer than `CSV_COLUMNS` fields
    pub short_lines: usize,
}

/// Parse `romaji,kana,kanji,chinese,english,example,cn_meaning,jp_meaning,scene`.
///
/// The first non-blank line is a header and is skipped. Fields are plain
/// comma-separated values without quoting; extra fields are ignored.
pub fn parse_vocabulary_csv(text: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();

    let lines = text.split('\n').filter(|line| !line.trim().is_empty());

    for line in lines.skip(1) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < CSV_COLUMNS {
            parsed.short_lines += 1;
            continue;
        }

        let column = |idx: usize| Some(fields[idx].to_string());
        parsed.rows.push(VocabularyRow {
            romaji: fields[0].to_string(),
            kana: fields[1].to_string(),
            kanji: column(2),
            chinese: column(3),
            english: column(4),
            example: column(5),
            cn_meaning: column(6),
            jp_meaning: column(7),
            scene: column(8),
        });
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "romaji,kana,kanji,chinese,english,example,cn_meaning,jp_meaning,scene";

    #[test]
    fn skips_header_and_blank_lines() {
        let text = format!(
            "{HEADER}\n\nneko, ねこ ,猫,猫,cat,猫がいる,猫,ねこ,animals\n   \n"
        );

        let parsed = parse_vocabulary_csv(&text);

        assert_eq!(parsed.rows.len(), 1);
        let row = &parsed.rows[0];
        assert_eq!(row.romaji, "neko");
        assert_eq!(row.kana, "ねこ");
        assert_eq!(row.example.as_deref(), Some("猫がいる"));
        assert_eq!(row.scene.as_deref(), Some("animals"));
    }

    #[test]
    fn short_lines_are_counted_and_dropped() {
        let text = format!("{HEADER}\ninu,いぬ,犬\neki,えき,駅,站,station,,,,travel");

        let parsed = parse_vocabulary_csv(&text);

        assert_eq!(parsed.short_lines, 1);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].example.as_deref(), Some(""));
    }

    #[test]
    fn windows_line_endings_do_not_leak_into_scene() {
        let text = format!("{HEADER}\r\nmizu,みず,水,水,water,,,,restaurant\r\n");

        let parsed = parse_vocabulary_csv(&text);

        assert_eq!(parsed.rows[0].scene.as_deref(), Some("restaurant"));
    }

    #[test]
    fn fields_past_the_ninth_are_ignored() {
        let text = format!("{HEADER}\nkippu,きっぷ,切符,票,ticket,,,,travel,extra, more\n");

        let parsed = parse_vocabulary_csv(&text);

        assert_eq!(parsed.short_lines, 0);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].romaji, "kippu");
        assert_eq!(parsed.rows[0].scene.as_deref(), Some("travel"));
    }

    #[test]
    fn header_only_yields_nothing() {
        assert_eq!(parse_vocabulary_csv(HEADER), ParsedCsv::default());
        assert_eq!(parse_vocabulary_csv(""), ParsedCsv::default());
    }
}
