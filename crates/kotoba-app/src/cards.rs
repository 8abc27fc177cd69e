use kotoba_core::VocabularyEntry;
use kotoba_lookup::RemoteWord;

/// Multi-line card for a local vocabulary entry
pub fn entry_card(entry: &VocabularyEntry) -> String {
    let mut card = entry.headword().to_string();
    if entry.headword() != entry.kana {
        card.push_str(&format!(" ({})", entry.kana));
    }
    card.push_str(&format!("  {}", entry.romaji));

    let fields = [
        ("中文", &entry.chinese),
        ("English", &entry.english),
        ("例句", &entry.example),
        ("中文释义", &entry.cn_meaning),
        ("日文释义", &entry.jp_meaning),
        ("场景", &entry.scene),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            card.push_str(&format!("\n  {label}：{value}"));
        }
    }

    card
}

/// One-line summary of a local entry for lists
pub fn entry_line(entry: &VocabularyEntry) -> String {
    let mut line = format!("{}  {}  {}", entry.headword(), entry.kana, entry.romaji);
    if !entry.english.is_empty() {
        line.push_str(&format!("  {}", entry.english));
    }
    line
}

fn badges(word: &RemoteWord, common_label: &str) -> Vec<String> {
    let mut badges = Vec::new();
    if word.is_common() {
        badges.push(common_label.to_string());
    }
    badges.extend(word.jlpt_levels().iter().map(|level| level.to_uppercase()));
    badges
}

/// Detailed card for the top remote result
pub fn remote_card(word: &RemoteWord) -> String {
    let mut lines = Vec::new();

    for form in &word.japanese {
        let mut line = form.display().unwrap_or("-").to_string();
        if let (Some(word), Some(reading)) = (form.word.as_deref(), form.reading.as_deref())
            && word != reading
        {
            line.push_str(&format!(" 【{reading}】"));
        }
        lines.push(line);
    }

    let mut badges = badges(word, "常用词");
    badges.extend(word.tags().iter().cloned());
    if !badges.is_empty() {
        lines.push(format!("[{}]", badges.join("] [")));
    }

    for sense in &word.senses {
        lines.push(format!("  释义：{}", sense.english_definitions.join(", ")));
        if !sense.parts_of_speech.is_empty() {
            lines.push(format!("    词性：{}", sense.parts_of_speech.join(", ")));
        }
        if !sense.info().is_empty() {
            lines.push(format!("    补充：{}", sense.info().join(", ")));
        }
        for (text, url) in sense.web_links() {
            lines.push(format!("    {text} <{url}>"));
        }
    }

    lines.join("\n")
}

/// One-line summary of a remote result
pub fn remote_line(word: &RemoteWord) -> String {
    let mut line = word.headword().unwrap_or("-").to_string();
    if let Some(reading) = word.distinct_reading() {
        line.push_str(&format!(" {reading}"));
    }

    let common = word.is_common().then_some("常用");
    let level = word.jlpt_levels().first().map(|l| l.to_uppercase());
    for badge in common.map(str::to_string).into_iter().chain(level) {
        line.push_str(&format!(" [{badge}]"));
    }

    if let Some(sense) = word.senses.first() {
        line.push_str(&format!(" - {}", sense.english_definitions.join(", ")));
    }
    line
}

/// First result as a full card, the rest as summary lines
pub fn remote_results(ranked: &[&RemoteWord]) -> String {
    let Some((top, rest)) = ranked.split_first() else {
        return String::new();
    };

    let mut out = remote_card(top);
    for word in rest {
        out.push('\n');
        out.push_str(&remote_line(word));
    }
    out
}
