use crate::models::SpellItem;
use crate::word_bank::WordBank;
use std::fs;
use std::io;
use std::path::Path;

/// Loads a word bank from `word,image` lines. Rows with a blank word or
/// image are skipped.
pub fn load_word_bank(path: &Path) -> io::Result<WordBank> {
    let content = fs::read_to_string(path)?;
    let items = parse_word_list(&content);

    WordBank::new(items).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("No words found in {}", path.display()),
        )
    })
}

pub fn parse_word_list(content: &str) -> Vec<SpellItem> {
    content
        .lines()
        .filter_map(parse_csv_line)
        .filter(|(word, image)| !word.trim().is_empty() && !image.trim().is_empty())
        .map(|(word, image)| SpellItem::new(word.trim(), image.trim()))
        .collect()
}

pub fn parse_csv_line(line: &str) -> Option<(String, String)> {
    let mut chars = line.chars().peekable();
    let mut word = String::new();
    let mut image = String::new();
    let mut current_field = &mut word;
    let mut in_quotes = false;
    let mut field_index = 0;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current_field.push('"');
                } else {
                    in_quotes = false;
                    if chars.peek() == Some(&',') {
                        chars.next();
                    }
                    if field_index == 0 {
                        current_field = &mut image;
                        field_index = 1;
                    }
                }
            }
            ',' if !in_quotes && field_index == 0 => {
                field_index = 1;
                current_field = &mut image;
            }
            _ => {
                current_field.push(c);
            }
        }
    }

    Some((word, image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_csv_simple() {
        let (word, image) = parse_csv_line("cat,cat.png").unwrap();
        assert_eq!(word, "cat");
        assert_eq!(image, "cat.png");
    }

    #[test]
    fn test_parse_csv_with_quotes() {
        let (word, image) = parse_csv_line("\"ice cream\",\"ice, cream.png\"").unwrap();
        assert_eq!(word, "ice cream");
        assert_eq!(image, "ice, cream.png");
    }

    #[test]
    fn test_parse_csv_with_escaped_quotes() {
        let (word, image) = parse_csv_line("\"o'clock\",\"the \"\"clock\"\" face\"").unwrap();
        assert_eq!(word, "o'clock");
        assert_eq!(image, "the \"clock\" face");
    }

    #[test]
    fn test_parse_csv_only_word_quoted() {
        let (word, image) = parse_csv_line("\"dog\",dog").unwrap();
        assert_eq!(word, "dog");
        assert_eq!(image, "dog");
    }

    #[test]
    fn test_parse_word_list_lowercases_and_skips_blank_rows() {
        let items = parse_word_list("Cat,cat\n\n,dog\nfish,\n  Frog , frog \n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].word(), "cat");
        assert_eq!(items[1].word(), "frog");
        assert_eq!(items[1].image(), "frog");
    }

    #[test]
    fn test_load_word_bank_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple,apple").unwrap();
        writeln!(file, "moon,moon").unwrap();

        let bank = load_word_bank(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.items()[0].word(), "apple");
    }

    #[test]
    fn test_load_word_bank_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_word_bank(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_word_bank_missing_file() {
        let err = load_word_bank(Path::new("no/such/words.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
