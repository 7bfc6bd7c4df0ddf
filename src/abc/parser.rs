use crate::catalog::tune::{NewTune, UNKNOWN};

/// Everything after the first colon, trimmed. A value containing further
/// colons is kept whole.
fn marker_value(line: &str) -> &str {
    line.split_once(':')
        .map(|(_, value)| value.trim())
        .unwrap_or("")
}

#[derive(Debug)]
struct OpenTune {
    reference_number: String,
    title: Option<String>,
    rhythm: Option<String>,
    key_sig: Option<String>,
    content: String,
}

impl OpenTune {
    fn open(line: &str) -> Self {
        Self {
            reference_number: marker_value(line).to_string(),
            title: None,
            rhythm: None,
            key_sig: None,
            content: format!("{}\n", line),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');

        if line.starts_with("T:") {
            // first title wins; later T: lines are alternate titles
            if self.title.is_none() {
                self.title = Some(marker_value(line).to_string());
            }
        } else if line.starts_with("R:") {
            self.rhythm = Some(marker_value(line).to_string());
        } else if line.starts_with("K:") {
            self.key_sig = Some(marker_value(line).to_string());
        }
    }

    fn finish(self, book_id: i64) -> NewTune {
        NewTune {
            book_id,
            reference_number: self.reference_number,
            title: self.title.unwrap_or_else(|| UNKNOWN.to_string()),
            rhythm: self.rhythm.unwrap_or_else(|| UNKNOWN.to_string()),
            key_sig: self.key_sig.unwrap_or_else(|| UNKNOWN.to_string()),
            content: self.content,
        }
    }
}

/// Splits one notation source into tunes. An `X:` line opens a tune and every
/// following non-blank line belongs to it until the next `X:` line or the end
/// of the input. Lines before the first `X:` belong to no tune and are
/// dropped, as are blank lines everywhere.
pub fn parse(text: &str, book_id: i64) -> Vec<NewTune> {
    let mut tunes = vec![];
    let mut current: Option<OpenTune> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("X:") {
            if let Some(open) = current.take() {
                tunes.push(open.finish(book_id));
            }
            current = Some(OpenTune::open(line));
        } else if let Some(open) = current.as_mut() {
            open.push_line(line);
        }
    }

    if let Some(open) = current {
        tunes.push(open.finish(book_id));
    }

    tunes
}
