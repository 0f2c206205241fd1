use std::str::FromStr;

use console_transport::{HttpMethod, RawRequest, RequestBatch};

/// Supplies the requests the user has selected.
pub trait EditorRequestSource: Send + Sync {
    /// Requests overlapping the current selection, in document order.
    fn requests_in_range(&self) -> RequestBatch;
}

/// Inclusive, zero-based line range. A cursor is a single-line range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn cursor(line: usize) -> Self {
        Self::new(line, line)
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        start <= self.end && end >= self.start
    }
}

/// A request located in the editor text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRequest {
    pub start_line: usize,
    pub end_line: usize,
    pub request: RawRequest,
}

/// Console text plus a selection.
#[derive(Clone, Debug)]
pub struct TextRequestSource {
    text: String,
    range: LineRange,
}

impl TextRequestSource {
    pub fn new(text: impl Into<String>, range: LineRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }
}

impl EditorRequestSource for TextRequestSource {
    fn requests_in_range(&self) -> RequestBatch {
        parse_requests(&self.text)
            .into_iter()
            .filter(|parsed| self.range.overlaps(parsed.start_line, parsed.end_line))
            .map(|parsed| parsed.request)
            .collect()
    }
}

struct Pending {
    start_line: usize,
    end_line: usize,
    method: HttpMethod,
    url: String,
    body: Vec<String>,
}

impl Pending {
    fn finish(self) -> ParsedRequest {
        let body = self.body.join("\n");
        let mut request = RawRequest::new(self.method, self.url);
        request.data = split_documents(&body);
        ParsedRequest {
            start_line: self.start_line,
            end_line: self.end_line,
            request,
        }
    }
}

/// Bracket depth and open `"""` literal carried across body lines.
#[derive(Default)]
struct BodyState {
    depth: usize,
    in_literal: bool,
}

impl BodyState {
    fn is_open(&self) -> bool {
        self.depth > 0 || self.in_literal
    }

    fn feed(&mut self, line: &str) {
        let mut in_string = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_literal {
                if c == '"' && take_quote_pair(&mut chars) {
                    self.in_literal = false;
                }
                continue;
            }
            if in_string {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' if take_quote_pair(&mut chars) => self.in_literal = true,
                '"' => in_string = true,
                '{' | '[' => self.depth += 1,
                '}' | ']' => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
        }
    }
}

/// Consume two more `"` if they follow, completing a `"""`.
fn take_quote_pair(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> bool {
    let mut ahead = chars.clone();
    if ahead.next() == Some('"') && ahead.next() == Some('"') {
        chars.next();
        chars.next();
        true
    } else {
        false
    }
}

/// Locate every request in console text.
///
/// A request starts at a `METHOD url` line outside any open body; the lines
/// up to the next request line form its body. Between documents, blank and
/// `#` comment lines are not part of a body; inside an open bracket or
/// `"""` literal every line is kept verbatim.
pub fn parse_requests(text: &str) -> Vec<ParsedRequest> {
    let mut parsed = Vec::new();
    let mut current: Option<Pending> = None;
    let mut body = BodyState::default();

    for (line_no, line) in text.lines().enumerate() {
        if !body.is_open() {
            if let Some((method, url)) = request_line(line) {
                if let Some(done) = current.take() {
                    parsed.push(done.finish());
                }
                current = Some(Pending {
                    start_line: line_no,
                    end_line: line_no,
                    method,
                    url,
                    body: Vec::new(),
                });
                body = BodyState::default();
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
        }

        if let Some(pending) = current.as_mut() {
            body.feed(line);
            pending.body.push(line.to_string());
            pending.end_line = line_no;
        }
    }

    if let Some(done) = current {
        parsed.push(done.finish());
    }
    parsed
}

fn request_line(line: &str) -> Option<(HttpMethod, String)> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let method = HttpMethod::from_str(word).ok()?;
    Some((method, rest.to_string()))
}

/// Split a body into its top-level documents.
fn split_documents(body: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut doc = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            doc.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        doc.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                doc.push(c);
                if chars.peek() == Some(&'"') {
                    chars.next();
                    doc.push('"');
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        doc.push('"');
                        copy_triple_quoted(&mut chars, &mut doc);
                    }
                } else {
                    in_string = true;
                }
            }
            '{' | '[' => {
                depth += 1;
                doc.push(c);
            }
            '}' | ']' => {
                doc.push(c);
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    push_doc(&mut docs, &mut doc);
                }
            }
            '\n' if depth == 0 => push_doc(&mut docs, &mut doc),
            _ => doc.push(c),
        }
    }
    push_doc(&mut docs, &mut doc);
    docs
}

fn copy_triple_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, doc: &mut String) {
    let mut quotes = 0;
    for c in chars.by_ref() {
        doc.push(c);
        quotes = if c == '"' { quotes + 1 } else { 0 };
        if quotes == 3 {
            return;
        }
    }
}

fn push_doc(docs: &mut Vec<String>, doc: &mut String) {
    let trimmed = doc.trim();
    if !trimmed.is_empty() {
        docs.push(trimmed.to_string());
    }
    doc.clear();
}
