use std::collections::HashSet;
use std::fs;
use std::io::BufRead;

/// Sentinel word that ends interactive input (case-insensitive)
pub const INPUT_SENTINEL: &str = "done";

const COMMENT_MARKER: char = '#';

/// Minimal shape check: an address needs an '@' and a '.'
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    email.contains('@') && email.contains('.')
}

/// Remove duplicados preservando a ordem de primeira ocorrência
pub fn dedup_emails(emails: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    emails
        .into_iter()
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

/// One address per line; blank lines and `#` comments are skipped
pub fn parse_email_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

pub fn read_email_file(path: &str) -> Result<Vec<String>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("File '{}' not found: {}", path, e))?;
    Ok(parse_email_file(&content))
}

/// Lê endereços interativamente até o sentinel ou EOF.
/// Cada linha pode conter vários endereços separados por vírgula.
pub fn read_emails_interactive<R: BufRead>(reader: R) -> Vec<String> {
    let mut emails = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case(INPUT_SENTINEL) {
            break;
        }
        emails.extend(
            line.split(',')
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(str::to_string),
        );
    }
    emails
}
