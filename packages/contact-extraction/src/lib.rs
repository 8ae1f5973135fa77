//! Heuristic contact-field extraction from business-card OCR text.
//!
//! Takes the raw multi-line text an OCR provider produced for a photographed
//! business card and classifies its lines into contact fields. Pure string
//! processing: no I/O, no shared state, and no failure mode. Unrecognized
//! input simply yields empty fields.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // Permissive email shape, not RFC-validating
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();

    // Loose phone shape: optional +, a digit, then 6+ digits/spaces/hyphens/parens
    static ref PHONE_REGEX: Regex = Regex::new(r"\+?\d[\d\s\-()]{6,}").unwrap();
}

/// Job-title substrings that disqualify a line from being a person's name
/// or a company name. Matched case-insensitively.
const ROLE_TITLES: &[&str] = &[
    "geschäftsführer",
    "ceo",
    "manager",
    "director",
    "founder",
    "owner",
    "sales",
    "marketing",
];

/// Substrings suggesting a line is a postal address. Matched
/// case-insensitively; such lines never qualify as a company name.
const ADDRESS_INDICATORS: &[&str] = &[
    "straße",
    "str.",
    "platz",
    "road",
    "street",
    "ave",
    "blvd",
    "münster",
    "berlin",
    "deutschland",
    "germany",
];

/// Structured contact fields recognized on a business card.
///
/// Every field is independently optional; an empty string means the field
/// was not recognized. Serializes with the camelCase names the scan API
/// exposes (`firstName`, `lastName`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl ContactRecord {
    /// True when no field was recognized at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.company.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.website.is_empty()
    }
}

/// Extract contact fields from raw OCR text.
///
/// Lines are trimmed and blank lines dropped; order is preserved, and each
/// classification pass takes the first matching line. The passes are
/// independent: a single line may satisfy several of them. This function is
/// total: any input, including the empty string, produces a record.
pub fn extract_contact_fields(text: &str) -> ContactRecord {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let email = find_line(&lines, |l| EMAIL_REGEX.is_match(l));
    let phone = find_line(&lines, |l| PHONE_REGEX.is_match(l));
    let website = find_line(&lines, |l| is_website_line(l));

    let (first_name, last_name) = pick_name(&lines);
    let company = pick_company(&lines, &first_name);

    ContactRecord {
        first_name,
        last_name,
        company,
        phone,
        email,
        website,
    }
}

fn find_line(lines: &[&str], pred: impl Fn(&str) -> bool) -> String {
    lines
        .iter()
        .copied()
        .find(|line| pred(line))
        .map(str::to_string)
        .unwrap_or_default()
}

fn is_website_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("www.") || lower.starts_with("http://") || lower.starts_with("https://")
}

/// Email-, phone- or website-shaped lines carry contact details, not names.
fn is_contact_line(line: &str) -> bool {
    EMAIL_REGEX.is_match(line) || PHONE_REGEX.is_match(line) || is_website_line(line)
}

fn contains_any(line: &str, terms: &[&str]) -> bool {
    let lower = line.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}

/// First line that is neither contact-shaped nor a role title is taken as
/// the person's name: first token becomes the first name, the remaining
/// tokens joined by single spaces become the last name.
fn pick_name(lines: &[&str]) -> (String, String) {
    let name_line = lines
        .iter()
        .copied()
        .find(|line| !is_contact_line(line) && !contains_any(line, ROLE_TITLES));

    match name_line {
        Some(line) => {
            let mut tokens = line.split_whitespace();
            let first = tokens.next().unwrap_or_default().to_string();
            let rest: Vec<&str> = tokens.collect();
            (first, rest.join(" "))
        }
        None => (String::new(), String::new()),
    }
}

/// First line of the original text that is not the name line (by firstName
/// containment), not contact-shaped, not a role title, and not address-like.
fn pick_company(lines: &[&str], first_name: &str) -> String {
    lines
        .iter()
        .copied()
        .find(|line| {
            (first_name.is_empty() || !line.contains(first_name))
                && !is_contact_line(line)
                && !contains_any(line, ROLE_TITLES)
                && !contains_any(line, ADDRESS_INDICATORS)
        })
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_record() {
        let record = extract_contact_fields("");
        assert_eq!(record, ContactRecord::default());
        assert!(record.is_empty());

        // Whitespace-only input collapses to zero lines
        let record = extract_contact_fields("   \n\t\n  \n");
        assert!(record.is_empty());
    }

    #[test]
    fn test_single_email_line() {
        let record = extract_contact_fields("jane.doe@example.com");
        assert_eq!(record.email, "jane.doe@example.com");
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.company, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.website, "");
    }

    #[test]
    fn test_full_card() {
        let record = extract_contact_fields(
            "John Smith\nAcme Corp\njohn@acme.com\n+1 555-123-4567\nwww.acme.com",
        );
        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Smith");
        assert_eq!(record.company, "Acme Corp");
        assert_eq!(record.email, "john@acme.com");
        assert_eq!(record.phone, "+1 555-123-4567");
        assert_eq!(record.website, "www.acme.com");
    }

    #[test]
    fn test_role_title_excluded_from_name_and_company() {
        let record =
            extract_contact_fields("Jane Doe\nCEO\nBeispiel GmbH\nMusterstraße 1, Berlin");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Doe");
        // "CEO" is skipped by the role-title blacklist, the address line by
        // the address indicators; the plain company line wins.
        assert_eq!(record.company, "Beispiel GmbH");
    }

    #[test]
    fn test_address_line_never_company() {
        let record = extract_contact_fields("Jane Doe\nCEO\nMusterstraße 1, Berlin");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Doe");
        assert_eq!(record.company, "");
    }

    #[test]
    fn test_single_token_line_is_name_not_company() {
        let record = extract_contact_fields("Acme");
        assert_eq!(record.first_name, "Acme");
        assert_eq!(record.last_name, "");
        // The sole line contains first_name, so company search skips it
        assert_eq!(record.company, "");
    }

    #[test]
    fn test_multi_token_last_name_joined() {
        let record = extract_contact_fields("Ana de la Cruz");
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.last_name, "de la Cruz");
    }

    #[test]
    fn test_blacklist_is_case_insensitive() {
        let record = extract_contact_fields("MARKETING Lead\nJohn Smith");
        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Smith");

        let record = extract_contact_fields("Geschäftsführer\nErika Mustermann");
        assert_eq!(record.first_name, "Erika");
        assert_eq!(record.last_name, "Mustermann");
    }

    #[test]
    fn test_passes_are_independent() {
        // One line that is both phone- and website-shaped is selected by both
        let record = extract_contact_fields("+49 251 987654 www.example.com");
        assert_eq!(record.phone, "+49 251 987654 www.example.com");
        assert_eq!(record.website, "+49 251 987654 www.example.com");
        assert_eq!(record.first_name, "");
    }

    #[test]
    fn test_first_match_wins() {
        let record = extract_contact_fields("a@b.com extra\nsecond@example.com");
        assert_eq!(record.email, "a@b.com extra");
    }

    #[test]
    fn test_all_contact_lines_leaves_name_empty() {
        let record = extract_contact_fields("mail@example.com\n+1 234 5678\nhttps://example.com");
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.company, "");
    }

    #[test]
    fn test_idempotent() {
        let text = "John Smith\nAcme Corp\njohn@acme.com";
        assert_eq!(extract_contact_fields(text), extract_contact_fields(text));
    }

    #[test]
    fn test_serializes_camel_case_field_names() {
        let record = extract_contact_fields("John Smith");
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "firstName",
            "lastName",
            "company",
            "phone",
            "email",
            "website",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Smith");
    }
}
