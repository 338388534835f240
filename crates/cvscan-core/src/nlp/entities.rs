//! Rule-based named-entity recognition.
//!
//! Finds person and organization names without a trained model:
//! - A person is a run of 2-4 capitalized words on one line that starts
//!   with a known first name, or 1-3 capitalized words after an honorific.
//! - The first non-blank line is a person when it holds nothing but 2-4
//!   capitalized words: resumes open with the candidate's name.
//! - An organization is a capitalized run that ends in a corporate or
//!   institutional suffix ("Acme Corp", "Stanford University").
//!
//! Runs never cross line breaks or punctuation. Section headings, month
//! names and common job-title words stop a name.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::model::{Entity, EntityLabel};
use crate::nlp::EntityRecognizer;

const MAX_NAME_TOKENS: usize = 4;
const MAX_ORG_TOKENS: usize = 5;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}[\p{L}\p{M}'’-]*").expect("valid word pattern"));

static FIRST_NAMES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FIRST_NAME_LIST.iter().copied().collect());

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "mx", "dr", "prof", "sir"];

const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "llp",
    "ltd",
    "plc",
    "gmbh",
    "corp",
    "corporation",
    "company",
    "technologies",
    "solutions",
    "labs",
    "group",
    "bank",
    "university",
    "institute",
    "college",
];

const FIRST_NAME_LIST: &[&str] = &[
    "aaron", "adam", "adrian", "ahmed", "aisha", "alan", "albert", "alex", "alexander",
    "alice", "alicia", "amanda", "amir", "amit", "amy", "ana", "andrea", "andrew", "angela",
    "anil", "anita", "ann", "anna", "anne", "anthony", "arjun", "arun", "ashley", "barbara",
    "ben", "benjamin", "bob", "brandon", "brian", "bruce", "carl", "carla", "carlos",
    "carol", "catherine", "charles", "charlotte", "chen", "chris", "christina",
    "christopher", "claire", "daniel", "david", "deepak", "diana", "diego", "divya",
    "donald", "edward", "elena", "elizabeth", "emily", "emma", "eric", "eva", "fatima",
    "fernando", "frank", "gabriel", "gary", "george", "grace", "hannah", "harry", "helen",
    "henry", "hiroshi", "ian", "isabel", "ivan", "jack", "jacob", "james", "jane", "jason",
    "jennifer", "jessica", "john", "jonathan", "jose", "joseph", "joshua", "juan", "julia",
    "karen", "kate", "katherine", "kenji", "kevin", "kim", "kumar", "laura", "lauren",
    "li", "linda", "lisa", "lucas", "lucy", "luis", "mahmoud", "manuel", "marco", "maria",
    "mark", "martin", "mary", "matthew", "mei", "michael", "michelle", "mohammed",
    "muhammad", "nancy", "natalie", "neha", "nicholas", "nicole", "nikhil", "nina",
    "olga", "oliver", "olivia", "omar", "pablo", "patricia", "patrick", "paul", "pedro",
    "peter", "priya", "rachel", "rahul", "raj", "rajesh", "ravi", "rebecca", "richard",
    "robert", "rohan", "ryan", "samantha", "samuel", "sandra", "sara", "sarah", "scott",
    "sean", "sergei", "sophia", "sophie", "stephen", "steven", "susan", "thomas", "tim",
    "timothy", "tom", "usha", "victor", "victoria", "vikram", "wei", "william", "yuki",
    "zhang", "zoe",
];

const STOP_WORD_LIST: &[&str] = &[
    // section headings
    "resume", "curriculum", "vitae", "cv", "summary", "profile", "objective", "experience",
    "education", "skills", "projects", "contact", "references", "certifications",
    "languages", "interests", "awards", "publications", "employment", "work", "history",
    "address", "phone", "email", "mobile", "linkedin", "github",
    // places and institutions
    "university", "college", "school", "institute", "street", "road", "avenue", "lane",
    // calendar
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday", "present", "current",
    // roles and fields
    "data", "science", "computer", "engineering", "engineer", "developer", "manager",
    "scientist", "analyst", "consultant", "architect", "designer", "director", "senior",
    "junior", "lead", "intern", "head", "chief", "officer", "team", "remote", "bachelor",
    "master", "degree", "phd",
    // technologies
    "python", "java", "sql", "machine", "learning", "deep", "nlp", "tensorflow", "pandas",
    "numpy", "keras",
];

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    word: &'a str,
    start: usize,
    end: usize,
}

/// Capitalization and gazetteer based recognizer.
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        HeuristicRecognizer
    }
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let tokens = tokenize(text);
        let mut entities = Vec::new();
        let mut i = 0;

        if let Some(last) = header_name(text, &tokens) {
            entities.push(span(text, &tokens[0], &tokens[last], EntityLabel::Person));
            i = last + 1;
        }

        while i < tokens.len() {
            if let Some(last) = organization_at(text, &tokens, i) {
                entities.push(span(text, &tokens[i], &tokens[last], EntityLabel::Organization));
                i = last + 1;
                continue;
            }

            if let Some((first, last)) = person_at(text, &tokens, i) {
                entities.push(span(text, &tokens[first], &tokens[last], EntityLabel::Person));
                i = last + 1;
                continue;
            }

            i += 1;
        }

        entities
    }

    fn model_name(&self) -> &str {
        "heuristic"
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    WORD_RE
        .find_iter(text)
        .map(|m| {
            let word = m.as_str();
            let mut end = m.end();
            // "J." and "Dr." keep their period
            if text[end..].starts_with('.') && (is_initial(word) || is_honorific(word)) {
                end += 1;
            }
            Token {
                word,
                start: m.start(),
                end,
            }
        })
        .collect()
}

/// Last token of the opening line if that line is a bare name.
fn header_name(text: &str, tokens: &[Token<'_>]) -> Option<usize> {
    let first = tokens.first()?;
    if !text[..first.start].trim().is_empty() {
        return None;
    }
    let line_end = text[first.start..]
        .find('\n')
        .map_or(text.len(), |n| first.start + n);

    let last = tokens
        .iter()
        .take_while(|t| t.end <= line_end)
        .count()
        .checked_sub(1)?;
    if last == 0 || last >= MAX_NAME_TOKENS {
        return None;
    }
    if !text[tokens[last].end..line_end].trim().is_empty() {
        return None;
    }

    let plain = |t: &Token<'_>| {
        is_capitalized(t.word)
            && !is_honorific(t.word)
            && !is_stop_word(t.word)
            && !is_org_suffix(t.word)
    };
    let spaced = (1..=last).all(|k| continues_run(text, tokens, k));
    (spaced && tokens[..=last].iter().all(plain)).then_some(last)
}

/// Index of the suffix token if an organization name starts at `i`.
fn organization_at(text: &str, tokens: &[Token<'_>], i: usize) -> Option<usize> {
    let head = tokens[i].word;
    if !is_capitalized(head) || is_honorific(head) || is_org_suffix(head) {
        return None;
    }

    let mut k = i + 1;
    while k < tokens.len() && k - i < MAX_ORG_TOKENS && continues_run(text, tokens, k) {
        if is_org_suffix(tokens[k].word) {
            return Some(k);
        }
        k += 1;
    }
    None
}

/// First and last token of a person name starting at `i`.
fn person_at(text: &str, tokens: &[Token<'_>], i: usize) -> Option<(usize, usize)> {
    let head = tokens[i].word;

    if is_honorific(head) {
        let mut last = None;
        let mut k = i + 1;
        while k < tokens.len() && k - i < MAX_NAME_TOKENS && continues_name(text, tokens, k) {
            last = Some(k);
            k += 1;
        }
        return last.map(|l| (i + 1, l));
    }

    if !is_capitalized(head) || is_stop_word(head) || !is_first_name(head) {
        return None;
    }

    let mut last = i;
    let mut k = i + 1;
    while k < tokens.len() && k - i < MAX_NAME_TOKENS && continues_name(text, tokens, k) {
        last = k;
        k += 1;
    }
    (last > i).then_some((i, last))
}

/// Token `k` is capitalized and separated from `k - 1` by spaces only.
fn continues_run(text: &str, tokens: &[Token<'_>], k: usize) -> bool {
    let gap = &text[tokens[k - 1].end..tokens[k].start];
    is_capitalized(tokens[k].word) && gap.chars().all(|c| c == ' ' || c == '\t')
}

fn continues_name(text: &str, tokens: &[Token<'_>], k: usize) -> bool {
    let word = tokens[k].word;
    continues_run(text, tokens, k) && !is_stop_word(word) && !is_org_suffix(word)
}

fn span(text: &str, first: &Token<'_>, last: &Token<'_>, label: EntityLabel) -> Entity {
    Entity {
        text: text[first.start..last.end].to_string(),
        label,
        start: first.start,
        end: last.end,
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Title-case only, so the degree "MS" is not read as "Ms".
fn is_honorific(word: &str) -> bool {
    let mut chars = word.chars();
    let title_case = chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase);
    title_case && HONORIFICS.contains(&word.to_lowercase().as_str())
}

fn is_first_name(word: &str) -> bool {
    let lower = word.to_lowercase();
    let given = lower.split('-').next().unwrap_or_default();
    FIRST_NAMES.contains(given)
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

fn is_org_suffix(word: &str) -> bool {
    ORG_SUFFIXES.contains(&word.to_lowercase().as_str())
}
