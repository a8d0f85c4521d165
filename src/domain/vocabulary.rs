//! Vocabulary table: every spelling the bot understands and what it means.
//!
//! Built once per process and shared read-only. Entries are kept sorted by descending
//! length so that a scan can take the first prefix match as the longest one
//! ("月曜日" must win over "月曜", which must win over "月").

use super::entities::Weekday;
use once_cell::sync::Lazy;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    WeekdayFull,
    WeekdayShort,
    WeekdayChar,
    RelativeDay,
    Modifier,
}

/// Reply-shaping words that carry no weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Detailed,
    AllDays,
    Help,
}

/// Days after the reference date (today = 0, tomorrow = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOffset(pub u32);

impl DayOffset {
    pub const TODAY: DayOffset = DayOffset(0);
    pub const TOMORROW: DayOffset = DayOffset(1);
}

/// How an alias turns into a weekday: directly, or relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasBinding {
    Fixed(Weekday),
    Relative(DayOffset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meaning {
    Day(AliasBinding),
    Modifier(Modifier),
}

/// A recognized vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub text: &'static str,
    pub class: TokenClass,
    pub meaning: Meaning,
}

impl Token {
    pub const fn new(text: &'static str, class: TokenClass, meaning: Meaning) -> Self {
        Self {
            text,
            class,
            meaning,
        }
    }

    /// Length in characters; the precedence key for longest-match scanning.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn binding(&self) -> Option<AliasBinding> {
        match self.meaning {
            Meaning::Day(b) => Some(b),
            Meaning::Modifier(_) => None,
        }
    }

    pub fn modifier(&self) -> Option<Modifier> {
        match self.meaning {
            Meaning::Modifier(m) => Some(m),
            Meaning::Day(_) => None,
        }
    }
}

/// Spellings per weekday: (full, short, single character).
const DAY_SPELLINGS: [(Weekday, &str, &str, &str); 7] = [
    (Weekday::Monday, "月曜日", "月曜", "月"),
    (Weekday::Tuesday, "火曜日", "火曜", "火"),
    (Weekday::Wednesday, "水曜日", "水曜", "水"),
    (Weekday::Thursday, "木曜日", "木曜", "木"),
    (Weekday::Friday, "金曜日", "金曜", "金"),
    (Weekday::Saturday, "土曜日", "土曜", "土"),
    (Weekday::Sunday, "日曜日", "日曜", "日"),
];

const RELATIVE_SPELLINGS: [(&str, DayOffset); 4] = [
    ("今日", DayOffset::TODAY),
    ("きょう", DayOffset::TODAY),
    ("明日", DayOffset::TOMORROW),
    ("あした", DayOffset::TOMORROW),
];

const MODIFIER_SPELLINGS: [(&str, Modifier); 6] = [
    ("詳細", Modifier::Detailed),
    ("全部", Modifier::AllDays),
    ("一覧", Modifier::AllDays),
    ("ヘルプ", Modifier::Help),
    ("使い方", Modifier::Help),
    ("help", Modifier::Help),
];

static STANDARD: Lazy<Vocabulary> = Lazy::new(|| {
    let mut tokens = Vec::with_capacity(DAY_SPELLINGS.len() * 3 + 10);
    for (day, full, short, single) in DAY_SPELLINGS {
        let bound = Meaning::Day(AliasBinding::Fixed(day));
        tokens.push(Token::new(full, TokenClass::WeekdayFull, bound));
        tokens.push(Token::new(short, TokenClass::WeekdayShort, bound));
        tokens.push(Token::new(single, TokenClass::WeekdayChar, bound));
    }
    for (text, offset) in RELATIVE_SPELLINGS {
        tokens.push(Token::new(
            text,
            TokenClass::RelativeDay,
            Meaning::Day(AliasBinding::Relative(offset)),
        ));
    }
    for (text, modifier) in MODIFIER_SPELLINGS {
        tokens.push(Token::new(
            text,
            TokenClass::Modifier,
            Meaning::Modifier(modifier),
        ));
    }
    Vocabulary::new(tokens)
});

/// Immutable, length-ordered token table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: Vec<Token>,
}

impl Vocabulary {
    /// Build a table from arbitrary entries. Sorting is stable: equal lengths keep input order.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.sort_by(|a, b| b.char_len().cmp(&a.char_len()));
        Self { tokens }
    }

    /// The process-wide table of Japanese day names, relative days and modifiers.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Entries, longest first.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Exact lookup of a spelling.
    pub fn lookup(&self, text: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.text == text)
    }

    /// Longest entry that `input` starts with.
    pub fn longest_prefix(&self, input: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| input.starts_with(t.text))
    }
}
