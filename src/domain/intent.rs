//! Intent extraction: token sequence -> targets + modifier flags.

use super::entities::Weekday;
use super::errors::DomainError;
use super::resolver::resolve;
use super::vocabulary::{Modifier, Token};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// What the user asked for. Targets are unique and in Monday..Sunday order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    targets: Vec<Weekday>,
    pub detailed: bool,
    pub all_days: bool,
    pub help_requested: bool,
}

/// Which reply path an intent takes. Help beats all-days, all-days beats an explicit day list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Help,
    AllDays,
    Days(&'a [Weekday]),
    NoTarget,
}

impl Intent {
    pub fn targets(&self) -> &[Weekday] {
        &self.targets
    }

    pub fn route(&self) -> Route<'_> {
        if self.help_requested {
            Route::Help
        } else if self.all_days {
            Route::AllDays
        } else if self.targets.is_empty() {
            Route::NoTarget
        } else {
            Route::Days(&self.targets)
        }
    }
}

/// Scan `tokens` once. `today` is consulted for every relative-day token occurrence.
pub fn extract_intent<F>(tokens: &[Token], mut today: F) -> Result<Intent, DomainError>
where
    F: FnMut() -> Result<NaiveDate, DomainError>,
{
    let mut intent = Intent::default();
    let mut targets = BTreeSet::new();

    for token in tokens {
        match token.modifier() {
            Some(Modifier::Detailed) => intent.detailed = true,
            Some(Modifier::AllDays) => intent.all_days = true,
            Some(Modifier::Help) => intent.help_requested = true,
            None => {}
        }
        if let Some(binding) = token.binding() {
            targets.insert(resolve(binding, &mut today)?);
        }
    }

    intent.targets = targets.into_iter().collect();
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokenizer::Tokenizer;

    // 2025-01-15 is a Wednesday.
    fn wednesday() -> Result<NaiveDate, DomainError> {
        Ok(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    fn intent_of(input: &str) -> Intent {
        let tokens = Tokenizer::default().tokenize(input).unwrap();
        extract_intent(&tokens, wednesday).unwrap()
    }

    #[test]
    fn test_aliases_of_one_day_collapse() {
        let intent = intent_of("月 月曜 月曜日");
        assert_eq!(intent.targets(), &[Weekday::Monday]);
    }

    #[test]
    fn test_targets_follow_week_order() {
        assert_eq!(intent_of("日 月").targets(), &[Weekday::Monday, Weekday::Sunday]);
        assert_eq!(intent_of("月 日").targets(), &[Weekday::Monday, Weekday::Sunday]);
    }

    #[test]
    fn test_relative_day_merges_with_fixed_alias() {
        let intent = intent_of("今日 水曜 明日");
        assert_eq!(intent.targets(), &[Weekday::Wednesday, Weekday::Thursday]);
    }

    #[test]
    fn test_modifier_flags() {
        let intent = intent_of("月曜 詳細");
        assert!(intent.detailed);
        assert!(!intent.all_days);
        assert_eq!(intent.route(), Route::Days(&[Weekday::Monday]));
    }

    #[test]
    fn test_modifier_alone_has_no_target() {
        let intent = intent_of("詳細");
        assert!(intent.detailed);
        assert_eq!(intent.route(), Route::NoTarget);
        assert_eq!(intent_of("").route(), Route::NoTarget);
    }

    #[test]
    fn test_route_priority() {
        assert_eq!(intent_of("全部 月 火").route(), Route::AllDays);
        assert_eq!(intent_of("ヘルプ 全部 月").route(), Route::Help);
        assert_eq!(intent_of("一覧 詳細").route(), Route::AllDays);
    }

    #[test]
    fn test_clock_read_per_relative_occurrence() {
        let tokens = Tokenizer::default().tokenize("今日 月 明日 きょう").unwrap();
        let mut calls = 0;
        extract_intent(&tokens, || {
            calls += 1;
            wednesday()
        })
        .unwrap();
        assert_eq!(calls, 3);
    }
}
