//! In-memory schedule store, optionally seeded from a JSON document.
//!
//! Document shape: `{"schedules": [{"day_of_week": "月曜", "item": "燃えるゴミ", "note": "…"}]}`.
//! Rows loaded from JSON belong to every user; rows written later are per user.
//! Reminder times live in memory only.

use crate::domain::{DomainError, ReminderKind, ReminderSettings, ScheduleEntry, UserId, Weekday};
use crate::ports::{ScheduleStore, UpsertOutcome};
use chrono::NaiveTime;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
struct ScheduleDocument {
    #[serde(default)]
    schedules: Vec<ScheduleEntry>,
}

#[derive(Debug, Default)]
struct StoreData {
    shared: BTreeMap<Weekday, ScheduleEntry>,
    per_user: HashMap<UserId, BTreeMap<Weekday, ScheduleEntry>>,
    reminders: HashMap<UserId, ReminderSettings>,
}

impl StoreData {
    fn view(&self, user: &UserId) -> BTreeMap<Weekday, &ScheduleEntry> {
        let mut merged: BTreeMap<Weekday, &ScheduleEntry> =
            self.shared.iter().map(|(d, e)| (*d, e)).collect();
        if let Some(own) = self.per_user.get(user) {
            merged.extend(own.iter().map(|(d, e)| (*d, e)));
        }
        merged
    }
}

pub struct StaticScheduleStore {
    data: RwLock<StoreData>,
}

impl StaticScheduleStore {
    /// Store with the given shared rows. A later row for the same weekday wins.
    pub fn new(entries: impl IntoIterator<Item = ScheduleEntry>) -> Self {
        let shared = entries.into_iter().map(|e| (e.weekday, e)).collect();
        Self {
            data: RwLock::new(StoreData {
                shared,
                ..Default::default()
            }),
        }
    }

    /// Parse a schedule document. Malformed JSON or an unknown day name is a store error.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let doc: ScheduleDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::Store(format!("schedule JSON: {}", e)))?;
        info!(rows = doc.schedules.len(), "loaded static schedule");
        Ok(Self::new(doc.schedules))
    }
}

impl Default for StaticScheduleStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl ScheduleStore for StaticScheduleStore {
    async fn lookup_schedule(
        &self,
        user: &UserId,
        day: Weekday,
    ) -> Result<Option<ScheduleEntry>, DomainError> {
        let data = self.data.read().await;
        Ok(data.view(user).get(&day).map(|e| (*e).clone()))
    }

    async fn list_schedules(&self, user: &UserId) -> Result<Vec<ScheduleEntry>, DomainError> {
        let data = self.data.read().await;
        Ok(data.view(user).into_values().cloned().collect())
    }

    async fn upsert_schedule(
        &self,
        user: &UserId,
        entry: &ScheduleEntry,
    ) -> Result<UpsertOutcome, DomainError> {
        let mut data = self.data.write().await;
        let existed = data.view(user).contains_key(&entry.weekday);
        data.per_user
            .entry(user.clone())
            .or_default()
            .insert(entry.weekday, entry.clone());
        Ok(if existed {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Inserted
        })
    }

    async fn reminder_settings(&self, user: &UserId) -> Result<ReminderSettings, DomainError> {
        let data = self.data.read().await;
        Ok(data.reminders.get(user).copied().unwrap_or_default())
    }

    async fn set_reminder_time(
        &self,
        user: &UserId,
        kind: ReminderKind,
        at: Option<NaiveTime>,
    ) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        data.reminders.entry(user.clone()).or_default().set(kind, at);
        Ok(())
    }

    async fn reminder_users(&self) -> Result<Vec<(UserId, ReminderSettings)>, DomainError> {
        let data = self.data.read().await;
        let mut users: Vec<(UserId, ReminderSettings)> = data
            .reminders
            .iter()
            .filter(|(_, s)| !s.is_off())
            .map(|(u, s)| (u.clone(), *s))
            .collect();
        users.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"schedules": [
        {"day_of_week": "木曜", "item": "資源ゴミ"},
        {"day_of_week": "月曜", "item": "燃えるゴミ", "note": "水を切る"}
    ]}"#;

    #[tokio::test]
    async fn test_from_json_lookup_and_list() {
        let store = StaticScheduleStore::from_json(DOC).unwrap();
        let user = UserId::new("anyone");

        let monday = store
            .lookup_schedule(&user, Weekday::Monday)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(monday.note.as_deref(), Some("水を切る"));
        assert!(
            store
                .lookup_schedule(&user, Weekday::Tuesday)
                .await
                .unwrap()
                .is_none()
        );

        let days: Vec<Weekday> = store
            .list_schedules(&user)
            .await
            .unwrap()
            .iter()
            .map(|e| e.weekday)
            .collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Thursday]);
    }

    #[test]
    fn test_malformed_json_is_store_error() {
        assert!(matches!(
            StaticScheduleStore::from_json("{not json"),
            Err(DomainError::Store(_))
        ));
        assert!(StaticScheduleStore::from_json(r#"{"schedules":[{"day_of_week":"月","item":"x"}]}"#).is_err());
    }

    #[tokio::test]
    async fn test_user_rows_override_shared_rows() {
        let store = StaticScheduleStore::from_json(DOC).unwrap();
        let alice = UserId::new("alice");
        let outcome = store
            .upsert_schedule(&alice, &ScheduleEntry::new(Weekday::Monday, "プラ", None))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        let mine = store.lookup_schedule(&alice, Weekday::Monday).await.unwrap();
        assert_eq!(mine.unwrap().item, "プラ");
        let theirs = store
            .lookup_schedule(&UserId::new("bob"), Weekday::Monday)
            .await
            .unwrap();
        assert_eq!(theirs.unwrap().item, "燃えるゴミ");
    }

    #[tokio::test]
    async fn test_reminder_times_set_and_stop() {
        let store = StaticScheduleStore::default();
        let alice = UserId::new("alice");
        let nine = NaiveTime::from_hms_opt(21, 0, 0).unwrap();

        assert!(store.reminder_settings(&alice).await.unwrap().is_off());
        store
            .set_reminder_time(&alice, ReminderKind::Night, Some(nine))
            .await
            .unwrap();
        assert_eq!(store.reminder_settings(&alice).await.unwrap().night, Some(nine));
        assert_eq!(store.reminder_users().await.unwrap().len(), 1);

        store
            .set_reminder_time(&alice, ReminderKind::Night, None)
            .await
            .unwrap();
        assert!(store.reminder_users().await.unwrap().is_empty());
    }
}
