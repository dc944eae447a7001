use super::{IEventRepo, RepoError};
use calendar_store_domain::{CalendarEvent, EventFields, ID};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The two views over the stored events.
///
/// `by_id` is the source of truth, `by_date` holds a copy of every event in
/// the bucket of its date. Buckets are never left empty.
#[derive(Default)]
struct EventIndex {
    by_id: IndexMap<ID, CalendarEvent>,
    by_date: HashMap<NaiveDate, Vec<CalendarEvent>>,
    /// Ids of deleted events, these are never handed out again
    retired: HashSet<ID>,
}

impl EventIndex {
    fn next_id(&self) -> ID {
        loop {
            let id = ID::new();
            if !self.by_id.contains_key(&id) && !self.retired.contains(&id) {
                return id;
            }
        }
    }

    fn append_to_bucket(&mut self, event: CalendarEvent) {
        self.by_date.entry(event.date).or_default().push(event);
    }

    fn remove_from_bucket(&mut self, date: NaiveDate, event_id: &ID) {
        if let Some(bucket) = self.by_date.get_mut(&date) {
            bucket.retain(|e| e.id != *event_id);
            if bucket.is_empty() {
                self.by_date.remove(&date);
            }
        }
    }

    fn replace_in_bucket(&mut self, event: &CalendarEvent) {
        if let Some(stored) = self
            .by_date
            .get_mut(&event.date)
            .and_then(|bucket| bucket.iter_mut().find(|e| e.id == event.id))
        {
            *stored = event.clone();
        }
    }

    fn insert(&mut self, fields: EventFields) -> ID {
        let event = CalendarEvent::new(self.next_id(), fields);
        let event_id = event.id;
        self.append_to_bucket(event.clone());
        self.by_id.insert(event_id, event);
        event_id
    }

    fn update(&mut self, event_id: &ID, fields: EventFields) -> Option<CalendarEvent> {
        let stored = self.by_id.get_mut(event_id)?;
        let old_date = stored.date;
        let updated = CalendarEvent::new(*event_id, fields);
        *stored = updated.clone();

        if old_date == updated.date {
            self.replace_in_bucket(&updated);
        } else {
            self.remove_from_bucket(old_date, event_id);
            self.append_to_bucket(updated.clone());
        }
        Some(updated)
    }

    fn delete(&mut self, event_id: &ID) -> Option<CalendarEvent> {
        let deleted = self.by_id.shift_remove(event_id)?;
        self.remove_from_bucket(deleted.date, event_id);
        self.retired.insert(*event_id);
        Some(deleted)
    }
}

/// Event store kept in process memory.
///
/// All state sits behind one lock: mutations hold the write lock for the
/// whole operation so readers never see an event half way moved between
/// two dates.
pub struct InMemoryEventRepo {
    index: RwLock<EventIndex>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            index: RwLock::new(EventIndex::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EventIndex>, RepoError> {
        self.index
            .read()
            .map_err(|_| RepoError::StorageFailure("Event index lock is poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EventIndex>, RepoError> {
        self.index
            .write()
            .map_err(|_| RepoError::StorageFailure("Event index lock is poisoned".into()))
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn create(&self, fields: EventFields) -> Result<ID, RepoError> {
        fields.validate()?;
        Ok(self.write()?.insert(fields))
    }

    async fn get(&self, event_id: &ID) -> Result<CalendarEvent, RepoError> {
        self.read()?
            .by_id
            .get(event_id)
            .cloned()
            .ok_or(RepoError::NotFound(*event_id))
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, RepoError> {
        Ok(self.read()?.by_date.get(&date).cloned().unwrap_or_default())
    }

    async fn list_all(&self) -> Result<Vec<CalendarEvent>, RepoError> {
        Ok(self.read()?.by_id.values().cloned().collect())
    }

    async fn list_ids(&self) -> Result<Vec<ID>, RepoError> {
        Ok(self.read()?.by_id.keys().copied().collect())
    }

    async fn update(
        &self,
        event_id: &ID,
        fields: EventFields,
    ) -> Result<CalendarEvent, RepoError> {
        fields.validate()?;
        self.write()?
            .update(event_id, fields)
            .ok_or(RepoError::NotFound(*event_id))
    }

    async fn delete(&self, event_id: &ID) -> Result<CalendarEvent, RepoError> {
        self.write()?
            .delete(event_id)
            .ok_or(RepoError::NotFound(*event_id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    impl InMemoryEventRepo {
        /// Panics if the two views disagree in any way
        fn check_consistency(&self) {
            let index = self.read().unwrap();
            for event in index.by_id.values() {
                let bucket = index
                    .by_date
                    .get(&event.date)
                    .expect("Every event to have a bucket for its date");
                let copies = bucket.iter().filter(|e| e.id == event.id).count();
                assert_eq!(copies, 1);
                assert!(bucket.contains(event));
            }
            for (date, bucket) in &index.by_date {
                assert!(!bucket.is_empty(), "Bucket for {} is left empty", date);
                for event in bucket {
                    assert_eq!(event.date, *date);
                    assert_eq!(index.by_id.get(&event.id), Some(event));
                }
            }
        }

        fn has_bucket(&self, date: NaiveDate) -> bool {
            self.read().unwrap().by_date.contains_key(&date)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 22).unwrap()
    }

    #[tokio::test]
    async fn walk_the_dog_and_grocery_store_trip() {
        let repo = InMemoryEventRepo::new();
        let tomorrow = today() + Duration::days(1);

        let a = repo
            .create(EventFields::new(today(), "Walk the dog"))
            .await
            .unwrap();
        let b = repo
            .create(EventFields::new(tomorrow, "Grocery Store Trip"))
            .await
            .unwrap();

        let on_today = repo.list_by_date(today()).await.unwrap();
        assert_eq!(on_today.iter().map(|e| e.id).collect::<Vec<_>>(), vec![a]);
        let on_tomorrow = repo.list_by_date(tomorrow).await.unwrap();
        assert_eq!(on_tomorrow.iter().map(|e| e.id).collect::<Vec<_>>(), vec![b]);

        repo.delete(&a).await.unwrap();
        assert!(repo.list_by_date(today()).await.unwrap().is_empty());
        assert_eq!(repo.list_ids().await.unwrap(), vec![b]);
        repo.check_consistency();
    }

    #[tokio::test]
    async fn prunes_empty_buckets() {
        let repo = InMemoryEventRepo::new();
        let event_id = repo
            .create(EventFields::new(today(), "Only one"))
            .await
            .unwrap();
        assert!(repo.has_bucket(today()));

        repo.delete(&event_id).await.unwrap();
        assert!(!repo.has_bucket(today()));
        assert_eq!(repo.list_by_date(today()).await, Ok(vec![]));

        let event_id = repo
            .create(EventFields::new(today(), "Moving away"))
            .await
            .unwrap();
        repo.update(&event_id, EventFields::new(today() + Duration::days(3), "Moved"))
            .await
            .unwrap();
        assert!(!repo.has_bucket(today()));
        repo.check_consistency();
    }

    #[tokio::test]
    async fn returned_snapshots_are_detached() {
        let repo = InMemoryEventRepo::new();
        let event_id = repo
            .create(EventFields::new(today(), "Walk the dog"))
            .await
            .unwrap();

        let mut snapshot = repo.get(&event_id).await.unwrap();
        snapshot.name = "Changed outside".into();
        let mut listed = repo.list_by_date(today()).await.unwrap();
        listed[0].date = today() + Duration::days(1);

        assert_eq!(repo.get(&event_id).await.unwrap().name, "Walk the dog");
        assert_eq!(repo.list_by_date(today()).await.unwrap()[0].name, "Walk the dog");
        repo.check_consistency();
    }

    #[tokio::test]
    async fn deleted_ids_are_retired() {
        let repo = InMemoryEventRepo::new();
        let event_id = repo
            .create(EventFields::new(today(), "Short lived"))
            .await
            .unwrap();
        repo.delete(&event_id).await.unwrap();

        assert!(repo.read().unwrap().retired.contains(&event_id));
        for i in 0..100 {
            let new_id = repo
                .create(EventFields::new(today(), format!("Event {}", i)))
                .await
                .unwrap();
            assert_ne!(new_id, event_id);
        }
        assert_eq!(repo.delete(&event_id).await, Err(RepoError::NotFound(event_id)));
    }

    #[tokio::test]
    async fn list_all_in_insertion_order() {
        let repo = InMemoryEventRepo::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let date = today() + Duration::days(4 - i);
            ids.push(
                repo.create(EventFields::new(date, format!("Event {}", i)))
                    .await
                    .unwrap(),
            );
        }
        repo.delete(&ids[1]).await.unwrap();
        ids.remove(1);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
        assert_eq!(repo.list_ids().await.unwrap(), ids);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_never_see_a_half_moved_event() {
        let repo = Arc::new(InMemoryEventRepo::new());
        let dates = [today(), today() + Duration::days(1)];

        let mut movable = Vec::new();
        for i in 0..20 {
            movable.push(
                repo.create(EventFields::new(dates[0], format!("Movable {}", i)))
                    .await
                    .unwrap(),
            );
        }
        let movable = Arc::new(movable);

        let mut handles = Vec::new();
        for worker in 0..4usize {
            let repo = repo.clone();
            let movable = movable.clone();
            handles.push(tokio::spawn(async move {
                for step in 0..200usize {
                    let event_id = movable[(worker * 7 + step) % movable.len()];
                    let date = dates[(worker + step) % 2];
                    repo.update(&event_id, EventFields::new(date, format!("Moved {}", step)))
                        .await
                        .unwrap();
                    tokio::task::yield_now().await;
                }
            }));
        }
        {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                for step in 0..200usize {
                    let event_id = repo
                        .create(EventFields::new(dates[step % 2], "Short lived"))
                        .await
                        .unwrap();
                    tokio::task::yield_now().await;
                    repo.delete(&event_id).await.unwrap();
                }
            }));
        }
        for _ in 0..4 {
            let repo = repo.clone();
            let movable = movable.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..200 {
                    for date in dates {
                        let listed = repo.list_by_date(date).await.unwrap();
                        let mut ids = HashSet::new();
                        for event in &listed {
                            assert_eq!(event.date, date);
                            assert!(ids.insert(event.id), "Event listed twice on {}", date);
                        }
                        // Moved events are never deleted so they must always resolve
                        for event in listed.iter().filter(|e| movable.contains(&e.id)) {
                            let found = repo.get(&event.id).await.unwrap();
                            assert!(dates.contains(&found.date));
                        }
                    }

                    let all = repo.list_all().await.unwrap();
                    for event_id in movable.iter() {
                        assert_eq!(all.iter().filter(|e| e.id == *event_id).count(), 1);
                    }
                    repo.check_consistency();
                    tokio::task::yield_now().await;
                }
            }));
        }

        for handle in handles {
            handle.await.expect("Task to finish without panicking");
        }

        repo.check_consistency();
        let mut stored = repo.list_ids().await.unwrap();
        stored.sort();
        let mut expected = movable.to_vec();
        expected.sort();
        assert_eq!(stored, expected);
        let on_dates = repo.list_by_date(dates[0]).await.unwrap().len()
            + repo.list_by_date(dates[1]).await.unwrap().len();
        assert_eq!(on_dates, movable.len());
    }

    #[tokio::test]
    async fn stays_consistent_over_mixed_operations() {
        let repo = InMemoryEventRepo::new();
        let mut live = Vec::new();

        for step in 0..200i64 {
            let date = today() + Duration::days(step % 7);
            match step % 5 {
                0 | 1 => {
                    let event_id = repo
                        .create(EventFields::new(date, format!("Event {}", step)))
                        .await
                        .unwrap();
                    live.push(event_id);
                }
                2 | 3 if !live.is_empty() => {
                    let event_id = live[(step as usize * 7) % live.len()];
                    repo.update(&event_id, EventFields::new(date, format!("Updated {}", step)))
                        .await
                        .unwrap();
                }
                _ if !live.is_empty() => {
                    let event_id = live.remove((step as usize * 3) % live.len());
                    repo.delete(&event_id).await.unwrap();
                }
                _ => {}
            }
            repo.check_consistency();
        }

        let mut stored = repo.list_ids().await.unwrap();
        stored.sort();
        live.sort();
        assert_eq!(stored, live);
    }
}
