use revisit_core::{
    Date, LineRecordStore, NoteRecord, NoteService, RecordStore, ReviewSchedule, ServiceError,
    StoreResult,
};
use std::cell::RefCell;

/// In-memory store double; lets service tests run without a filesystem.
struct MemoryStore {
    records: RefCell<Vec<NoteRecord>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            records: RefCell::new(Vec::new()),
        }
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &NoteRecord) -> StoreResult<()> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<NoteRecord>> {
        Ok(self.records.borrow().clone())
    }
}

#[test]
fn add_note_validates_subject_before_touching_the_store() {
    let service = NoteService::new(MemoryStore::new());

    let err = service
        .add_note(Date::new(2024, 3, 10), "two words", "content")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.all_notes().unwrap().is_empty());
}

#[test]
fn multi_line_content_never_reaches_the_store() {
    // Persisted as-is, "first line\nsecond line" would come back as a
    // truncated record plus a skipped tail; rejection happens up front.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    let service = NoteService::new(LineRecordStore::new(&path));

    let err = service
        .add_note(Date::new(2024, 3, 10), "math", "first line\nsecond line")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert!(!path.exists());
    assert!(service.all_notes().unwrap().is_empty());
}

#[test]
fn due_grouped_returns_sorted_groups() {
    let service = NoteService::new(MemoryStore::new());
    let reference = Date::new(2024, 3, 10);

    service.add_note(Date::new(2024, 3, 3), "math", "algebra").unwrap(); // age 7
    service.add_note(Date::new(2024, 3, 3), "math", "geometry").unwrap(); // age 7
    service.add_note(Date::new(2024, 3, 10), "art", "sketch").unwrap(); // age 0
    service.add_note(Date::new(2024, 3, 5), "art", "shading").unwrap(); // age 5, silent

    let groups = service
        .due_grouped(reference, &ReviewSchedule::default())
        .unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].subject, "art");
    assert_eq!(groups[0].contents, vec!["sketch"]);
    assert_eq!(groups[1].subject, "math");
    assert_eq!(groups[1].contents, vec!["algebra", "geometry"]);
}

#[test]
fn all_grouped_ignores_age() {
    let service = NoteService::new(MemoryStore::new());
    service.add_note(Date::new(2019, 1, 1), "math", "algebra").unwrap();
    service.add_note(Date::new(2024, 3, 9), "art", "sketch").unwrap();

    let groups = service.all_grouped().unwrap();
    assert_eq!(groups.len(), 2);
}

#[test]
fn empty_store_yields_empty_results_everywhere() {
    let service = NoteService::new(MemoryStore::new());
    let reference = Date::new(2024, 3, 10);

    assert!(service.all_notes().unwrap().is_empty());
    assert!(service
        .due_notes(reference, &ReviewSchedule::default())
        .unwrap()
        .is_empty());
    assert!(service
        .due_grouped(reference, &ReviewSchedule::default())
        .unwrap()
        .is_empty());
}

#[test]
fn service_over_line_store_reads_fresh_on_every_call() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    let service = NoteService::new(LineRecordStore::new(&path));
    let reference = Date::new(2024, 3, 10);

    service
        .add_note(Date::new(2024, 3, 3), "diet", "protein")
        .unwrap();
    assert_eq!(
        service
            .due_notes(reference, &ReviewSchedule::default())
            .unwrap()
            .len(),
        1
    );

    // A second writer appending behind this service's back is visible on the
    // next retrieval; there is no authoritative in-memory cache.
    let other = LineRecordStore::new(&path);
    other
        .append(&NoteRecord::new(Date::new(2024, 3, 10), "art", "sketch").unwrap())
        .unwrap();

    assert_eq!(
        service
            .due_notes(reference, &ReviewSchedule::default())
            .unwrap()
            .len(),
        2
    );
}
