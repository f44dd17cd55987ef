use student_registry::{AppError, CrudService, MemoryStudentStore, StudentCandidate, StudentStore};

fn candidate(first: &str, last: &str) -> StudentCandidate {
    StudentCandidate {
        first: Some(first.into()),
        last: Some(last.into()),
    }
}

#[tokio::test]
async fn create_then_read_round_trips() {
    let store = MemoryStudentStore::new();
    let created = CrudService::create(&store, &candidate("Ada", "Lovelace")).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.first, "Ada");
    assert_eq!(created.last, "Lovelace");

    let fetched = CrudService::read(&store, &created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_create_persists_nothing() {
    let store = MemoryStudentStore::new();
    let bad = [
        StudentCandidate::default(),
        StudentCandidate { first: Some("Ada".into()), last: None },
        candidate("", "Lovelace"),
        candidate("Ada", "   "),
    ];
    for c in &bad {
        let err = CrudService::create(&store, c).await.unwrap_err();
        assert!(matches!(err, AppError::BadInput(_)), "{err:?}");
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn update_replaces_names_and_keeps_id() {
    let store = MemoryStudentStore::new();
    let created = CrudService::create(&store, &candidate("Ada", "Lovelace")).await.unwrap();

    let updated = CrudService::update(&store, &created.id, &candidate("Ada", "Byron")).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last, "Byron");

    let fetched = CrudService::read(&store, &created.id).await.unwrap();
    assert_eq!(fetched.first, "Ada");
    assert_eq!(fetched.last, "Byron");
}

#[tokio::test]
async fn invalid_update_leaves_row_untouched() {
    let store = MemoryStudentStore::new();
    let created = CrudService::create(&store, &candidate("Ada", "Lovelace")).await.unwrap();

    let err = CrudService::update(&store, &created.id, &candidate("", "Byron")).await.unwrap_err();
    assert!(matches!(err, AppError::BadInput(_)));
    assert_eq!(CrudService::read(&store, &created.id).await.unwrap(), created);
}

#[tokio::test]
async fn unknown_id_is_not_found_everywhere() {
    let store = MemoryStudentStore::new();
    let id = "00000000-0000-0000-0000-000000000000";

    assert!(matches!(CrudService::read(&store, id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        CrudService::update(&store, id, &candidate("A", "B")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(CrudService::delete(&store, id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found_before_validation() {
    let store = MemoryStudentStore::new();
    let err = CrudService::update(&store, "missing", &StudentCandidate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(id) if id == "missing"));
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let store = MemoryStudentStore::new();
    let created = CrudService::create(&store, &candidate("Ada", "Lovelace")).await.unwrap();

    CrudService::delete(&store, &created.id).await.unwrap();
    assert!(matches!(CrudService::read(&store, &created.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(CrudService::delete(&store, &created.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn list_returns_every_created_record() {
    let store = MemoryStudentStore::new();
    let mut created = Vec::new();
    for (first, last) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper")] {
        created.push(CrudService::create(&store, &candidate(first, last)).await.unwrap());
    }

    let mut listed = CrudService::list(&store).await.unwrap();
    listed.sort_by(|a, b| a.last.cmp(&b.last));
    created.sort_by(|a, b| a.last.cmp(&b.last));
    assert_eq!(listed, created);
    assert_eq!(store.list().await.unwrap().len(), 3);
}
