use numerology_core::db::open_db_in_memory;
use numerology_core::{
    GridType, NewRemedy, RemedyRepository, RemedyService, RemedyValidationError, RepoError,
    SqliteRemedyRepository,
};
use rusqlite::Connection;

#[test]
fn create_then_list_for_returns_exactly_the_created_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let id = repo
        .create(&NewRemedy::new(3, GridType::Primary, "Color", "Wear yellow"))
        .unwrap();

    let rows = repo.list_for(3, GridType::Primary).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].number, 3);
    assert_eq!(rows[0].grid_type, GridType::Primary);
    assert_eq!(rows[0].category, "Color");
    assert_eq!(rows[0].text, "Wear yellow");

    assert!(repo.list_for(3, GridType::Secondary).unwrap().is_empty());
    assert!(repo.list_for(4, GridType::Primary).unwrap().is_empty());
}

#[test]
fn create_trims_fields_and_allows_empty_category() {
    let conn = open_db_in_memory().unwrap();
    let service = RemedyService::new(SqliteRemedyRepository::new(&conn));

    let id = service
        .create(5, GridType::Secondary, "  ", "  travel more \n")
        .unwrap();
    let stored = service.get(id).unwrap().unwrap();
    assert_eq!(stored.category, "");
    assert_eq!(stored.text, "travel more");
}

#[test]
fn create_rejects_empty_text_without_inserting() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let err = repo
        .create(&NewRemedy::new(1, GridType::Primary, "Color", "   "))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(RemedyValidationError::EmptyText)
    ));
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn create_rejects_out_of_range_number_without_inserting() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    for number in [0u8, 10, 255] {
        let err = repo
            .create(&NewRemedy::new(number, GridType::Secondary, "x", "text"))
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(RemedyValidationError::NumberOutOfRange(value))
                if value == i64::from(number)
        ));
    }
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn ids_are_unique_and_increasing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let first = repo
        .create(&NewRemedy::new(2, GridType::Primary, "a", "one"))
        .unwrap();
    let second = repo
        .create(&NewRemedy::new(2, GridType::Primary, "b", "two"))
        .unwrap();
    repo.delete(second).unwrap();
    let third = repo
        .create(&NewRemedy::new(2, GridType::Primary, "c", "three"))
        .unwrap();

    assert!(first < second);
    assert!(second < third, "AUTOINCREMENT never reuses deleted ids");
}

#[test]
fn list_all_orders_by_grid_type_then_number_then_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let vedic_1 = repo
        .create(&NewRemedy::new(1, GridType::Secondary, "v", "vedic one"))
        .unwrap();
    let loshu_9 = repo
        .create(&NewRemedy::new(9, GridType::Primary, "l", "loshu nine"))
        .unwrap();
    let loshu_2a = repo
        .create(&NewRemedy::new(2, GridType::Primary, "l", "loshu two a"))
        .unwrap();
    let loshu_2b = repo
        .create(&NewRemedy::new(2, GridType::Primary, "l", "loshu two b"))
        .unwrap();

    let ids: Vec<i64> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, vec![loshu_2a, loshu_2b, loshu_9, vedic_1]);
}

#[test]
fn list_for_keeps_store_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let texts = ["first", "second", "third"];
    for text in texts {
        repo.create(&NewRemedy::new(6, GridType::Secondary, "c", text))
            .unwrap();
    }

    let listed: Vec<String> = repo
        .list_for(6, GridType::Secondary)
        .unwrap()
        .into_iter()
        .map(|record| record.text)
        .collect();
    assert_eq!(listed, texts);
}

#[test]
fn update_text_replaces_text_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let id = repo
        .create(&NewRemedy::new(8, GridType::Primary, "Work", "draft"))
        .unwrap();
    repo.update_text(id, "  final text ").unwrap();

    let stored = repo.get(id).unwrap().unwrap();
    assert_eq!(stored.text, "final text");
    assert_eq!(stored.category, "Work");
    assert_eq!(stored.number, 8);
}

#[test]
fn update_text_rejects_empty_text_and_keeps_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let id = repo
        .create(&NewRemedy::new(8, GridType::Primary, "Work", "keep me"))
        .unwrap();
    let err = repo.update_text(id, "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.get(id).unwrap().unwrap().text, "keep me");
}

#[test]
fn update_text_on_missing_id_returns_not_found_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    repo.create(&NewRemedy::new(1, GridType::Primary, "a", "unchanged"))
        .unwrap();
    let before = repo.list_all().unwrap();

    let err = repo.update_text(9_999, "new").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9_999)));
    assert_eq!(repo.list_all().unwrap(), before);
}

#[test]
fn delete_removes_record_and_reports_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);

    let keep = repo
        .create(&NewRemedy::new(4, GridType::Secondary, "a", "keep"))
        .unwrap();
    let gone = repo
        .create(&NewRemedy::new(4, GridType::Secondary, "b", "gone"))
        .unwrap();

    repo.delete(gone).unwrap();
    let rows = repo.list_for(4, GridType::Secondary).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, keep);
    assert!(repo.get(gone).unwrap().is_none());

    let err = repo.delete(gone).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == gone));
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn list_all_skips_legacy_rows_but_keeps_valid_ones_deletable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRemedyRepository::new(&conn);
    let valid_id = repo
        .create(&NewRemedy::new(7, GridType::Secondary, "Career", "Green stone"))
        .unwrap();
    conn.execute(
        "INSERT INTO remedies (number, grid_type, category, text)
         VALUES (11, 'LoShu', 'legacy', 'out of range');",
        [],
    )
    .unwrap();
    let out_of_range_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO remedies (number, grid_type, category, text)
         VALUES (3, 'Chinese', 'legacy', 'unknown grid');",
        [],
    )
    .unwrap();

    let rows = repo.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, valid_id);
    assert_eq!(rows[0].number, 7);

    repo.delete(out_of_range_id).unwrap();
    assert_eq!(row_count(&conn), 2);
}

#[test]
fn get_rejects_invalid_persisted_row() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO remedies (number, grid_type, category, text)
         VALUES (12, 'LoShu', 'bad', 'out of range');",
        [],
    )
    .unwrap();
    let id = conn.last_insert_rowid();

    let repo = SqliteRemedyRepository::new(&conn);
    let err = repo.get(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM remedies;", [], |row| row.get(0))
        .unwrap()
}
