use bazaar_core::db::open_db_in_memory;
use bazaar_core::{CategoryRepository, RepoError, SqliteCategoryRepository};

#[test]
fn resolving_same_name_twice_returns_same_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let first = repo.resolve_or_create("Shoes").unwrap();
    let second = repo.resolve_or_create("Shoes").unwrap();
    assert_eq!(first, second);
}

#[test]
fn distinct_names_resolve_to_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let shoes = repo.resolve_or_create("Shoes").unwrap();
    let hats = repo.resolve_or_create("Hats").unwrap();
    assert_ne!(shoes, hats);
}

#[test]
fn names_differing_in_case_are_distinct_categories() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let lower = repo.resolve_or_create("books").unwrap();
    let upper = repo.resolve_or_create("Books").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn empty_name_is_rejected_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    for bad in ["", "   "] {
        let err = repo.resolve_or_create(bad).unwrap_err();
        assert!(matches!(err, RepoError::CategoryValidation(_)), "`{bad}`");
    }

    let categories = repo.list_categories().unwrap();
    assert!(categories.is_empty());
}

#[test]
fn list_categories_returns_all_sorted_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    repo.resolve_or_create("Toys").unwrap();
    repo.resolve_or_create("Books").unwrap();
    repo.resolve_or_create("Shoes").unwrap();

    let names: Vec<String> = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, ["Books", "Shoes", "Toys"]);
}
