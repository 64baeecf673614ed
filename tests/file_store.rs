use bookshelf::api::LibraryApi;
use bookshelf::model::{Book, ReadStatus, SearchField};
use bookshelf::store::fs::FileStore;
use bookshelf::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("library.json"));
    (dir, store)
}

#[test]
fn test_end_to_end_scenario() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();

    let mut api = LibraryApi::open(store).unwrap();
    assert!(api.books().is_empty());

    api.add_book("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes)
        .unwrap();

    let loaded = FileStore::new(&path).load().unwrap();
    assert_eq!(
        loaded,
        vec![Book::new("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes)]
    );

    let result = api.remove_book("dune").unwrap();
    assert!(result.removed);
    assert!(FileStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn test_reopen_sees_previous_session() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();

    {
        let mut api = LibraryApi::open(store).unwrap();
        api.add_book("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::Yes)
            .unwrap();
        api.add_book("Emma", "Austen", 1815, "Classic", ReadStatus::No)
            .unwrap();
    }

    let api = LibraryApi::open(FileStore::new(&path)).unwrap();
    let titles: Vec<_> = api.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Emma"]);
    assert_eq!(
        api.search_books("", SearchField::Title).listed_books.len(),
        2
    );
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store
        .save(&[Book::new("Dune", "Herbert", 1965, "Sci-Fi", ReadStatus::No)])
        .unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_reads_legacy_files() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"[
    {
        "title": "Emma",
        "author": "Austen",
        "year": 1815,
        "generation": "Classic",
        "read": "no"
    }
]"#,
    )
    .unwrap();

    let books = store.load().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].genre, "Classic");
}

#[test]
fn test_invalid_utf8_loads_empty() {
    let (_dir, store) = setup();
    fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_into_directory_path_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path());
    assert!(store.save(&[]).is_err());
}

#[test]
fn test_records_with_both_genre_keys_survive_an_add() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();
    fs::write(
        &path,
        r#"[
    {"title": "Emma", "author": "Austen", "year": 1815, "genre": "Classic", "generation": "Classic", "read": "no"},
    {"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read": "yes"}
]"#,
    )
    .unwrap();

    let mut api = LibraryApi::open(store).unwrap();
    assert_eq!(api.books().len(), 2);

    api.add_book("Ulysses", "Joyce", 1922, "Modernist", ReadStatus::No)
        .unwrap();

    let titles: Vec<String> = FileStore::new(&path)
        .load()
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Emma", "Dune", "Ulysses"]);
}
