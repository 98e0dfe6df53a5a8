use book_store::{Book, BookStatus, RecordStore};
use chrono::Utc;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

fn store_with(dir: &TempDir, books: &[Book]) -> Arc<RecordStore<Book>> {
    let path = dir.path().join("books.json");
    std::fs::write(&path, serde_json::to_vec_pretty(books).unwrap()).unwrap();
    Arc::new(RecordStore::<Book>::open(&path).unwrap())
}

#[test]
fn concurrent_lists_see_same_collection() {
    let dir = TempDir::new().unwrap();
    let books: Vec<Book> = (0..20).map(|i| Book::new(i, format!("t{i}"), "a")).collect();
    let store = store_with(&dir, &books);

    let n = 8;
    let barrier = Arc::new(Barrier::new(n));
    let handles: Vec<_> = (0..n)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.list().unwrap()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), books);
    }
}

#[test]
fn concurrent_adds_are_all_persisted() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, &[]);

    let threads = 8;
    let per_thread = 10;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..per_thread {
                    let id = (t * per_thread + i) as u64;
                    store.add(Book::new(id, format!("b{id}"), "a")).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut ids: Vec<u64> = store.list().unwrap().iter().map(|b| b.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..(threads * per_thread) as u64).collect::<Vec<_>>());
}

#[test]
fn readers_never_see_partial_writes() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, &[Book::new(0, "seed", "a")]);

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for id in 1..=50 {
                store.add(Book::new(id, "w", "a")).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..100 {
                    // a torn file would fail to decode
                    let len = store.list().unwrap().len();
                    assert!(len >= last, "collection shrank from {last} to {len}");
                    last = len;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.list().unwrap().len(), 51);
}

#[test]
fn concurrent_updates_and_removes_are_serialized() {
    let dir = TempDir::new().unwrap();
    let books: Vec<Book> = (0..40).map(|i| Book::new(i, "t", "a")).collect();
    let store = store_with(&dir, &books);

    let updater = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for id in (0..40).step_by(2) {
                let patch = Book::new(id, "", "").with_status(BookStatus::Borrowed, Utc::now());
                assert!(store.update(&patch).unwrap());
            }
        })
    };
    let remover = {
        let store = Arc::clone(&store);
        let odd: Vec<Book> = books.iter().filter(|b| b.id % 2 == 1).cloned().collect();
        thread::spawn(move || {
            for b in &odd {
                assert!(store.remove(b).unwrap());
            }
        })
    };
    updater.join().unwrap();
    remover.join().unwrap();

    let left = store.list().unwrap();
    assert_eq!(left.len(), 20);
    assert!(left
        .iter()
        .all(|b| b.id % 2 == 0 && b.status == BookStatus::Borrowed));
}
