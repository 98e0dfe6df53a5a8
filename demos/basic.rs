use book_store::{Book, BookStatus, BookStore};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), book_store::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let path = std::env::temp_dir().join("book_store_example_basic.json");
    let _ = std::fs::remove_file(&path);
    let store = BookStore::builder(&path).create_if_missing(true).build()?;

    // add
    store.add(Book::new(1, "Dune", "Frank Herbert"))?;
    store.add(Book::new(2, "Solaris", "Stanisław Lem"))?;
    store.add(Book::new(3, "Emma", "Jane Austen"))?;

    // lend one out: only status + timestamp travel with an update
    let lent = Book::new(2, "", "").with_status(BookStatus::Borrowed, Utc::now());
    store.update(&lent)?;

    // remove needs the full stored value
    let emma = store.list()?.into_iter().find(|b| b.id == 3);
    if let Some(emma) = emma {
        store.remove(&emma)?;
    }

    for book in store.list()? {
        println!("{:>3}  {:<10} {:<16} {:?}", book.id, book.title, book.author, book.status);
    }

    let _ = std::fs::remove_file(&path);
    Ok(())
}
