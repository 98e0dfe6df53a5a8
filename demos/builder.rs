use book_store::{Book, Error, RecordStore};

fn main() -> Result<(), Error> {
    let path = std::env::temp_dir().join("book_store_example_builder.json");
    let _ = std::fs::remove_file(&path);

    let store = RecordStore::<Book>::builder(&path)
        .create_if_missing(true)
        .unique_ids(true)
        .pretty(false)
        .build()?;

    store.add(Book::new(10, "Middlemarch", "George Eliot"))?;
    match store.add(Book::new(10, "Middlemarch (2nd copy)", "George Eliot")) {
        Err(Error::DuplicateId(id)) => println!("rejected duplicate id {id}"),
        other => println!("unexpected: {other:?}"),
    }

    println!("{store:?}");
    println!("{}", std::fs::read_to_string(store.path()).unwrap_or_default());

    let _ = std::fs::remove_file(&path);
    Ok(())
}
