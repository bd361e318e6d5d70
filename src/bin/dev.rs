use bookstore_core::account::AccountDirectory;
use bookstore_core::catalog::{Catalog, CatalogMetric};
use bookstore_core::export::Export;
use bookstore_core::model::{Book, User};
use bookstore_core::statistics::Statistics;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut catalog = Catalog::new();
    let dune = catalog.add(Book::new(
        Some("Dune".to_string()),
        "Frank Herbert".to_string(),
        "Science Fiction".to_string(),
    ));
    let hobbit = catalog.add(Book::new(
        Some("The Hobbit".to_string()),
        "J. R. R. Tolkien".to_string(),
        "Fantasy".to_string(),
    ));
    catalog.add(Book::new(
        None,
        "Anonymous".to_string(),
        "Poetry".to_string(),
    ));

    let mut directory = AccountDirectory::new();
    directory.register(User::new(
        "frank".to_string(),
        "password".to_string(),
        "frank@example.com".to_string(),
    ));

    if let Some(user) = directory.get_mut("frank") {
        catalog.purchase(user, dune);
        catalog.purchase(user, hobbit);
    }
    if let Some(user) = directory.get("frank") {
        catalog.add_review(user, dune, "A classic.");
    }
    directory.update_profile("frank", "frank_h", "password", "frank@example.com");

    println!("books: {}", catalog.books_count());
    println!("accounts: {}", directory.accounts_count());
    println!("matches for 'fiction': {}", catalog.search("fiction").len());
    println!("avg reviews per book: {:.2}", catalog.avg());
    println!(
        "review count p50/p100: {:?}",
        catalog.calculate_percentile(CatalogMetric::ReviewCount, &[0.5, 1.0])
    );
    println!("avg purchases per account: {:.2}", directory.avg());
    println!("{}", catalog.books().to_md()?);

    Ok(())
}
