use serde::Serialize;

use crate::export::{Export, ExportError};
use crate::model::Book;

#[derive(Serialize)]
struct BookExportRow {
    book_id: String,
    title: Option<String>,
    author: String,
    genre: String,
    reviews: usize,
}

fn to_export_row(book: &Book) -> BookExportRow {
    BookExportRow {
        book_id: book.id.to_string(),
        title: book.title.clone(),
        author: book.author.clone(),
        genre: book.genre.clone(),
        reviews: book.reviews.len(),
    }
}

impl Export for [Book] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for book in self {
            wtr.serialize(to_export_row(book))?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        use std::io::Write;

        writeln!(buffer, "| Title | Author | Genre | Reviews |")?;
        writeln!(buffer, "|-------|--------|-------|---------|")?;

        for book in self {
            let row = to_export_row(book);
            let title = row.title.unwrap_or_else(|| "N/A".to_string());

            writeln!(
                buffer,
                "| {} | {} | {} | {} |",
                title, row.author, row.genre, row.reviews
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<BookExportRow> = self.iter().map(to_export_row).collect();
        serde_json::to_string(&rows).map_err(ExportError::JsonToString)
    }
}
