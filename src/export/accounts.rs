use serde::Serialize;

use crate::export::{Export, ExportError};
use crate::model::User;

// Passwords never leave the process through an export row.
#[derive(Serialize)]
struct AccountExportRow {
    username: String,
    email: String,
    purchased_books: usize,
}

fn to_export_row(user: &User) -> AccountExportRow {
    AccountExportRow {
        username: user.username.clone(),
        email: user.email.clone(),
        purchased_books: user.purchased.len(),
    }
}

impl Export for [User] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for user in self {
            wtr.serialize(to_export_row(user))?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        use std::io::Write;

        writeln!(buffer, "| Username | Email | Purchased |")?;
        writeln!(buffer, "|----------|-------|-----------|")?;

        for user in self {
            let row = to_export_row(user);
            writeln!(
                buffer,
                "| {} | {} | {} |",
                row.username, row.email, row.purchased_books
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<AccountExportRow> = self.iter().map(to_export_row).collect();
        serde_json::to_string(&rows).map_err(ExportError::JsonToString)
    }
}
