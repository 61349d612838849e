use crate::error::{Result, SalesAnalyticsError};
use crate::schema::{
    RawRecord, DATE_COLUMN, QUANTITY_COLUMN, SKU_COLUMN, TOTAL_PRICE_COLUMN, UNIT_PRICE_COLUMN,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;

struct ColumnIndex {
    date: usize,
    sku: usize,
    unit_price: usize,
    quantity: usize,
    total_price: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| SalesAnalyticsError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            date: find(DATE_COLUMN)?,
            sku: find(SKU_COLUMN)?,
            unit_price: find(UNIT_PRICE_COLUMN)?,
            quantity: find(QUANTITY_COLUMN)?,
            total_price: find(TOTAL_PRICE_COLUMN)?,
        })
    }

    fn extract(&self, row: &StringRecord) -> RawRecord {
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        RawRecord {
            date: field(self.date),
            sku: field(self.sku),
            unit_price: field(self.unit_price),
            quantity: field(self.quantity),
            total_price: field(self.total_price),
        }
    }
}

/// Reads sales rows from CSV with a header line.
///
/// Columns are matched by header name; extra columns are ignored. Fields are
/// trimmed and a short row yields empty strings for its missing fields, which
/// the validator will then reject. Blank and whitespace-only lines are
/// skipped; a row of empty fields such as `,,,,` is kept. The i-th record
/// therefore corresponds to source row `i + 2`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        // A whitespace-only line trims down to a single empty field
        if row.len() == 1 && row.iter().all(str::is_empty) {
            continue;
        }
        records.push(columns.extract(&row));
    }

    debug!("Read {} raw sales records", records.len());
    Ok(records)
}

pub fn parse_csv(text: &str) -> Result<Vec<RawRecord>> {
    read_csv(text.trim().as_bytes())
}
