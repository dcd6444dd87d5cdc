use crate::utils::error::Result;

/// Source labels as they appear on the page, paired with the canonical column
/// names used in the output. Order is the output column order.
pub const COLUMN_MAP: [(&str, &str); 9] = [
    ("بورس", "Stock"),
    ("انس طلا", "GoldOunce"),
    ("مثقال طلا", "GoldMithqal"),
    ("طلا ۱۸", "Gold18K"),
    ("سکه", "Coin"),
    ("دلار", "Dollar"),
    ("نفت برنت", "BrentOil"),
    ("تتر", "Tether"),
    ("بیت کوین", "Bitcoin"),
];

/// One scraped row: nine prices aligned with [`COLUMN_MAP`], plus the Jalali
/// date and local time of the scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    pub prices: [Option<String>; 9],
    pub date: String,
    pub time: String,
}

impl PriceRecord {
    /// A record is complete when every tracked price is present.
    pub fn is_complete(&self) -> bool {
        self.prices.iter().all(|p| p.is_some())
    }

    /// Looks a price up by its canonical column name. Test convenience.
    pub fn price(&self, column: &str) -> Option<&str> {
        COLUMN_MAP
            .iter()
            .position(|(_, name)| *name == column)
            .and_then(|i| self.prices[i].as_deref())
    }
}

/// Append-only sequence of complete records for one run. Never loaded from
/// disk; the persisted file is fully rewritten after every iteration.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<PriceRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record if it is complete; incomplete rows are dropped.
    /// Returns whether the record was kept.
    pub fn push(&mut self, record: PriceRecord) -> bool {
        if record.is_complete() {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Renders the whole dataset as CSV: header row with the nine canonical
    /// column names followed by Date and Time, then one row per record.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header: Vec<&str> = COLUMN_MAP
            .iter()
            .map(|(_, name)| *name)
            .chain(["Date", "Time"])
            .collect();
        writer.write_record(&header)?;

        for record in &self.records {
            let row: Vec<&str> = record
                .prices
                .iter()
                .map(|p| p.as_deref().unwrap_or(""))
                .chain([record.date.as_str(), record.time.as_str()])
                .collect();
            writer.write_record(&row)?;
        }

        Ok(writer.into_inner().map_err(|e| e.into_error())?)
    }
}
