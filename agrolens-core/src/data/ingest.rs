//! CSV ingest: file rows → normalized PriceRecords.
//!
//! Malformed rows (unparseable date or price, inverted min/max) are
//! skipped, never silently — one warning per file with the skip count.

use std::path::Path;

use crate::domain::PriceRecord;
use crate::error::MarketError;

use super::schema::{parse_date, parse_price, HeaderMap};

/// Read every row of a region CSV into PriceRecords, in file order.
///
/// `region` is stamped onto each record (the file stem is the region key;
/// the file itself does not repeat it per row). Rows that fail to
/// normalize are counted and skipped.
pub fn read_records(path: &Path, region: &str) -> Result<Vec<PriceRecord>, MarketError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = HeaderMap::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row?;
        match row_to_record(&row, &headers, region) {
            Some(record) if record.is_sane() => records.push(record),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        eprintln!(
            "WARNING: skipped {skipped} malformed row(s) in {}",
            path.display()
        );
    }

    Ok(records)
}

fn row_to_record(row: &csv::StringRecord, headers: &HeaderMap, region: &str) -> Option<PriceRecord> {
    let date = parse_date(row.get(headers.date)?)?;
    let commodity = row.get(headers.commodity)?.trim();
    if commodity.is_empty() {
        return None;
    }
    let min_price = parse_price(row.get(headers.min_price)?)?;
    let max_price = parse_price(row.get(headers.max_price)?)?;
    let modal_price = parse_price(row.get(headers.modal_price)?)?;
    let volume = headers
        .volume
        .and_then(|i| row.get(i))
        .and_then(parse_price);

    Some(PriceRecord {
        date,
        region: region.to_string(),
        commodity: commodity.to_string(),
        min_price,
        max_price,
        modal_price,
        volume,
    })
}

/// Canonicalize a single-commodity record set: stable sort ascending by
/// date, then drop duplicate dates keeping the first occurrence in source
/// order.
pub fn canonicalize(mut records: Vec<PriceRecord>) -> Vec<PriceRecord> {
    records.sort_by_key(|r| r.date);
    records.dedup_by_key(|r| r.date);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn record(day: u32, modal: f64) -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            region: "Kerala_Kottayam".into(),
            commodity: "Banana".into(),
            min_price: modal - 100.0,
            max_price: modal + 100.0,
            modal_price: modal,
            volume: None,
        }
    }

    #[test]
    fn reads_and_normalizes_rows() {
        let file = write_csv(
            "Price Date,Commodity,Min Price,Max Price,Modal Price,Arrivals\n\
             2024-06-03,Banana,\"2,400\",\"2,800\",\"2,600\",12.5\n\
             04/06/2024,Banana,2450,2850,2650,\n",
        );
        let records = read_records(file.path(), "Kerala_Kottayam").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].modal_price, 2600.0);
        assert_eq!(records[0].volume, Some(12.5));
        assert_eq!(records[0].region, "Kerala_Kottayam");
        assert_eq!(
            records[1].date,
            NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()
        );
        assert_eq!(records[1].volume, None);
    }

    #[test]
    fn skips_malformed_rows() {
        let file = write_csv(
            "date,commodity,min_price,max_price,modal_price\n\
             2024-06-03,Banana,2400,2800,2600\n\
             not-a-date,Banana,2400,2800,2600\n\
             2024-06-05,Banana,2900,2800,2600\n",
        );
        // Second row: bad date. Third row: min > max (fails sanity).
        let records = read_records(file.path(), "Kerala_Kottayam").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_file_with_headers_is_valid_and_empty() {
        let file = write_csv("date,commodity,min_price,max_price,modal_price\n");
        let records = read_records(file.path(), "Kerala_Kottayam").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unrecognized_headers_fail() {
        let file = write_csv("a,b,c\n1,2,3\n");
        assert!(read_records(file.path(), "Kerala_Kottayam").is_err());
    }

    #[test]
    fn canonicalize_sorts_ascending() {
        let out = canonicalize(vec![record(5, 2650.0), record(3, 2600.0), record(4, 2625.0)]);
        let dates: Vec<u32> = out.iter().map(|r| r.date.day()).collect();
        assert_eq!(dates, vec![3, 4, 5]);
    }

    #[test]
    fn canonicalize_keeps_first_on_duplicate_dates() {
        let mut dup = record(3, 9999.0);
        dup.min_price = 9899.0;
        dup.max_price = 10099.0;
        let out = canonicalize(vec![record(3, 2600.0), dup, record(4, 2625.0)]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].modal_price, 2600.0);
    }
}
