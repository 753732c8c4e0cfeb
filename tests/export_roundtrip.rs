//! Export round-trip tests: written workbooks/CSVs are read back and compared
//! against the same records the renderer would display.

use calamine::{open_workbook, Reader, Xlsx};
use maps_business_scraper::export::{export_businesses, ExportFormat, COLUMNS};
use maps_business_scraper::types::Business;

fn sample_businesses() -> Vec<Business> {
    serde_json::from_value(serde_json::json!([
        {
            "name": "Joe's",
            "address": "1 Main St",
            "website": "https://joes.example",
            "phone_number": "+1 555 0100",
            "reviews_count": 128,
            "reviews_average": 4.5,
            "latitude": -6.2,
            "longitude": 106.8
        },
        {
            "name": "Joe's",
            "address": "1 Main St"
        }
    ]))
    .expect("sample records deserialize")
}

#[test]
fn xlsx_export_round_trips_through_calamine() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = sample_businesses();

    let path = export_businesses(dir.path(), "coffee shops", &businesses, ExportFormat::Xlsx)
        .expect("export should succeed");

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Hasil_Scraping_Google_Maps_coffee shops.xlsx"
    );

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("written file opens as xlsx");
    let worksheets = workbook.worksheets();
    assert_eq!(worksheets.len(), 1);
    let (sheet_name, range) = &worksheets[0];
    assert_eq!(sheet_name, "Businesses");

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    // Header plus one row per record
    assert_eq!(rows.len(), businesses.len() + 1);
    assert_eq!(rows[0], COLUMNS);

    // Fully populated record
    assert_eq!(
        rows[1],
        [
            "Joe's",
            "1 Main St",
            "https://joes.example",
            "+1 555 0100",
            "128",
            "4.5",
            "(-6.2, 106.8)"
        ]
    );

    // Sparse record: blanks, not placeholders, and the coordinate shape kept
    assert_eq!(rows[2], ["Joe's", "1 Main St", "", "", "", "", "(, )"]);
}

#[test]
fn exported_rows_match_rendered_rows_field_for_field() {
    let businesses = sample_businesses();

    for business in &businesses {
        let row = business.export_row();
        // Populated fields are identical on screen and in the file
        if !row[0].is_empty() {
            assert_eq!(row[0], business.display_name());
        }
        if !row[2].is_empty() {
            assert_eq!(row[2], business.display_website());
        }
        if !row[4].is_empty() {
            assert_eq!(row[4], business.display_reviews_count());
        }
        if !row[6].contains("(, ") {
            assert_eq!(row[6], business.display_coordinates());
        }
    }
}

#[test]
fn csv_export_matches_the_xlsx_table() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = sample_businesses();

    let path = export_businesses(dir.path(), "coffee shops", &businesses, ExportFormat::Csv)
        .expect("export should succeed");

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Hasil_Scraping_Google_Maps_coffee shops.csv"
    );

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        COLUMNS
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), businesses.len());
    for (record, business) in records.iter().zip(&businesses) {
        let row = business.export_row();
        let cells: Vec<_> = record.iter().collect();
        assert_eq!(cells, row.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[test]
fn empty_result_set_exports_a_header_only_sheet() {
    let dir = tempfile::tempdir().unwrap();

    let path = export_businesses(dir.path(), "nothing here", &[], ExportFormat::Xlsx)
        .expect("export should succeed");

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let worksheets = workbook.worksheets();
    let (_, range) = &worksheets[0];
    assert_eq!(range.rows().count(), 1);
}

#[test]
fn export_creates_the_target_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports").join("maps");

    let path = export_businesses(&nested, "cafes", &sample_businesses(), ExportFormat::Csv)
        .expect("export should succeed");

    assert!(path.exists());
    assert!(path.starts_with(&nested));
}
