//! Seed data and statement-file builders for the integration tests.

use std::io::{Cursor, Write};

use chrono::{DateTime, Utc};
use fleetops_core::models::PER_ORDER_AMOUNT_KEY;
use sqlx::PgPool;
use zip::write::FileOptions;
use zip::ZipWriter;

pub async fn seed_company(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO companies (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("failed to seed company")
}

pub async fn seed_store(pool: &PgPool, company_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO stores (company_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(company_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("failed to seed store")
}

pub async fn seed_rider(pool: &PgPool, company_id: i64, full_name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO riders (company_id, full_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(company_id)
    .bind(full_name)
    .fetch_one(pool)
    .await
    .expect("failed to seed rider")
}

/// Active assignment stamped now.
pub async fn seed_assignment(
    pool: &PgPool,
    company_id: i64,
    rider_id: i64,
    external_rider_id: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO rider_assignments (company_id, rider_id, external_rider_id, is_active)
        VALUES ($1, $2, $3, TRUE)
        RETURNING id
        "#,
    )
    .bind(company_id)
    .bind(rider_id)
    .bind(external_rider_id)
    .fetch_one(pool)
    .await
    .expect("failed to seed assignment")
}

/// Assignment with explicit activity flag and timestamp, for precedence tests.
pub async fn seed_assignment_at(
    pool: &PgPool,
    company_id: i64,
    rider_id: i64,
    external_rider_id: &str,
    is_active: bool,
    assigned_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO rider_assignments (company_id, rider_id, external_rider_id, is_active, assigned_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(company_id)
    .bind(rider_id)
    .bind(external_rider_id)
    .bind(is_active)
    .bind(assigned_at)
    .fetch_one(pool)
    .await
    .expect("failed to seed assignment")
}

pub async fn set_rate(pool: &PgPool, rate: &str) {
    sqlx::query(
        r#"
        INSERT INTO system_settings (key, value, updated_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
        "#,
    )
    .bind(PER_ORDER_AMOUNT_KEY)
    .bind(rate)
    .execute(pool)
    .await
    .expect("failed to set per-order rate");
}

pub async fn count_uploads(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM daily_order_uploads")
        .fetch_one(pool)
        .await
        .expect("failed to count uploads")
}

pub async fn count_rider_orders(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM daily_rider_orders")
        .fetch_one(pool)
        .await
        .expect("failed to count rider orders")
}

/// Comma-join rows into a CSV payload.
pub fn csv_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out.into_bytes()
}

/// Minimal single-sheet xlsx archive with every cell as an inline string.
pub fn xlsx_bytes(rows: &[&[&str]]) -> Vec<u8> {
    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

    const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

    let mut sheet_rows = String::new();
    for (row_index, row) in rows.iter().enumerate() {
        sheet_rows.push_str(&format!("<row r=\"{}\">", row_index + 1));
        for (col_index, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", (b'A' + col_index as u8) as char, row_index + 1);
            sheet_rows.push_str(&format!(
                "<c r=\"{cell_ref}\" t=\"inlineStr\"><is><t>{value}</t></is></c>"
            ));
        }
        sheet_rows.push_str("</row>");
    }
    let sheet = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\"><sheetData>{sheet_rows}</sheetData></worksheet>"
    );

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        let options = FileOptions::default();

        let entries = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", ROOT_RELS),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ];
        for (path, contents) in entries {
            zip.start_file(path, options).expect("failed to add entry");
            zip.write_all(contents.as_bytes())
                .expect("failed to write entry");
        }
        zip.finish().expect("failed to finish xlsx archive");
    }
    buffer.into_inner()
}
