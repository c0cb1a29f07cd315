//! Fixed-width binary codec for the hours file.
//!
//! All integers are little-endian. A record is an 11-byte NUL-padded ISO
//! date, one pad byte and an `i32` hour count. An activity block is a
//! 50-byte NUL-padded name, two pad bytes and 365 records. The current
//! schema prefixes ten activity blocks with an 8-byte header.

use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityLog;
use crate::models::day_record::DayRecord;
use crate::models::table::{ActivityTable, MAX_ACTIVITIES};
use crate::utils::date::{DAYS_IN_YEAR, iso, parse_date};

pub const MAGIC: &[u8; 4] = b"THMP";
pub const SCHEMA_VERSION: u16 = 2;

const DATE_FIELD: usize = 11;
const HOURS_OFFSET: usize = 12;
pub const RECORD_SIZE: usize = 16;

const NAME_FIELD: usize = 50;
const NAME_BLOCK: usize = 52;
pub const ACTIVITY_SIZE: usize = NAME_BLOCK + DAYS_IN_YEAR * RECORD_SIZE;

pub const HEADER_SIZE: usize = 8;

/// Single-activity file: bare records.
pub const V0_SIZE: usize = DAYS_IN_YEAR * RECORD_SIZE;
/// Multi-activity file without header.
pub const V1_SIZE: usize = MAX_ACTIVITIES * ACTIVITY_SIZE;
/// Current schema.
pub const V2_SIZE: usize = HEADER_SIZE + V1_SIZE;

/// Hour counts that do not fit the `i32` field are refused, never clamped.
fn encode_record(out: &mut [u8], record: &DayRecord) -> AppResult<()> {
    let hours = i32::try_from(record.hours)
        .map_err(|_| AppError::InvalidHours(record.hours.to_string()))?;

    let date = iso(record.date);
    let bytes = date.as_bytes();
    let n = bytes.len().min(DATE_FIELD - 1);
    out[..n].copy_from_slice(&bytes[..n]);
    out[HOURS_OFFSET..RECORD_SIZE].copy_from_slice(&hours.to_le_bytes());
    Ok(())
}

/// Decode one record slot. Free slots (empty date or no hours) yield `None`.
fn decode_record(buf: &[u8]) -> AppResult<Option<DayRecord>> {
    let date_raw = until_nul(&buf[..DATE_FIELD]);
    let mut hours_raw = [0u8; 4];
    hours_raw.copy_from_slice(&buf[HOURS_OFFSET..RECORD_SIZE]);
    let hours = i32::from_le_bytes(hours_raw);

    if date_raw.is_empty() || hours <= 0 {
        return Ok(None);
    }

    let text = String::from_utf8_lossy(date_raw);
    let date = parse_date(&text)
        .ok_or_else(|| AppError::Format(format!("invalid date '{text}' in record")))?;

    Ok(Some(DayRecord::new(date, hours as u32)))
}

fn until_nul(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

/// Decode `DAYS_IN_YEAR` consecutive record slots, in slot order.
pub fn decode_records(buf: &[u8]) -> AppResult<Vec<DayRecord>> {
    if buf.len() != V0_SIZE {
        return Err(AppError::Format(format!(
            "expected {V0_SIZE} bytes of records, got {}",
            buf.len()
        )));
    }

    let mut out = Vec::new();
    for chunk in buf.chunks_exact(RECORD_SIZE) {
        if let Some(record) = decode_record(chunk)? {
            out.push(record);
        }
    }
    Ok(out)
}

fn encode_activity(out: &mut [u8], activity: &ActivityLog) -> AppResult<()> {
    let name = activity.name().as_bytes();
    let n = name.len().min(NAME_FIELD - 1);
    out[..n].copy_from_slice(&name[..n]);

    let records: Vec<DayRecord> = activity.records().collect();
    let skip = records.len().saturating_sub(DAYS_IN_YEAR);

    for (slot, record) in out[NAME_BLOCK..]
        .chunks_exact_mut(RECORD_SIZE)
        .zip(records.iter().skip(skip))
    {
        encode_record(slot, record)?;
    }
    Ok(())
}

/// Encode the table with the current header. Empty slots are all zeroes.
pub fn encode_table(table: &ActivityTable) -> AppResult<Vec<u8>> {
    let mut out = vec![0u8; V2_SIZE];

    out[..4].copy_from_slice(MAGIC);
    out[4..6].copy_from_slice(&SCHEMA_VERSION.to_le_bytes());
    out[6..8].copy_from_slice(&(table.len() as u16).to_le_bytes());

    for (index, activity) in table.iter() {
        let start = HEADER_SIZE + index * ACTIVITY_SIZE;
        encode_activity(&mut out[start..start + ACTIVITY_SIZE], activity)?;
    }

    Ok(out)
}

/// Decode ten activity blocks (the body shared by the v1 and v2 schemas).
/// A block whose name is blank is a free slot, even if it still carries
/// records.
pub fn decode_blocks(buf: &[u8]) -> AppResult<ActivityTable> {
    if buf.len() != V1_SIZE {
        return Err(AppError::Format(format!(
            "expected {V1_SIZE} bytes of activity blocks, got {}",
            buf.len()
        )));
    }

    let mut table = ActivityTable::new();

    for (index, block) in buf.chunks_exact(ACTIVITY_SIZE).enumerate() {
        let name = String::from_utf8_lossy(until_nul(&block[..NAME_FIELD])).to_string();
        if name.trim().is_empty() {
            continue;
        }
        if table.find(&name).is_some() {
            return Err(AppError::Format(format!("activity '{name}' stored twice")));
        }

        let mut activity = ActivityLog::new(&name)
            .map_err(|e| AppError::Format(format!("slot {index}: {e}")))?;
        for record in decode_records(&block[NAME_BLOCK..])? {
            activity.restore(record);
        }
        table.put(index, activity);
    }

    Ok(table)
}

/// Decode a file in the current schema.
pub fn decode_table(buf: &[u8]) -> AppResult<ActivityTable> {
    if buf.len() < HEADER_SIZE || &buf[..4] != MAGIC {
        return Err(AppError::Format("missing header".to_string()));
    }

    let version = u16::from_le_bytes([buf[4], buf[5]]);
    if version != SCHEMA_VERSION {
        return Err(AppError::Format(format!(
            "unsupported schema version {version}"
        )));
    }

    let table = decode_blocks(&buf[HEADER_SIZE..])?;

    let declared = u16::from_le_bytes([buf[6], buf[7]]) as usize;
    if declared != table.len() {
        return Err(AppError::Format(format!(
            "header lists {declared} activities, found {}",
            table.len()
        )));
    }

    Ok(table)
}
