//! Incremental CSV body stream.
//!
//! The header row is the first chunk, then one chunk per record, in
//! the order the records arrived. Rows are serialized lazily, so when
//! the client goes away the remaining rows are never rendered. A
//! serialization failure ends the stream silently: by then the status
//! line and header chunk may already be on the wire, so there is
//! nothing useful to tell the client. It is logged, not retried.

use std::convert::Infallible;

use bytes::Bytes;
use futures::future;
use futures::stream::{self, Stream, StreamExt as _};

use crate::columns::ExportRecord;
use crate::encoding::OutputEncoding;
use crate::error::ExportError;

/// Build the CSV response body for `records`.
///
/// Records are emitted as received; this stage never re-sorts.
pub fn csv_stream<R>(
    records: Vec<R>,
    base_url: String,
    encoding: OutputEncoding,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send
where
    R: ExportRecord + Send + 'static,
{
    let header = serialize_header(R::HEADER);
    let rows = records
        .into_iter()
        .map(move |record| serialize_row(&record.fields(&base_url)));

    stream::iter(std::iter::once(header).chain(rows)).scan((), move |_, chunk| {
        future::ready(match chunk {
            Ok(text) => Some(Ok(encoding.encode(&text))),
            Err(error) => {
                tracing::warn!(%error, "csv serialization failed, abandoning stream");
                None
            }
        })
    })
}

fn serialize_header(header: &[&str]) -> Result<String, ExportError> {
    write_record(header)
}

fn serialize_row(fields: &[String]) -> Result<String, ExportError> {
    write_record(fields)
}

/// Serialize one record with RFC 4180 quoting, trailing `\n` included.
fn write_record<I, F>(fields: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields)?;
    let buf = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use partdb_query::{LocationRecord, PartRecord};

    const BASE_URL: &str = "https://partdb.example.com";

    fn collect(stream: impl Stream<Item = Result<Bytes, Infallible>>) -> String {
        let chunks = block_on(stream.collect::<Vec<_>>());
        let bytes: Vec<u8> = chunks
            .into_iter()
            .flat_map(|chunk| chunk.unwrap().to_vec())
            .collect();
        String::from_utf8(bytes).unwrap()
    }

    fn sample_part() -> PartRecord {
        PartRecord {
            id: 5,
            name: "Resistor 10k".to_string(),
            comment: "low,noise".to_string(),
            description: String::new(),
            in_stock: 120,
            storage_location: "Bin A1".to_string(),
        }
    }

    #[test]
    fn test_write_record_flushes_into_a_single_line() {
        let line = write_record(["a", "b,c", "d\"e"]).unwrap();
        assert_eq!(line, "a,\"b,c\",\"d\"\"e\"\n");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let body = collect(csv_stream::<PartRecord>(
            vec![],
            BASE_URL.to_string(),
            OutputEncoding::Utf8,
        ));
        assert_eq!(body, "id,name,comment,description,instock,Lagerplatz,Link\n");
    }

    #[test]
    fn test_part_row_matches_expected_shape() {
        let body = collect(csv_stream(
            vec![sample_part()],
            BASE_URL.to_string(),
            OutputEncoding::Utf8,
        ));

        let mut lines = body.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,comment,description,instock,Lagerplatz,Link"
        );
        assert_eq!(
            lines.next().unwrap(),
            "5,Resistor 10k,\"low,noise\",,120,Bin A1,\
             https://partdb.example.com/show_part_info.php?pid=5"
        );
        assert!(lines.next().is_none());
    }

    /// A comment with a comma, a quote and an embedded newline must
    /// survive a parse round trip through a standard CSV reader.
    #[test]
    fn test_hostile_comment_round_trips() {
        let comment = "10% tol, \"low noise\"\nsecond line";
        let part = PartRecord {
            comment: comment.to_string(),
            ..sample_part()
        };

        let body = collect(csv_stream(
            vec![part],
            BASE_URL.to_string(),
            OutputEncoding::Utf8,
        ));

        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], comment);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let locations: Vec<LocationRecord> = [3_i64, 1, 8]
            .iter()
            .map(|id| LocationRecord {
                id: *id,
                name: format!("loc-{id}"),
                comment: String::new(),
                parent_location: "root".to_string(),
            })
            .collect();

        let body = collect(csv_stream(
            locations,
            BASE_URL.to_string(),
            OutputEncoding::Utf8,
        ));
        let ids: Vec<&str> = body
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["3", "1", "8"]);
    }

    #[test]
    fn test_latin1_body_is_transcoded() {
        let part = PartRecord {
            name: "Gehäuse".to_string(),
            ..sample_part()
        };

        let chunks = block_on(
            csv_stream(vec![part], BASE_URL.to_string(), OutputEncoding::Latin1)
                .collect::<Vec<_>>(),
        );
        let row = chunks.last().unwrap().as_ref().unwrap();
        assert!(row.windows(4).any(|w| w == b"Geh\xe4"));
    }
}
