//! Acknowledgement message parsing and record assembly

use crate::error::{AckError, Result};
use crate::extracted::ExtractedFields;
use crate::price::resolve_price;
use crate::segment::segment;
use crate::types::{AckMessage, BookRecord, EmailAddress, MessageId};
use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, warn};

/// Build a record from one selection chunk
///
/// Returns `None` when the chunk has no title. Missing fields become empty
/// strings and an unknown price becomes [`crate::Price::Unresolved`].
#[must_use]
pub fn extract_record(chunk: &str, received: NaiveDate) -> Option<BookRecord> {
    let fields = ExtractedFields::extract(chunk);
    if !fields.has_title() {
        debug!("Skipping selection without a title");
        return None;
    }

    let price = resolve_price(chunk, &fields.supplier, &fields.purchase_option);

    Some(BookRecord {
        date: received,
        title: fields.title,
        author: fields.author,
        binding: fields.binding,
        series: fields.series,
        supplier: fields.supplier,
        purchase_option: fields.purchase_option,
        price,
        fund: fields.fund,
    })
}

/// Extract every book record from an acknowledgement body, in selection order
#[must_use]
pub fn process_email_body(body: &str, received: NaiveDate) -> Vec<BookRecord> {
    let records: Vec<BookRecord> = segment(body)
        .filter_map(|chunk| extract_record(chunk, received))
        .collect();

    debug!("Extracted {} records from body", records.len());
    records
}

/// Parse a raw RFC 5322 message into an [`AckMessage`]
///
/// `fallback_key` names the message when it has no Message-ID header,
/// typically the file name it was read from.
pub fn parse_message(raw: &[u8], fallback_key: &str) -> Result<AckMessage> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| AckError::Structure(e.to_string()))?;

    let id = extract_message_id(&parsed.headers, fallback_key);
    let from = extract_from(&parsed.headers)?;
    let subject = find_header(&parsed.headers, "subject").unwrap_or_default();
    let received = extract_received(&parsed.headers, &id);
    let body = extract_body(&parsed);

    debug!("Parsed message {} from {}", id, from.address);

    Ok(AckMessage {
        id,
        from,
        subject,
        received,
        body,
    })
}

fn find_header(headers: &[mailparse::MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(mailparse::MailHeader::get_value)
}

fn extract_message_id(headers: &[mailparse::MailHeader], fallback_key: &str) -> MessageId {
    find_header(headers, "message-id")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map_or_else(|| MessageId::synthetic(fallback_key), MessageId::new)
}

fn extract_from(headers: &[mailparse::MailHeader]) -> Result<EmailAddress> {
    let from_header =
        find_header(headers, "from").ok_or_else(|| AckError::MissingHeader("From".into()))?;

    EmailAddress::parse(&from_header).ok_or_else(|| AckError::InvalidHeader {
        header: "From".into(),
        details: format!("Could not parse: {from_header}"),
    })
}

// The calendar day is taken in the sender's own offset
fn extract_received(headers: &[mailparse::MailHeader], id: &MessageId) -> NaiveDate {
    let parsed = find_header(headers, "date")
        .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
        .map(|dt| dt.date_naive());

    parsed.unwrap_or_else(|| {
        warn!("Message {id} has no usable Date header, using today's date");
        Local::now().date_naive()
    })
}

fn extract_body(parsed: &mailparse::ParsedMail) -> String {
    let mut text = None;
    let mut html = None;
    collect_text_parts(parsed, &mut text, &mut html);

    text.filter(|body: &String| !body.trim().is_empty())
        .or_else(|| html.map(|h| strip_html(&h)))
        .unwrap_or_default()
}

/// Depth-first walk keeping the first plain text leaf and the first HTML leaf
fn collect_text_parts(
    part: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) {
    if !part.subparts.is_empty() {
        for subpart in &part.subparts {
            collect_text_parts(subpart, text, html);
        }
        return;
    }

    let mimetype = part.ctype.mimetype.to_lowercase();
    let slot = if mimetype == "text/html" {
        html
    } else if mimetype.starts_with("text/") {
        text
    } else {
        return;
    };

    if slot.is_none()
        && let Ok(body) = part.get_body()
    {
        *slot = Some(body);
    }
}

/// Reduce an HTML body to text, keeping table cells tab-separated
/// so the ebook price table survives
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut tag = String::new();
    let mut in_tag = false;
    let mut skipping = false;

    for c in html.chars() {
        if !in_tag && c == '<' {
            in_tag = true;
            tag.clear();
        } else if in_tag && c == '>' {
            in_tag = false;
            let name = tag.trim().to_lowercase();

            if name.starts_with("script") || name.starts_with("style") {
                skipping = true;
            } else if name.starts_with("/script") || name.starts_with("/style") {
                skipping = false;
            } else if name.starts_with("br")
                || name.starts_with("/p")
                || name.starts_with("/div")
                || name.starts_with("/tr")
                || name.starts_with("/li")
                || name.starts_with("/h")
            {
                result.push('\n');
            } else if name.starts_with("/td") || name.starts_with("/th") {
                result.push('\t');
            }
        } else if in_tag {
            tag.push(c);
        } else if !skipping {
            result.push(c);
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
