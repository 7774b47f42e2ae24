//! XML parser for SafeInCloud export files.
//!
//! Walks the document with quick-xml events, handling:
//! - `<card>` elements at any depth (exports nest cards under folder nodes)
//! - `<field>` elements at any depth under an open card
//! - `<label>` elements anywhere under the root
//! - `label_id` as either a card attribute or a nested `<label_id>` element
//!   (both schema variants exist in the wild; the nested element wins)
//! - field text taken verbatim — edge whitespace in a value survives

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::str;

use super::error::{ImportError, ImportResult};
use super::types::{Card, Database, Field, Label};

/// Parse a SafeInCloud export from a string. Malformed XML is fatal; no
/// partial-card recovery is attempted.
pub fn parse_database(xml_content: &str) -> ImportResult<Database> {
    let mut reader = Reader::from_str(xml_content);

    let mut db = Database::default();
    let mut card: Option<Card> = None;
    let mut field: Option<Field> = None;
    let mut in_label_id = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name();
                let tag_name = str::from_utf8(name_bytes.as_ref())
                    .map_err(|_| ImportError::XmlParse("Invalid UTF-8 in tag name".into()))?;

                match tag_name {
                    "card" => {
                        // Cards never nest in practice, but stay deterministic
                        // if an export does it anyway.
                        if let Some(open) = card.take() {
                            db.cards.push(open);
                        }
                        card = Some(parse_card_element(e)?);
                    }
                    "field" if card.is_some() => {
                        field = Some(parse_field_element(e)?);
                    }
                    "label" => {
                        db.labels.push(parse_label_element(e)?);
                    }
                    "label_id" if card.is_some() => {
                        in_label_id = true;
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name();
                let tag_name = str::from_utf8(name_bytes.as_ref())
                    .map_err(|_| ImportError::XmlParse("Invalid UTF-8 in tag name".into()))?;

                match tag_name {
                    "card" => {
                        // Self-closing card: no fields, goes straight in
                        db.cards.push(parse_card_element(e)?);
                    }
                    "field" => {
                        // Self-closing field: present but valueless
                        if let Some(c) = card.as_mut() {
                            c.fields.push(parse_field_element(e)?);
                        }
                    }
                    "label" => {
                        db.labels.push(parse_label_element(e)?);
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| ImportError::XmlParse(e.to_string()))?;
                if let Some(f) = field.as_mut() {
                    // Verbatim: padding in a secret is part of the secret.
                    match f.value.as_mut() {
                        Some(v) => v.push_str(&text),
                        None => f.value = Some(text.into_owned()),
                    }
                } else if in_label_id {
                    let id = text.trim();
                    if !id.is_empty() {
                        if let Some(c) = card.as_mut() {
                            c.label_id = Some(id.to_string());
                        }
                    }
                }
                // Anything else is indentation between elements
            }
            Ok(Event::End(ref e)) => {
                let name_bytes = e.name();
                let tag_name = str::from_utf8(name_bytes.as_ref())
                    .map_err(|_| ImportError::XmlParse("Invalid UTF-8 in tag name".into()))?;

                match tag_name {
                    "card" => {
                        if let Some(c) = card.take() {
                            db.cards.push(c);
                        }
                    }
                    "field" => {
                        if let (Some(c), Some(f)) = (card.as_mut(), field.take()) {
                            c.fields.push(f);
                        }
                    }
                    "label_id" => {
                        in_label_id = false;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ImportError::XmlParse(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(db)
}

/// Parse `<card>` element attributes. Every attribute is optional; missing
/// booleans default to false.
fn parse_card_element(e: &BytesStart) -> ImportResult<Card> {
    let mut card = Card::default();
    for attr in e.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let val = attr
            .unescape_value()
            .map_err(|e| ImportError::XmlParse(e.to_string()))?;

        match key {
            "title" => card.title = val.to_string(),
            "symbol" => card.symbol = Some(val.to_string()),
            "template" => card.template = parse_bool(&val),
            "deleted" => card.deleted = parse_bool(&val),
            "label_id" => card.label_id = Some(val.to_string()),
            "notes" => card.notes = Some(val.to_string()),
            _ => {}
        }
    }
    Ok(card)
}

/// Parse `<field>` element attributes; the value comes from the element's
/// text content, so it starts out as None here.
fn parse_field_element(e: &BytesStart) -> ImportResult<Field> {
    let mut name = String::new();
    let mut kind = String::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let val = attr
            .unescape_value()
            .map_err(|e| ImportError::XmlParse(e.to_string()))?;

        match key {
            "name" => name = val.to_string(),
            "type" => kind = val.to_string(),
            _ => {}
        }
    }
    Ok(Field { name, kind, value: None })
}

/// Parse `<label>` element attributes.
fn parse_label_element(e: &BytesStart) -> ImportResult<Label> {
    let mut id = String::new();
    let mut name = String::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let val = attr
            .unescape_value()
            .map_err(|e| ImportError::XmlParse(e.to_string()))?;

        match key {
            "id" => id = val.to_string(),
            "name" => name = val.to_string(),
            _ => {}
        }
    }
    Ok(Label { id, name })
}

/// Strict boolean conversion for XML attribute strings: only the literals
/// "true"/"True" are true, everything else (including absence) is false.
/// Deliberately not a generic truthiness rule.
pub fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "True")
}
