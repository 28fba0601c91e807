//! XML codec for license records.
//!
//! Renders [`LicenseData`] as an XML document beginning with a standard
//! declaration and parses it back losslessly. Binary content is treated as
//! a [`SignedEnvelope`] whose payload is the XML form; decoding it yields a
//! signed license that still carries the envelope bytes verbatim.
//!
//! Document shape:
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <license id="3fa85f64-5717-4562-b3fc-2c963f66afa6">
//!   <type>paid</type>
//!   <features>
//!     <feature>com.example.app</feature>
//!   </features>
//!   <instances>
//!     <instance>prod-eu-1</instance>
//!   </instances>
//!   <licensee>
//!     <field name="email">licensing@example.com</field>
//!   </licensee>
//!   <expiration>2027-01-01T00:00:00+00:00</expiration>
//!   <max-user-count>50</max-user-count>
//! </license>
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::codec::{FileContent, LicenseDecoder, LicenseSerializer, SignedEnvelope};
use crate::error::{LicenseError, Result};
use crate::license::{License, LicenseData, LicenseId, SignedLicense};

/// Codec producing and consuming the XML license form.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlCodec;

impl LicenseSerializer for XmlCodec {
    fn serialize(&self, data: &LicenseData) -> Result<String> {
        render(data)
    }
}

impl LicenseDecoder for XmlCodec {
    fn decode(&self, content: FileContent) -> Result<License> {
        match content {
            FileContent::Text(text) => parse(&text).map(License::Plain),
            FileContent::Binary(bytes) => {
                let envelope = SignedEnvelope::from_bytes(&bytes)?;
                let text = std::str::from_utf8(envelope.payload()).map_err(|e| {
                    LicenseError::Decode(format!("envelope payload is not UTF-8: {e}"))
                })?;
                let data = parse(text)?;
                Ok(License::Signed(SignedLicense::from_parts(data, bytes)))
            }
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(data: &LicenseData) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut root = BytesStart::new("license");
    root.push_attribute(("id", data.id.to_string().as_str()));
    write_event(&mut writer, Event::Start(root))?;

    write_text_element(&mut writer, "type", data.license_type.as_str())?;

    write_event(&mut writer, Event::Start(BytesStart::new("features")))?;
    for feature in &data.features {
        write_text_element(&mut writer, "feature", feature)?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("features")))?;

    write_event(&mut writer, Event::Start(BytesStart::new("instances")))?;
    for instance in &data.instance_ids {
        write_text_element(&mut writer, "instance", instance)?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("instances")))?;

    write_event(&mut writer, Event::Start(BytesStart::new("licensee")))?;
    for (name, value) in &data.licensee {
        let mut field = BytesStart::new("field");
        field.push_attribute(("name", name.as_str()));
        write_event(&mut writer, Event::Start(field))?;
        write_event(&mut writer, Event::Text(BytesText::new(value)))?;
        write_event(&mut writer, Event::End(BytesEnd::new("field")))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new("licensee")))?;

    if let Some(expiration) = &data.expiration {
        write_text_element(&mut writer, "expiration", &expiration.to_rfc3339())?;
    }
    if let Some(max) = data.max_user_count {
        write_text_element(&mut writer, "max-user-count", &max.to_string())?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("license")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| LicenseError::Serialization(e.to_string()))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| LicenseError::Serialization(e.to_string()))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(value)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))?;
    Ok(())
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn parse(text: &str) -> Result<LicenseData> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut id: Option<LicenseId> = None;
    let mut license_type = None;
    let mut features = Vec::new();
    let mut instance_ids = Vec::new();
    let mut licensee = BTreeMap::new();
    let mut expiration: Option<DateTime<Utc>> = None;
    let mut max_user_count: Option<u64> = None;

    // Leaf element whose text node is expected next, plus the pending
    // licensee field name.
    let mut leaf: Option<String> = None;
    let mut field_name: Option<String> = None;

    loop {
        match reader
            .read_event()
            .map_err(|e| LicenseError::Decode(format!("license XML: {e}")))?
        {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                match name.as_str() {
                    "license" => {
                        let value = required_attribute(&start, "id")?;
                        id = Some(LicenseId::parse(&value)?);
                    }
                    "field" => {
                        field_name = Some(required_attribute(&start, "name")?);
                        leaf = Some(name);
                    }
                    "type" | "feature" | "instance" | "expiration" | "max-user-count" => {
                        leaf = Some(name);
                    }
                    // Container elements and unknown elements carry no text
                    // of their own; unknown ones are ignored for forward
                    // compatibility.
                    _ => {}
                }
            }
            Event::Text(node) => {
                let value = node
                    .unescape()
                    .map_err(|e| LicenseError::Decode(format!("license XML: {e}")))?
                    .into_owned();
                match leaf.as_deref() {
                    Some("type") => license_type = Some(value.parse()?),
                    Some("feature") => features.push(value),
                    Some("instance") => instance_ids.push(value),
                    Some("field") => {
                        if let Some(name) = field_name.take() {
                            licensee.insert(name, value);
                        }
                    }
                    Some("expiration") => {
                        let parsed = DateTime::parse_from_rfc3339(&value).map_err(|e| {
                            LicenseError::Decode(format!("invalid expiration '{value}': {e}"))
                        })?;
                        expiration = Some(parsed.with_timezone(&Utc));
                    }
                    Some("max-user-count") => {
                        max_user_count = Some(value.parse().map_err(|e| {
                            LicenseError::Decode(format!("invalid max-user-count '{value}': {e}"))
                        })?);
                    }
                    _ => {}
                }
            }
            Event::Empty(start) => {
                // Self-closed root still carries the id attribute.
                if start.name().as_ref() == b"license" {
                    let value = required_attribute(&start, "id")?;
                    id = Some(LicenseId::parse(&value)?);
                }
            }
            Event::End(_) => leaf = None,
            Event::Eof => break,
            _ => {}
        }
    }

    let id =
        id.ok_or_else(|| LicenseError::Decode("missing <license> root or id attribute".into()))?;
    let license_type =
        license_type.ok_or_else(|| LicenseError::Decode("missing <type> element".into()))?;

    Ok(LicenseData {
        id,
        license_type,
        features,
        instance_ids,
        licensee,
        expiration,
        max_user_count,
    })
}

fn required_attribute(start: &BytesStart<'_>, name: &str) -> Result<String> {
    let attr = start
        .try_get_attribute(name)
        .map_err(|e| LicenseError::Decode(format!("license XML: {e}")))?
        .ok_or_else(|| {
            LicenseError::Decode(format!(
                "<{}> element missing '{name}' attribute",
                String::from_utf8_lossy(start.name().as_ref())
            ))
        })?;
    let value = attr
        .unescape_value()
        .map_err(|e| LicenseError::Decode(format!("license XML: {e}")))?;
    Ok(value.into_owned())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
