//! `<methodResponse>` decoding
//!
//! The RHN endpoint answers every call with either a single `<param>` value
//! or a `<fault>` struct carrying `faultCode` and `faultString`.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, RhnError};

use super::value::Value;

/// Decode a `<methodResponse>` document into its single return value.
///
/// A `<fault>` becomes [`RhnError::Fault`]; anything structurally unexpected
/// becomes [`RhnError::MalformedResponse`].
pub fn parse_response(xml: &str) -> Result<Value> {
    let mut parser = Parser::new(xml);
    parser.expect_start(b"methodResponse")?;
    match parser.next_event()? {
        Event::Start(e) if e.name().as_ref() == b"params" => {
            parser.expect_start(b"param")?;
            let value = parser.parse_value()?;
            parser.expect_end(b"param")?;
            parser.expect_end(b"params")?;
            parser.expect_end(b"methodResponse")?;
            Ok(value)
        }
        Event::Start(e) if e.name().as_ref() == b"fault" => {
            let value = parser.parse_value()?;
            parser.expect_end(b"fault")?;
            let code = value
                .get("faultCode")
                .and_then(Value::as_i32)
                .ok_or_else(|| malformed("fault without an integer faultCode"))?;
            let message = value
                .get("faultString")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Err(RhnError::Fault { code, message })
        }
        other => Err(unexpected("<params> or <fault>", &other)),
    }
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> Parser<'a> {
    fn new(xml: &'a str) -> Self {
        Self {
            reader: Reader::from_str(xml),
        }
    }

    /// Next structural event, skipping declarations, comments and
    /// inter-element whitespace.
    fn next_event(&mut self) -> Result<Event<'a>> {
        loop {
            match self.reader.read_event()? {
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Text(t) => {
                    if !t.as_ref().iter().all(|b| b.is_ascii_whitespace()) {
                        return Ok(Event::Text(t));
                    }
                }
                event => return Ok(event),
            }
        }
    }

    fn expect_start(&mut self, tag: &[u8]) -> Result<()> {
        match self.next_event()? {
            Event::Start(e) if e.name().as_ref() == tag => Ok(()),
            other => Err(unexpected(
                &format!("<{}>", String::from_utf8_lossy(tag)),
                &other,
            )),
        }
    }

    fn expect_end(&mut self, tag: &[u8]) -> Result<()> {
        match self.next_event()? {
            Event::End(e) if e.name().as_ref() == tag => Ok(()),
            other => Err(unexpected(
                &format!("</{}>", String::from_utf8_lossy(tag)),
                &other,
            )),
        }
    }

    /// Accumulated character data up to the closing tag.
    fn read_text(&mut self, tag: &[u8]) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
                Event::End(e) if e.name().as_ref() == tag => return Ok(text),
                other => {
                    return Err(unexpected(
                        &format!("character data in <{}>", String::from_utf8_lossy(tag)),
                        &other,
                    ))
                }
            }
        }
    }

    /// A full `<value>...</value>` element.
    fn parse_value(&mut self) -> Result<Value> {
        match self.next_event()? {
            Event::Start(e) if e.name().as_ref() == b"value" => self.parse_value_body(),
            Event::Empty(e) if e.name().as_ref() == b"value" => Ok(Value::String(String::new())),
            other => Err(unexpected("<value>", &other)),
        }
    }

    /// Body of a `<value>` whose opening tag is already consumed.
    fn parse_value_body(&mut self) -> Result<Value> {
        match self.next_event()? {
            // untyped value: bare text is a string
            Event::Text(t) => {
                let text = t.unescape()?.into_owned();
                self.expect_end(b"value")?;
                Ok(Value::String(text))
            }
            Event::End(e) if e.name().as_ref() == b"value" => Ok(Value::String(String::new())),
            Event::Start(e) => {
                let value = match e.name().as_ref() {
                    b"string" => Value::String(self.read_text(b"string")?),
                    b"int" => Value::Int(self.parse_int(b"int")?),
                    b"i4" => Value::Int(self.parse_int(b"i4")?),
                    b"boolean" => {
                        let text = self.read_text(b"boolean")?;
                        Value::Bool(text.trim() == "1")
                    }
                    b"double" => {
                        let text = self.read_text(b"double")?;
                        let parsed = text
                            .trim()
                            .parse()
                            .map_err(|_| malformed(format!("invalid double: {text:?}")))?;
                        Value::Double(parsed)
                    }
                    b"dateTime.iso8601" => Value::DateTime(self.read_text(b"dateTime.iso8601")?),
                    b"base64" => Value::Base64(self.read_text(b"base64")?),
                    b"nil" => {
                        self.expect_end(b"nil")?;
                        Value::Nil
                    }
                    b"array" => self.parse_array()?,
                    b"struct" => self.parse_struct()?,
                    name => {
                        return Err(malformed(format!(
                            "unknown value type <{}>",
                            String::from_utf8_lossy(name)
                        )))
                    }
                };
                self.expect_end(b"value")?;
                Ok(value)
            }
            Event::Empty(e) => {
                let value = match e.name().as_ref() {
                    b"string" => Value::String(String::new()),
                    b"base64" => Value::Base64(String::new()),
                    b"nil" => Value::Nil,
                    name => {
                        return Err(malformed(format!(
                            "unknown empty value type <{}/>",
                            String::from_utf8_lossy(name)
                        )))
                    }
                };
                self.expect_end(b"value")?;
                Ok(value)
            }
            other => Err(unexpected("a typed value", &other)),
        }
    }

    fn parse_int(&mut self, tag: &[u8]) -> Result<i32> {
        let text = self.read_text(tag)?;
        text.trim()
            .parse()
            .map_err(|_| malformed(format!("invalid integer: {text:?}")))
    }

    fn parse_array(&mut self) -> Result<Value> {
        match self.next_event()? {
            Event::Start(e) if e.name().as_ref() == b"data" => {}
            Event::Empty(e) if e.name().as_ref() == b"data" => {
                self.expect_end(b"array")?;
                return Ok(Value::Array(Vec::new()));
            }
            other => return Err(unexpected("<data>", &other)),
        }
        let mut items = Vec::new();
        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"value" => {
                    items.push(self.parse_value_body()?);
                }
                Event::Empty(e) if e.name().as_ref() == b"value" => {
                    items.push(Value::String(String::new()));
                }
                Event::End(e) if e.name().as_ref() == b"data" => break,
                other => return Err(unexpected("<value> or </data>", &other)),
            }
        }
        self.expect_end(b"array")?;
        Ok(Value::Array(items))
    }

    fn parse_struct(&mut self) -> Result<Value> {
        let mut members = HashMap::new();
        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"member" => {
                    self.expect_start(b"name")?;
                    let name = self.read_text(b"name")?;
                    let value = self.parse_value()?;
                    self.expect_end(b"member")?;
                    members.insert(name, value);
                }
                Event::End(e) if e.name().as_ref() == b"struct" => {
                    return Ok(Value::Struct(members))
                }
                other => return Err(unexpected("<member> or </struct>", &other)),
            }
        }
    }
}

fn malformed(message: impl Into<String>) -> RhnError {
    RhnError::MalformedResponse {
        message: message.into(),
    }
}

fn unexpected(wanted: &str, got: &Event<'_>) -> RhnError {
    malformed(format!("expected {wanted}, got {}", describe(got)))
}

fn describe(event: &Event<'_>) -> String {
    match event {
        Event::Start(e) => format!("<{}>", String::from_utf8_lossy(e.name().as_ref())),
        Event::End(e) => format!("</{}>", String::from_utf8_lossy(e.name().as_ref())),
        Event::Empty(e) => format!("<{}/>", String::from_utf8_lossy(e.name().as_ref())),
        Event::Text(_) => "text".to_string(),
        Event::Eof => "end of document".to_string(),
        _ => "unexpected markup".to_string(),
    }
}
