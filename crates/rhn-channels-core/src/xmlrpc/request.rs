use quick_xml::escape::escape;

use super::value::Value;

/// Builder for one `<methodCall>` document.
#[derive(Debug, Clone)]
pub struct MethodCall {
    method: String,
    params: Vec<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    /// Append a positional parameter.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Render the call as an XML document ready to POST.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<methodCall><methodName>");
        xml.push_str(&escape(self.method.as_str()));
        xml.push_str("</methodName><params>");
        for param in &self.params {
            xml.push_str("<param>");
            write_value(&mut xml, param);
            xml.push_str("</param>");
        }
        xml.push_str("</params></methodCall>");
        xml
    }
}

fn write_value(xml: &mut String, value: &Value) {
    xml.push_str("<value>");
    match value {
        Value::Int(i) => {
            xml.push_str("<int>");
            xml.push_str(&i.to_string());
            xml.push_str("</int>");
        }
        Value::Bool(b) => {
            xml.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::String(s) => {
            xml.push_str("<string>");
            xml.push_str(&escape(s.as_str()));
            xml.push_str("</string>");
        }
        Value::Double(d) => {
            xml.push_str("<double>");
            xml.push_str(&d.to_string());
            xml.push_str("</double>");
        }
        Value::DateTime(s) => {
            xml.push_str("<dateTime.iso8601>");
            xml.push_str(&escape(s.as_str()));
            xml.push_str("</dateTime.iso8601>");
        }
        Value::Base64(s) => {
            xml.push_str("<base64>");
            xml.push_str(&escape(s.as_str()));
            xml.push_str("</base64>");
        }
        Value::Array(items) => {
            xml.push_str("<array><data>");
            for item in items {
                write_value(xml, item);
            }
            xml.push_str("</data></array>");
        }
        Value::Struct(members) => {
            xml.push_str("<struct>");
            for (name, member) in members {
                xml.push_str("<member><name>");
                xml.push_str(&escape(name.as_str()));
                xml.push_str("</name>");
                write_value(xml, member);
                xml.push_str("</member>");
            }
            xml.push_str("</struct>");
        }
        Value::Nil => xml.push_str("<nil/>"),
    }
    xml.push_str("</value>");
}
