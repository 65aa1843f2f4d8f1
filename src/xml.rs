//! XML rendering of a [`Record`].
//!
//! Element names use snake case and scalar metadata such as ids, counts and
//! humanized sizes is written as attributes, so the document shape differs
//! from the JSON one:
//!
//! ```text
//! <Record id="SAUCE" version="00">
//!   <date epoch="1480118400"><value>20161126</value><date>2016-11-26T00:00:00Z</date></date>
//!   <type_info><type1 type="character width"><value>977</value></type1>...</type_info>
//!   <comments id="COMNT" count="1"><line>...</line></comments>
//! </Record>
//! ```

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::comment::Comment;
use crate::date::Dates;
use crate::filetype::{Info, Infos};
use crate::flags::{AnsiFlags, FlagField};
use crate::record::{Record, Sizes};

type XmlResult = quick_xml::Result<()>;

/// Render `record`.  A non-empty `indent` puts every element on its own line,
/// nested by repeats of its first character, `indent.len()` per level.
pub(crate) fn to_vec(record: &Record, indent: &str) -> quick_xml::Result<Vec<u8>> {
    let writer = match indent.as_bytes().first() {
        Some(&c) => Writer::new_with_indent(Vec::new(), c, indent.len()),
        None     => Writer::new(Vec::new()),
    };
    let mut out = XmlOut { writer };
    out.record(record)?;
    Ok(out.writer.into_inner())
}

struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
        let mut tag = BytesStart::new(name);
        for &attr in attrs {
            tag.push_attribute(attr);
        }
        self.writer.write_event(Event::Start(tag))
    }

    fn end(&mut self, name: &str) -> XmlResult {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    /// Text content; also keeps an empty element on one line.
    fn text(&mut self, value: &str) -> XmlResult {
        self.writer.write_event(Event::Text(BytesText::new(value)))
    }

    fn element(&mut self, name: &str, attrs: &[(&str, &str)], value: &str) -> XmlResult {
        self.start(name, attrs)?;
        self.text(value)?;
        self.end(name)
    }

    fn record(&mut self, r: &Record) -> XmlResult {
        self.start("Record", &[("id", r.id.as_str()), ("version", r.version.as_str())])?;
        self.element("title", &[], &r.title)?;
        self.element("author", &[], &r.author)?;
        self.element("group", &[], &r.group)?;
        self.date(&r.date)?;
        self.sizes(&r.file_size)?;
        self.kind("data_type", r.data.kind, &r.data.name)?;
        self.kind("file_type", r.file.kind, &r.file.name)?;
        self.infos(&r.info)?;
        self.comments(&r.comment)?;
        self.end("Record")
    }

    fn date(&mut self, d: &Dates) -> XmlResult {
        let epoch = d.epoch.to_string();
        self.start("date", &[("epoch", epoch.as_str())])?;
        self.element("value", &[], &d.value)?;
        self.element("date", &[], &d.iso())?;
        self.end("date")
    }

    fn sizes(&mut self, s: &Sizes) -> XmlResult {
        self.start("filesize", &[("decimal", s.decimal.as_str()), ("binary", s.binary.as_str())])?;
        self.element("bytes", &[], &s.bytes.to_string())?;
        self.end("filesize")
    }

    fn kind(&mut self, name: &str, kind: u8, label: &str) -> XmlResult {
        self.start(name, &[])?;
        self.element("type", &[], &kind.to_string())?;
        self.element("name", &[], label)?;
        self.end(name)
    }

    fn infos(&mut self, i: &Infos) -> XmlResult {
        self.start("type_info", &[])?;
        self.info("type1", &i.info1)?;
        self.info("type2", &i.info2)?;
        self.info("type3", &i.info3)?;
        self.flags(&i.flags)?;
        self.element("fontname", &[], &i.font)?;
        self.end("type_info")
    }

    fn info(&mut self, name: &str, i: &Info) -> XmlResult {
        self.start(name, &[("type", i.info.as_str())])?;
        self.element("value", &[], &i.value.to_string())?;
        self.end(name)
    }

    fn flags(&mut self, f: &AnsiFlags) -> XmlResult {
        let decimal = f.decimal.to_string();
        self.start("flags", &[("decimal", decimal.as_str()), ("binary", f.binary.as_str())])?;
        self.flag("non_blink_mode", &f.non_blink)?;
        self.flag("letter_spacing", &f.letter_spacing)?;
        self.flag("aspect_ratio", &f.aspect_ratio)?;
        self.end("flags")
    }

    fn flag(&mut self, name: &str, f: &FlagField) -> XmlResult {
        self.start(name, &[("interpretation", f.info.as_str())])?;
        self.element("flag", &[], &f.flag)?;
        self.end(name)
    }

    fn comments(&mut self, c: &Comment) -> XmlResult {
        let count = c.count.to_string();
        self.start("comments", &[("id", c.id.as_str()), ("count", count.as_str())])?;
        if c.comment.is_empty() {
            self.text("")?;
        }
        for line in &c.comment {
            self.element("line", &[], line)?;
        }
        self.end("comments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let xml = to_vec(&Record::default(), "").unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.starts_with(r#"<Record id="" version=""><title></title>"#));
        assert!(xml.contains(r#"<date epoch="0"><value></value><date>0001-01-01T00:00:00Z</date></date>"#));
        assert!(xml.ends_with(r#"<comments id="" count="0"></comments></Record>"#));
    }

    #[test]
    fn test_indent_keeps_empty_elements_inline() {
        let xml = String::from_utf8(to_vec(&Record::default(), "\t").unwrap()).unwrap();
        assert!(xml.starts_with("<Record id=\"\" version=\"\">\n\t<title></title>\n"));
        assert!(xml.ends_with("\n\t<comments id=\"\" count=\"0\"></comments>\n</Record>"));
    }

    #[test]
    fn test_escapes_text() {
        let rec = Record { title: "<Fish & Chips>".into(), ..Record::default() };
        let xml = String::from_utf8(to_vec(&rec, "").unwrap()).unwrap();
        assert!(xml.contains("<title>&lt;Fish &amp; Chips&gt;</title>"));
    }
}
