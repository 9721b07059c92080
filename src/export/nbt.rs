//! Writer for the big-endian named-binary-tag container format.
//!
//! Only encoding exists here; nothing in this crate ever reads the format
//! back. Compounds keep insertion order so emitted containers are
//! byte-deterministic.

/// One tag payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    /// Homogeneous list; the element kind is taken from the first element.
    List(Vec<Tag>),
    /// Named children in insertion order.
    Compound(Vec<(String, Tag)>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// Wire type id of this tag.
    fn kind(&self) -> u8 {
        match self {
            Tag::Byte(_) => 1,
            Tag::Short(_) => 2,
            Tag::Int(_) => 3,
            Tag::Long(_) => 4,
            Tag::Float(_) => 5,
            Tag::Double(_) => 6,
            Tag::ByteArray(_) => 7,
            Tag::String(_) => 8,
            Tag::List(_) => 9,
            Tag::Compound(_) => 10,
            Tag::IntArray(_) => 11,
            Tag::LongArray(_) => 12,
        }
    }

    fn write_payload(&self, out: &mut Vec<u8>) {
        match self {
            Tag::Byte(v) => out.push(*v as u8),
            Tag::Short(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::Double(v) => out.extend_from_slice(&v.to_be_bytes()),
            Tag::ByteArray(v) => {
                out.extend_from_slice(&(v.len() as i32).to_be_bytes());
                out.extend(v.iter().map(|b| *b as u8));
            }
            Tag::String(v) => write_str(out, v),
            Tag::List(items) => {
                // An empty list carries the End kind.
                out.push(items.first().map(Tag::kind).unwrap_or(0));
                out.extend_from_slice(&(items.len() as i32).to_be_bytes());
                for item in items {
                    item.write_payload(out);
                }
            }
            Tag::Compound(fields) => {
                for (name, tag) in fields {
                    out.push(tag.kind());
                    write_str(out, name);
                    tag.write_payload(out);
                }
                out.push(0); // TAG_End
            }
            Tag::IntArray(v) => {
                out.extend_from_slice(&(v.len() as i32).to_be_bytes());
                for item in v {
                    out.extend_from_slice(&item.to_be_bytes());
                }
            }
            Tag::LongArray(v) => {
                out.extend_from_slice(&(v.len() as i32).to_be_bytes());
                for item in v {
                    out.extend_from_slice(&item.to_be_bytes());
                }
            }
        }
    }
}

/// Length-prefixed string, as used for both tag names and string payloads.
fn write_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Serialize `fields` as the file's unnamed root compound.
pub fn write_root(fields: Vec<(String, Tag)>) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(10); // the root of a container is always a compound
    write_str(&mut out, "");
    Tag::Compound(fields).write_payload(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(tag: Tag) -> Vec<u8> {
        let mut out = Vec::new();
        tag.write_payload(&mut out);
        out
    }

    #[test]
    fn test_scalar_payloads() {
        assert_eq!(payload(Tag::Byte(-1)), vec![0xff]);
        assert_eq!(payload(Tag::Short(2)), vec![0x00, 0x02]);
        assert_eq!(payload(Tag::Int(3465)), vec![0x00, 0x00, 0x0d, 0x89]);
        assert_eq!(
            payload(Tag::Long(1)),
            vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]
        );
        assert_eq!(payload(Tag::Float(1.0)), vec![0x3f, 0x80, 0x00, 0x00]);
        assert_eq!(
            payload(Tag::Double(1.0)),
            vec![0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_string_payload() {
        assert_eq!(
            payload(Tag::String("ab".to_string())),
            vec![0x00, 0x02, b'a', b'b']
        );
    }

    #[test]
    fn test_array_payloads() {
        assert_eq!(
            payload(Tag::ByteArray(vec![0, -1])),
            vec![0x00, 0x00, 0x00, 0x02, 0x00, 0xff]
        );
        assert_eq!(
            payload(Tag::IntArray(vec![1])),
            vec![0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01]
        );
        assert_eq!(
            payload(Tag::LongArray(vec![1])),
            vec![
                0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01
            ]
        );
    }

    #[test]
    fn test_list_payload() {
        assert_eq!(
            payload(Tag::List(vec![Tag::Short(1), Tag::Short(2)])),
            vec![0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x02]
        );
        // Empty lists carry the End kind.
        assert_eq!(
            payload(Tag::List(Vec::new())),
            vec![0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_compound_keeps_insertion_order() {
        let compound = Tag::Compound(vec![
            ("b".to_string(), Tag::Byte(1)),
            ("a".to_string(), Tag::Byte(2)),
        ]);
        assert_eq!(
            payload(compound),
            vec![
                0x01, 0x00, 0x01, b'b', 0x01, // named byte "b"
                0x01, 0x00, 0x01, b'a', 0x02, // named byte "a"
                0x00, // end
            ]
        );
    }

    #[test]
    fn test_root_framing() {
        let bytes = write_root(vec![("V".to_string(), Tag::Int(2))]);
        assert_eq!(
            bytes,
            vec![
                0x0a, 0x00, 0x00, // unnamed root compound
                0x03, 0x00, 0x01, b'V', 0x00, 0x00, 0x00, 0x02, // named int "V"
                0x00, // end
            ]
        );
    }
}
