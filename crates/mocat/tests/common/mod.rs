//! Test helper for assembling binary message catalogs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Header used by most fixtures: three plural forms, the third for 2..=4.
pub const THREE_FORM_HEADER: &str = "Project-Id-Version: test 1.0\n\
    Language: de\n\
    Content-Type: text/plain; charset=UTF-8\n\
    Plural-Forms: nplurals=3; plural=n==1 ? 0 : n>=2 && n<=4 ? 2 : 1;\n";

/// Builds `.mo` bytes entry by entry.
pub struct MoBuilder {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    big_endian: bool,
    major: u16,
    minor: u16,
}

impl MoBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            big_endian: false,
            major: 0,
            minor: 0,
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    pub fn version(mut self, major: u16, minor: u16) -> Self {
        self.major = major;
        self.minor = minor;
        self
    }

    /// Add the metadata entry (translation of the empty message).
    pub fn header(self, text: &str) -> Self {
        self.raw(b"", text.as_bytes())
    }

    pub fn singular(self, msg: &str, translation: &str) -> Self {
        self.raw(msg.as_bytes(), translation.as_bytes())
    }

    pub fn plural(self, singular: &str, plural: &str, variants: &[&str]) -> Self {
        let original = [singular.as_bytes(), plural.as_bytes()].join(&0u8);
        let translation = variants
            .iter()
            .map(|v| v.as_bytes())
            .collect::<Vec<_>>()
            .join(&0u8);
        self.raw(&original, &translation)
    }

    pub fn raw(mut self, original: &[u8], translation: &[u8]) -> Self {
        self.entries.push((original.to_vec(), translation.to_vec()));
        self
    }

    /// The standard fixture: one singular entry, one three-form plural entry.
    pub fn standard() -> Self {
        Self::new()
            .header(THREE_FORM_HEADER)
            .singular("Message", "Translated Message")
            .plural(
                "Singular",
                "Plural",
                &[
                    "Translated Singular",
                    "Translated Plural",
                    "Translated Second Plural",
                ],
            )
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.entries.len() as u32;
        let originals_offset = 20u32;
        let translations_offset = originals_offset + 8 * count;
        let mut strings_offset = translations_offset + 8 * count;

        let mut originals = Vec::new();
        let mut translations = Vec::new();
        let mut strings = Vec::new();
        for (original, _) in &self.entries {
            originals.push((original.len() as u32, strings_offset));
            strings.extend_from_slice(original);
            strings.push(0);
            strings_offset += original.len() as u32 + 1;
        }
        for (_, translation) in &self.entries {
            translations.push((translation.len() as u32, strings_offset));
            strings.extend_from_slice(translation);
            strings.push(0);
            strings_offset += translation.len() as u32 + 1;
        }

        let mut out = Vec::new();
        if self.big_endian {
            out.extend_from_slice(&[0x95, 0x04, 0x12, 0xde]);
        } else {
            out.extend_from_slice(&[0xde, 0x12, 0x04, 0x95]);
        }
        self.put_u16(&mut out, self.major);
        self.put_u16(&mut out, self.minor);
        self.put_u32(&mut out, count);
        self.put_u32(&mut out, originals_offset);
        self.put_u32(&mut out, translations_offset);
        for (length, offset) in originals.into_iter().chain(translations) {
            self.put_u32(&mut out, length);
            self.put_u32(&mut out, offset);
        }
        out.extend_from_slice(&strings);
        out
    }

    /// Write the catalog to `<base_dir>/<locale>/LC_MESSAGES/<domain>.mo`.
    pub fn write_to(&self, base_dir: &Path, domain: &str, locale: &str) -> PathBuf {
        let dir = base_dir.join(locale).join("LC_MESSAGES");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{domain}.mo"));
        fs::write(&path, self.build()).unwrap();
        path
    }

    fn put_u16(&self, out: &mut Vec<u8>, value: u16) {
        if self.big_endian {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn put_u32(&self, out: &mut Vec<u8>, value: u32) {
        if self.big_endian {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}
