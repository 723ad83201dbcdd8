use std::fs;
use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::SpeechError;

/// Fixed Dat4 format version marker.
pub const DAT4_VERSION: &str = "46158765";

/// Fixed RawData payload for a combined track+speaker entry.
const COMBINED_RAW_DATA: &str = "01 00 00";
/// Fixed RawData payload for a speaker entry.
const SPEAKER_RAW_DATA: &str = "00";
/// The ntOffset field is a fixed placeholder in the rel format as shipped.
const NT_OFFSET_PLACEHOLDER: &str = "0";

/// Container linkage entry: a sequential name plus the lowercased
/// device-relative path the game resolves the container by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLink {
    pub name: String,
    pub container_hash: String,
}

/// In-memory form of the `*_speech.dat4.rel.xml` descriptor.
///
/// Assembled bottom-up from finished lists; serialization walks the lists
/// in the fixed emission order (container paths, combined-hash items,
/// speaker-hash items, container links) and never revisits the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dat4Document {
    pub container_paths: Vec<String>,
    pub combined_hashes: Vec<String>,
    pub speaker_hashes: Vec<String>,
    pub links: Vec<ContainerLink>,
}

impl Dat4Document {
    pub fn new(
        container_paths: Vec<String>,
        combined_hashes: Vec<String>,
        speaker_hashes: Vec<String>,
        links: Vec<ContainerLink>,
    ) -> Self {
        Self {
            container_paths,
            combined_hashes,
            speaker_hashes,
            links,
        }
    }

    /// Serialize to indented UTF-8 XML.
    pub fn to_xml_bytes(&self) -> Result<Vec<u8>, SpeechError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("Dat4")))?;

        let mut version = BytesStart::new("Version");
        version.push_attribute(("value", DAT4_VERSION));
        writer.write_event(Event::Empty(version))?;

        writer.write_event(Event::Start(BytesStart::new("ContainerPaths")))?;
        for path in &self.container_paths {
            write_text_element(&mut writer, "Item", path)?;
        }
        writer.write_event(Event::End(BytesEnd::new("ContainerPaths")))?;

        writer.write_event(Event::Start(BytesStart::new("Items")))?;
        for hash in &self.combined_hashes {
            write_byte_array_item(&mut writer, hash, COMBINED_RAW_DATA)?;
        }
        for hash in &self.speaker_hashes {
            write_byte_array_item(&mut writer, hash, SPEAKER_RAW_DATA)?;
        }
        for link in &self.links {
            let mut item = BytesStart::new("Item");
            item.push_attribute(("type", "Container"));
            item.push_attribute(("ntOffset", NT_OFFSET_PLACEHOLDER));
            writer.write_event(Event::Start(item))?;
            write_text_element(&mut writer, "Name", &link.name)?;
            write_text_element(&mut writer, "ContainerHash", &link.container_hash)?;
            writer.write_event(Event::End(BytesEnd::new("Item")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("Items")))?;

        writer.write_event(Event::End(BytesEnd::new("Dat4")))?;

        Ok(writer.into_inner().into_inner())
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SpeechError> {
        let bytes = self.to_xml_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<(), SpeechError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_byte_array_item(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    hash_hex: &str,
    raw_data: &str,
) -> Result<(), SpeechError> {
    let mut item = BytesStart::new("Item");
    item.push_attribute(("type", "ByteArray"));
    writer.write_event(Event::Start(item))?;
    write_text_element(writer, "Name", &format!("hash_{}", hash_hex))?;
    write_text_element(writer, "RawData", raw_data)?;
    writer.write_event(Event::End(BytesEnd::new("Item")))?;
    Ok(())
}

/// Container path as the device exposes it: `DEVICE\BASENAME`, uppercased.
pub fn container_path(device: &str, file_stem: &str) -> String {
    format!("{}\\{}", device.to_uppercase(), file_stem.to_uppercase())
}

/// Container hash string for the linkage entry: same path, lowercased.
pub fn container_hash(device: &str, file_stem: &str) -> String {
    format!("{}\\{}", device.to_lowercase(), file_stem.to_lowercase())
}
