//! ODF manifest parsing functionality.
//!
//! The manifest.xml file lists every member of the ODF package and, for
//! encrypted members, the cryptographic parameters used to protect them. The
//! encryption parameters live on elements that *follow* the member's
//! `manifest:file-entry`, so the manifest is kept as a flat element list in
//! document order rather than as a tree.

use crate::common::{ContainerError, Result};
use crate::odf::elements::namespace::QualifiedName;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

/// One element of the manifest with its resolved attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestElement {
    pub name: QualifiedName,
    pub attributes: Vec<(QualifiedName, String)>,
}

impl ManifestElement {
    /// Look up an attribute value by namespace URI and local name
    pub fn get(&self, uri: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name.is(uri, local_name))
            .map(|(_, value)| value.as_str())
    }
}

/// ODF manifest (META-INF/manifest.xml)
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    elements: Vec<ManifestElement>,
}

impl Manifest {
    /// Parse manifest XML content.
    ///
    /// Elements are recorded in depth-first pre-order, which is the order in
    /// which their start tags appear in the document.
    pub fn parse(xml_content: &[u8]) -> Result<Self> {
        let mut reader = NsReader::from_reader(xml_content);
        let mut buf = Vec::new();
        let mut elements = Vec::new();
        let mut depth = 0usize;

        loop {
            let (ns, event) = reader
                .read_resolved_event_into(&mut buf)
                .map_err(ContainerError::from)?;
            let namespace_uri = resolved_uri(ns);

            match event {
                Event::Start(ref e) => {
                    elements.push(Self::parse_element(&reader, namespace_uri, e)?);
                    depth += 1;
                },
                Event::Empty(ref e) => {
                    elements.push(Self::parse_element(&reader, namespace_uri, e)?);
                },
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        if depth != 0 {
            return Err(ContainerError::ManifestUnreadable("unexpected end of document".to_string()).into());
        }
        if elements.is_empty() {
            return Err(ContainerError::ManifestUnreadable("no root element".to_string()).into());
        }

        tracing::debug!(elements = elements.len(), "parsed manifest");
        Ok(Self { elements })
    }

    /// Parse a single element with its attributes
    fn parse_element(
        reader: &NsReader<&[u8]>,
        namespace_uri: Option<String>,
        e: &BytesStart,
    ) -> Result<ManifestElement> {
        let local_name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|err| {
                ContainerError::ManifestUnreadable(format!("invalid attribute in manifest: {}", err))
            })?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }

            let (ns, local) = reader.resolver().resolve_attribute(attr.key);
            let name = QualifiedName::new(
                resolved_uri(ns),
                String::from_utf8_lossy(local.as_ref()).into_owned(),
            );
            // Named and numeric character references are both expanded.
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(ContainerError::from)?;
            attributes.push((name, value.into_owned()));
        }

        Ok(ManifestElement {
            name: QualifiedName::new(namespace_uri, local_name),
            attributes,
        })
    }

    /// All elements in document order
    pub fn elements(&self) -> &[ManifestElement] {
        &self.elements
    }
}

fn resolved_uri(ns: ResolveResult<'_>) -> Option<String> {
    match ns {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        _ => None,
    }
}
