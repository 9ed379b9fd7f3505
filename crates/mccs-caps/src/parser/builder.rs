use alloc::{borrow::Cow, collections::BTreeMap, string::String, vec::Vec};

use super::{
    Tag,
    tags::{VcpEntry, VcpNameEntry},
};
use crate::{
    DdcCiCommand, ParseError, ParseErrorKind, ParsedCapabilities, StructuralError,
    ValueDefinition, VcpCategory, VcpCommandDefinition, VcpMetadata,
};

/// Tag contents collected during one parse.
///
/// `None` means the tag has not been seen yet, which is also how duplicates
/// are detected.
#[derive(Debug, Default)]
pub(super) struct CapabilitiesBuilder<'src> {
    protocol: Option<Cow<'src, str>>,
    monitor_type: Option<Cow<'src, str>>,
    model: Option<Cow<'src, str>>,
    mccs_version: Option<Cow<'src, str>>,
    pub commands: Option<Vec<DdcCiCommand>>,
    pub vcp: Option<Vec<VcpEntry>>,
    pub vcp_names: Option<BTreeMap<u8, VcpNameEntry<'src>>>,
}

impl<'src> CapabilitiesBuilder<'src> {
    /// Whether `prot`, `type` and `model` have all been read.
    pub fn has_identification(&self) -> bool {
        self.protocol.is_some() && self.monitor_type.is_some() && self.model.is_some()
    }

    pub fn is_set(&self, tag: Tag) -> bool {
        match tag {
            Tag::Prot => self.protocol.is_some(),
            Tag::Type => self.monitor_type.is_some(),
            Tag::Model => self.model.is_some(),
            Tag::MccsVer => self.mccs_version.is_some(),
            Tag::Cmds => self.commands.is_some(),
            Tag::Vcp => self.vcp.is_some(),
            Tag::VcpName => self.vcp_names.is_some(),
        }
    }

    /// Stores the contents of a text tag. Other tags are ignored.
    pub fn set_text(&mut self, tag: Tag, text: Cow<'src, str>) {
        let slot = match tag {
            Tag::Prot => &mut self.protocol,
            Tag::Type => &mut self.monitor_type,
            Tag::Model => &mut self.model,
            Tag::MccsVer => &mut self.mccs_version,
            Tag::Cmds | Tag::Vcp | Tag::VcpName => return,
        };
        *slot = Some(text);
    }

    /// Checks the required tags and merges `vcp` with `vcpname`.
    ///
    /// `end` is the offset reported for missing tags.
    pub fn finish<M: VcpMetadata>(
        self,
        metadata: &M,
        end: usize,
    ) -> Result<ParsedCapabilities, ParseError> {
        let missing = |tag| ParseError::new(StructuralError::MissingTag(tag), end);
        let protocol = self.protocol.ok_or_else(|| missing(Tag::Prot))?;
        let monitor_type = self.monitor_type.ok_or_else(|| missing(Tag::Type))?;
        let model = self.model.ok_or_else(|| missing(Tag::Model))?;

        let entries = self.vcp.unwrap_or_default();
        let names = self.vcp_names.unwrap_or_default();

        for code in names.keys() {
            if !entries.iter().any(|entry| entry.code == *code) {
                tracing::trace!(code, "vcpname entry has no matching vcp code");
            }
        }

        let mut supported_vcp = Vec::with_capacity(entries.len());
        for VcpEntry { code, values } in entries {
            let (default_name, category) = metadata
                .lookup(code)
                .unwrap_or(("", VcpCategory::Unknown));

            let (name, value_names): (&str, &[Cow<'src, str>]) = match names.get(&code) {
                Some(entry) if entry.value_names.len() != values.len() => {
                    return Err(ParseError::new(
                        ParseErrorKind::ValueNameMismatch {
                            code,
                            names: entry.value_names.len(),
                            values: values.len(),
                        },
                        entry.offset,
                    ));
                }
                Some(entry) if !entry.name.is_empty() => {
                    (&*entry.name, entry.value_names.as_slice())
                }
                Some(entry) => (default_name, entry.value_names.as_slice()),
                None => (default_name, &[]),
            };

            let values = values
                .iter()
                .enumerate()
                .map(|(i, &value)| ValueDefinition {
                    value,
                    name: value_names.get(i).map(|name| name.clone().into_owned()),
                })
                .collect();

            supported_vcp.push(VcpCommandDefinition {
                code,
                category,
                name: String::from(name),
                values,
            });
        }

        Ok(ParsedCapabilities {
            protocol: protocol.into_owned(),
            monitor_type: monitor_type.into_owned(),
            model: model.into_owned(),
            mccs_version: self.mccs_version.map(Cow::into_owned),
            supported_commands: self.commands.unwrap_or_default(),
            supported_vcp,
        })
    }
}
