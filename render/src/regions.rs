//! Render regions: the clear-then-append HTML sinks.

use crate::error::Result;
use crate::fragments::{route_document, FragmentKind};
use crate::prefixes::PrefixTable;

/// The four render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Styled namespace header.
    Header,
    /// Navigation block.
    Navigation,
    /// Entity content.
    Content,
    /// Detail annotations (filled by the demux pipeline).
    Details,
}

/// HTML accumulators for the four regions.
///
/// A render cycle starts from cleared regions — either a fresh map or an
/// explicit [`RegionMap::clear`] — and appends within the cycle. Stale
/// content from an earlier cycle never survives into the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    header: String,
    navigation: String,
    content: String,
    details: String,
}

impl RegionMap {
    /// Empties every region.
    pub fn clear(&mut self) {
        self.header.clear();
        self.navigation.clear();
        self.content.clear();
        self.details.clear();
    }

    /// Appends `html` to `region`.
    pub fn append(&mut self, region: Region, html: &str) {
        self.slot_mut(region).push_str(html);
    }

    /// Current HTML of `region`.
    #[must_use]
    pub fn get(&self, region: Region) -> &str {
        match region {
            Region::Header => &self.header,
            Region::Navigation => &self.navigation,
            Region::Content => &self.content,
            Region::Details => &self.details,
        }
    }

    /// True when every region is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.navigation.is_empty()
            && self.content.is_empty()
            && self.details.is_empty()
    }

    fn slot_mut(&mut self, region: Region) -> &mut String {
        match region {
            Region::Header => &mut self.header,
            Region::Navigation => &mut self.navigation,
            Region::Content => &mut self.content,
            Region::Details => &mut self.details,
        }
    }
}

/// Runs one simple-pipeline render cycle.
///
/// Starts from fresh regions, routes the document, and appends each
/// fragment to the region its kind targets: prefix → header, navigation →
/// navigation, content → content.
///
/// # Errors
///
/// Propagates routing errors ([`crate::RenderError`]); on error nothing is
/// rendered — the caller keeps its previous regions.
pub fn render_document(doc: &str, prefixes: &PrefixTable) -> Result<RegionMap> {
    let mut regions = RegionMap::default();
    for fragment in route_document(doc, prefixes)? {
        let region = match fragment.kind {
            FragmentKind::Prefix => Region::Header,
            FragmentKind::Navigation => Region::Navigation,
            FragmentKind::Content => Region::Content,
        };
        regions.append(region, &fragment.html);
    }
    Ok(regions)
}
