// ABOUTME: Image records and point-in-time inventory snapshots.
// ABOUTME: Validated at the engine boundary, immutable inside the core.

use super::ImageId;
use std::collections::HashMap;

/// A single image known to the engine at snapshot time.
///
/// Tags are kept in the order the engine reported them. When the engine
/// reports an untagged image, a placeholder embedding the short identity is
/// substituted so the image still has a recognizable display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    id: ImageId,
    tags: Vec<String>,
    size: Option<u64>,
}

impl ImageRecord {
    pub fn new(id: ImageId, tags: Vec<String>, size: Option<u64>) -> Self {
        let tags = if tags.is_empty() {
            vec![format!("<none>:<none> ({})", id.short())]
        } else {
            tags
        };
        Self { id, tags, size }
    }

    pub fn id(&self) -> &ImageId {
        &self.id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Size in bytes as reported by the engine, if it reported one.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Display label: all tags joined with ", ".
    pub fn label(&self) -> String {
        self.tags.join(", ")
    }
}

/// A snapshot of all images known to the engine, keyed by identity.
///
/// Captured from a single listing call. Two consecutive snapshots may race
/// with concurrent engine activity; that is accepted, not corrected.
#[derive(Debug, Clone, Default)]
pub struct ImageInventory {
    images: HashMap<ImageId, ImageRecord>,
}

impl ImageInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record with the same identity.
    pub fn insert(&mut self, record: ImageRecord) {
        self.images.insert(record.id().clone(), record);
    }

    pub fn contains(&self, id: &ImageId) -> bool {
        self.images.contains_key(id)
    }

    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.images.get(id)
    }

    pub fn records(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images.values()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl FromIterator<ImageRecord> for ImageInventory {
    fn from_iter<I: IntoIterator<Item = ImageRecord>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for record in iter {
            inventory.insert(record);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str], size: Option<u64>) -> ImageRecord {
        ImageRecord::new(
            ImageId::new(id.to_string()),
            tags.iter().map(|t| t.to_string()).collect(),
            size,
        )
    }

    #[test]
    fn untagged_image_gets_placeholder_label() {
        let rec = record("4bcff63911fcdeadbeef", &[], Some(100));
        assert_eq!(rec.label(), "<none>:<none> (4bcff63911fc)");
    }

    #[test]
    fn label_joins_tags_in_reported_order() {
        let rec = record("abc", &["app:latest", "app:v1.2"], None);
        assert_eq!(rec.label(), "app:latest, app:v1.2");
    }

    #[test]
    fn duplicate_identity_keeps_last_record() {
        let mut inventory = ImageInventory::new();
        inventory.insert(record("abc", &["old:tag"], Some(1)));
        inventory.insert(record("abc", &["new:tag"], Some(2)));

        assert_eq!(inventory.len(), 1);
        let id = ImageId::new("abc".to_string());
        assert_eq!(inventory.get(&id).unwrap().label(), "new:tag");
    }
}
