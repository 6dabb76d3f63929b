//! Resource tagging.

use crate::shape::shape;

shape! {
    /// A key/value label attached to a key.
    pub struct Tag {
        /// Tag key.
        text tag_key: String => "TagKey" { tag_key, set_tag_key, with_tag_key },
        /// Tag value.
        text tag_value: String => "TagValue" { tag_value, set_tag_value, with_tag_value },
    }
}

impl Tag {
    /// Builds a tag from a key and a value.
    pub fn of(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_tag_key(key).with_tag_value(value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Self::of(key, value)
    }
}

shape! {
    /// Adds or overwrites tags on a key.
    pub struct TagResourceRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Tags to apply. Duplicate keys are resolved by the server.
        list tags: Tag => "Tags" { tags, set_tags, with_tags },
    }
}

shape! {
    /// Response of `TagResource`.
    pub struct TagResourceResult {}
}

shape! {
    /// Removes tags from a key.
    pub struct UntagResourceRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Keys of the tags to remove.
        list tag_keys: String => "TagKeys" { tag_keys, set_tag_keys, with_tag_keys },
    }
}

shape! {
    /// Response of `UntagResource`.
    pub struct UntagResourceResult {}
}

shape! {
    /// Lists the tags of a key.
    pub struct ListResourceTagsRequest {
        /// Key ID or key ARN.
        text key_id: String => "KeyId" { key_id, set_key_id, with_key_id },
        /// Page size.
        value limit: i32 => "Limit" { limit, set_limit, with_limit },
        /// Pagination marker from a previous response.
        text marker: String => "Marker" { marker, set_marker, with_marker },
    }
}

shape! {
    /// Response of `ListResourceTags`.
    pub struct ListResourceTagsResult {
        /// Tags on the key.
        list tags: Tag => "Tags" { tags, set_tags, with_tags },
        /// Marker for the next page.
        text next_marker: String => "NextMarker" { next_marker, set_next_marker, with_next_marker },
        /// Whether more pages follow.
        value truncated: bool => "Truncated" { truncated, set_truncated, with_truncated },
    }
}
