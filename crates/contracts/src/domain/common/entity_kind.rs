use serde::{Deserialize, Serialize};

/// Explicit discriminator for every aggregate the dashboard manages.
///
/// Pages branch on this tag instead of probing which fields a value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Product,
    Brand,
    Category,
    Order,
    BlogPost,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::User,
        EntityKind::Product,
        EntityKind::Brand,
        EntityKind::Category,
        EntityKind::Order,
        EntityKind::BlogPost,
    ];

    /// Kind named by a collection string, e.g. a field's `ref_aggregate`
    pub fn from_collection(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Product => "product",
            EntityKind::Brand => "brand",
            EntityKind::Category => "category",
            EntityKind::Order => "order",
            EntityKind::BlogPost => "blog_post",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_collection(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_collection("blog_post"), Some(EntityKind::BlogPost));
        assert_eq!(EntityKind::from_collection("nomenclature"), None);
    }
}
