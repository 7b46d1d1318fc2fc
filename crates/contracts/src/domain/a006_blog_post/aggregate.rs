use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::aggregate_id;
use crate::domain::common::{AggregateRoot, EntityKind, EntityStore};

aggregate_id!(
    /// Unique blog post identifier
    BlogPostId
);

/// Published article with its engagement counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub views: u64,
    pub comments: u64,
    #[serde(rename = "publishedOn")]
    pub published_on: NaiveDate,
}

impl AggregateRoot for BlogPost {
    type Id = BlogPostId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn element_name() -> &'static str {
        "Blog post"
    }

    fn list_name() -> &'static str {
        "Blogs"
    }

    fn kind() -> EntityKind {
        EntityKind::BlogPost
    }
}

impl EntityStore<BlogPost> {
    pub fn total_views(&self) -> u64 {
        self.iter().map(|post| post.views).sum()
    }

    pub fn total_comments(&self) -> u64 {
        self.iter().map(|post| post.comments).sum()
    }

    /// Distinct categories in alphabetical order
    pub fn categories(&self) -> Vec<&str> {
        self.iter()
            .map(|post| post.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Posts ordered by views, most read first
    pub fn most_read(&self, limit: usize) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.iter().collect();
        posts.sort_by(|a, b| b.views.cmp(&a.views));
        posts.truncate(limit);
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, category: &str, views: u64) -> BlogPost {
        BlogPost {
            id: BlogPostId(id),
            title: format!("Post {}", id),
            author: "Editor".into(),
            category: category.into(),
            views,
            comments: id as u64,
            published_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_totals_and_categories() {
        let store = EntityStore::seeded(vec![
            post(1, "Maintenance", 300),
            post(2, "Hydraulics", 900),
            post(3, "Maintenance", 100),
        ]);
        assert_eq!(store.total_views(), 1300);
        assert_eq!(store.total_comments(), 6);
        assert_eq!(store.categories(), vec!["Hydraulics", "Maintenance"]);
        assert_eq!(store.most_read(1)[0].id, BlogPostId(2));
    }
}
