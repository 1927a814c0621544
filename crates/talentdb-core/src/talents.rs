use uuid::Uuid;

use crate::records::ProfileRecord;

/// Insert column order for the destination table.
pub const TALENT_COLUMNS: [&str; 11] = [
    "user_id",
    "name",
    "category",
    "status",
    "avatar_url",
    "instagram_handle",
    "followers",
    "tiktok_handle",
    "tiktok_followers",
    "source_url",
    "bio",
];

/// Every generated row is inserted as active.
pub const TALENT_STATUS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sports,
    Beauty,
    Fashion,
    Food,
    Lifestyle,
    Influencer,
}

impl Category {
    /// Substring rules in priority order. The first rule found in the URL wins.
    const RULES: [(&'static str, Category); 5] = [
        ("sports", Category::Sports),
        ("beauty", Category::Beauty),
        ("fashion", Category::Fashion),
        ("food", Category::Food),
        ("lifestyle", Category::Lifestyle),
    ];

    /// Infers the category from a profile URL slug such as
    /// `/talent/jane-doe-sports-fitness-influencer`.
    ///
    /// Matching is case-sensitive; anything unmatched is [`Category::Influencer`].
    #[must_use]
    pub fn from_source_url(source_url: &str) -> Self {
        Self::RULES
            .iter()
            .find(|(needle, _)| source_url.contains(needle))
            .map_or(Category::Influencer, |(_, category)| *category)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Fashion => "Fashion",
            Category::Food => "Food",
            Category::Lifestyle => "Lifestyle",
            Category::Influencer => "Influencer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the destination table, built from a [`ProfileRecord`].
///
/// Values are unescaped; quoting happens when the row is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentRow {
    pub user_id: Uuid,
    pub name: String,
    pub category: Category,
    pub status: &'static str,
    pub avatar_url: String,
    pub instagram_handle: String,
    pub followers: String,
    pub tiktok_handle: String,
    pub tiktok_followers: String,
    pub source_url: String,
    pub bio: String,
}

impl TalentRow {
    #[must_use]
    pub fn from_record(owner_id: Uuid, record: ProfileRecord) -> Self {
        let category = Category::from_source_url(&record.page_url);
        Self {
            user_id: owner_id,
            name: record.name,
            category,
            status: TALENT_STATUS,
            avatar_url: record.image_url,
            instagram_handle: record.instagram_ref,
            followers: record.instagram_followers,
            tiktok_handle: record.tiktok_ref,
            tiktok_followers: record.tiktok_followers,
            source_url: record.page_url,
            bio: record.bio,
        }
    }

    /// Column values in [`TALENT_COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [String; 11] {
        [
            self.user_id.to_string(),
            self.name.clone(),
            self.category.as_str().to_string(),
            self.status.to_string(),
            self.avatar_url.clone(),
            self.instagram_handle.clone(),
            self.followers.clone(),
            self.tiktok_handle.clone(),
            self.tiktok_followers.clone(),
            self.source_url.clone(),
            self.bio.clone(),
        ]
    }
}

#[cfg(test)]
#[path = "talents_test.rs"]
mod tests;
