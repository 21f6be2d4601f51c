use serde::{Deserialize, Serialize};

/// Persisted post. Field names follow the camelCase layout of the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub content: String,
    /// Display name of the author when the post was written.
    pub author_name: String,
    pub author_id: String,
    pub created_at: String,
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
    pub reposts: u32,
    #[serde(default)]
    pub reposted_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub replies: Vec<String>,
}

impl PostRecord {
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.iter().any(|id| id == user_id)
    }

    pub fn is_reposted_by(&self, user_id: &str) -> bool {
        self.reposted_by.iter().any(|id| id == user_id)
    }

    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    /// Generated handle, never edited.
    pub name: String,
    pub display_name: String,
    pub bio: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_layout() {
        let post = PostRecord {
            id: "p1".into(),
            content: "hi".into(),
            author_name: "Anonymous User".into(),
            author_id: "u1".into(),
            created_at: "2024-01-01T00:00:00+00:00".into(),
            likes: 1,
            liked_by: vec!["u1".into()],
            reposts: 0,
            reposted_by: vec![],
            reply_to: None,
            replies: vec![],
        };
        let value = serde_json::to_value(&post).expect("serialize");
        assert_eq!(value["authorName"], "Anonymous User");
        assert_eq!(value["likedBy"][0], "u1");
        assert!(value.get("replyTo").is_none());
    }

    #[test]
    fn post_reads_reply_to_when_present() {
        let raw = r#"{
            "id": "p2",
            "content": "reply",
            "authorName": "A",
            "authorId": "u1",
            "createdAt": "2024-01-01T00:00:00Z",
            "likes": 0,
            "likedBy": [],
            "reposts": 0,
            "repostedBy": [],
            "replyTo": "p1",
            "replies": []
        }"#;
        let post: PostRecord = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(post.reply_to.as_deref(), Some("p1"));
        assert!(post.is_reply());
    }
}
