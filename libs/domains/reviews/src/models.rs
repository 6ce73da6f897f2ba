use axum_helpers::not_blank;
use mongodb::bson::{oid::ObjectId, serde_helpers::hex_string_as_object_id};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Review entity as stored in the `reviews` collection.
///
/// `user_id` and `product_id` are plain references, checked only when the
/// review is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", with = "hex_string_as_object_id")]
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    #[serde(default)]
    pub comment: String,
}

/// Review as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[schema(example = "6650f1c2a4b3c2d1e0f9a8b7")]
    pub id: String,
    #[schema(example = "Works as advertised")]
    pub comment: String,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "6650f1c2a4b3c2d1e0f9a8b7")]
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "User ID is required"))]
    #[schema(example = "u1")]
    pub user_id: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Product ID is required"))]
    #[schema(example = "6650f1c2a4b3c2d1e0f9a8b7")]
    pub product_id: String,
    #[serde(default)]
    #[schema(example = "Works as advertised")]
    pub comment: String,
}

impl Review {
    pub fn new(input: CreateReview) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            user_id: input.user_id,
            product_id: input.product_id,
            comment: input.comment,
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            comment: review.comment,
            user_id: review.user_id,
            product_id: review.product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn input() -> CreateReview {
        CreateReview {
            user_id: "u1".into(),
            product_id: "p1".into(),
            comment: "Great".into(),
        }
    }

    #[test]
    fn test_new_review_gets_object_id() {
        let review = Review::new(input());
        assert!(ObjectId::parse_str(&review.id).is_ok());
        assert_eq!(review.comment, "Great");
    }

    #[test]
    fn test_stored_as_object_id_with_camel_case_refs() {
        let review = Review::new(input());
        let doc = bson::to_document(&review).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
        assert_eq!(doc.get_str("productId").unwrap(), "p1");
        assert_eq!(doc.get_str("userId").unwrap(), "u1");
    }

    #[test]
    fn test_comment_defaults_to_empty() {
        let input: CreateReview =
            serde_json::from_str(r#"{"userId":"u1","productId":"p1"}"#).unwrap();
        assert!(input.comment.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_blank_refs_fail_validation() {
        let input = CreateReview {
            user_id: "".into(),
            product_id: "  ".into(),
            comment: String::new(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
        assert!(errors.field_errors().contains_key("product_id"));
    }
}
