//! GraphQL query builder

use super::types::QueryParams;
use crate::types::{JsonObject, JsonValue};
use serde_json::json;

/// Section of the query the pagination cursor is merged into
const VARIABLES_KEY: &str = "variables";

/// Field the cursor is stored under inside `variables`
const CURSOR_KEY: &str = "cursor";

/// The option structure of a GraphQL request, keyed by top-level section
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlQuery {
    sections: JsonObject,
}

impl GraphqlQuery {
    /// Wrap an arbitrary option structure
    pub fn from_sections(sections: JsonObject) -> Self {
        Self { sections }
    }

    /// The Likes timeline query for `user_id`, `count` entries per page
    pub fn likes(user_id: impl Into<String>, count: u32) -> Self {
        let mut sections = JsonObject::new();
        sections.insert(
            VARIABLES_KEY.to_string(),
            json!({
                "userId": user_id.into(),
                "count": count,
                "includePromotedContent": false,
                "withClientEventToken": false,
                "withBirdwatchNotes": false,
                "withVoice": true,
                "withV2Timeline": true
            }),
        );
        sections.insert("features".to_string(), JsonValue::Object(likes_features()));
        sections.insert(
            "fieldToggles".to_string(),
            JsonValue::Object(likes_field_toggles()),
        );
        Self { sections }
    }

    /// Top-level sections
    pub fn sections(&self) -> &JsonObject {
        &self.sections
    }

    /// Encode every section as compact JSON, splicing `cursor` into `variables`.
    ///
    /// The cursor goes in first and the query's own variables are laid over it,
    /// so a `cursor` already present in `variables` is the one sent.
    pub fn to_params(&self, cursor: Option<&str>) -> QueryParams {
        let mut params = QueryParams::new();

        for (key, value) in &self.sections {
            let encoded = match (key.as_str(), cursor, value) {
                (VARIABLES_KEY, Some(cursor), JsonValue::Object(variables)) => {
                    let mut merged = JsonObject::new();
                    merged.insert(CURSOR_KEY.to_string(), JsonValue::from(cursor));
                    for (k, v) in variables {
                        merged.insert(k.clone(), v.clone());
                    }
                    JsonValue::Object(merged).to_string()
                }
                _ => value.to_string(),
            };
            params.push(key.clone(), encoded);
        }

        params
    }
}

/// Feature flags the web client sends with the Likes query
pub fn likes_features() -> JsonObject {
    let flags = json!({
        "rweb_tipjar_consumption_enabled": true,
        "responsive_web_graphql_exclude_directive_enabled": true,
        "verified_phone_label_enabled": false,
        "creator_subscriptions_tweet_preview_api_enabled": true,
        "responsive_web_graphql_timeline_navigation_enabled": true,
        "responsive_web_graphql_skip_user_profile_image_extensions_enabled": false,
        "communities_web_enable_tweet_community_results_fetch": true,
        "c9s_tweet_anatomy_moderator_badge_enabled": true,
        "articles_preview_enabled": true,
        "tweetypie_unmention_optimization_enabled": true,
        "responsive_web_edit_tweet_api_enabled": true,
        "graphql_is_translatable_rweb_tweet_is_translatable_enabled": true,
        "view_counts_everywhere_api_enabled": true,
        "longform_notetweets_consumption_enabled": true,
        "responsive_web_twitter_article_tweet_consumption_enabled": true,
        "tweet_awards_web_tipping_enabled": false,
        "creator_subscriptions_quote_tweet_preview_enabled": false,
        "freedom_of_speech_not_reach_fetch_enabled": true,
        "standardized_nudges_misinfo": true,
        "tweet_with_visibility_results_prefer_gql_limited_actions_policy_enabled": true,
        "rweb_video_timestamps_enabled": true,
        "longform_notetweets_rich_text_read_enabled": true,
        "longform_notetweets_inline_media_enabled": true,
        "responsive_web_enhance_cards_enabled": false
    });

    match flags {
        JsonValue::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Field toggles sent with the Likes query
pub fn likes_field_toggles() -> JsonObject {
    let mut toggles = JsonObject::new();
    toggles.insert("withArticlePlainText".to_string(), JsonValue::Bool(false));
    toggles
}
