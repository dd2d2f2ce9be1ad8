//! Layout Data Types
//!
//! The layout document mirrors what the frontend consumes, so every struct
//! serializes camelCase. `Default` carries the shipped site appearance and is
//! what visitors see before an admin ever saves a configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub title: String,
    pub subtitle: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    pub visible: bool,
    pub text: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannersConfig {
    pub doneru: BannerConfig,
    pub twitcast: BannerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub background_color: String,
    pub background_image: String,
    pub primary_color: String,
    pub secondary_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub header: HeaderConfig,
    pub nav: NavConfig,
    pub banners: BannersConfig,
    pub theme: ThemeConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header: HeaderConfig {
                title: "リクエスト曲チェッカー".to_string(),
                subtitle: "弾ける曲 or ぷりんと楽譜にある曲かチェックできます".to_string(),
                text_color: "#FFFFFF".to_string(),
            },
            nav: NavConfig {
                style: "grid".to_string(),
            },
            banners: BannersConfig {
                doneru: BannerConfig {
                    visible: true,
                    text: "「どねる」を使うと高い還元率で配信者を応援できます".to_string(),
                    button_text: "配信者を応援する".to_string(),
                },
                twitcast: BannerConfig {
                    visible: true,
                    text: "ツイキャス配信はこちらから".to_string(),
                    button_text: "配信を視聴する".to_string(),
                },
            },
            theme: ThemeConfig {
                background_color: "#111827".to_string(),
                background_image:
                    "https://images.unsplash.com/photo-1511379938547-c1f69419868d?q=80&w=2070&auto=format&fit=crop"
                        .to_string(),
                primary_color: "#EC4899".to_string(),
                secondary_color: "#14B8A6".to_string(),
            },
        }
    }
}
