//! Layout Module Tests

#[cfg(test)]
mod tests {
    use crate::layout::types::LayoutConfig;

    #[test]
    fn test_default_layout_matches_shipped_appearance() {
        let layout = LayoutConfig::default();

        assert_eq!(layout.header.title, "リクエスト曲チェッカー");
        assert_eq!(layout.nav.style, "grid");
        assert!(layout.banners.doneru.visible);
        assert!(layout.banners.twitcast.visible);
        assert_eq!(layout.theme.primary_color, "#EC4899");
    }

    #[test]
    fn test_layout_serializes_camel_case() {
        let json = serde_json::to_value(LayoutConfig::default()).unwrap();

        assert_eq!(json["header"]["textColor"], "#FFFFFF");
        assert_eq!(json["banners"]["doneru"]["buttonText"], "配信者を応援する");
        assert_eq!(json["theme"]["backgroundColor"], "#111827");
    }

    #[test]
    fn test_layout_round_trips() {
        let mut layout = LayoutConfig::default();
        layout.banners.twitcast.visible = false;
        layout.theme.primary_color = "#000000".to_string();

        let json = serde_json::to_string(&layout).unwrap();
        let restored: LayoutConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, layout);
    }
}
