/// Builds the composite id path segment used in market URLs.
pub fn market_path_segment(shortcode: &str, slug: &str) -> String {
    format!("{}-{}", shortcode, slug)
}

/// Builds the canonical SEO URL for a market from the configured site URL.
/// A trailing slash on the site URL is tolerated.
pub fn market_url(site_url: &str, shortcode: &str, slug: &str) -> String {
    format!(
        "{}/market/{}",
        site_url.trim_end_matches('/'),
        market_path_segment(shortcode, slug)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::market_id::parse_market_id;

    #[test]
    fn builds_canonical_market_url() {
        assert_eq!(
            market_url("http://localhost:3000", "ab12", "will-btc-close-higher"),
            "http://localhost:3000/market/ab12-will-btc-close-higher"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_site_url() {
        assert_eq!(
            market_url("https://example.com/", "ab12", "s"),
            "https://example.com/market/ab12-s"
        );
    }

    #[test]
    fn path_segment_round_trips_through_the_parser() {
        let segment = market_path_segment("ab12", "a-long-slug");
        let parsed = parse_market_id(&segment);
        assert_eq!(parsed.shortcode, "ab12");
        assert_eq!(parsed.slug_from_url, Some("a-long-slug"));
    }
}
