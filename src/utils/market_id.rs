/// A market identifier split into its two halves.
///
/// Market URLs carry a composite id of shape `{shortcode}-{slug}`. The
/// shortcode is the canonical stable identifier used for backend lookups;
/// the slug is a human-readable fragment that may be stale relative to the
/// market's current slug, so it is only ever compared for display purposes,
/// never trusted for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMarketId<'a> {
    pub shortcode: &'a str,
    pub slug_from_url: Option<&'a str>,
}

impl ParsedMarketId<'_> {
    /// Whether the slug carried in the URL matches the canonical slug.
    /// A missing slug never matches.
    pub fn slug_matches(&self, canonical: &str) -> bool {
        self.slug_from_url == Some(canonical)
    }
}

/// Splits a composite market id on the first `-`.
///
/// Everything after the first separator, further separators included, stays
/// verbatim in `slug_from_url`. A missing separator or a trailing separator
/// with nothing after it yields `slug_from_url = None`. Total over all
/// inputs, including the empty string.
pub fn parse_market_id(id: &str) -> ParsedMarketId<'_> {
    match id.split_once('-') {
        Some((shortcode, slug)) if !slug.is_empty() => ParsedMarketId {
            shortcode,
            slug_from_url: Some(slug),
        },
        Some((shortcode, _)) => ParsedMarketId {
            shortcode,
            slug_from_url: None,
        },
        None => ParsedMarketId {
            shortcode: id,
            slug_from_url: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_separator_is_all_shortcode() {
        assert_eq!(
            parse_market_id("abc"),
            ParsedMarketId { shortcode: "abc", slug_from_url: None }
        );
    }

    #[test]
    fn splits_on_first_separator() {
        assert_eq!(
            parse_market_id("abc-def"),
            ParsedMarketId { shortcode: "abc", slug_from_url: Some("def") }
        );
    }

    #[test]
    fn later_separators_stay_in_slug() {
        assert_eq!(
            parse_market_id("abc-def-ghi"),
            ParsedMarketId { shortcode: "abc", slug_from_url: Some("def-ghi") }
        );
        assert_eq!(
            parse_market_id("a-b-c-d"),
            ParsedMarketId { shortcode: "a", slug_from_url: Some("b-c-d") }
        );
    }

    #[test]
    fn trailing_separator_yields_no_slug() {
        assert_eq!(
            parse_market_id("abc-"),
            ParsedMarketId { shortcode: "abc", slug_from_url: None }
        );
    }

    #[test]
    fn empty_input_yields_empty_shortcode() {
        assert_eq!(
            parse_market_id(""),
            ParsedMarketId { shortcode: "", slug_from_url: None }
        );
    }

    #[test]
    fn leading_separator_yields_empty_shortcode() {
        assert_eq!(
            parse_market_id("-slug"),
            ParsedMarketId { shortcode: "", slug_from_url: Some("slug") }
        );
    }

    #[test]
    fn slug_match_is_exact() {
        let parsed = parse_market_id("ab12-will-btc-close-higher");
        assert!(parsed.slug_matches("will-btc-close-higher"));
        assert!(!parsed.slug_matches("will-btc-close-lower"));
        assert!(!parse_market_id("ab12").slug_matches(""));
    }
}
