use culturedcli::types::{PageKind, Selection, Site};
use culturedcli::urls::*;

fn owned(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|u| u.to_string()).collect()
}

#[test]
fn test_site_from_str() {
    assert_eq!("fantia".parse::<Site>().unwrap(), Site::Fantia);
    assert_eq!("pixiv_fanbox".parse::<Site>().unwrap(), Site::PixivFanbox);
    assert_eq!(" Pixiv-Fanbox ".parse::<Site>().unwrap(), Site::PixivFanbox);

    // Unknown websites are a typed error instead of a panic
    let err = "patreon".parse::<Site>().unwrap_err();
    assert_eq!(err.to_string(), "invalid website: patreon");
}

#[test]
fn test_site_readable_name() {
    assert_eq!(Site::Fantia.readable_name(), "Fantia");
    assert_eq!(Site::PixivFanbox.readable_name(), "Pixiv Fanbox");
    assert_eq!(Site::PixivFanbox.to_string(), "Pixiv Fanbox");
    assert_eq!(Site::PixivFanbox.key(), "pixiv_fanbox");
}

#[test]
fn test_selection_from_items() {
    assert_eq!(Selection::<String>::from_items(Vec::new()), Selection::Empty);
    assert_eq!(
        Selection::from_items(vec![1, 2]),
        Selection::Items(vec![1, 2])
    );
}

#[test]
fn test_is_cancel_token() {
    assert!(is_cancel_token("x"));
    assert!(is_cancel_token("X"));
    assert!(is_cancel_token("  x "));

    // Only the exact token cancels
    assert!(!is_cancel_token("xx"));
    assert!(!is_cancel_token("https://x.fanbox.cc"));
    assert!(!is_cancel_token(""));
}

#[test]
fn test_split_unique_removes_duplicates_in_order() {
    let (urls, had_duplicates) = split_unique("a, a, b");
    assert_eq!(urls, vec!["a", "b"]);
    assert!(had_duplicates);

    // Feeding the result back in is a no-op without a warning
    let (again, had_duplicates) = split_unique(&urls.join(","));
    assert_eq!(again, urls);
    assert!(!had_duplicates);
}

#[test]
fn test_split_unique_keeps_first_occurrence() {
    let (urls, had_duplicates) = split_unique("c,b ,a, b,c");
    assert_eq!(urls, vec!["c", "b", "a"]);
    assert!(had_duplicates);
}

#[test]
fn test_dedup_after_normalization() {
    let (urls, had_duplicates) = split_unique("https://fantia.jp/posts/1/, https://fantia.jp/posts/1");
    assert!(!had_duplicates);

    let normalized = normalize_urls(Site::Fantia, PageKind::Post, &urls).unwrap();
    let (unique, had_duplicates) = dedup(normalized);
    assert_eq!(unique, vec!["https://fantia.jp/posts/1"]);
    assert!(had_duplicates);
}

#[test]
fn test_normalize_url_strips_trailing_slash() {
    let with_slash = normalize_url(Site::Fantia, PageKind::Post, "https://fantia.jp/posts/123/");
    let without_slash = normalize_url(Site::Fantia, PageKind::Post, "https://fantia.jp/posts/123");

    assert_eq!(with_slash, Ok("https://fantia.jp/posts/123".to_string()));
    assert_eq!(with_slash, without_slash);
}

#[test]
fn test_normalize_url_appends_posts_suffix_for_creators() {
    assert_eq!(
        normalize_url(Site::Fantia, PageKind::Creator, "https://fantia.jp/fanclubs/1234"),
        Ok("https://fantia.jp/fanclubs/1234/posts".to_string())
    );
    assert_eq!(
        normalize_url(Site::Fantia, PageKind::Creator, "https://fantia.jp/fanclubs/1234/posts/"),
        Ok("https://fantia.jp/fanclubs/1234/posts".to_string())
    );
    assert_eq!(
        normalize_url(Site::PixivFanbox, PageKind::Creator, "https://creator.fanbox.cc/"),
        Ok("https://creator.fanbox.cc/posts".to_string())
    );
    assert_eq!(
        normalize_url(Site::PixivFanbox, PageKind::Creator, "https://www.fanbox.cc/@creator"),
        Ok("https://www.fanbox.cc/@creator/posts".to_string())
    );
}

#[test]
fn test_normalize_url_rejects_wrong_site_or_kind() {
    // Creator URL in post mode
    assert_eq!(
        normalize_url(Site::Fantia, PageKind::Post, "https://fantia.jp/fanclubs/1/posts"),
        Err(UrlError::Invalid("https://fantia.jp/fanclubs/1/posts".to_string()))
    );

    // Fanbox URL for Fantia
    assert!(normalize_url(Site::Fantia, PageKind::Post, "https://creator.fanbox.cc/posts/1").is_err());

    // Only one trailing slash is stripped
    assert!(normalize_url(Site::Fantia, PageKind::Post, "https://fantia.jp/posts/1//").is_err());

    // Pattern must match the whole URL
    assert!(normalize_url(Site::Fantia, PageKind::Post, "https://fantia.jp/posts/1?x=1").is_err());
    assert!(normalize_url(Site::PixivFanbox, PageKind::Post, "https://creator.fanbox.cc/posts/abc").is_err());
}

#[test]
fn test_normalize_url_accepts_both_fanbox_hosts() {
    assert!(normalize_url(Site::PixivFanbox, PageKind::Post, "https://www.fanbox.cc/@creator_name/posts/1234567").is_ok());
    assert!(normalize_url(Site::PixivFanbox, PageKind::Post, "https://creator-name.fanbox.cc/posts/1234567").is_ok());
}

#[test]
fn test_normalize_urls_is_all_or_nothing() {
    let urls = owned(&[
        "https://fantia.jp/posts/1",
        "https://example.com/posts/2",
        "https://fantia.jp/posts/3",
    ]);
    assert_eq!(
        normalize_urls(Site::Fantia, PageKind::Post, &urls),
        Err(UrlError::Invalid("https://example.com/posts/2".to_string()))
    );

    let urls = owned(&["https://fantia.jp/posts/1/", "https://fantia.jp/posts/3"]);
    assert_eq!(
        normalize_urls(Site::Fantia, PageKind::Post, &urls).unwrap(),
        vec!["https://fantia.jp/posts/1", "https://fantia.jp/posts/3"]
    );
}

#[test]
fn test_page_range_parse() {
    assert_eq!("3".parse::<PageRange>(), Ok(PageRange::Single(3)));
    assert_eq!(" 1-3 ".parse::<PageRange>(), Ok(PageRange::Range(1, 3)));
    assert_eq!("5-2".parse::<PageRange>(), Ok(PageRange::Range(5, 2)));

    for invalid in ["", "0", "a", "1-", "-1", "1-2-3", "1 - 2", "01"] {
        assert_eq!(
            invalid.parse::<PageRange>(),
            Err(PageRangeError::Invalid(invalid.trim().to_string())),
            "{invalid:?} should be rejected"
        );
    }
}

#[test]
fn test_page_range_span_is_bounded() {
    let widest = format!("1-{}", MAX_PAGES_PER_RANGE);
    assert_eq!(
        widest.parse::<PageRange>(),
        Ok(PageRange::Range(1, MAX_PAGES_PER_RANGE))
    );

    for too_wide in ["1-4000000000", "4000000000-1", "1-10001"] {
        assert_eq!(
            too_wide.parse::<PageRange>(),
            Err(PageRangeError::Invalid(too_wide.to_string()))
        );
    }

    // Large single pages are still fine
    assert_eq!("4000000000".parse::<PageRange>(), Ok(PageRange::Single(4_000_000_000)));

    let urls = owned(&["https://creator.fanbox.cc/posts"]);
    assert_eq!(
        expand_page_ranges(Site::PixivFanbox, &urls, "1-4000000000"),
        Err(PageRangeError::Invalid("1-4000000000".to_string()))
    );
}

#[test]
fn test_page_range_pages_ascending() {
    assert_eq!(PageRange::Single(4).pages().collect::<Vec<_>>(), vec![4]);
    assert_eq!(PageRange::Range(1, 3).pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(PageRange::Range(3, 1).pages().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_format_page_url() {
    assert_eq!(
        format_page_url(Site::Fantia, "https://fantia.jp/fanclubs/1/posts", 2),
        "https://fantia.jp/fanclubs/1/posts?page=2&q[s]=newer&q[tag]="
    );
    assert_eq!(
        format_page_url(Site::PixivFanbox, "https://creator.fanbox.cc/posts", 2),
        "https://creator.fanbox.cc/posts?page=2"
    );
}

#[test]
fn test_expand_page_ranges_fantia_scenario() {
    let urls = owned(&["https://fantia.jp/fanclubs/1/posts"]);
    let expanded = expand_page_ranges(Site::Fantia, &urls, "1-2").unwrap();
    assert_eq!(
        expanded,
        vec![
            "https://fantia.jp/fanclubs/1/posts?page=1&q[s]=newer&q[tag]=",
            "https://fantia.jp/fanclubs/1/posts?page=2&q[s]=newer&q[tag]=",
        ]
    );
}

#[test]
fn test_expand_page_ranges_reversed_range() {
    let urls = owned(&["https://creator.fanbox.cc/posts"]);
    assert_eq!(
        expand_page_ranges(Site::PixivFanbox, &urls, "2-1"),
        expand_page_ranges(Site::PixivFanbox, &urls, "1-2")
    );
}

#[test]
fn test_expand_page_ranges_multiple_urls() {
    let urls = owned(&["https://a.fanbox.cc/posts", "https://b.fanbox.cc/posts"]);
    let expanded = expand_page_ranges(Site::PixivFanbox, &urls, "1, 3-2").unwrap();
    assert_eq!(
        expanded,
        vec![
            "https://a.fanbox.cc/posts?page=1",
            "https://b.fanbox.cc/posts?page=2",
            "https://b.fanbox.cc/posts?page=3",
        ]
    );
}

#[test]
fn test_expand_page_ranges_count_mismatch() {
    let urls = owned(&["https://a.fanbox.cc/posts", "https://b.fanbox.cc/posts"]);
    assert_eq!(
        expand_page_ranges(Site::PixivFanbox, &urls, "1"),
        Err(PageRangeError::CountMismatch {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_expand_page_ranges_rejects_whole_line() {
    let urls = owned(&["https://a.fanbox.cc/posts", "https://b.fanbox.cc/posts"]);
    assert_eq!(
        expand_page_ranges(Site::PixivFanbox, &urls, "1-2, x"),
        Err(PageRangeError::Invalid("x".to_string()))
    );
}
