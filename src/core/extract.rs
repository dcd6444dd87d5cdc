use scraper::{Html, Selector};
use std::collections::HashMap;

use crate::domain::model::{PriceRecord, COLUMN_MAP};
use crate::utils::datetime;
use crate::utils::error::{Result, ScrapeError};

/// The page's price ticker region. Labels and values sit in it as adjacent
/// text nodes with no structural nesting, so position is the only signal.
pub const INFO_BAR_SELECTOR: &str = "ul.info-bar.mobile-hide";

/// Finds the info-bar element in the fetched document and returns its text
/// content, one text node per line. Fails when the container is missing
/// (page structure changed, or the fetch returned an error page).
pub fn locate_info_bar(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(INFO_BAR_SELECTOR)
        .map_err(|e| ScrapeError::Selector(e.to_string()))?;

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join("\n"))
        .ok_or(ScrapeError::ContainerNotFound)
}

/// Splits the flattened container text into trimmed fragments, dropping the
/// noise interleaved with the labels and values: blanks, stray close
/// parentheses, and percentage-change annotations.
pub fn split_fragments(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty() && *item != ")" && !item.contains('%'))
        .map(str::to_string)
        .collect()
}

/// Resolves each known label to the fragment immediately following its first
/// occurrence. One pass builds the label position index, a second resolves
/// the values; a label that is missing or last yields an absent field, and
/// each field's lookup is independent of the others.
pub fn parse_record(info_bar_text: &str) -> PriceRecord {
    let fragments = split_fragments(info_bar_text);

    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if COLUMN_MAP.iter().any(|(label, _)| label == fragment) {
            positions.entry(fragment.as_str()).or_insert(i);
        }
    }

    let prices = COLUMN_MAP.map(|(label, _)| {
        positions
            .get(label)
            .and_then(|&i| fragments.get(i + 1))
            .cloned()
    });

    PriceRecord {
        prices,
        date: datetime::jalali_today(),
        time: datetime::current_time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_filtering() {
        let text = "دلار\n  58,200 \n\n0.27%\n)\nسکه\n28,500,000";
        assert_eq!(
            split_fragments(text),
            vec!["دلار", "58,200", "سکه", "28,500,000"]
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let text = "دلار\n58,200\n(0.27%\n)\nسکه";
        let once = split_fragments(text);
        let twice = split_fragments(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_label_followed_by_value() {
        let record = parse_record("دلار\n58,200\nسکه\n28,500,000");
        assert_eq!(record.price("Dollar"), Some("58,200"));
        assert_eq!(record.price("Coin"), Some("28,500,000"));
    }

    #[test]
    fn test_missing_label_leaves_others_untouched() {
        let record = parse_record("دلار\n58,200\nتتر\n59,100");
        assert_eq!(record.price("Dollar"), Some("58,200"));
        assert_eq!(record.price("Tether"), Some("59,100"));
        assert_eq!(record.price("Coin"), None);
        assert_eq!(record.price("Bitcoin"), None);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_label_as_last_fragment_is_absent() {
        let record = parse_record("سکه\n28,500,000\nدلار");
        assert_eq!(record.price("Coin"), Some("28,500,000"));
        assert_eq!(record.price("Dollar"), None);
    }

    #[test]
    fn test_repeated_label_takes_first_occurrence() {
        let record = parse_record("دلار\n58,200\nدلار\n99,999");
        assert_eq!(record.price("Dollar"), Some("58,200"));
    }

    #[test]
    fn test_noise_between_value_and_next_label_ignored() {
        // Change amounts like "(156" survive filtering but come after the
        // value, so adjacency lookup is unaffected.
        let record = parse_record("دلار\n58,200\n(156\nسکه\n28,500,000");
        assert_eq!(record.price("Dollar"), Some("58,200"));
        assert_eq!(record.price("Coin"), Some("28,500,000"));
    }

    #[test]
    fn test_all_nine_labels_complete_record() {
        let text: String = COLUMN_MAP
            .iter()
            .enumerate()
            .map(|(i, (label, _))| format!("{}\n{}", label, 1000 + i))
            .collect::<Vec<_>>()
            .join("\n");

        let record = parse_record(&text);
        assert!(record.is_complete());
        assert_eq!(record.price("Stock"), Some("1000"));
        assert_eq!(record.price("Bitcoin"), Some("1008"));
        assert!(!record.date.is_empty());
        assert!(!record.time.is_empty());
    }

    #[test]
    fn test_locate_info_bar_flattens_text() {
        let html = r#"<html><body>
            <ul class="info-bar mobile-hide">
                <li><span>دلار</span><span>58,200</span></li>
            </ul>
        </body></html>"#;

        let text = locate_info_bar(html).unwrap();
        let fragments = split_fragments(&text);
        assert_eq!(fragments, vec!["دلار", "58,200"]);
    }

    #[test]
    fn test_locate_info_bar_missing_container() {
        let html = "<html><body><p>404 not found</p></body></html>";
        assert!(matches!(
            locate_info_bar(html),
            Err(ScrapeError::ContainerNotFound)
        ));
    }
}
