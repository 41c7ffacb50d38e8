use super::*;

#[test]
fn category_id_takes_precedence() {
    assert_eq!(search_topic(Some("5"), Some("machado")), ProductTopic::Category(5));
}

#[test]
fn unparsable_category_falls_back_to_search() {
    assert_eq!(search_topic(Some("abc"), Some("machado")), ProductTopic::Search("machado".to_owned()));
}

#[test]
fn blank_or_missing_search_lists_everything() {
    assert_eq!(search_topic(None, Some("   ")), ProductTopic::All);
    assert_eq!(search_topic(None, None), ProductTopic::All);
}

#[test]
fn search_term_is_trimmed() {
    assert_eq!(search_topic(None, Some("  dom casmurro ")), ProductTopic::Search("dom casmurro".to_owned()));
}

#[test]
fn category_title_uses_readable_slug() {
    assert_eq!(
        search_title(&ProductTopic::Category(5), Some("ficção-científica")),
        "Categoria: ficção científica"
    );
    assert_eq!(search_title(&ProductTopic::Category(5), None), "Categoria");
}

#[test]
fn other_titles_come_from_topic() {
    assert_eq!(search_title(&ProductTopic::All, Some("ignored")), "Todos os livros");
}
